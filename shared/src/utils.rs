//! # Shared Utility Functions
//!
//! Common helpers used by the connection library and the web front-end.
//!
//! ## Address Formatting
//!
//! Functions for shortening Ethereum account addresses in logs and labels:
//! - [`format_address`] - keep the `0x` prefix plus the first N and last M hex digits
//! - [`truncate_address`] - `format_address` with 4 and 4
//!
//! Greetings always show the full address; truncation is for secondary text.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0xAbCdEf0123456789aBcDeF0123456789AbCd1234";
//! assert_eq!(format_address(address, 4, 4), "0xAbCd...1234");
//! ```

/// Shorten an address to `0x` + `prefix_len` digits + `...` + `suffix_len` digits.
///
/// Case is preserved. Inputs too short to shorten, or containing non-ASCII
/// characters, are returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0xAbCdEf0123456789aBcDeF0123456789AbCd1234";
/// assert_eq!(format_address(addr, 4, 4), "0xAbCd...1234");
/// assert_eq!(format_address(addr, 6, 2), "0xAbCdEf...34");
/// assert_eq!(format_address("0x1234", 4, 4), "0x1234");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    if !address.is_ascii() {
        return address.to_string();
    }

    let (marker, digits) = match address.get(..2) {
        Some("0x") | Some("0X") => address.split_at(2),
        _ => ("", address),
    };

    if digits.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    format!(
        "{}{}...{}",
        marker,
        &digits[..prefix_len],
        &digits[digits.len() - suffix_len..]
    )
}

/// Format an address with the default 4-digit prefix and suffix.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// assert_eq!(truncate_address("0xabcdef0123456789abcdef0123456789abcd1234"), "0xabcd...1234");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0xAbCdEf0123456789aBcDeF0123456789AbCd1234";

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(ADDR, 4, 4), "0xAbCd...1234");
        assert_eq!(format_address(ADDR, 6, 6), "0xAbCdEf...Cd1234");
        assert_eq!(format_address(ADDR, 2, 2), "0xAb...34");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("0x1234", 4, 4), "0x1234");
        assert_eq!(format_address("abc", 4, 4), "abc");
    }

    #[test]
    fn test_format_address_without_prefix() {
        assert_eq!(format_address("abcdef0123456789", 2, 2), "ab...89");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(truncate_address(ADDR), "0xAbCd...1234");
    }
}

//! # ENS Codec
//!
//! Just enough of EIP-137 / EIP-181 and the contract ABI to reverse-resolve an
//! address through plain `eth_call` requests:
//!
//! - [`namehash`] - recursive keccak-256 node hash of a dotted name
//! - [`reverse_name`] - the `<addr>.addr.reverse` name of an account
//! - [`encode_call`] - calldata for the single-`bytes32` getters used here
//! - [`decode_address`] / [`decode_string`] - return-data decoding
//!
//! ```rust
//! use lib_connect::ens::{namehash, reverse_name};
//!
//! let node = namehash("eth");
//! assert_eq!(hex::encode(node), "93cdeb708b7545dc668eb9280176169d1c33cfd8ed6f04690a0bcc88a93fc4ae");
//! assert!(reverse_name("0x00000000000000000000000000000000000000ff").unwrap().ends_with(".addr.reverse"));
//! ```

use sha3::{Digest, Keccak256};

use crate::error::ClientError;

/// `resolver(bytes32)` on the ENS registry.
pub const RESOLVER_SELECTOR: [u8; 4] = [0x01, 0x78, 0xb8, 0xbf];
/// `name(bytes32)` on a reverse resolver.
pub const NAME_SELECTOR: [u8; 4] = [0x69, 0x1f, 0x34, 0x31];
/// `addr(bytes32)` on a forward resolver.
pub const ADDR_SELECTOR: [u8; 4] = [0x3b, 0x3b, 0x57, 0xde];

const WORD: usize = 32;

fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Keccak256::digest(data));
    out
}

/// EIP-137 namehash. Labels are lower-cased; the empty name hashes to the zero node.
pub fn namehash(name: &str) -> [u8; 32] {
    let mut node = [0u8; 32];
    if name.is_empty() {
        return node;
    }

    for label in name.rsplit('.') {
        let label_hash = keccak256(label.to_lowercase().as_bytes());
        let mut hasher = Keccak256::new();
        hasher.update(node);
        hasher.update(label_hash);
        node.copy_from_slice(&hasher.finalize());
    }
    node
}

/// Parse a `0x`-prefixed 20-byte hex address.
pub fn parse_address(address: &str) -> Result<[u8; 20], ClientError> {
    let digits = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| ClientError::InvalidAddress(address.to_string()))?;

    let bytes = hex::decode(digits).map_err(|_| ClientError::InvalidAddress(address.to_string()))?;
    bytes
        .try_into()
        .map_err(|_| ClientError::InvalidAddress(address.to_string()))
}

/// Reverse-registrar name for an account: `<lowercase hex>.addr.reverse`.
pub fn reverse_name(address: &str) -> Result<String, ClientError> {
    let bytes = parse_address(address)?;
    Ok(format!("{}.addr.reverse", hex::encode(bytes)))
}

/// Calldata for a getter taking one `bytes32` node.
pub fn encode_call(selector: [u8; 4], node: &[u8; 32]) -> String {
    format!("0x{}{}", hex::encode(selector), hex::encode(node))
}

fn decode_data(data: &str) -> Result<Vec<u8>, ClientError> {
    let digits = data.strip_prefix("0x").unwrap_or(data);
    Ok(hex::decode(digits)?)
}

fn word_to_usize(word: &[u8]) -> Result<usize, ClientError> {
    if word.len() != WORD || word[..WORD - 8].iter().any(|b| *b != 0) {
        return Err(ClientError::InvalidResponse("ABI word out of range".to_string()));
    }
    let mut tail = [0u8; 8];
    tail.copy_from_slice(&word[WORD - 8..]);
    usize::try_from(u64::from_be_bytes(tail))
        .map_err(|_| ClientError::InvalidResponse("ABI word out of range".to_string()))
}

/// Decode an `address` return value. The zero address and empty data decode to `None`.
pub fn decode_address(data: &str) -> Result<Option<String>, ClientError> {
    let bytes = decode_data(data)?;
    if bytes.is_empty() {
        return Ok(None);
    }
    if bytes.len() < WORD {
        return Err(ClientError::InvalidResponse(format!(
            "address return is {} bytes",
            bytes.len()
        )));
    }

    let address = &bytes[WORD - 20..WORD];
    if address.iter().all(|b| *b == 0) {
        return Ok(None);
    }
    Ok(Some(format!("0x{}", hex::encode(address))))
}

/// Decode a dynamic `string` return value. Empty data decodes to an empty string.
pub fn decode_string(data: &str) -> Result<String, ClientError> {
    let bytes = decode_data(data)?;
    if bytes.is_empty() {
        return Ok(String::new());
    }

    let truncated = || ClientError::InvalidResponse("string return is truncated".to_string());

    let offset = word_to_usize(bytes.get(..WORD).ok_or_else(truncated)?)?;
    let len_end = offset.checked_add(WORD).ok_or_else(truncated)?;
    let len = word_to_usize(bytes.get(offset..len_end).ok_or_else(truncated)?)?;
    let data_end = len_end.checked_add(len).ok_or_else(truncated)?;
    let raw = bytes.get(len_end..data_end).ok_or_else(truncated)?;

    String::from_utf8(raw.to_vec())
        .map_err(|e| ClientError::InvalidResponse(format!("name is not UTF-8: {}", e)))
}

#[cfg(test)]
pub(crate) fn abi_address(address: &str) -> String {
    let digits = address.trim_start_matches("0x").to_lowercase();
    format!("0x{:0>64}", digits)
}

#[cfg(test)]
pub(crate) fn abi_string(value: &str) -> String {
    let mut out = String::from("0x");
    out.push_str(&format!("{:064x}", WORD));
    out.push_str(&format!("{:064x}", value.len()));
    let mut data = hex::encode(value.as_bytes());
    let padded = value.len().div_ceil(WORD).max(1) * WORD * 2;
    while data.len() < padded {
        data.push('0');
    }
    out.push_str(&data);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namehash_vectors() {
        assert_eq!(namehash(""), [0u8; 32]);
        assert_eq!(
            hex::encode(namehash("eth")),
            "93cdeb708b7545dc668eb9280176169d1c33cfd8ed6f04690a0bcc88a93fc4ae"
        );
        assert_eq!(
            hex::encode(namehash("foo.eth")),
            "de9b09fd7c5f901e23a3f19fecc54828e9c848539801e86591bd9801b019f84f"
        );
    }

    #[test]
    fn test_namehash_lowercases_labels() {
        assert_eq!(namehash("Foo.ETH"), namehash("foo.eth"));
    }

    #[test]
    fn test_reverse_name() {
        assert_eq!(
            reverse_name("0xABCDEF0123456789abcdef0123456789ABCDEF01").unwrap(),
            "abcdef0123456789abcdef0123456789abcdef01.addr.reverse"
        );
        assert!(matches!(reverse_name("0x1234"), Err(ClientError::InvalidAddress(_))));
        assert!(matches!(
            reverse_name("abcdef0123456789abcdef0123456789abcdef01"),
            Err(ClientError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_encode_call() {
        let data = encode_call(NAME_SELECTOR, &namehash("eth"));
        assert!(data.starts_with("0x691f3431"));
        assert_eq!(data.len(), 2 + 8 + 64);
        assert!(data.ends_with("a93fc4ae"));
    }

    #[test]
    fn test_decode_address() {
        let word = abi_address("0x00000000000C2E074eC69A0dFb2997BA6C7d2e1e");
        assert_eq!(
            decode_address(&word).unwrap(),
            Some("0x00000000000c2e074ec69a0dfb2997ba6c7d2e1e".to_string())
        );
        assert_eq!(decode_address(&format!("0x{}", "0".repeat(64))).unwrap(), None);
        assert_eq!(decode_address("0x").unwrap(), None);
        assert!(decode_address("0x1234").is_err());
    }

    #[test]
    fn test_decode_string() {
        assert_eq!(decode_string(&abi_string("alice.eth")).unwrap(), "alice.eth");
        assert_eq!(decode_string(&abi_string("")).unwrap(), "");
        assert_eq!(decode_string("0x").unwrap(), "");
    }

    #[test]
    fn test_decode_string_rejects_truncated_data() {
        let full = abi_string("a-rather-long-name-that-needs-two-words.eth");
        let cut = &full[..full.len() - 64];
        assert!(matches!(decode_string(cut), Err(ClientError::InvalidResponse(_))));
    }
}

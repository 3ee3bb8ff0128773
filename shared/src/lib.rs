//! # Shared Helpers
//!
//! Small, dependency-free helpers used by both the connection library and the
//! web front-end.
//!
//! - **[`utils`]**: address formatting
//!   - **[`utils::format_address`]**: shorten an address with an ellipsis
//!   - **[`utils::truncate_address`]**: the default 4 + 4 digit form
//!
//! ```rust
//! use shared::utils::truncate_address;
//!
//! let label = truncate_address("0xabcdef0123456789abcdef0123456789abcd1234");
//! assert_eq!(label, "0xabcd...1234");
//! ```

pub mod utils;

pub use utils::*;

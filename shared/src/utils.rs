//! # Shared Utility Functions
//!
//! Display helpers used by the frontend.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - Alias for `format_address` with default parameters
//!
//! ## Explorer Links
//!
//! - [`explorer_object_url`] - link to an object on the devnet explorer
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x71b2d4f1a96e2e7dd4e29f1b1c9a2f4f8f2a6d3c";
//! assert_eq!(format_address(address, 6, 4), "0x71b2...6d3c");
//! ```

/// Devnet explorer base URL.
pub const EXPLORER_BASE: &str = "https://explorer.devnet.sui.io";

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x71b2d4f1a96e2e7dd4e29f1b1c9a2f4f8f2a6d3c";
/// assert_eq!(format_address(addr, 6, 4), "0x71b2...6d3c");
/// assert_eq!(format_address("0x2", 6, 4), "0x2");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Guard against lengths exceeding the address length to prevent panics;
    // hex addresses are ASCII-only so byte indexing is safe below.
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with default 6-character prefix and 4-character suffix.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x71b2d4f1a96e2e7dd4e29f1b1c9a2f4f8f2a6d3c";
/// assert_eq!(truncate_address(addr), "0x71b2...6d3c");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Explorer URL for an on-chain object.
pub fn explorer_object_url(object_id: &str) -> String {
    format!("{}/objects/{}", EXPLORER_BASE, object_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0x71b2d4f1a96e2e7dd4e29f1b1c9a2f4f8f2a6d3c";
        assert_eq!(format_address(addr, 6, 4), "0x71b2...6d3c");
        assert_eq!(format_address(addr, 4, 4), "0x71...6d3c");
        assert_eq!(format_address(addr, 2, 2), "0x...3c");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("0x2", 6, 4), "0x2");
        assert_eq!(format_address("abc", 4, 4), "abc");
    }

    #[test]
    fn test_truncate_address() {
        let addr = "0x71b2d4f1a96e2e7dd4e29f1b1c9a2f4f8f2a6d3c";
        assert_eq!(truncate_address(addr), "0x71b2...6d3c");
    }

    #[test]
    fn test_explorer_object_url() {
        assert_eq!(
            explorer_object_url("0xABC"),
            "https://explorer.devnet.sui.io/objects/0xABC"
        );
    }
}

//! # Shared Display Helpers
//!
//! Address truncation used by every frontend surface.
//!
//! ```rust
//! use shared::utils::truncate_address;
//!
//! let addr = "0x7a250d5630b4cf539739df2c5dacb4c659f2488d";
//! assert_eq!(truncate_address(addr), "0x7a25...488d");
//! ```

/// Shorten an address to its first `prefix_len` and last `suffix_len` characters.
///
/// Addresses too short to truncate meaningfully are returned unchanged; the
/// guard also keeps the slices in bounds. Hex account identifiers are ASCII,
/// so byte indexing is safe here.
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let len = address.len();
    if len <= prefix_len + suffix_len || prefix_len >= len || suffix_len >= len {
        return address.to_string();
    }

    format!("{}...{}", &address[..prefix_len], &address[len - suffix_len..])
}

/// Standard display truncation: first six characters, ellipsis, last four.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

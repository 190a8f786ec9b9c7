//! Syntactic predicates for addresses and selectors
//!
//! These only check encoding. Nothing here knows whether an address holds
//! code or a selector names a real function.

use sha3::{Digest, Keccak256};

const ADDRESS_HEX_LEN: usize = 40;

/// Strip an optional lowercase `0x` prefix
fn strip_hex_prefix(value: &str) -> &str {
    value.strip_prefix("0x").unwrap_or(value)
}

/// EIP-55 mixed-case checksum of 40 hex digits (no prefix)
fn checksum_hex(hex_digits: &str) -> String {
    let lower = hex_digits.to_ascii_lowercase();
    let hash = Keccak256::digest(lower.as_bytes());

    lower
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let byte = hash[i / 2];
            let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
            if c.is_ascii_alphabetic() && nibble >= 8 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

/// Check whether `value` is a well-formed 20-byte address
///
/// Accepts 40 hex digits with or without a `0x` prefix. All-lowercase and
/// all-uppercase digits are accepted as-is; mixed case must match the EIP-55
/// checksum.
pub fn is_address(value: &str) -> bool {
    let digits = strip_hex_prefix(value);
    if digits.len() != ADDRESS_HEX_LEN || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }

    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return checksum_hex(digits) == digits;
    }
    true
}

/// Check whether a well-formed address is the reserved all-zero address
///
/// Returns `false` for strings that are not addresses at all.
pub fn is_zero_address(value: &str) -> bool {
    is_address(value)
        && hex::decode(strip_hex_prefix(value))
            .map(|bytes| bytes.iter().all(|b| *b == 0))
            .unwrap_or(false)
}

/// Check whether `value` is a `0x`-prefixed hex byte string
///
/// Requires the prefix and an even number of hex digits. `"0x"` alone is an
/// empty byte string and passes.
pub fn is_bytes_like(value: &str) -> bool {
    match value.strip_prefix("0x") {
        Some(digits) => hex::decode(digits).is_ok(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksummed_addresses_are_valid() {
        assert!(is_address("0xCf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc9"));
        assert!(is_address("0xDc64a140Aa3E981100a9becA4E685f962f0cF6C9"));
        assert!(is_address("0x2279B7A0a67DB372996a5FaB50D91eAA73d2eBe6"));
        assert!(is_address("0x5FbDB2315678afecb367f032d93F642f64180aa3"));
    }

    #[test]
    fn test_single_case_addresses_skip_checksum() {
        assert!(is_address("0xcf7ed3acca5a467e9e704c703e8d87f634fb0fc9"));
        assert!(is_address("0xCF7ED3ACCA5A467E9E704C703E8D87F634FB0FC9"));
        assert!(is_address("cf7ed3acca5a467e9e704c703e8d87f634fb0fc9"));
    }

    #[test]
    fn test_bad_checksum_is_rejected() {
        // last digit case flipped
        assert!(!is_address("0xCf7Ed3AccA5a467e9e704C703E8D87F634fB0FC9"));
    }

    #[test]
    fn test_malformed_addresses_are_rejected() {
        assert!(!is_address(""));
        assert!(!is_address("notAddress"));
        assert!(!is_address("0x"));
        assert!(!is_address("0xCf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc"));
        assert!(!is_address("0xCf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc9a"));
        assert!(!is_address("0xzz7ed3acca5a467e9e704c703e8d87f634fb0fc9"));
        assert!(!is_address("0Xcf7ed3acca5a467e9e704c703e8d87f634fb0fc9"));
    }

    #[test]
    fn test_zero_address_detection() {
        assert!(is_zero_address("0x0000000000000000000000000000000000000000"));
        assert!(is_zero_address("0000000000000000000000000000000000000000"));
        assert!(!is_zero_address("0x0000000000000000000000000000000000000001"));
        assert!(!is_zero_address("0x00"));
    }

    #[test]
    fn test_bytes_like() {
        assert!(is_bytes_like("0xcdffacc6"));
        assert!(is_bytes_like("0xCDFFACC6"));
        assert!(is_bytes_like("0x"));
        assert!(!is_bytes_like("notBytes"));
        assert!(!is_bytes_like("cdffacc6"));
        assert!(!is_bytes_like("0xcdffacc"));
        assert!(!is_bytes_like("0xgg"));
    }
}

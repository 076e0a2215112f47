//! Hex account address helpers.

use alloy_primitives::{hex, Address};
use thiserror::Error;

/// Number of hex characters in an address without its prefix.
const ADDRESS_HEX_LEN: usize = 40;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Address is neither 40 (bare) nor 42 (prefixed) characters long
    #[error("invalid address length {0}; it must be 40 (without prefix 0x) or 42 (with prefix 0x)")]
    InvalidLength(usize),

    /// Address contains a non-hex character
    #[error("invalid hex character in address")]
    InvalidHex,
}

/// Strip a single leading `0x` or `0X` from `s`, if present.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Check that `address` is an optional `0x`/`0X` prefix followed by exactly
/// 40 hex characters.
pub fn is_valid_address(address: &str) -> bool {
    let digits = strip_hex_prefix(address);
    digits.len() == ADDRESS_HEX_LEN && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Decode a hex account address into its 20 raw bytes.
pub fn parse_address(address: &str) -> Result<Address, AddressError> {
    let digits = strip_hex_prefix(address);
    if digits.len() != ADDRESS_HEX_LEN {
        return Err(AddressError::InvalidLength(address.len()));
    }

    // const-hex would accept a second prefix, reject it here.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AddressError::InvalidHex);
    }

    let bytes: [u8; 20] = hex::decode_to_array(digits).map_err(|_| AddressError::InvalidHex)?;
    Ok(Address::from(bytes))
}

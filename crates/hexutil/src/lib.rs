//! String format predicates and byte helpers shared by the clause builders.
//!
//! This crate provides:
//! - Hex account address validation and decoding
//! - Decimal value format checks (integer and decimal point)
//! - Left zero-padding of byte strings for ABI words

pub mod address;
pub mod bytes;
pub mod value;

pub use address::{is_valid_address, parse_address, strip_hex_prefix, AddressError};
pub use bytes::left_pad_bytes;
pub use value::{is_valid_decimal_value, is_valid_value};

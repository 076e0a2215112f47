use std::fmt;
use thiserror::Error;

/// Which address an [`Error::InvalidAddress`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    /// The clause recipient
    Recipient,
    /// The token contract
    Token,
    /// The extra address argument of `transferFrom` / `allowance`
    Argument,
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recipient => f.write_str("recipient"),
            Self::Token => f.write_str("token contract"),
            Self::Argument => f.write_str("argument"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Address is not an optional `0x` prefix followed by 40 hex characters
    #[error("invalid {field} address: {address:?}")]
    InvalidAddress { field: AddressField, address: String },

    /// Value is empty or contains anything but digits
    #[error("value must be given as an integer without a decimal point: {0:?}")]
    InvalidValue(String),

    /// Recipient and token contract resolve to the same account
    #[error("externally owned account (EOA) and contract address can never be the same")]
    SameAddress,

    /// Method is not part of the ERC-20 standard table
    #[error("unknown ERC-20 method: {0:?}")]
    UnknownMethod(String),

    /// Value could not be parsed as an unsigned integer during encoding
    #[error("cannot parse value as an unsigned integer: {0:?}")]
    ValueParseError(String),
}

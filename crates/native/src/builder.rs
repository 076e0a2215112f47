use crate::Transfer;
use hexutil::{is_valid_address, is_valid_value};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClauseError {
    /// Recipient address format is invalid or empty
    #[error("recipient account address format is invalid or empty: {0:?}")]
    InvalidAddress(String),

    /// Value is empty or not a number
    #[error("value must be non-empty, e.g. an integer or decimal point number: {0:?}")]
    InvalidValue(String),
}

/// Mutable accumulator for a native transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseBuilder {
    recipient: String,
    value: String,
    data: Option<String>,
}

impl ClauseBuilder {
    pub const fn new() -> Self {
        Self {
            recipient: String::new(),
            value: String::new(),
            data: None,
        }
    }

    /// Set the recipient address.
    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = recipient.into();
        self
    }

    /// Set the amount to be transferred.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Attach arbitrary data to be stored with the transaction on the ledger.
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Validate the accumulated fields and produce an immutable [`Clause`].
    ///
    /// The builder is left untouched, so it can be corrected and built again.
    pub fn build(&self) -> Result<Clause, ClauseError> {
        if !is_valid_address(&self.recipient) {
            warn!(recipient = %self.recipient, "Rejected clause: invalid recipient");
            return Err(ClauseError::InvalidAddress(self.recipient.clone()));
        }

        if !is_valid_value(&self.value) {
            warn!(value = %self.value, "Rejected clause: invalid value");
            return Err(ClauseError::InvalidValue(self.value.clone()));
        }

        debug!(recipient = %self.recipient, value = %self.value, "Built clause");

        Ok(Clause {
            recipient: self.recipient.clone(),
            value: self.value.clone(),
            data: self.data.clone(),
        })
    }
}

impl From<Transfer> for ClauseBuilder {
    fn from(transfer: Transfer) -> Self {
        Self::new()
            .with_recipient(transfer.recipient)
            .with_value(transfer.value)
    }
}

/// Validated native transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clause {
    recipient: String,
    value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<String>,
}

impl Clause {
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }
}

//! Native-currency transfer clauses.
//!
//! A [`Clause`] carries a recipient address, an amount and optional arbitrary
//! data to be stored with the transaction. It is produced by validating a
//! mutable [`ClauseBuilder`].

mod builder;

pub use builder::{Clause, ClauseBuilder, ClauseError};

use serde::{Deserialize, Serialize};

/// A plain `{recipient, value}` pair that can seed any clause builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Recipient account address (hex)
    pub recipient: String,
    /// Amount to transfer
    pub value: String,
}

impl Transfer {
    pub fn new(recipient: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            value: value.into(),
        }
    }
}

//! Token transfer clauses.

use crate::{AddressField, Error};
use hexutil::{is_valid_address, is_valid_decimal_value, parse_address};
use native::Transfer;
use serde::Serialize;
use tracing::{debug, warn};

/// Mutable accumulator for an ERC-20 transfer.
///
/// Mutators consume and return the builder so they can be chained. [`build`]
/// borrows it, so a rejected builder can be corrected and built again.
///
/// [`build`]: Erc20ClauseBuilder::build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Erc20ClauseBuilder {
    recipient: String,
    token_address: String,
    value: String,
    aux_address: Option<String>,
}

impl Erc20ClauseBuilder {
    pub const fn new() -> Self {
        Self {
            recipient: String::new(),
            token_address: String::new(),
            value: String::new(),
            aux_address: None,
        }
    }

    /// Set the recipient account address.
    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = recipient.into();
        self
    }

    /// Set the amount in the token's smallest unit.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the token contract address.
    pub fn with_token_address(mut self, token_address: impl Into<String>) -> Self {
        self.token_address = token_address.into();
        self
    }

    /// Set the account address used as the extra argument of
    /// `transferFrom` and `allowance` when none is given at encoding time.
    pub fn with_aux_address(mut self, aux_address: impl Into<String>) -> Self {
        self.aux_address = Some(aux_address.into());
        self
    }

    /// Validate the accumulated fields and produce an immutable [`Erc20Clause`].
    ///
    /// Checks run in order and the first failure is returned:
    /// token address format, recipient format, distinct addresses, value.
    pub fn build(&self) -> Result<Erc20Clause, Error> {
        self.validate().inspect_err(|err| {
            warn!(
                recipient = %self.recipient,
                token = %self.token_address,
                value = %self.value,
                error = %err,
                "Rejected ERC-20 clause"
            );
        })?;

        debug!(
            recipient = %self.recipient,
            token = %self.token_address,
            value = %self.value,
            "Built ERC-20 clause"
        );

        Ok(Erc20Clause {
            recipient: self.recipient.clone(),
            token_address: self.token_address.clone(),
            value: self.value.clone(),
            aux_address: self.aux_address.clone(),
        })
    }

    fn validate(&self) -> Result<(), Error> {
        if !is_valid_address(&self.token_address) {
            return Err(invalid_address(AddressField::Token, &self.token_address));
        }

        if !is_valid_address(&self.recipient) {
            return Err(invalid_address(AddressField::Recipient, &self.recipient));
        }

        // Compare decoded bytes so case and prefix differences don't matter.
        let token = parse_address(&self.token_address)
            .map_err(|_| invalid_address(AddressField::Token, &self.token_address))?;
        let recipient = parse_address(&self.recipient)
            .map_err(|_| invalid_address(AddressField::Recipient, &self.recipient))?;
        if token == recipient {
            return Err(Error::SameAddress);
        }

        if !is_valid_decimal_value(&self.value) {
            return Err(Error::InvalidValue(self.value.clone()));
        }

        Ok(())
    }
}

impl From<Transfer> for Erc20ClauseBuilder {
    fn from(transfer: Transfer) -> Self {
        Self::new()
            .with_recipient(transfer.recipient)
            .with_value(transfer.value)
    }
}

fn invalid_address(field: AddressField, address: &str) -> Error {
    Error::InvalidAddress {
        field,
        address: address.to_string(),
    }
}

/// Validated ERC-20 transfer, ready to be encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Erc20Clause {
    recipient: String,
    token_address: String,
    value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    aux_address: Option<String>,
}

impl Erc20Clause {
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Address of the token contract the payload is meant for.
    pub fn token_address(&self) -> &str {
        &self.token_address
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn aux_address(&self) -> Option<&str> {
        self.aux_address.as_deref()
    }

    /// A builder pre-filled with this clause's fields.
    pub fn to_builder(&self) -> Erc20ClauseBuilder {
        Erc20ClauseBuilder {
            recipient: self.recipient.clone(),
            token_address: self.token_address.clone(),
            value: self.value.clone(),
            aux_address: self.aux_address.clone(),
        }
    }
}

use erc20::Erc20ClauseBuilder;
use native::ClauseBuilder;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Clause description loaded from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Recipient account address
    pub recipient: String,

    /// Amount to transfer
    pub value: String,

    /// ERC-20 token contract address (unused by native clauses)
    #[serde(default)]
    pub token_address: String,

    /// Extra account for `transferFrom` / `allowance`
    #[serde(default)]
    pub aux_address: Option<String>,

    /// Arbitrary data attached to native clauses
    #[serde(default)]
    pub data: Option<String>,
}

/// Values given on the command line, taking precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub recipient: Option<String>,
    pub value: Option<String>,
    pub token_address: Option<String>,
    pub aux_address: Option<String>,
    pub data: Option<String>,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;

        Ok(config)
    }

    /// Replace every field that has an override.
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(recipient) = overrides.recipient {
            self.recipient = recipient;
        }
        if let Some(value) = overrides.value {
            self.value = value;
        }
        if let Some(token_address) = overrides.token_address {
            self.token_address = token_address;
        }
        if overrides.aux_address.is_some() {
            self.aux_address = overrides.aux_address;
        }
        if overrides.data.is_some() {
            self.data = overrides.data;
        }
    }

    pub fn erc20_builder(&self) -> Erc20ClauseBuilder {
        let builder = Erc20ClauseBuilder::new()
            .with_recipient(&self.recipient)
            .with_token_address(&self.token_address)
            .with_value(&self.value);

        match &self.aux_address {
            Some(aux) => builder.with_aux_address(aux),
            None => builder,
        }
    }

    pub fn native_builder(&self) -> ClauseBuilder {
        let builder = ClauseBuilder::new()
            .with_recipient(&self.recipient)
            .with_value(&self.value);

        match &self.data {
            Some(data) => builder.with_data(data),
            None => builder,
        }
    }
}

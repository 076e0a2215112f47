//! Build clauses from a [`Config`](config::Config) and encode ERC-20 call data.

pub mod config;

use alloy_primitives::Bytes;
use config::Config;
use erc20::{Erc20Clause, MethodRegistry, PayloadEncoder};
use native::Clause;
use tracing::info;

/// Build the ERC-20 clause described by `config`.
pub fn build_erc20_clause(config: &Config) -> eyre::Result<Erc20Clause> {
    let clause = config.erc20_builder().build()?;
    Ok(clause)
}

/// Build the native-currency clause described by `config`.
pub fn build_native_clause(config: &Config) -> eyre::Result<Clause> {
    let clause = config.native_builder().build()?;
    Ok(clause)
}

/// Build the ERC-20 clause and encode a call to `method` for it.
pub fn encode_payload(
    registry: &MethodRegistry,
    config: &Config,
    method: &str,
    arg: Option<&str>,
) -> eyre::Result<Bytes> {
    let clause = build_erc20_clause(config)?;
    let payload = PayloadEncoder::new(registry).payload(&clause, method, arg)?;

    info!(
        method,
        to = %clause.token_address(),
        len = payload.len(),
        "Encoded payload"
    );

    Ok(payload)
}

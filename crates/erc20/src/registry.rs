//! ERC-20 method table.
//!
//! A method selector is the first four bytes of the Keccak-256 hash of the
//! method's canonical signature. The registry computes all of them once, up
//! front, and is read-only afterwards.

use crate::Error;
use alloy_primitives::{keccak256, Selector};
use std::{fmt, str::FromStr};
use tracing::debug;

/// The ERC-20 getters and functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Name,
    Symbol,
    Decimals,
    TotalSupply,
    BalanceOf,
    Transfer,
    Approve,
    TransferFrom,
    Allowance,
}

impl Method {
    /// Every method, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Name,
        Self::Symbol,
        Self::Decimals,
        Self::TotalSupply,
        Self::BalanceOf,
        Self::Transfer,
        Self::Approve,
        Self::TransferFrom,
        Self::Allowance,
    ];

    /// Short method name, e.g. `transfer`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Symbol => "symbol",
            Self::Decimals => "decimals",
            Self::TotalSupply => "totalSupply",
            Self::BalanceOf => "balanceOf",
            Self::Transfer => "transfer",
            Self::Approve => "approve",
            Self::TransferFrom => "transferFrom",
            Self::Allowance => "allowance",
        }
    }

    /// Canonical signature, e.g. `transfer(address,uint256)`.
    pub const fn signature(self) -> &'static str {
        match self {
            Self::Name => "name()",
            Self::Symbol => "symbol()",
            Self::Decimals => "decimals()",
            Self::TotalSupply => "totalSupply()",
            Self::BalanceOf => "balanceOf(address)",
            Self::Transfer => "transfer(address,uint256)",
            Self::Approve => "approve(address,uint256)",
            Self::TransferFrom => "transferFrom(address,address,uint256)",
            Self::Allowance => "allowance(address,address)",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    /// Accepts either the short name or the canonical signature.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.name() == s || method.signature() == s)
            .ok_or_else(|| Error::UnknownMethod(s.to_string()))
    }
}

/// Calculate the 4-byte selector of a method signature.
pub fn compute_selector(signature: &str) -> Selector {
    let hash = keccak256(signature.as_bytes());
    Selector::from_slice(&hash[..4])
}

/// Immutable table of ERC-20 method selectors.
///
/// Build one with [`MethodRegistry::new`] during initialization and hand it
/// by reference to every [`PayloadEncoder`](crate::PayloadEncoder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRegistry {
    /// Indexed by `Method as usize`
    selectors: [Selector; 9],
}

impl MethodRegistry {
    pub fn new() -> Self {
        let selectors = Method::ALL.map(|method| compute_selector(method.signature()));
        debug!(methods = selectors.len(), "Computed ERC-20 method selectors");
        Self { selectors }
    }

    /// Selector of a known method.
    pub const fn selector(&self, method: Method) -> Selector {
        self.selectors[method as usize]
    }

    /// Selector by method name or canonical signature.
    pub fn lookup(&self, method: &str) -> Result<Selector, Error> {
        let method: Method = method.parse()?;
        Ok(self.selector(method))
    }

    /// All `(method, selector)` pairs, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Method, Selector)> + '_ {
        Method::ALL
            .into_iter()
            .map(move |method| (method, self.selector(method)))
    }
}

impl Default for MethodRegistry {
    fn default() -> Self {
        Self::new()
    }
}

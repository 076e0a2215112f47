//! Solidity interface bindings for the ERC-20 token standard.
//!
//! Generated with alloy's `sol!` macro. These are the reference the
//! hand-packed payloads in the `erc20` crate are checked against.

pub mod token;

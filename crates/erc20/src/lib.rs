//! ERC-20 clauses and call-data encoding.
//!
//! This crate provides:
//! - The fixed table of ERC-20 method selectors ([`MethodRegistry`])
//! - A validating builder for token transfer clauses ([`Erc20ClauseBuilder`])
//! - The encoder packing a clause into the `data` field of a call to the
//!   token contract ([`PayloadEncoder`])
//!
//! ```
//! use erc20::{Erc20ClauseBuilder, MethodRegistry, PayloadEncoder};
//!
//! let registry = MethodRegistry::new();
//! let clause = Erc20ClauseBuilder::new()
//!     .with_recipient("0x27d22890587cfada7fec247c5180d73de6c670c4")
//!     .with_token_address("0xf6fe970533fe5c63d196139b14522eb2956f8621")
//!     .with_value("3")
//!     .build()
//!     .unwrap();
//!
//! let payload = PayloadEncoder::new(&registry).transfer(&clause).unwrap();
//! assert_eq!(payload.len(), 4 + 32 + 32);
//! ```

pub mod clause;
pub mod encoder;
pub mod error;
pub mod registry;

pub use clause::{Erc20Clause, Erc20ClauseBuilder};
pub use encoder::{pad32, PayloadEncoder};
pub use error::{AddressField, Error};
pub use registry::{compute_selector, Method, MethodRegistry};

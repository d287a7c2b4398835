//! # Data Transfer Objects (DTOs)
//!
//! Wire types for the two external services the demo talks to.
//!
//! ## Module Organization
//!
//! - [`faucet`] - devnet faucet request/response types
//! - [`transaction`] - `moveCall` transaction descriptor and response effects
//!
//! ## Serialization Format
//!
//! - **Faucet**: externally tagged request (`{"FixedAmountRequest": {...}}`),
//!   snake_case response fields
//! - **Transaction descriptor**: camelCase data fields, matching the wallet
//!   connector's JavaScript API
//! - **Transaction response**: only the fields this app consumes are modeled;
//!   unknown fields are ignored on deserialization

pub mod faucet;
pub mod transaction;

pub use faucet::*;
pub use transaction::*;

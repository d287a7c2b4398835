//! # Shared Wire Types and Utilities
//!
//! This library defines the wire contracts the mint demo frontend speaks with
//! its external collaborators: the devnet faucet (JSON over HTTP) and the
//! browser wallet's transaction-signing API (JSON via JS interop).
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::faucet`]**: faucet request/response types
//!   - **[`dto::transaction`]**: `moveCall` descriptor and transaction effects
//! - **[`utils`]**: display helpers
//!   - **[`utils::truncate_address`]**: shorten addresses for display
//!   - **[`utils::explorer_object_url`]**: devnet explorer links
//!
//! ## Wire Format
//!
//! All DTOs serialize with `serde_json`. The transaction descriptor uses
//! **camelCase** field names to match the wallet connector's JavaScript API;
//! chain-originated fields keep the chain's snake_case (`object_id` in move
//! events).
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::faucet::FaucetRequest;
//! use shared::utils::explorer_object_url;
//!
//! let request = FaucetRequest::fixed_amount("0x71b2d...");
//! let body = serde_json::to_string(&request).unwrap();
//! assert!(body.contains("FixedAmountRequest"));
//!
//! let link = explorer_object_url("0xABC");
//! assert!(link.ends_with("/objects/0xABC"));
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;

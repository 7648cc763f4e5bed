//! # Shared Wire Contract
//!
//! DTOs exchanged with the wallet analysis backend. All types serialize to
//! JSON via `serde`; multi-word keys use camelCase on the wire (per-field
//! renames), matching the backend's REST responses.
//!
//! ## Structure
//!
//! - **[`dto`]**: response payloads for every backend operation
//!   - **[`dto::wallet`]**: wallet overview, token holdings, transactions
//!   - **[`dto::tx`]**: decoded transactions and their parameters
//!   - **[`dto::approvals`]**: token-spend approvals
//!   - **[`dto::swaps`]**: DEX swap records
//!   - **[`dto::gas`]**: gas usage insight
//! - **[`utils`]**: pure display helpers shared by every frontend surface
//!
//! ## Amount handling
//!
//! Every field carrying on-chain integer precision (balances, allowances,
//! gas figures, swap amounts) is a decimal **string** end-to-end. Clients
//! parse to floating point only at the display boundary and never write the
//! parsed value back.

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;

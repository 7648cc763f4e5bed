//! # Data Transfer Objects
//!
//! Response payloads for the backend REST API, one module per domain.
//!
//! ## Serialization
//!
//! - Multi-word keys are camelCase on the wire (`#[serde(rename = "...")]`)
//! - Optional fields are omitted when `None`
//! - All types implement both `Serialize` and `Deserialize`

use serde::{Deserialize, Serialize};

pub mod approvals;
pub mod gas;
pub mod swaps;
pub mod tx;
pub mod wallet;

pub use approvals::*;
pub use gas::*;
pub use swaps::*;
pub use tx::*;
pub use wallet::*;

/// Optional error body attached to failed responses.
///
/// The backend is not guaranteed to send one; absence of the `message` field
/// (or an unparseable body) falls back to the caller's default message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

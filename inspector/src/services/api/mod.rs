//! # Backend API Client Module
//!
//! HTTP client for the wallet analysis backend, one module per domain.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports and shared error-body handling
//! ├── client.rs     - ApiClient struct and base URL resolution
//! ├── wallet.rs     - Wallet overview endpoint
//! ├── tx.rs         - Transaction decode endpoint
//! ├── approvals.rs  - Token approvals endpoint
//! ├── swaps.rs      - Swap search endpoint
//! └── gas.rs        - Gas insight endpoint
//! ```

use shared::ApiErrorBody;

pub mod approvals;
pub mod client;
pub mod gas;
pub mod swaps;
pub mod tx;
pub mod wallet;

pub use client::ApiClient;

/// Extract the user-facing message from a failed response.
///
/// Prefers the backend's `message` field when the error body parses and is
/// non-empty; every other shape falls back to the operation's default.
pub(crate) async fn error_message(response: reqwest::Response, default: &str) -> String {
    match response.json::<ApiErrorBody>().await {
        Ok(ApiErrorBody { message: Some(msg) }) if !msg.trim().is_empty() => msg,
        _ => default.to_string(),
    }
}

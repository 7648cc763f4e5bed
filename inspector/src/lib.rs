//! # Wallet Activity Inspector - Library Root
//!
//! Client for a blockchain wallet analysis backend: holdings, transaction
//! decoding, token-spend approvals, and DEX swap history. This library crate
//! contains all modules used by the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              inspector (this crate)                    │
//! ├────────────────────────────────────────────────────────┤
//! │  app          - Analysis workflows and view state      │
//! │  services     - Backend HTTP client (reqwest)          │
//! │  utils        - Chain registry, formatters, risk       │
//! │  ui           - Plain-text rendering for the CLI       │
//! └────────────────────────────────────────────────────────┘
//!               │ HTTP/JSON
//!               ▼
//! ┌─────────────────────────────────────┐
//! │  Analysis backend (external)        │
//! │  /api/wallet/{address}              │
//! │  /api/tx/{txHash}                   │
//! │  /api/approvals/{address}           │
//! │  /api/swaps/{address}               │
//! │  /api/gas                           │
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Core Concepts
//!
//! ### Analysis workflows
//!
//! Four independent workflows (wallet analysis, transaction decode, approval
//! check, swap search) share one state machine: `Idle → Loading → Success |
//! Failure`, re-entrant on every user-triggered submission. Each submission
//! validates its input locally, issues exactly one backend query, and on
//! success derives its aggregates (volume totals, risk buckets) from the
//! fresh payload. A workflow owns its state exclusively; nothing is shared
//! across workflows.
//!
//! ### Amount handling
//!
//! On-chain amounts travel as decimal strings end-to-end and reach floating
//! point only inside display formatters. Risk classification compares
//! allowances against the 10^18 unlimited boundary with exact 256-bit
//! arithmetic.
//!
//! ### Service boundary
//!
//! [`crate::core::service::ApiService`] abstracts the five backend
//! operations so workflow tests run against a mock client;
//! [`crate::services::api::ApiClient`] is the production implementation.

// Re-export main modules for testing and integration
pub mod app;
pub mod core;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::app::{AnalysisController, ViewState};
pub use crate::core::{ApiService, AppError, Result};
pub use crate::services::api::ApiClient;

//! # Analysis Workflows
//!
//! The client's core: four independent workflows sharing one state machine.
//!
//! ```text
//! app/
//! ├── state.rs       - ViewState and derived report types
//! ├── controller.rs  - Generic submit/resolve state machine
//! └── workflows/     - One module per analysis workflow
//!     ├── wallet.rs     - Holdings and transaction history
//!     ├── decode.rs     - Transaction decoding
//!     ├── approvals.rs  - Token-spend approval risk
//!     └── swaps.rs      - DEX swap analytics
//! ```
//!
//! Each workflow owns its state exclusively; there is no shared mutable
//! state and no cross-workflow coordination. State changes happen only in
//! response to discrete events: a submission, or the settle of the single
//! query that submission issued.

pub mod controller;
pub mod state;
pub mod workflows;

// Re-export commonly used types for convenience
pub use controller::AnalysisController;
pub use state::{ApprovalReport, RiskCounts, SwapReport, ViewState};
pub use workflows::{ApprovalCheck, SwapSearch, TransactionDecode, WalletAnalysis};

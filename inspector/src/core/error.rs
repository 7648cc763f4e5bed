//! # Error Types
//!
//! Centralized error handling for the inspector client.
//!
//! Two failure categories exist at the query boundary:
//!
//! - **Validation**: a required field was missing or blank. Raised locally,
//!   before any network I/O, and shown inline next to the offending field.
//! - **Request**: the backend call itself failed (network error, non-success
//!   status, unparseable payload). Shown in the error panel with a retry
//!   action that re-runs the same query.
//!
//! Neither is fatal; every workflow remains usable after a failure.

use thiserror::Error;

/// Client-wide error type.
///
/// The `Display` output is the user-facing message verbatim: for `Request`
/// errors that is the backend's `message` field when one was returned,
/// otherwise the operation's generic default.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Required input missing or blank; no request was issued.
    #[error("{0}")]
    Validation(String),

    /// A backend request was issued and failed.
    #[error("{0}")]
    Request(String),
}

impl AppError {
    /// The message carried by this error, without category decoration.
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation(msg) | AppError::Request(msg) => msg,
        }
    }
}

/// Convenience alias used throughout the client.
pub type Result<T> = std::result::Result<T, AppError>;

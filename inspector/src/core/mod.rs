//! # Core Abstractions
//!
//! Foundational types used throughout the client:
//!
//! - **[`error`]**: centralized error handling (`AppError`, `Result<T>`)
//! - **[`service`]**: the `ApiService` trait the analysis workflows depend
//!   on, enabling mock backends in tests

pub mod error;
pub mod service;

// Re-export commonly used types for convenience
pub use error::{AppError, Result};
pub use service::ApiService;

//! # Text Rendering
//!
//! Plain-text views over workflow state for the CLI binary. Rendering only
//! reads state; every derivation happened in the workflow when its query
//! settled.

pub mod views;

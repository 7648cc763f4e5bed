//! # Transaction Decoding DTOs
//!
//! Decoded call data returned by `GET /api/tx/{txHash}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One decoded method parameter.
///
/// Name and ABI type are best-effort; the backend omits them when the
/// contract ABI is unverified. The value is kept opaque and serialized for
/// display as received.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecodedParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub value: Value,
}

/// A transaction decoded into a readable method call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecodedTransaction {
    pub hash: String,
    pub chain: String,
    /// Resolved method name, e.g. `transfer` or `swapExactTokensForTokens`.
    pub method: String,
    #[serde(default)]
    pub parameters: Vec<DecodedParameter>,
    /// Opaque structured decode output; rendered as pretty-printed JSON.
    #[serde(rename = "decodedData", default)]
    pub decoded_data: Value,
    /// Plain-language description of what the transaction does.
    #[serde(rename = "humanReadable", default)]
    pub human_readable: String,
}

//! # Swap DTOs
//!
//! DEX trades returned by `GET /api/swaps/{address}`.

use serde::{Deserialize, Serialize};

/// A single DEX swap executed by the wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Swap {
    #[serde(rename = "txHash")]
    pub tx_hash: String,
    /// Unix seconds.
    pub timestamp: i64,
    #[serde(rename = "tokenIn")]
    pub token_in: String,
    #[serde(rename = "tokenOut")]
    pub token_out: String,
    #[serde(rename = "amountIn")]
    pub amount_in: String,
    #[serde(rename = "amountOut")]
    pub amount_out: String,
    #[serde(rename = "valueUsd")]
    pub value_usd: f64,
    /// Venue name, e.g. `Uniswap V3`.
    pub dex: String,
}

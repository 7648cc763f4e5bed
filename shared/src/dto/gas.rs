//! # Gas Insight DTOs
//!
//! Aggregated gas usage returned by `GET /api/gas`.

use serde::{Deserialize, Serialize};

/// Gas spending summary over a reporting period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GasInsight {
    #[serde(rename = "averageGasPrice")]
    pub average_gas_price: String,
    #[serde(rename = "totalGasUsed")]
    pub total_gas_used: String,
    #[serde(rename = "totalGasCostUsd")]
    pub total_gas_cost_usd: f64,
    /// Number of transactions in the period.
    pub transactions: u64,
    /// Human-readable period label, e.g. `30d`.
    pub period: String,
}

//! # Wallet Overview DTOs
//!
//! Holdings and transaction history returned by `GET /api/wallet/{address}`.

use serde::{Deserialize, Serialize};

/// A single token position held by the wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// Token contract address.
    pub address: String,
    pub symbol: String,
    pub name: String,
    /// Raw balance as a decimal string; parsed to `f64` for display only.
    pub balance: String,
    pub decimals: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "valueUsd", skip_serializing_if = "Option::is_none")]
    pub value_usd: Option<f64>,
}

/// One transaction involving the wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub hash: String,
    #[serde(rename = "blockNumber")]
    pub block_number: u64,
    /// Unix seconds.
    pub timestamp: i64,
    pub from: String,
    pub to: String,
    /// Native value as a decimal string.
    pub value: String,
    #[serde(rename = "gasUsed")]
    pub gas_used: String,
    #[serde(rename = "gasPrice")]
    pub gas_price: String,
    /// `"success"`, `"failed"`, ...
    pub status: String,
}

/// Full wallet snapshot for one analysis query.
///
/// Replaced wholesale on every query; nothing is merged incrementally, so
/// derived counts always agree with the last successful response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletOverview {
    pub address: String,
    pub chain: String,
    /// Native balance as a decimal string.
    pub balance: String,
    #[serde(rename = "balanceUsd")]
    pub balance_usd: f64,
    #[serde(default)]
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(rename = "totalValue")]
    pub total_value: f64,
}

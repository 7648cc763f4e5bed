//! # Service Traits
//!
//! The query boundary between analysis workflows and the backend.
//!
//! Workflows hold a `&dyn ApiService` rather than the concrete client, so
//! tests can substitute a mock that records calls and returns canned
//! payloads. [`crate::services::api::ApiClient`] is the production
//! implementation.

use async_trait::async_trait;
use shared::{DecodedTransaction, GasInsight, Swap, TokenApproval, WalletOverview};

use crate::core::error::Result;

/// Typed access to the five backend query operations.
///
/// Every operation issues exactly one request: no retries, no caching, no
/// deduplication. The required address/hash parameter is validated non-empty
/// after trimming before any network I/O.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Holdings and transaction history for a wallet.
    async fn get_wallet_overview(
        &self,
        address: &str,
        chain: &str,
        lookback_days: Option<u32>,
    ) -> Result<WalletOverview>;

    /// Decode a transaction into a readable method call.
    async fn decode_transaction(&self, tx_hash: &str, chain: &str) -> Result<DecodedTransaction>;

    /// Active token-spend approvals granted by a wallet.
    async fn list_approvals(&self, address: &str, chain: &str) -> Result<Vec<TokenApproval>>;

    /// DEX swaps for a wallet, optionally filtered by value and date.
    async fn find_swaps(
        &self,
        address: &str,
        chain: &str,
        min_usd: Option<f64>,
        since: Option<&str>,
    ) -> Result<Vec<Swap>>;

    /// Aggregated gas usage; parameters are passed through unvalidated.
    async fn gas_insight(&self, params: &[(String, String)]) -> Result<GasInsight>;
}

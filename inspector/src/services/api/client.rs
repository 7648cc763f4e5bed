//! # API Client
//!
//! Main HTTP client for backend API communication.

use async_trait::async_trait;
use reqwest::Client;
use shared::{DecodedTransaction, GasInsight, Swap, TokenApproval, WalletOverview};

use crate::core::error::Result;
use crate::core::service::ApiService;

/// Default base URL for the analysis backend.
const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Environment variable overriding the backend base URL.
const API_URL_ENV: &str = "INSPECTOR_API_URL";

/// HTTP client for communicating with the analysis backend.
///
/// Maintains a connection pool for HTTP/2 multiplexing; cheap to share by
/// reference across workflows.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given base URL.
    ///
    /// The client is configured with a 10 second timeout so a stalled
    /// backend cannot freeze a workflow indefinitely.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { client, base_url }
    }

    /// Resolve the base URL from `INSPECTOR_API_URL`, falling back to the
    /// default local backend.
    pub fn from_env() -> Self {
        let url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(url)
    }

    /// Base URL for API requests, without a trailing slash.
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}

// Implement ApiService trait for ApiClient
#[async_trait]
impl ApiService for ApiClient {
    async fn get_wallet_overview(
        &self,
        address: &str,
        chain: &str,
        lookback_days: Option<u32>,
    ) -> Result<WalletOverview> {
        crate::services::api::wallet::get_wallet_overview(self, address, chain, lookback_days).await
    }

    async fn decode_transaction(&self, tx_hash: &str, chain: &str) -> Result<DecodedTransaction> {
        crate::services::api::tx::decode_transaction(self, tx_hash, chain).await
    }

    async fn list_approvals(&self, address: &str, chain: &str) -> Result<Vec<TokenApproval>> {
        crate::services::api::approvals::list_approvals(self, address, chain).await
    }

    async fn find_swaps(
        &self,
        address: &str,
        chain: &str,
        min_usd: Option<f64>,
        since: Option<&str>,
    ) -> Result<Vec<Swap>> {
        crate::services::api::swaps::find_swaps(self, address, chain, min_usd, since).await
    }

    async fn gas_insight(&self, params: &[(String, String)]) -> Result<GasInsight> {
        crate::services::api::gas::gas_insight(self, params).await
    }
}

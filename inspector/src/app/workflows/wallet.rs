//! # Wallet Analysis Workflow
//!
//! Holdings and transaction history for a user-supplied address.

use shared::WalletOverview;

use crate::app::controller::AnalysisController;
use crate::app::state::ViewState;
use crate::core::service::ApiService;

/// Analyze a wallet's holdings and recent activity.
///
/// The payload carries everything this view derives: token and transaction
/// counts are the lengths already present in the overview.
pub struct WalletAnalysis {
    pub address: String,
    pub chain: String,
    /// Days of history to query; the backend defaults when `None`.
    pub lookback_days: Option<u32>,
    controller: AnalysisController<WalletOverview>,
}

impl WalletAnalysis {
    pub fn new(chain: impl Into<String>) -> Self {
        Self {
            address: String::new(),
            chain: chain.into(),
            lookback_days: None,
            controller: AnalysisController::new(),
        }
    }

    pub fn view(&self) -> &ViewState<WalletOverview> {
        self.controller.view()
    }

    pub fn token_count(&self) -> usize {
        self.view().payload().map(|overview| overview.tokens.len()).unwrap_or(0)
    }

    pub fn transaction_count(&self) -> usize {
        self.view().payload().map(|overview| overview.transactions.len()).unwrap_or(0)
    }

    /// Run one analysis query for the current inputs.
    pub async fn submit(&mut self, api: &dyn ApiService) {
        if self.address.trim().is_empty() {
            self.controller.reject("Please enter a wallet address");
            return;
        }

        let generation = self.controller.begin();
        let result = api
            .get_wallet_overview(self.address.trim(), &self.chain, self.lookback_days)
            .await;
        self.controller.resolve(generation, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::workflows::testing::MockApi;
    use crate::core::error::AppError;

    fn overview() -> WalletOverview {
        serde_json::from_value(serde_json::json!({
            "address": "0x7a250d5630b4cf539739df2c5dacb4c659f2488d",
            "chain": "ethereum",
            "balance": "1.25",
            "balanceUsd": 4100.0,
            "tokens": [{
                "address": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
                "symbol": "USDC",
                "name": "USD Coin",
                "balance": "5000",
                "decimals": 6,
                "valueUsd": 5000.0
            }],
            "transactions": [],
            "totalValue": 9100.0
        }))
        .expect("fixture")
    }

    #[tokio::test]
    async fn test_blank_address_fails_without_a_request() {
        let api = MockApi::default();
        let mut flow = WalletAnalysis::new("ethereum");
        flow.address = "   ".to_string();

        flow.submit(&api).await;

        assert_eq!(flow.view().error(), Some("Please enter a wallet address"));
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_success_exposes_payload_counts() {
        let api = MockApi::default();
        *api.wallet.lock().unwrap() = Some(Ok(overview()));
        let mut flow = WalletAnalysis::new("ethereum");
        flow.address = "0x7a250d5630b4cf539739df2c5dacb4c659f2488d".to_string();
        flow.lookback_days = Some(30);

        flow.submit(&api).await;

        assert_eq!(flow.token_count(), 1);
        assert_eq!(flow.transaction_count(), 0);
        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failure_discards_previous_payload() {
        let api = MockApi::default();
        *api.wallet.lock().unwrap() = Some(Ok(overview()));
        let mut flow = WalletAnalysis::new("ethereum");
        flow.address = "0x7a250d5630b4cf539739df2c5dacb4c659f2488d".to_string();
        flow.submit(&api).await;
        assert!(flow.view().payload().is_some());

        *api.wallet.lock().unwrap() = Some(Err(AppError::Request("Rate limited".to_string())));
        flow.submit(&api).await;

        assert_eq!(flow.view().error(), Some("Rate limited"));
        assert_eq!(flow.token_count(), 0);
    }
}

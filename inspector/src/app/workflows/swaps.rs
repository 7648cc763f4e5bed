//! # Swap Search Workflow
//!
//! DEX trade history with volume statistics.

use crate::app::controller::AnalysisController;
use crate::app::state::{SwapReport, ViewState};
use crate::core::service::ApiService;

/// Find a wallet's DEX swaps, optionally filtered by value and date.
pub struct SwapSearch {
    pub address: String,
    pub chain: String,
    /// Only include swaps at or above this USD value.
    pub min_usd: Option<f64>,
    /// Only include swaps after this date (`YYYY-MM-DD`).
    pub since: Option<String>,
    controller: AnalysisController<SwapReport>,
}

impl SwapSearch {
    pub fn new(chain: impl Into<String>) -> Self {
        Self {
            address: String::new(),
            chain: chain.into(),
            min_usd: None,
            since: None,
            controller: AnalysisController::new(),
        }
    }

    pub fn view(&self) -> &ViewState<SwapReport> {
        self.controller.view()
    }

    /// Run one swap query for the current inputs.
    pub async fn submit(&mut self, api: &dyn ApiService) {
        if self.address.trim().is_empty() {
            self.controller.reject("Please enter a wallet address");
            return;
        }

        let generation = self.controller.begin();
        let result = api
            .find_swaps(
                self.address.trim(),
                &self.chain,
                self.min_usd,
                self.since.as_deref(),
            )
            .await
            .map(SwapReport::from_swaps);
        self.controller.resolve(generation, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::workflows::testing::MockApi;
    use crate::core::error::AppError;
    use shared::Swap;

    fn swap(value_usd: f64) -> Swap {
        Swap {
            tx_hash: "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060"
                .to_string(),
            timestamp: 1736089440,
            token_in: "WETH".to_string(),
            token_out: "USDC".to_string(),
            amount_in: "0.5".to_string(),
            amount_out: "1640".to_string(),
            value_usd,
            dex: "Uniswap V3".to_string(),
        }
    }

    #[tokio::test]
    async fn test_blank_address_fails_without_a_request() {
        let api = MockApi::default();
        let mut flow = SwapSearch::new("ethereum");
        flow.address = "\t".to_string();

        flow.submit(&api).await;

        assert_eq!(flow.view().error(), Some("Please enter a wallet address"));
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_volume_statistics_derived_on_success() {
        let api = MockApi::default();
        *api.swaps.lock().unwrap() = Some(Ok(vec![swap(100.0), swap(300.0)]));
        let mut flow = SwapSearch::new("ethereum");
        flow.address = "0xdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef".to_string();
        flow.min_usd = Some(50.0);

        flow.submit(&api).await;

        let report = flow.view().payload().expect("success");
        assert_eq!(report.total_volume, 400.0);
        assert_eq!(report.average_swap_size, 200.0);
    }

    #[tokio::test]
    async fn test_zero_swaps_is_an_explicit_empty_state() {
        let api = MockApi::default();
        *api.swaps.lock().unwrap() = Some(Ok(Vec::new()));
        let mut flow = SwapSearch::new("ethereum");
        flow.address = "0xdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef".to_string();

        flow.submit(&api).await;

        let report = flow.view().payload().expect("empty success");
        assert!(report.swaps.is_empty());
        assert_eq!(report.average_swap_size, 0.0);
        assert_eq!(flow.view().error(), None);
    }

    #[tokio::test]
    async fn test_failure_clears_previous_results() {
        let api = MockApi::default();
        *api.swaps.lock().unwrap() = Some(Ok(vec![swap(100.0)]));
        let mut flow = SwapSearch::new("ethereum");
        flow.address = "0xdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef".to_string();
        flow.submit(&api).await;
        assert!(flow.view().payload().is_some());

        *api.swaps.lock().unwrap() = Some(Err(AppError::Request("Upstream timeout".to_string())));
        flow.submit(&api).await;

        assert_eq!(flow.view().error(), Some("Upstream timeout"));
        assert_eq!(flow.view().payload(), None);
    }
}

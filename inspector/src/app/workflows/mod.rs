//! # Workflow Modules
//!
//! One module per analysis workflow. All four follow the same pattern:
//! validate the required input, run the query through the shared
//! [`AnalysisController`](crate::app::controller::AnalysisController), and
//! derive aggregates from the fresh payload on success.

pub mod approvals;
pub mod decode;
pub mod swaps;
pub mod wallet;

pub use approvals::ApprovalCheck;
pub use decode::TransactionDecode;
pub use swaps::SwapSearch;
pub use wallet::WalletAnalysis;

#[cfg(test)]
pub(crate) mod testing {
    //! Mock backend for workflow tests: canned responses, call counting.

    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use shared::{DecodedTransaction, GasInsight, Swap, TokenApproval, WalletOverview};

    use crate::core::error::{AppError, Result};
    use crate::core::service::ApiService;

    type Canned<T> = std::sync::Mutex<Option<Result<T>>>;

    #[derive(Default)]
    pub(crate) struct MockApi {
        pub calls: AtomicUsize,
        pub wallet: Canned<WalletOverview>,
        pub decoded: Canned<DecodedTransaction>,
        pub approvals: Canned<Vec<TokenApproval>>,
        pub swaps: Canned<Vec<Swap>>,
    }

    impl MockApi {
        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn take<T>(&self, slot: &Canned<T>) -> Result<T> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            slot.lock()
                .expect("mock poisoned")
                .take()
                .unwrap_or_else(|| Err(AppError::Request("no canned response".to_string())))
        }
    }

    #[async_trait]
    impl ApiService for MockApi {
        async fn get_wallet_overview(
            &self,
            _address: &str,
            _chain: &str,
            _lookback_days: Option<u32>,
        ) -> Result<WalletOverview> {
            self.take(&self.wallet)
        }

        async fn decode_transaction(
            &self,
            _tx_hash: &str,
            _chain: &str,
        ) -> Result<DecodedTransaction> {
            self.take(&self.decoded)
        }

        async fn list_approvals(&self, _address: &str, _chain: &str) -> Result<Vec<TokenApproval>> {
            self.take(&self.approvals)
        }

        async fn find_swaps(
            &self,
            _address: &str,
            _chain: &str,
            _min_usd: Option<f64>,
            _since: Option<&str>,
        ) -> Result<Vec<Swap>> {
            self.take(&self.swaps)
        }

        async fn gas_insight(&self, _params: &[(String, String)]) -> Result<GasInsight> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(AppError::Request("no canned response".to_string()))
        }
    }
}

//! # Transaction Decode Workflow
//!
//! Turns a transaction hash into a readable method call. No aggregation:
//! parameters are rendered as received, structured values serialized for
//! display.

use shared::DecodedTransaction;

use crate::app::controller::AnalysisController;
use crate::app::state::ViewState;
use crate::core::service::ApiService;

/// Decode a transaction by hash.
pub struct TransactionDecode {
    pub tx_hash: String,
    pub chain: String,
    controller: AnalysisController<DecodedTransaction>,
    auto_decoded: bool,
}

impl TransactionDecode {
    pub fn new(chain: impl Into<String>) -> Self {
        Self::with_hash(String::new(), chain)
    }

    /// Construct with a pre-filled hash, e.g. from a saved reference.
    /// [`mount`](Self::mount) will then decode it without user action.
    pub fn with_hash(tx_hash: impl Into<String>, chain: impl Into<String>) -> Self {
        Self {
            tx_hash: tx_hash.into(),
            chain: chain.into(),
            controller: AnalysisController::new(),
            auto_decoded: false,
        }
    }

    pub fn view(&self) -> &ViewState<DecodedTransaction> {
        self.controller.view()
    }

    /// Auto-decode once when the view comes up with a hash already present.
    /// A no-op on an empty hash or on any later call.
    pub async fn mount(&mut self, api: &dyn ApiService) {
        if self.auto_decoded || self.tx_hash.trim().is_empty() {
            return;
        }
        self.auto_decoded = true;
        self.submit(api).await;
    }

    /// Decode the current hash.
    pub async fn submit(&mut self, api: &dyn ApiService) {
        if self.tx_hash.trim().is_empty() {
            self.controller.reject("Please enter a transaction hash");
            return;
        }

        let generation = self.controller.begin();
        let result = api.decode_transaction(self.tx_hash.trim(), &self.chain).await;
        self.controller.resolve(generation, result);
    }
}

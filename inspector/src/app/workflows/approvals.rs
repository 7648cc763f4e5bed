//! # Approval Check Workflow
//!
//! Token-spend approvals with per-tier risk buckets. Revoking an approval
//! requires a wallet connection and is not supported here; the view is
//! read-only.

use shared::TokenApproval;

use crate::app::controller::AnalysisController;
use crate::app::state::{ApprovalReport, ViewState};
use crate::core::service::ApiService;

/// Check which contracts may spend a wallet's tokens, and how much.
pub struct ApprovalCheck {
    pub address: String,
    pub chain: String,
    controller: AnalysisController<ApprovalReport>,
}

impl ApprovalCheck {
    pub fn new(chain: impl Into<String>) -> Self {
        Self {
            address: String::new(),
            chain: chain.into(),
            controller: AnalysisController::new(),
        }
    }

    pub fn view(&self) -> &ViewState<ApprovalReport> {
        self.controller.view()
    }

    /// Run one approval query for the current inputs.
    pub async fn submit(&mut self, api: &dyn ApiService) {
        if self.address.trim().is_empty() {
            self.controller.reject("Please enter a wallet address");
            return;
        }

        let generation = self.controller.begin();
        let result = api
            .list_approvals(self.address.trim(), &self.chain)
            .await
            .map(ApprovalReport::from_approvals);
        self.controller.resolve(generation, result);
    }
}

//! # Workflow View State
//!
//! State and report types owned by the analysis workflows. Reports bundle a
//! query payload with the aggregates derived from it; both are replaced
//! together on every successful query, so the aggregates can never drift
//! from the list they summarize.

use shared::{Swap, TokenApproval};

use crate::utils::risk::{classify, RiskTier};

/// Render state owned by a single analysis workflow.
///
/// Exactly one variant is active at a time. `Success` with an empty result
/// list is a valid state of its own and must never be presented through the
/// failure path.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Nothing submitted yet.
    Idle,
    /// A query is in flight.
    Loading,
    /// The last query succeeded; payload replaced wholesale.
    Success(T),
    /// The last query failed; the message is shown to the user.
    Failure(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// The success payload, if this is a success state.
    pub fn payload(&self) -> Option<&T> {
        match self {
            ViewState::Success(payload) => Some(payload),
            _ => None,
        }
    }

    /// The failure message, if this is a failure state.
    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

/// Approval counts per risk tier, recomputed fully from the current result
/// set, never updated incrementally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl RiskCounts {
    pub fn tally(approvals: &[TokenApproval]) -> Self {
        let mut counts = RiskCounts::default();
        for approval in approvals {
            match classify(&approval.allowance) {
                RiskTier::Low => counts.low += 1,
                RiskTier::Medium => counts.medium += 1,
                RiskTier::High => counts.high += 1,
            }
        }
        counts
    }
}

/// Approval list with its derived risk buckets.
#[derive(Debug, Clone, PartialEq)]
pub struct ApprovalReport {
    pub approvals: Vec<TokenApproval>,
    pub risk: RiskCounts,
}

impl ApprovalReport {
    pub fn from_approvals(approvals: Vec<TokenApproval>) -> Self {
        let risk = RiskCounts::tally(&approvals);
        Self { approvals, risk }
    }
}

/// Swap list with its derived volume statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapReport {
    pub swaps: Vec<Swap>,
    /// Sum of `value_usd` over all swaps.
    pub total_volume: f64,
    /// `total_volume / count`, or `0.0` for an empty list.
    pub average_swap_size: f64,
}

impl SwapReport {
    pub fn from_swaps(swaps: Vec<Swap>) -> Self {
        let total_volume: f64 = swaps.iter().map(|swap| swap.value_usd).sum();
        let average_swap_size = if swaps.is_empty() {
            0.0
        } else {
            total_volume / swaps.len() as f64
        };
        Self { swaps, total_volume, average_swap_size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swap(value_usd: f64) -> Swap {
        Swap {
            tx_hash: "0xabc".to_string(),
            timestamp: 1736089440,
            token_in: "WETH".to_string(),
            token_out: "USDC".to_string(),
            amount_in: "1.5".to_string(),
            amount_out: "5000".to_string(),
            value_usd,
            dex: "Uniswap V3".to_string(),
        }
    }

    fn approval(allowance: &str) -> TokenApproval {
        TokenApproval {
            token: "0x1".to_string(),
            spender: "0x2".to_string(),
            amount: allowance.to_string(),
            allowance: allowance.to_string(),
            symbol: "TKN".to_string(),
            name: "Token".to_string(),
        }
    }

    #[test]
    fn test_swap_report_totals_and_average() {
        let report = SwapReport::from_swaps(vec![swap(100.0), swap(300.0)]);
        assert_eq!(report.total_volume, 400.0);
        assert_eq!(report.average_swap_size, 200.0);
    }

    #[test]
    fn test_empty_swap_report_has_zero_average() {
        let report = SwapReport::from_swaps(Vec::new());
        assert_eq!(report.total_volume, 0.0);
        assert_eq!(report.average_swap_size, 0.0);
    }

    #[test]
    fn test_risk_counts_bucket_by_tier() {
        let report = ApprovalReport::from_approvals(vec![
            approval("2000"),
            approval("1000000000000000000000"),
        ]);
        assert_eq!(report.risk, RiskCounts { low: 0, medium: 1, high: 1 });
    }

    #[test]
    fn test_view_state_accessors() {
        let state: ViewState<u32> = ViewState::default();
        assert_eq!(state, ViewState::Idle);
        assert!(ViewState::<u32>::Loading.is_loading());
        assert_eq!(ViewState::Success(7).payload(), Some(&7));
        assert_eq!(ViewState::<u32>::Failure("boom".to_string()).error(), Some("boom"));
    }
}

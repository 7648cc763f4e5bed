//! # Approval Risk Classification
//!
//! Maps an allowance magnitude to a risk tier. Two fixed thresholds:
//! anything at or above 10^18 is treated as an effectively unlimited spend
//! permission, anything above 1000 as worth reviewing.

use ethereum_types::U256;

use crate::utils::amount::DecimalAmount;

/// Allowances at or above this magnitude are effectively unlimited.
fn unlimited_threshold() -> U256 {
    U256::exp10(18)
}

/// Risk tier derived from an approval's allowance. Never stored; recomputed
/// from the current result set on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Lowercase label used in rendering.
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }
}

/// Classify an allowance carried as a decimal string.
///
/// The comparison is exact: values near the 10^18 boundary must not be
/// pushed through `f64`, which cannot distinguish them. Malformed input
/// deterministically classifies `Low`.
pub fn classify(allowance: &str) -> RiskTier {
    let Some(amount) = DecimalAmount::parse(allowance) else {
        return RiskTier::Low;
    };

    if amount.at_least(unlimited_threshold()) {
        RiskTier::High
    } else if amount.strictly_above(U256::from(1000u64)) {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited_allowance_is_high() {
        assert_eq!(classify("1000000000000000000"), RiskTier::High);
        assert_eq!(classify("1000000000000000000000"), RiskTier::High);
        // wider than 256 bits still classifies
        assert_eq!(classify(&"9".repeat(100)), RiskTier::High);
    }

    #[test]
    fn test_boundary_below_unlimited_is_medium() {
        assert_eq!(classify("999999999999999999"), RiskTier::Medium);
        assert_eq!(classify("2000"), RiskTier::Medium);
        assert_eq!(classify("1001"), RiskTier::Medium);
    }

    #[test]
    fn test_thousand_and_below_is_low() {
        assert_eq!(classify("1000"), RiskTier::Low);
        assert_eq!(classify("999"), RiskTier::Low);
        assert_eq!(classify("0"), RiskTier::Low);
    }

    #[test]
    fn test_fraction_counts_at_the_review_boundary() {
        assert_eq!(classify("1000.5"), RiskTier::Medium);
        assert_eq!(classify("1000.0"), RiskTier::Low);
    }

    #[test]
    fn test_malformed_input_classifies_low() {
        assert_eq!(classify(""), RiskTier::Low);
        assert_eq!(classify("not-a-number"), RiskTier::Low);
    }
}

//! # Decimal Amounts
//!
//! Exact parsing of the decimal-string amounts carried on the wire.
//!
//! On-chain figures routinely exceed what `f64` represents without loss
//! (a raw 18-decimal allowance is already past 2^53), so threshold
//! comparisons go through 256-bit integers instead of floating point.
//! Parsing to `f64` is reserved for display-only formatting.

use ethereum_types::U256;

// U256 holds at most 78 decimal digits.
const MAX_U256_DIGITS: usize = 78;

/// A non-negative decimal amount parsed without precision loss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DecimalAmount {
    /// Integer part fits in 256 bits. `frac` keeps the fractional digits
    /// with trailing zeros stripped (empty when the value is whole).
    Exact { int: U256, frac: String },
    /// Integer part wider than 256 bits; beyond every classification
    /// threshold this crate compares against.
    Oversized,
}

impl DecimalAmount {
    /// Parse a plain decimal string (`"123"`, `"123.45"`, `".5"`).
    ///
    /// Signs, exponents, separators, and anything non-numeric yield `None`;
    /// callers decide the fallback for malformed input.
    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let (int_part, frac_part) = match raw.split_once('.') {
            Some((int, frac)) => (int, frac),
            None => (raw, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let int_digits = int_part.trim_start_matches('0');
        if int_digits.len() > MAX_U256_DIGITS {
            return Some(DecimalAmount::Oversized);
        }

        let int = if int_digits.is_empty() {
            U256::zero()
        } else {
            match U256::from_dec_str(int_digits) {
                Ok(v) => v,
                // 78 digits can still overflow 2^256 - 1
                Err(_) => return Some(DecimalAmount::Oversized),
            }
        };

        let frac = frac_part.trim_end_matches('0').to_string();
        Some(DecimalAmount::Exact { int, frac })
    }

    pub(crate) fn is_zero(&self) -> bool {
        match self {
            DecimalAmount::Exact { int, frac } => int.is_zero() && frac.is_empty(),
            DecimalAmount::Oversized => false,
        }
    }

    /// `self >= threshold`, ignoring fractional digits (irrelevant at a
    /// whole-number boundary reached from at-or-above).
    pub(crate) fn at_least(&self, threshold: U256) -> bool {
        match self {
            DecimalAmount::Exact { int, .. } => *int >= threshold,
            DecimalAmount::Oversized => true,
        }
    }

    /// `self > threshold`; fractional digits make a value sitting exactly
    /// on the boundary strictly greater.
    pub(crate) fn strictly_above(&self, threshold: U256) -> bool {
        match self {
            DecimalAmount::Exact { int, frac } => {
                *int > threshold || (*int == threshold && !frac.is_empty())
            }
            DecimalAmount::Oversized => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_integers_and_fractions() {
        assert_eq!(
            DecimalAmount::parse("1500"),
            Some(DecimalAmount::Exact { int: U256::from(1500u64), frac: String::new() })
        );
        assert_eq!(
            DecimalAmount::parse("1000.50"),
            Some(DecimalAmount::Exact { int: U256::from(1000u64), frac: "5".to_string() })
        );
        assert_eq!(
            DecimalAmount::parse(".25"),
            Some(DecimalAmount::Exact { int: U256::zero(), frac: "25".to_string() })
        );
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert_eq!(DecimalAmount::parse(""), None);
        assert_eq!(DecimalAmount::parse("."), None);
        assert_eq!(DecimalAmount::parse("abc"), None);
        assert_eq!(DecimalAmount::parse("-5"), None);
        assert_eq!(DecimalAmount::parse("1e18"), None);
        assert_eq!(DecimalAmount::parse("1,000"), None);
    }

    #[test]
    fn test_zero_detection_ignores_padding() {
        assert!(DecimalAmount::parse("0").unwrap().is_zero());
        assert!(DecimalAmount::parse("000.000").unwrap().is_zero());
        assert!(!DecimalAmount::parse("0.001").unwrap().is_zero());
    }

    #[test]
    fn test_boundary_comparisons_are_exact() {
        let threshold = U256::exp10(18);
        let exactly = DecimalAmount::parse("1000000000000000000").unwrap();
        let below = DecimalAmount::parse("999999999999999999").unwrap();
        assert!(exactly.at_least(threshold));
        assert!(!below.at_least(threshold));

        let k = U256::from(1000u64);
        assert!(!DecimalAmount::parse("1000").unwrap().strictly_above(k));
        assert!(DecimalAmount::parse("1000.5").unwrap().strictly_above(k));
    }

    #[test]
    fn test_values_past_256_bits_are_oversized() {
        let eighty_digits = "9".repeat(80);
        assert_eq!(DecimalAmount::parse(&eighty_digits), Some(DecimalAmount::Oversized));
        assert!(DecimalAmount::parse(&eighty_digits).unwrap().at_least(U256::exp10(18)));
    }
}

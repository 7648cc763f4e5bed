//! # Display Formatters
//!
//! Pure functions turning raw values into display strings. All are total:
//! malformed input renders as received rather than failing, since by the
//! time a value reaches a formatter the query layer has already accepted it.

use chrono::{TimeZone, Utc};

use crate::utils::amount::DecimalAmount;
use ethereum_types::U256;

// toLocaleString-style cap on displayed fractional digits
const MAX_FRACTION_DIGITS: usize = 3;

/// Format a USD amount with two fraction digits and thousands grouping,
/// e.g. `1234.5` → `"$1,234.50"`.
pub fn format_usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u128;
    let grouped = group_thousands(&(cents / 100).to_string());
    let sign = if negative { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// Render unix seconds as a fixed date+time string in UTC,
/// e.g. `"Jan 5, 2025, 3:04 PM"`.
pub fn format_timestamp(unix_secs: i64) -> String {
    match Utc.timestamp_opt(unix_secs, 0) {
        chrono::LocalResult::Single(dt) => dt.format("%b %-d, %Y, %-I:%M %p").to_string(),
        // out-of-range timestamps render as the raw number
        _ => unix_secs.to_string(),
    }
}

/// Format a raw allowance string for display.
///
/// `"0"` for a zero allowance, `"∞ (Unlimited)"` at or above 10^18,
/// otherwise the grouped decimal value.
pub fn format_allowance(raw: &str) -> String {
    let Some(amount) = DecimalAmount::parse(raw) else {
        return raw.trim().to_string();
    };

    if amount.is_zero() {
        return "0".to_string();
    }
    if amount.at_least(U256::exp10(18)) {
        return "∞ (Unlimited)".to_string();
    }

    format_amount(raw)
}

/// Group a plain decimal string for display, e.g. `"1234567.25"` →
/// `"1,234,567.25"`. Fractional digits are truncated past three.
pub fn format_amount(raw: &str) -> String {
    let raw = raw.trim();
    let Some(amount) = DecimalAmount::parse(raw) else {
        return raw.to_string();
    };

    let (int, frac) = match amount {
        DecimalAmount::Exact { int, frac } => (int.to_string(), frac),
        // wider than U256; the digits are already validated, group in place
        DecimalAmount::Oversized => {
            let int = raw.split('.').next().unwrap_or(raw);
            (int.trim_start_matches('0').to_string(), String::new())
        }
    };

    let mut out = group_thousands(&int);
    if !frac.is_empty() {
        out.push('.');
        out.push_str(&frac[..frac.len().min(MAX_FRACTION_DIGITS)]);
    }
    out
}

/// Insert a comma every three digits, right to left.
pub(crate) fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

//! # Workflow Views
//!
//! One render function per workflow, plus the shared error panel. Each view
//! handles all four states explicitly; a zero-result success renders its own
//! message and never goes through the error path.

use serde_json::Value;
use shared::{truncate_address, GasInsight};

use crate::app::state::ViewState;
use crate::app::workflows::{ApprovalCheck, SwapSearch, TransactionDecode, WalletAnalysis};
use crate::utils::chains::{explorer_url, ExplorerTarget};
use crate::utils::format::{format_allowance, format_amount, format_timestamp, format_usd};
use crate::utils::risk::classify;

// original views cap the transaction table at ten rows
const MAX_TRANSACTION_ROWS: usize = 10;

/// Error panel with the retry affordance.
pub fn render_error(message: &str) {
    println!("error: {}", message);
    println!("run the same command again to retry");
}

fn render_pending(state_is_loading: bool) {
    if state_is_loading {
        println!("loading...");
    } else {
        println!("nothing to show yet - submit a query first");
    }
}

pub fn render_wallet(flow: &WalletAnalysis) {
    let overview = match flow.view() {
        ViewState::Success(overview) => overview,
        ViewState::Failure(message) => return render_error(message),
        state => return render_pending(state.is_loading()),
    };

    println!("Wallet Overview - {}", overview.chain.to_uppercase());
    println!("  Address        {}", truncate_address(&overview.address));
    println!("  Total Value    {}", format_usd(overview.total_value));
    println!("  Tokens         {}", flow.token_count());
    println!("  Transactions   {}", flow.transaction_count());

    if !overview.tokens.is_empty() {
        println!();
        println!("Token Holdings");
        println!("  {:<10} {:<24} {:>20} {:>14}", "SYMBOL", "NAME", "BALANCE", "VALUE");
        for token in &overview.tokens {
            let value = token.value_usd.map(format_usd).unwrap_or_else(|| "-".to_string());
            println!(
                "  {:<10} {:<24} {:>20} {:>14}",
                token.symbol,
                token.name,
                format_amount(&token.balance),
                value
            );
        }
    }

    if !overview.transactions.is_empty() {
        println!();
        println!("Recent Transactions (latest {})", MAX_TRANSACTION_ROWS);
        for tx in overview.transactions.iter().take(MAX_TRANSACTION_ROWS) {
            let value_eth = tx.value.parse::<f64>().unwrap_or(0.0);
            println!(
                "  {}  {} -> {}  {:>12.4} ETH  gas {:>12}  {}",
                truncate_address(&tx.hash),
                truncate_address(&tx.from),
                truncate_address(&tx.to),
                value_eth,
                format_amount(&tx.gas_used),
                tx.status
            );
        }
    }
}

pub fn render_decode(flow: &TransactionDecode) {
    let decoded = match flow.view() {
        ViewState::Success(decoded) => decoded,
        ViewState::Failure(message) => return render_error(message),
        state => return render_pending(state.is_loading()),
    };

    println!("Transaction {} ({})", truncate_address(&decoded.hash), decoded.chain);
    println!("  Explorer   {}", explorer_url(ExplorerTarget::Tx, &decoded.hash, &decoded.chain));
    println!("  Method     {}", decoded.method);

    if !decoded.human_readable.is_empty() {
        println!();
        println!("What this transaction does:");
        println!("  {}", decoded.human_readable);
    }

    if !decoded.parameters.is_empty() {
        println!();
        println!("Parameters");
        for (index, param) in decoded.parameters.iter().enumerate() {
            let name = param
                .name
                .clone()
                .unwrap_or_else(|| format!("Parameter {}", index + 1));
            match &param.kind {
                Some(kind) => println!("  {} ({})", name, kind),
                None => println!("  {}", name),
            }
            for line in value_to_display(&param.value).lines() {
                println!("    {}", line);
            }
        }
    }

    if !decoded.decoded_data.is_null() {
        println!();
        println!("Raw decoded data");
        for line in value_to_display(&decoded.decoded_data).lines() {
            println!("  {}", line);
        }
    }
}

pub fn render_approvals(flow: &ApprovalCheck) {
    let report = match flow.view() {
        ViewState::Success(report) => report,
        ViewState::Failure(message) => return render_error(message),
        state => return render_pending(state.is_loading()),
    };

    if report.approvals.is_empty() {
        println!("No Active Approvals");
        println!("This wallet has no active token approvals.");
        return;
    }

    println!("Token Approvals");
    println!("  Total          {}", report.approvals.len());
    println!("  High Risk      {}", report.risk.high);
    println!("  Medium Risk    {}", report.risk.medium);
    println!();
    println!("  {:<10} {:<15} {:>26} {:>8}", "TOKEN", "SPENDER", "ALLOWANCE", "RISK");
    for approval in &report.approvals {
        println!(
            "  {:<10} {:<15} {:>26} {:>8}",
            approval.symbol,
            truncate_address(&approval.spender),
            format_allowance(&approval.allowance),
            classify(&approval.allowance).label()
        );
        println!(
            "    {} | {}",
            approval.name,
            explorer_url(ExplorerTarget::Address, &approval.spender, &flow.chain)
        );
    }
}

pub fn render_swaps(flow: &SwapSearch) {
    let report = match flow.view() {
        ViewState::Success(report) => report,
        ViewState::Failure(message) => return render_error(message),
        state => return render_pending(state.is_loading()),
    };

    if report.swaps.is_empty() {
        println!("No Swaps Found");
        println!("No swap transactions found for the specified criteria. Try adjusting your filters.");
        return;
    }

    println!("Swap History");
    println!("  Total Swaps    {}", report.swaps.len());
    println!("  Total Volume   {}", format_usd(report.total_volume));
    println!("  Avg Swap Size  {}", format_usd(report.average_swap_size));
    println!();
    for swap in &report.swaps {
        println!(
            "  {}  {} {} -> {} {}  {}  via {}",
            format_timestamp(swap.timestamp),
            format_amount(&swap.amount_in),
            swap.token_in,
            format_amount(&swap.amount_out),
            swap.token_out,
            format_usd(swap.value_usd),
            swap.dex
        );
        println!(
            "    {} | {}",
            truncate_address(&swap.tx_hash),
            explorer_url(ExplorerTarget::Tx, &swap.tx_hash, &flow.chain)
        );
    }
}

pub fn render_gas(insight: &GasInsight) {
    println!("Gas Insight ({})", insight.period);
    println!("  Average Gas Price   {}", format_amount(&insight.average_gas_price));
    println!("  Total Gas Used      {}", format_amount(&insight.total_gas_used));
    println!("  Total Cost          {}", format_usd(insight.total_gas_cost_usd));
    println!("  Transactions        {}", insight.transactions);
}

/// Serialize a decoded value for display: strings print bare, structured
/// values pretty-printed, everything else via its JSON form.
fn value_to_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_values_match_original_serialization() {
        assert_eq!(value_to_display(&Value::String("0xabc".to_string())), "0xabc");
        assert_eq!(value_to_display(&serde_json::json!(42)), "42");
        assert_eq!(value_to_display(&serde_json::json!(true)), "true");

        let pretty = value_to_display(&serde_json::json!({ "a": 1 }));
        assert!(pretty.contains("\"a\": 1"));
    }
}

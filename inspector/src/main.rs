//! # Inspector CLI
//!
//! Command-line entry point: one subcommand per analysis workflow, plus the
//! gas insight query. Each invocation drives a single workflow submission
//! and renders the resulting state.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use inspector::app::workflows::{ApprovalCheck, SwapSearch, TransactionDecode, WalletAnalysis};
use inspector::services::api::ApiClient;
use inspector::ui::views;

#[derive(Parser)]
#[command(author, version, about = "Blockchain wallet activity inspector", long_about = None)]
struct Cli {
    /// Backend API base URL (overrides INSPECTOR_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a wallet's holdings and transaction history
    Wallet {
        /// Wallet address to analyze
        address: String,
        /// Chain identifier (ethereum, polygon, bsc, arbitrum)
        #[arg(short, long, default_value = "ethereum")]
        chain: String,
        /// Days of history to query
        #[arg(long, default_value_t = 30)]
        lookback_days: u32,
    },
    /// Decode a transaction into a readable method call
    Decode {
        /// Transaction hash
        hash: String,
        /// Chain identifier (ethereum, polygon, bsc, arbitrum)
        #[arg(short, long, default_value = "ethereum")]
        chain: String,
    },
    /// Check token-spend approvals and their risk
    Approvals {
        /// Wallet address to check
        address: String,
        /// Chain identifier (ethereum, polygon, bsc, arbitrum)
        #[arg(short, long, default_value = "ethereum")]
        chain: String,
    },
    /// Find DEX swaps for an address
    Swaps {
        /// Wallet address to search
        address: String,
        /// Chain identifier (ethereum, polygon, bsc, arbitrum)
        #[arg(short, long, default_value = "ethereum")]
        chain: String,
        /// Only include swaps at or above this USD value
        #[arg(long)]
        min_usd: Option<f64>,
        /// Only include swaps after this date (YYYY-MM-DD)
        #[arg(long)]
        since: Option<String>,
    },
    /// Fetch aggregated gas usage
    Gas {
        /// Query parameters as key=value pairs, forwarded verbatim
        #[arg(value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got `{}`", s)),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let api = match &cli.api_url {
        Some(url) => ApiClient::new(url.clone()),
        None => ApiClient::from_env(),
    };

    let failed = match cli.command {
        Commands::Wallet { address, chain, lookback_days } => {
            let mut flow = WalletAnalysis::new(chain);
            flow.address = address;
            flow.lookback_days = Some(lookback_days);
            flow.submit(&api).await;
            views::render_wallet(&flow);
            flow.view().error().is_some()
        }
        Commands::Decode { hash, chain } => {
            // pre-filled hash: mount() decodes it without a separate submit
            let mut flow = TransactionDecode::with_hash(hash, chain);
            flow.mount(&api).await;
            views::render_decode(&flow);
            flow.view().error().is_some()
        }
        Commands::Approvals { address, chain } => {
            let mut flow = ApprovalCheck::new(chain);
            flow.address = address;
            flow.submit(&api).await;
            views::render_approvals(&flow);
            flow.view().error().is_some()
        }
        Commands::Swaps { address, chain, min_usd, since } => {
            let mut flow = SwapSearch::new(chain);
            flow.address = address;
            flow.min_usd = min_usd;
            flow.since = since;
            flow.submit(&api).await;
            views::render_swaps(&flow);
            flow.view().error().is_some()
        }
        Commands::Gas { params } => {
            use inspector::core::service::ApiService;
            match api.gas_insight(&params).await {
                Ok(insight) => {
                    views::render_gas(&insight);
                    false
                }
                Err(err) => {
                    views::render_error(err.message());
                    true
                }
            }
        }
    };

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

//! # Wallet Overview Endpoint
//!
//! Holdings and transaction history for an address.

use shared::WalletOverview;

use super::client::ApiClient;
use crate::core::error::{AppError, Result};

const DEFAULT_ERROR: &str = "Failed to fetch wallet data";

/// Fetch the wallet overview for an address.
///
/// `lookback_days` bounds the history window; the backend applies its own
/// default when omitted.
#[tracing::instrument(skip(client), fields(chain = %chain))]
pub async fn get_wallet_overview(
    client: &ApiClient,
    address: &str,
    chain: &str,
    lookback_days: Option<u32>,
) -> Result<WalletOverview> {
    let address = address.trim();
    if address.is_empty() {
        return Err(AppError::Validation("Wallet address is required".to_string()));
    }

    let mut url = format!("{}/api/wallet/{}?chain={}", client.base_url(), address, chain);
    if let Some(days) = lookback_days {
        url.push_str(&format!("&lookbackDays={}", days));
    }

    let response = client.client.get(&url).send().await.map_err(|e| {
        tracing::error!(error = %e, "wallet overview request failed");
        AppError::Request(DEFAULT_ERROR.to_string())
    })?;

    if response.status().is_success() {
        response.json::<WalletOverview>().await.map_err(|e| {
            tracing::error!(error = %e, "wallet overview response unparseable");
            AppError::Request(DEFAULT_ERROR.to_string())
        })
    } else {
        let status = response.status();
        let message = super::error_message(response, DEFAULT_ERROR).await;
        tracing::warn!(status = status.as_u16(), error = %message, "wallet overview rejected");
        Err(AppError::Request(message))
    }
}

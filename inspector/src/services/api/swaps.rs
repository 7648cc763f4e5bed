//! # Swap Search Endpoint

use shared::Swap;

use super::client::ApiClient;
use crate::core::error::{AppError, Result};

const DEFAULT_ERROR: &str = "Failed to fetch swaps";

/// Find DEX swaps for an address.
///
/// `min_usd` filters out swaps below the given value; `since` restricts to
/// trades after the given date (backend-interpreted, typically `YYYY-MM-DD`).
#[tracing::instrument(skip(client), fields(chain = %chain))]
pub async fn find_swaps(
    client: &ApiClient,
    address: &str,
    chain: &str,
    min_usd: Option<f64>,
    since: Option<&str>,
) -> Result<Vec<Swap>> {
    let address = address.trim();
    if address.is_empty() {
        return Err(AppError::Validation("Wallet address is required".to_string()));
    }

    let mut url = format!("{}/api/swaps/{}?chain={}", client.base_url(), address, chain);
    if let Some(min_usd) = min_usd {
        url.push_str(&format!("&minUsd={}", min_usd));
    }
    if let Some(since) = since {
        url.push_str(&format!("&since={}", since));
    }

    let response = client.client.get(&url).send().await.map_err(|e| {
        tracing::error!(error = %e, "swap search request failed");
        AppError::Request(DEFAULT_ERROR.to_string())
    })?;

    if response.status().is_success() {
        response.json::<Vec<Swap>>().await.map_err(|e| {
            tracing::error!(error = %e, "swap search response unparseable");
            AppError::Request(DEFAULT_ERROR.to_string())
        })
    } else {
        let status = response.status();
        let message = super::error_message(response, DEFAULT_ERROR).await;
        tracing::warn!(status = status.as_u16(), error = %message, "swap search rejected");
        Err(AppError::Request(message))
    }
}

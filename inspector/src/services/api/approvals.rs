//! # Token Approvals Endpoint

use shared::TokenApproval;

use super::client::ApiClient;
use crate::core::error::{AppError, Result};

const DEFAULT_ERROR: &str = "Failed to fetch token approvals";

/// List the active token-spend approvals granted by an address.
///
/// An empty list is a valid success: a wallet with no approvals.
#[tracing::instrument(skip(client), fields(chain = %chain))]
pub async fn list_approvals(
    client: &ApiClient,
    address: &str,
    chain: &str,
) -> Result<Vec<TokenApproval>> {
    let address = address.trim();
    if address.is_empty() {
        return Err(AppError::Validation("Wallet address is required".to_string()));
    }

    let url = format!("{}/api/approvals/{}?chain={}", client.base_url(), address, chain);

    let response = client.client.get(&url).send().await.map_err(|e| {
        tracing::error!(error = %e, "approvals request failed");
        AppError::Request(DEFAULT_ERROR.to_string())
    })?;

    if response.status().is_success() {
        response.json::<Vec<TokenApproval>>().await.map_err(|e| {
            tracing::error!(error = %e, "approvals response unparseable");
            AppError::Request(DEFAULT_ERROR.to_string())
        })
    } else {
        let status = response.status();
        let message = super::error_message(response, DEFAULT_ERROR).await;
        tracing::warn!(status = status.as_u16(), error = %message, "approvals rejected");
        Err(AppError::Request(message))
    }
}

//! # Transaction Decode Endpoint

use shared::DecodedTransaction;

use super::client::ApiClient;
use crate::core::error::{AppError, Result};

const DEFAULT_ERROR: &str = "Failed to decode transaction";

/// Decode a transaction hash into a readable method call.
#[tracing::instrument(skip(client), fields(chain = %chain))]
pub async fn decode_transaction(
    client: &ApiClient,
    tx_hash: &str,
    chain: &str,
) -> Result<DecodedTransaction> {
    let tx_hash = tx_hash.trim();
    if tx_hash.is_empty() {
        return Err(AppError::Validation("Transaction hash is required".to_string()));
    }

    let url = format!("{}/api/tx/{}?chain={}", client.base_url(), tx_hash, chain);

    let response = client.client.get(&url).send().await.map_err(|e| {
        tracing::error!(error = %e, "decode request failed");
        AppError::Request(DEFAULT_ERROR.to_string())
    })?;

    if response.status().is_success() {
        response.json::<DecodedTransaction>().await.map_err(|e| {
            tracing::error!(error = %e, "decode response unparseable");
            AppError::Request(DEFAULT_ERROR.to_string())
        })
    } else {
        let status = response.status();
        let message = super::error_message(response, DEFAULT_ERROR).await;
        tracing::warn!(status = status.as_u16(), error = %message, "decode rejected");
        Err(AppError::Request(message))
    }
}

//! # Gas Insight Endpoint

use shared::GasInsight;

use super::client::ApiClient;
use crate::core::error::{AppError, Result};

const DEFAULT_ERROR: &str = "Failed to fetch gas insight";

/// Fetch aggregated gas usage.
///
/// The parameter bag is forwarded verbatim; the backend decides which keys
/// it understands.
#[tracing::instrument(skip(client, params))]
pub async fn gas_insight(client: &ApiClient, params: &[(String, String)]) -> Result<GasInsight> {
    let url = format!("{}/api/gas", client.base_url());

    let response = client
        .client
        .get(&url)
        .query(params)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "gas insight request failed");
            AppError::Request(DEFAULT_ERROR.to_string())
        })?;

    if response.status().is_success() {
        response.json::<GasInsight>().await.map_err(|e| {
            tracing::error!(error = %e, "gas insight response unparseable");
            AppError::Request(DEFAULT_ERROR.to_string())
        })
    } else {
        let status = response.status();
        let message = super::error_message(response, DEFAULT_ERROR).await;
        tracing::warn!(status = status.as_u16(), error = %message, "gas insight rejected");
        Err(AppError::Request(message))
    }
}

//! # Kardex Endpoint
//!
//! Stock movement history, most recent first as returned by the backend.

use reqwest::Method;
use shared::KardexEntry;

use super::client::ApiClient;
use crate::core::error::ApiError;

#[tracing::instrument(skip(client))]
pub async fn get_kardex(client: &ApiClient) -> Result<Vec<KardexEntry>, ApiError> {
    let entries: Vec<KardexEntry> = client.call(Method::GET, "/kardex/", None::<&()>).await?;
    tracing::debug!(count = entries.len(), "Kardex fetched");
    Ok(entries)
}

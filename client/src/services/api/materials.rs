//! # Material Endpoints
//!
//! Raw materials and their stock counts.

use reqwest::Method;
use serde_json::Value;
use shared::{Material, MaterialUpdate, NewMaterial};

use super::client::ApiClient;
use crate::core::error::ApiError;

/// Get all materials.
#[tracing::instrument(skip(client))]
pub async fn get_materials(client: &ApiClient) -> Result<Vec<Material>, ApiError> {
    let materials: Vec<Material> = client.call(Method::GET, "/materials/", None::<&()>).await?;
    tracing::debug!(count = materials.len(), "Materials fetched");
    Ok(materials)
}

pub async fn add_material(client: &ApiClient, data: &NewMaterial) -> Result<Material, ApiError> {
    client.call(Method::POST, "/materials/", Some(data)).await
}

/// Update a material. Only the fields set in `data` are sent.
#[tracing::instrument(skip(client, data))]
pub async fn update_material(
    client: &ApiClient,
    id: i64,
    data: &MaterialUpdate,
) -> Result<Material, ApiError> {
    client
        .call(Method::PUT, &format!("/materials/{}/", id), Some(data))
        .await
}

pub async fn delete_material(client: &ApiClient, id: i64) -> Result<Value, ApiError> {
    client
        .request(&format!("/materials/{}/", id), Method::DELETE, None)
        .await
}

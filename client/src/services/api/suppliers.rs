//! # Supplier Endpoints

use reqwest::Method;
use shared::{NewSupplier, Supplier};

use super::client::ApiClient;
use crate::core::error::ApiError;

pub async fn get_suppliers(client: &ApiClient) -> Result<Vec<Supplier>, ApiError> {
    client.call(Method::GET, "/suppliers/", None::<&()>).await
}

/// Suppliers that provide the given material.
#[tracing::instrument(skip(client))]
pub async fn get_suppliers_by_material(
    client: &ApiClient,
    material_id: i64,
) -> Result<Vec<Supplier>, ApiError> {
    let endpoint = format!("/suppliers/by-material/{}", material_id);
    client.call(Method::GET, &endpoint, None::<&()>).await
}

#[tracing::instrument(skip(client, data), fields(name = %data.name))]
pub async fn create_supplier(client: &ApiClient, data: &NewSupplier) -> Result<Supplier, ApiError> {
    client.call(Method::POST, "/suppliers/", Some(data)).await
}

//! # Product Endpoints
//!
//! Finished products, including quick stock adjustments.

use reqwest::Method;
use serde_json::Value;
use shared::{NewProduct, Product, ProductUpdate};

use super::client::ApiClient;
use crate::core::error::ApiError;

/// Get all products.
#[tracing::instrument(skip(client))]
pub async fn get_products(client: &ApiClient) -> Result<Vec<Product>, ApiError> {
    let products: Vec<Product> = client.call(Method::GET, "/products/", None::<&()>).await?;
    tracing::debug!(count = products.len(), "Products fetched");
    Ok(products)
}

pub async fn add_product(client: &ApiClient, data: &NewProduct) -> Result<Product, ApiError> {
    client.call(Method::POST, "/products/", Some(data)).await
}

#[tracing::instrument(skip(client, data))]
pub async fn update_product(
    client: &ApiClient,
    id: i64,
    data: &ProductUpdate,
) -> Result<Product, ApiError> {
    client
        .call(Method::PUT, &format!("/products/{}/", id), Some(data))
        .await
}

pub async fn delete_product(client: &ApiClient, id: i64) -> Result<Value, ApiError> {
    client
        .request(&format!("/products/{}/", id), Method::DELETE, None)
        .await
}

/// Add `quantity` units to a product's stock.
#[tracing::instrument(skip(client))]
pub async fn add_product_stock(
    client: &ApiClient,
    id: i64,
    quantity: i64,
) -> Result<Product, ApiError> {
    let endpoint = format!("/products/{}/add/?quantity={}", id, quantity);
    client.call(Method::POST, &endpoint, None::<&()>).await
}

/// Remove `quantity` units from a product's stock.
#[tracing::instrument(skip(client))]
pub async fn remove_product_stock(
    client: &ApiClient,
    id: i64,
    quantity: i64,
) -> Result<Product, ApiError> {
    let endpoint = format!("/products/{}/remove/?quantity={}", id, quantity);
    client.call(Method::POST, &endpoint, None::<&()>).await
}

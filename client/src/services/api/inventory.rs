//! # Inventory Alert Endpoints
//!
//! Items the backend reports as below their minimum stock.

use reqwest::Method;
use shared::{Material, Product};

use super::client::ApiClient;
use crate::core::error::ApiError;

pub async fn get_material_alerts(client: &ApiClient) -> Result<Vec<Material>, ApiError> {
    client
        .call(Method::GET, "/inventory/alerts/materials/", None::<&()>)
        .await
}

pub async fn get_product_alerts(client: &ApiClient) -> Result<Vec<Product>, ApiError> {
    client
        .call(Method::GET, "/inventory/alerts/products/", None::<&()>)
        .await
}

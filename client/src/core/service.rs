//! # Service Traits
//!
//! Traits for dependency injection, so views can run against a mock backend.

use async_trait::async_trait;
use serde_json::Value;
use shared::{
    KardexEntry, Material, MaterialUpdate, NewMaterial, NewProduct, NewPurchaseOrder, NewSupplier,
    Product, ProductUpdate, PurchaseOrder, Supplier, TokenResponse,
};

use crate::core::error::ApiError;

/// Every backend operation the views use.
///
/// Implemented by [`crate::services::api::ApiClient`]; tests provide their own.
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Login and store the token in the session
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError>;

    /// Clear the session token
    fn logout(&self);

    fn is_authenticated(&self) -> bool;

    async fn get_materials(&self) -> Result<Vec<Material>, ApiError>;

    async fn add_material(&self, data: &NewMaterial) -> Result<Material, ApiError>;

    async fn update_material(&self, id: i64, data: &MaterialUpdate) -> Result<Material, ApiError>;

    async fn delete_material(&self, id: i64) -> Result<Value, ApiError>;

    async fn get_products(&self) -> Result<Vec<Product>, ApiError>;

    async fn add_product(&self, data: &NewProduct) -> Result<Product, ApiError>;

    async fn update_product(&self, id: i64, data: &ProductUpdate) -> Result<Product, ApiError>;

    async fn delete_product(&self, id: i64) -> Result<Value, ApiError>;

    async fn add_product_stock(&self, id: i64, quantity: i64) -> Result<Product, ApiError>;

    async fn remove_product_stock(&self, id: i64, quantity: i64) -> Result<Product, ApiError>;

    /// Materials at or below their minimum stock
    async fn get_material_alerts(&self) -> Result<Vec<Material>, ApiError>;

    /// Products at or below their minimum stock
    async fn get_product_alerts(&self) -> Result<Vec<Product>, ApiError>;

    async fn get_orders(&self) -> Result<Vec<PurchaseOrder>, ApiError>;

    async fn create_order(&self, data: &NewPurchaseOrder) -> Result<PurchaseOrder, ApiError>;

    async fn complete_order(&self, id: i64) -> Result<PurchaseOrder, ApiError>;

    async fn cancel_order(&self, id: i64) -> Result<PurchaseOrder, ApiError>;

    async fn get_suppliers(&self) -> Result<Vec<Supplier>, ApiError>;

    async fn get_suppliers_by_material(&self, material_id: i64) -> Result<Vec<Supplier>, ApiError>;

    async fn create_supplier(&self, data: &NewSupplier) -> Result<Supplier, ApiError>;

    async fn get_kardex(&self) -> Result<Vec<KardexEntry>, ApiError>;
}

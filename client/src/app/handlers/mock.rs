//! In-memory [`InventoryService`] for handler tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use shared::{
    KardexEntry, Material, MaterialUpdate, NewMaterial, NewProduct, NewPurchaseOrder, NewSupplier,
    OrderStatus, Product, ProductUpdate, PurchaseOrder, Supplier, TokenResponse,
};

use crate::core::error::ApiError;
use crate::core::service::InventoryService;

#[derive(Default)]
struct State {
    token: Option<String>,
    materials: Vec<Material>,
    products: Vec<Product>,
    orders: Vec<PurchaseOrder>,
    suppliers: Vec<Supplier>,
    kardex: Vec<KardexEntry>,
    calls: Vec<String>,
    fail_next: Option<ApiError>,
}

#[derive(Default)]
pub(crate) struct MockService {
    state: Mutex<State>,
}

pub(crate) fn material(id: i64, name: &str, stock: i64, min_stock: i64) -> Material {
    Material {
        id,
        name: name.to_string(),
        kind: "vidrio".to_string(),
        color: None,
        stock,
        min_stock,
        supplier_name: None,
    }
}

pub(crate) fn product(id: i64, name: &str, stock: i64, sale_price: f64) -> Product {
    Product {
        id,
        name: name.to_string(),
        kind: "ventana".to_string(),
        color: None,
        stock,
        min_stock: 1,
        sale_price,
    }
}

fn not_found(what: &str) -> ApiError {
    ApiError::from_status(404, format!("{} no encontrado", what))
}

impl MockService {
    pub(crate) fn with_materials(self, materials: Vec<Material>) -> Self {
        self.state.lock().materials = materials;
        self
    }

    pub(crate) fn with_products(self, products: Vec<Product>) -> Self {
        self.state.lock().products = products;
        self
    }

    pub(crate) fn with_suppliers(self, suppliers: Vec<Supplier>) -> Self {
        self.state.lock().suppliers = suppliers;
        self
    }

    pub(crate) fn with_kardex(self, kardex: Vec<KardexEntry>) -> Self {
        self.state.lock().kardex = kardex;
        self
    }

    /// Make the next call fail with `error`.
    pub(crate) fn fail_next(&self, error: ApiError) {
        self.state.lock().fail_next = Some(error);
    }

    /// Backend calls received so far, as `operation[:argument]`.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }

    fn record(&self, call: String) -> Result<parking_lot::MutexGuard<'_, State>, ApiError> {
        let mut state = self.state.lock();
        state.calls.push(call);
        match state.fail_next.take() {
            Some(error) => Err(error),
            None => Ok(state),
        }
    }

    fn set_order_status(&self, call: String, id: i64, status: OrderStatus) -> Result<PurchaseOrder, ApiError> {
        let mut state = self.record(call)?;
        let order = state
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| not_found("Orden"))?;
        if !order.status.is_open() {
            return Err(ApiError::from_status(400, "La orden no está pendiente"));
        }
        order.status = status;
        Ok(order.clone())
    }
}

#[async_trait]
impl InventoryService for MockService {
    async fn login(&self, username: &str, _password: &str) -> Result<TokenResponse, ApiError> {
        let mut state = self.record(format!("login:{}", username))?;
        state.token = Some("mock-token".to_string());
        Ok(TokenResponse {
            access_token: "mock-token".to_string(),
            token_type: Some("bearer".to_string()),
        })
    }

    fn logout(&self) {
        self.state.lock().token = None;
    }

    fn is_authenticated(&self) -> bool {
        self.state.lock().token.is_some()
    }

    async fn get_materials(&self) -> Result<Vec<Material>, ApiError> {
        Ok(self.record("get_materials".into())?.materials.clone())
    }

    async fn add_material(&self, data: &NewMaterial) -> Result<Material, ApiError> {
        let mut state = self.record("add_material".into())?;
        let created = Material {
            id: state.materials.len() as i64 + 1,
            name: data.name.clone(),
            kind: data.kind.clone(),
            color: data.color.clone(),
            stock: data.stock,
            min_stock: data.min_stock,
            supplier_name: data.supplier_name.clone(),
        };
        state.materials.push(created.clone());
        Ok(created)
    }

    async fn update_material(&self, id: i64, data: &MaterialUpdate) -> Result<Material, ApiError> {
        let mut state = self.record(format!("update_material:{}", id))?;
        let material = state
            .materials
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| not_found("Material"))?;
        if let Some(stock) = data.stock {
            material.stock = stock;
        }
        if let Some(min_stock) = data.min_stock {
            material.min_stock = min_stock;
        }
        Ok(material.clone())
    }

    async fn delete_material(&self, id: i64) -> Result<Value, ApiError> {
        let mut state = self.record(format!("delete_material:{}", id))?;
        state.materials.retain(|m| m.id != id);
        Ok(json!({}))
    }

    async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        Ok(self.record("get_products".into())?.products.clone())
    }

    async fn add_product(&self, data: &NewProduct) -> Result<Product, ApiError> {
        let mut state = self.record("add_product".into())?;
        let created = Product {
            id: state.products.len() as i64 + 1,
            name: data.name.clone(),
            kind: data.kind.clone(),
            color: data.color.clone(),
            stock: data.stock,
            min_stock: data.min_stock,
            sale_price: data.sale_price,
        };
        state.products.push(created.clone());
        Ok(created)
    }

    async fn update_product(&self, id: i64, data: &ProductUpdate) -> Result<Product, ApiError> {
        let mut state = self.record(format!("update_product:{}", id))?;
        let product = state
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found("Producto"))?;
        if let Some(stock) = data.stock {
            product.stock = stock;
        }
        Ok(product.clone())
    }

    async fn delete_product(&self, id: i64) -> Result<Value, ApiError> {
        let mut state = self.record(format!("delete_product:{}", id))?;
        state.products.retain(|p| p.id != id);
        Ok(json!({}))
    }

    async fn add_product_stock(&self, id: i64, quantity: i64) -> Result<Product, ApiError> {
        let mut state = self.record(format!("add_product_stock:{}:{}", id, quantity))?;
        let product = state
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found("Producto"))?;
        product.stock += quantity;
        Ok(product.clone())
    }

    async fn remove_product_stock(&self, id: i64, quantity: i64) -> Result<Product, ApiError> {
        let mut state = self.record(format!("remove_product_stock:{}:{}", id, quantity))?;
        let product = state
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found("Producto"))?;
        if product.stock < quantity {
            return Err(ApiError::from_status(400, "Insufficient stock"));
        }
        product.stock -= quantity;
        Ok(product.clone())
    }

    async fn get_material_alerts(&self) -> Result<Vec<Material>, ApiError> {
        let state = self.record("get_material_alerts".into())?;
        Ok(state
            .materials
            .iter()
            .filter(|m| m.stock <= m.min_stock)
            .cloned()
            .collect())
    }

    async fn get_product_alerts(&self) -> Result<Vec<Product>, ApiError> {
        let state = self.record("get_product_alerts".into())?;
        Ok(state
            .products
            .iter()
            .filter(|p| p.stock <= p.min_stock)
            .cloned()
            .collect())
    }

    async fn get_orders(&self) -> Result<Vec<PurchaseOrder>, ApiError> {
        Ok(self.record("get_orders".into())?.orders.clone())
    }

    async fn create_order(&self, data: &NewPurchaseOrder) -> Result<PurchaseOrder, ApiError> {
        let mut state = self.record("create_order".into())?;
        let order = PurchaseOrder {
            id: state.orders.len() as i64 + 1,
            supplier_id: Some(data.supplier_id),
            supplier_name: None,
            material_id: data.material_id,
            quantity: data.quantity,
            date: Some("2024-05-01T10:00:00".to_string()),
            status: OrderStatus::Pending,
        };
        state.orders.push(order.clone());
        Ok(order)
    }

    async fn complete_order(&self, id: i64) -> Result<PurchaseOrder, ApiError> {
        self.set_order_status(format!("complete_order:{}", id), id, OrderStatus::Completed)
    }

    async fn cancel_order(&self, id: i64) -> Result<PurchaseOrder, ApiError> {
        self.set_order_status(format!("cancel_order:{}", id), id, OrderStatus::Cancelled)
    }

    async fn get_suppliers(&self) -> Result<Vec<Supplier>, ApiError> {
        Ok(self.record("get_suppliers".into())?.suppliers.clone())
    }

    async fn get_suppliers_by_material(&self, material_id: i64) -> Result<Vec<Supplier>, ApiError> {
        let state = self.record(format!("get_suppliers_by_material:{}", material_id))?;
        Ok(state
            .suppliers
            .iter()
            .filter(|s| s.material_id == Some(material_id))
            .cloned()
            .collect())
    }

    async fn create_supplier(&self, data: &NewSupplier) -> Result<Supplier, ApiError> {
        let mut state = self.record("create_supplier".into())?;
        let supplier = Supplier {
            id: state.suppliers.len() as i64 + 1,
            name: data.name.clone(),
            contact_person: data.contact_person.clone(),
            phone: data.phone.clone(),
            email: data.email.clone(),
            address: data.address.clone(),
            material_id: Some(data.material_id),
            material_name: None,
        };
        state.suppliers.push(supplier.clone());
        Ok(supplier)
    }

    async fn get_kardex(&self) -> Result<Vec<KardexEntry>, ApiError> {
        Ok(self.record("get_kardex".into())?.kardex.clone())
    }
}

//! # Inventory Handlers
//!
//! Materials and products pages: listing, inline stock edits, stock moves on
//! products and the low-stock alerts page.

use lib_utils::validation::{validate_not_empty, validate_positive};
use shared::{Material, MaterialUpdate, NewMaterial, NewProduct, Product, ProductUpdate};

use super::invalid;
use crate::app::confirm::Confirm;
use crate::app::guard::InFlight;
use crate::app::list_view::ListView;
use crate::core::error::{AppError, Result};
use crate::core::service::InventoryService;

/// Direction of a product stock move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockMove {
    Add(i64),
    Remove(i64),
}

impl StockMove {
    pub fn quantity(&self) -> i64 {
        match *self {
            StockMove::Add(q) | StockMove::Remove(q) => q,
        }
    }
}

pub async fn refresh_materials(
    service: &dyn InventoryService,
    view: &mut ListView<Material>,
) -> Result<()> {
    view.apply(service.get_materials().await)?;
    Ok(())
}

pub async fn refresh_products(
    service: &dyn InventoryService,
    view: &mut ListView<Product>,
) -> Result<()> {
    view.apply(service.get_products().await)?;
    Ok(())
}

/// Load both alert lists. Each view keeps its own error; the first failure
/// is returned after both have been tried.
pub async fn refresh_alerts(
    service: &dyn InventoryService,
    materials: &mut ListView<Material>,
    products: &mut ListView<Product>,
) -> Result<()> {
    let material_result = materials.apply(service.get_material_alerts().await);
    let product_result = products.apply(service.get_product_alerts().await);
    material_result.and(product_result)?;
    Ok(())
}

fn validate_stock(stock: i64) -> Result<()> {
    if stock < 0 {
        return Err(AppError::Validation("Stock cannot be negative".to_string()));
    }
    Ok(())
}

pub async fn create_material(
    service: &dyn InventoryService,
    in_flight: &InFlight,
    form: &NewMaterial,
) -> Result<Material> {
    validate_not_empty(&form.name, "Name").map_err(invalid)?;
    validate_not_empty(&form.kind, "Type").map_err(invalid)?;
    validate_stock(form.stock)?;
    validate_stock(form.min_stock)?;

    let _guard = in_flight.acquire("create-material")?;
    Ok(service.add_material(form).await?)
}

pub async fn create_product(
    service: &dyn InventoryService,
    in_flight: &InFlight,
    form: &NewProduct,
) -> Result<Product> {
    validate_not_empty(&form.name, "Name").map_err(invalid)?;
    validate_not_empty(&form.kind, "Type").map_err(invalid)?;
    validate_stock(form.stock)?;
    validate_stock(form.min_stock)?;
    if !form.sale_price.is_finite() || form.sale_price < 0.0 {
        return Err(AppError::Validation(
            "Sale price must be a non-negative number".to_string(),
        ));
    }

    let _guard = in_flight.acquire("create-product")?;
    Ok(service.add_product(form).await?)
}

/// Inline stock edit on the materials page.
pub async fn set_material_stock(
    service: &dyn InventoryService,
    in_flight: &InFlight,
    id: i64,
    stock: i64,
) -> Result<Material> {
    validate_positive(id, "Material id").map_err(invalid)?;
    validate_stock(stock)?;

    let _guard = in_flight.acquire(format!("material-stock:{}", id))?;
    Ok(service.update_material(id, &MaterialUpdate::stock(stock)).await?)
}

/// Inline stock edit on the products page.
pub async fn set_product_stock(
    service: &dyn InventoryService,
    in_flight: &InFlight,
    id: i64,
    stock: i64,
) -> Result<Product> {
    validate_positive(id, "Product id").map_err(invalid)?;
    validate_stock(stock)?;

    let _guard = in_flight.acquire(format!("product-stock:{}", id))?;
    Ok(service.update_product(id, &ProductUpdate::stock(stock)).await?)
}

/// Move stock in or out of a product. The backend records the kardex entry.
pub async fn move_product_stock(
    service: &dyn InventoryService,
    in_flight: &InFlight,
    id: i64,
    movement: StockMove,
) -> Result<Product> {
    validate_positive(id, "Product id").map_err(invalid)?;
    validate_positive(movement.quantity(), "Quantity").map_err(invalid)?;

    let _guard = in_flight.acquire(format!("product-stock:{}", id))?;
    let product = match movement {
        StockMove::Add(quantity) => service.add_product_stock(id, quantity).await?,
        StockMove::Remove(quantity) => service.remove_product_stock(id, quantity).await?,
    };
    tracing::info!(product_id = id, stock = product.stock, "Product stock moved");
    Ok(product)
}

pub async fn delete_material(
    service: &dyn InventoryService,
    in_flight: &InFlight,
    confirm: &dyn Confirm,
    id: i64,
) -> Result<()> {
    validate_positive(id, "Material id").map_err(invalid)?;

    let _guard = in_flight.acquire(format!("delete-material:{}", id))?;
    if !confirm.confirm(&format!("Delete material #{}?", id)) {
        return Err(AppError::Cancelled(format!("material #{} was not deleted", id)));
    }
    service.delete_material(id).await?;
    Ok(())
}

pub async fn delete_product(
    service: &dyn InventoryService,
    in_flight: &InFlight,
    confirm: &dyn Confirm,
    id: i64,
) -> Result<()> {
    validate_positive(id, "Product id").map_err(invalid)?;

    let _guard = in_flight.acquire(format!("delete-product:{}", id))?;
    if !confirm.confirm(&format!("Delete product #{}?", id)) {
        return Err(AppError::Cancelled(format!("product #{} was not deleted", id)));
    }
    service.delete_product(id).await?;
    Ok(())
}

//! # Purchase Order Handlers
//!
//! Ordering material from a supplier, then marking the order received or
//! cancelling it. Both transitions ask for confirmation first: completing an
//! order raises stock on the backend and cannot be undone from the client.

use lib_utils::validation::validate_positive;
use shared::{NewPurchaseOrder, PurchaseOrder};

use super::invalid;
use crate::app::confirm::Confirm;
use crate::app::guard::InFlight;
use crate::app::list_view::ListView;
use crate::core::error::{AppError, Result};
use crate::core::service::InventoryService;

pub async fn refresh_orders(
    service: &dyn InventoryService,
    view: &mut ListView<PurchaseOrder>,
) -> Result<()> {
    view.apply(service.get_orders().await)?;
    Ok(())
}

/// Submit the new-order form.
///
/// On failure the caller still owns `form`, so the user can fix and resubmit.
pub async fn create_order(
    service: &dyn InventoryService,
    in_flight: &InFlight,
    form: &NewPurchaseOrder,
) -> Result<PurchaseOrder> {
    validate_positive(form.supplier_id, "Supplier").map_err(invalid)?;
    validate_positive(form.material_id, "Material").map_err(invalid)?;
    validate_positive(form.quantity, "Quantity").map_err(invalid)?;

    let _guard = in_flight.acquire("create-order")?;
    Ok(service.create_order(form).await?)
}

/// Submit the form, then reload the list so it shows the new order.
pub async fn create_order_and_refresh(
    service: &dyn InventoryService,
    in_flight: &InFlight,
    form: &NewPurchaseOrder,
    view: &mut ListView<PurchaseOrder>,
) -> Result<PurchaseOrder> {
    let order = create_order(service, in_flight, form).await?;
    refresh_orders(service, view).await?;
    Ok(order)
}

pub async fn complete_order(
    service: &dyn InventoryService,
    in_flight: &InFlight,
    confirm: &dyn Confirm,
    id: i64,
) -> Result<PurchaseOrder> {
    validate_positive(id, "Order id").map_err(invalid)?;

    let _guard = in_flight.acquire(format!("complete-order:{}", id))?;
    if !confirm.confirm(&format!(
        "Mark order #{} as received? Stock will be increased.",
        id
    )) {
        return Err(AppError::Cancelled(format!("order #{} was not completed", id)));
    }
    Ok(service.complete_order(id).await?)
}

pub async fn cancel_order(
    service: &dyn InventoryService,
    in_flight: &InFlight,
    confirm: &dyn Confirm,
    id: i64,
) -> Result<PurchaseOrder> {
    validate_positive(id, "Order id").map_err(invalid)?;

    let _guard = in_flight.acquire(format!("cancel-order:{}", id))?;
    if !confirm.confirm(&format!("Cancel order #{}?", id)) {
        return Err(AppError::Cancelled(format!("order #{} was not cancelled", id)));
    }
    Ok(service.cancel_order(id).await?)
}

//! # Purchase Order Endpoints
//!
//! Creating orders against a supplier, then completing (stock goes up on the
//! backend) or cancelling them.
//!
//! Writes here are not idempotent. A `create_order` that hits a 5xx is still
//! retried like any other request, so a backend that fails after inserting
//! can end up with a duplicate order.

use reqwest::Method;
use shared::{NewPurchaseOrder, PurchaseOrder};

use super::client::ApiClient;
use crate::core::error::ApiError;

/// Get all purchase orders.
#[tracing::instrument(skip(client))]
pub async fn get_orders(client: &ApiClient) -> Result<Vec<PurchaseOrder>, ApiError> {
    let orders: Vec<PurchaseOrder> = client
        .call(Method::GET, "/purchases/orders", None::<&()>)
        .await?;
    tracing::debug!(count = orders.len(), "Orders fetched");
    Ok(orders)
}

/// Create a purchase order.
#[tracing::instrument(skip(client), fields(material_id = data.material_id, supplier_id = data.supplier_id))]
pub async fn create_order(
    client: &ApiClient,
    data: &NewPurchaseOrder,
) -> Result<PurchaseOrder, ApiError> {
    let order: PurchaseOrder = client
        .call(Method::POST, "/purchases/orders", Some(data))
        .await?;
    tracing::info!(order_id = order.id, quantity = order.quantity, "Purchase order created");
    Ok(order)
}

/// Mark an order as received.
#[tracing::instrument(skip(client))]
pub async fn complete_order(client: &ApiClient, id: i64) -> Result<PurchaseOrder, ApiError> {
    let endpoint = format!("/purchases/orders/{}/complete", id);
    let order: PurchaseOrder = client.call(Method::PUT, &endpoint, None::<&()>).await?;
    tracing::info!(order_id = id, "Purchase order completed");
    Ok(order)
}

#[tracing::instrument(skip(client))]
pub async fn cancel_order(client: &ApiClient, id: i64) -> Result<PurchaseOrder, ApiError> {
    let endpoint = format!("/purchases/orders/{}/cancel", id);
    let order: PurchaseOrder = client.call(Method::PUT, &endpoint, None::<&()>).await?;
    tracing::info!(order_id = id, "Purchase order cancelled");
    Ok(order)
}

//! Purchase orders placed with suppliers.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a purchase order.
///
/// The backend uses Spanish status strings; anything unrecognised is kept
/// verbatim in [`OrderStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pendiente",
            OrderStatus::Completed => "realizada",
            OrderStatus::Cancelled => "cancelada",
            OrderStatus::Other(s) => s,
        }
    }

    /// Only pending orders can be completed or cancelled.
    pub fn is_open(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pendiente" => OrderStatus::Pending,
            "realizada" => OrderStatus::Completed,
            "cancelada" => OrderStatus::Cancelled,
            _ => OrderStatus::Other(value),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Purchase order as returned by `GET /purchases/orders`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseOrder {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    #[serde(default)]
    pub material_id: i64,
    #[serde(default)]
    pub quantity: i64,
    /// Creation timestamp as sent by the backend (may be null)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
}

impl PurchaseOrder {
    /// Parse [`PurchaseOrder::date`], accepting both offset and naive timestamps.
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        self.date.as_deref().and_then(parse_backend_date)
    }
}

/// Body for `POST /purchases/orders`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPurchaseOrder {
    pub supplier_id: i64,
    pub material_id: i64,
    pub quantity: i64,
}

/// Parse a backend timestamp.
///
/// Accepts RFC 3339 (`2024-05-01T10:00:00+00:00`) which is normalised to UTC,
/// and naive ISO timestamps with or without fractional seconds.
pub fn parse_backend_date(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

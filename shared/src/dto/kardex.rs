//! Kardex: the chronological ledger of stock increases and decreases.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::purchases::parse_backend_date;

/// One stock movement as returned by `GET /kardex/`.
///
/// Field names follow the backend (`stock_anterior`, `stock_nuevo`,
/// `observaciones`) so the entry round-trips unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KardexEntry {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// `entrada` (stock in) or `salida` (stock out)
    #[serde(default)]
    pub movement_type: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub stock_anterior: i64,
    #[serde(default)]
    pub stock_nuevo: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl KardexEntry {
    pub fn is_inbound(&self) -> bool {
        self.movement_type == "entrada"
    }

    /// Name of the material or product the movement refers to.
    pub fn item_name(&self) -> String {
        if let Some(name) = self.material_name.as_ref().or(self.product_name.as_ref()) {
            return name.clone();
        }
        match (self.material_id, self.product_id) {
            (Some(id), _) => format!("Material #{}", id),
            (None, Some(id)) => format!("Product #{}", id),
            (None, None) => "-".to_string(),
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        self.date.as_deref().and_then(parse_backend_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_name_fallbacks() {
        let mut entry: KardexEntry = serde_json::from_str(
            r#"{"id": 1, "movement_type": "entrada", "quantity": 5, "stock_anterior": 2, "stock_nuevo": 7, "material_id": 3}"#,
        )
        .unwrap();
        assert!(entry.is_inbound());
        assert_eq!(entry.item_name(), "Material #3");

        entry.material_name = Some("Templado".to_string());
        assert_eq!(entry.item_name(), "Templado");
    }
}

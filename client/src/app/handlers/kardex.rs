//! # Kardex Handlers
//!
//! Read-only ledger of stock movements, newest first as the backend sends it.

use shared::KardexEntry;

use crate::app::list_view::ListView;
use crate::core::error::Result;
use crate::core::service::InventoryService;

pub async fn refresh_kardex(
    service: &dyn InventoryService,
    view: &mut ListView<KardexEntry>,
) -> Result<()> {
    view.apply(service.get_kardex().await)?;
    Ok(())
}

/// Units moved in and out across `entries`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementTotals {
    pub inbound: i64,
    pub outbound: i64,
}

pub fn movement_totals(entries: &[KardexEntry]) -> MovementTotals {
    entries
        .iter()
        .fold(MovementTotals::default(), |mut totals, entry| {
            if entry.is_inbound() {
                totals.inbound += entry.quantity;
            } else {
                totals.outbound += entry.quantity;
            }
            totals
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::mock::MockService;

    fn entry(id: i64, movement_type: &str, quantity: i64) -> KardexEntry {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "movement_type": movement_type,
            "quantity": quantity,
            "stock_anterior": 10,
            "stock_nuevo": 10,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_refresh_kardex() {
        let service = MockService::default().with_kardex(vec![entry(1, "entrada", 5)]);
        let mut view = ListView::new();

        refresh_kardex(&service, &mut view).await.unwrap();

        assert_eq!(view.items().len(), 1);
        assert_eq!(view.items()[0].item_name(), "-");
    }

    #[test]
    fn test_movement_totals() {
        let entries = vec![entry(1, "entrada", 5), entry(2, "salida", 2), entry(3, "entrada", 1)];
        assert_eq!(
            movement_totals(&entries),
            MovementTotals {
                inbound: 6,
                outbound: 2
            }
        );
    }
}

//! # Supplier Handlers

use lib_utils::validation::{validate_not_empty, validate_positive};
use shared::{NewSupplier, Supplier};

use super::invalid;
use crate::app::guard::InFlight;
use crate::app::list_view::ListView;
use crate::core::error::Result;
use crate::core::service::InventoryService;

pub async fn refresh_suppliers(
    service: &dyn InventoryService,
    view: &mut ListView<Supplier>,
) -> Result<()> {
    view.apply(service.get_suppliers().await)?;
    Ok(())
}

/// Suppliers of one material, for the supplier picker of the order form.
pub async fn refresh_suppliers_for_material(
    service: &dyn InventoryService,
    material_id: i64,
    view: &mut ListView<Supplier>,
) -> Result<()> {
    validate_positive(material_id, "Material").map_err(invalid)?;
    view.apply(service.get_suppliers_by_material(material_id).await)?;
    Ok(())
}

fn blank_to_none(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub async fn create_supplier(
    service: &dyn InventoryService,
    in_flight: &InFlight,
    form: &NewSupplier,
) -> Result<Supplier> {
    validate_not_empty(&form.name, "Name").map_err(invalid)?;
    validate_positive(form.material_id, "Material").map_err(invalid)?;

    let cleaned = NewSupplier {
        name: form.name.trim().to_string(),
        contact_person: blank_to_none(&form.contact_person),
        phone: blank_to_none(&form.phone),
        email: blank_to_none(&form.email),
        address: blank_to_none(&form.address),
        material_id: form.material_id,
    };

    let _guard = in_flight.acquire("create-supplier")?;
    Ok(service.create_supplier(&cleaned).await?)
}

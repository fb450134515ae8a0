//! # Table Components
//!
//! Reusable text tables for displaying records consistently

use chrono::NaiveDateTime;
use shared::{
    format_price, stock_level, KardexEntry, Material, Product, PurchaseOrder, Supplier,
};

/// Configuration for table layout
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Spaces between columns
    pub spacing: usize,
    /// Text shown instead of a table with no rows
    pub empty_message: &'static str,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            spacing: 2,
            empty_message: "No records found.",
        }
    }
}

/// Render a table with headers and rows, columns padded to the widest cell
pub fn render_table(config: &TableConfig, headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return format!("{}\n", config.empty_message);
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let gap = " ".repeat(config.spacing);
    let mut out = String::new();
    out.push_str(&format_row(headers.iter().copied(), &widths, &gap));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format_row(rule.iter().map(String::as_str), &widths, &gap));
    out.push('\n');
    for row in rows {
        out.push_str(&format_row(row.iter().map(String::as_str), &widths, &gap));
        out.push('\n');
    }
    out
}

fn format_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize], gap: &str) -> String {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(gap);
    line.trim_end().to_string()
}

fn or_dash(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("-").to_string()
}

fn format_date(date: Option<NaiveDateTime>, raw: Option<&str>) -> String {
    match date {
        Some(date) => date.format("%Y-%m-%d %H:%M").to_string(),
        None => or_dash(raw),
    }
}

pub fn materials_table(materials: &[Material]) -> String {
    let rows: Vec<Vec<String>> = materials
        .iter()
        .map(|m| {
            vec![
                m.id.to_string(),
                m.name.clone(),
                m.kind.clone(),
                or_dash(m.color.as_deref()),
                m.stock.to_string(),
                m.min_stock.to_string(),
                stock_level(m.stock, m.min_stock).to_string(),
                or_dash(m.supplier_name.as_deref()),
            ]
        })
        .collect();
    render_table(
        &TableConfig::default(),
        &["ID", "NAME", "TYPE", "COLOR", "STOCK", "MIN", "LEVEL", "SUPPLIER"],
        &rows,
    )
}

pub fn products_table(products: &[Product]) -> String {
    let rows: Vec<Vec<String>> = products
        .iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                p.name.clone(),
                p.kind.clone(),
                or_dash(p.color.as_deref()),
                p.stock.to_string(),
                p.min_stock.to_string(),
                stock_level(p.stock, p.min_stock).to_string(),
                format_price(p.sale_price),
            ]
        })
        .collect();
    render_table(
        &TableConfig::default(),
        &["ID", "NAME", "TYPE", "COLOR", "STOCK", "MIN", "LEVEL", "PRICE"],
        &rows,
    )
}

pub fn orders_table(orders: &[PurchaseOrder]) -> String {
    let rows: Vec<Vec<String>> = orders
        .iter()
        .map(|o| {
            let supplier = match (&o.supplier_name, o.supplier_id) {
                (Some(name), _) => name.clone(),
                (None, Some(id)) => format!("#{}", id),
                (None, None) => "-".to_string(),
            };
            vec![
                o.id.to_string(),
                supplier,
                o.material_id.to_string(),
                o.quantity.to_string(),
                format_date(o.parsed_date(), o.date.as_deref()),
                o.status.to_string(),
            ]
        })
        .collect();
    render_table(
        &TableConfig {
            empty_message: "No purchase orders.",
            ..TableConfig::default()
        },
        &["ID", "SUPPLIER", "MATERIAL", "QTY", "DATE", "STATUS"],
        &rows,
    )
}

pub fn suppliers_table(suppliers: &[Supplier]) -> String {
    let rows: Vec<Vec<String>> = suppliers
        .iter()
        .map(|s| {
            let material = match (&s.material_name, s.material_id) {
                (Some(name), _) => name.clone(),
                (None, Some(id)) => format!("#{}", id),
                (None, None) => "-".to_string(),
            };
            vec![
                s.id.to_string(),
                s.name.clone(),
                or_dash(s.contact_person.as_deref()),
                or_dash(s.phone.as_deref()),
                or_dash(s.email.as_deref()),
                material,
            ]
        })
        .collect();
    render_table(
        &TableConfig::default(),
        &["ID", "NAME", "CONTACT", "PHONE", "EMAIL", "MATERIAL"],
        &rows,
    )
}

pub fn kardex_table(entries: &[KardexEntry]) -> String {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            let direction = if e.is_inbound() { "IN" } else { "OUT" };
            vec![
                format_date(e.parsed_date(), e.date.as_deref()),
                e.item_name(),
                direction.to_string(),
                e.quantity.to_string(),
                e.stock_anterior.to_string(),
                e.stock_nuevo.to_string(),
                or_dash(e.username.as_deref()),
                or_dash(e.observaciones.as_deref()),
            ]
        })
        .collect();
    render_table(
        &TableConfig {
            empty_message: "No stock movements recorded.",
            ..TableConfig::default()
        },
        &["DATE", "ITEM", "MOVE", "QTY", "BEFORE", "AFTER", "USER", "NOTES"],
        &rows,
    )
}

//! # Console Rendering
//!
//! Plain-text rendering of records for the `pyglass` binary. Rendering only
//! formats; every value comes straight from the backend records.

pub mod tables;

pub use tables::{
    kardex_table, materials_table, orders_table, products_table, render_table, suppliers_table,
    TableConfig,
};

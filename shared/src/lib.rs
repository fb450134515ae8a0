//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the PyGlass Stock client and the
//! inventory backend. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login form and token response
//!   - **[`dto::inventory`]**: Materials and products
//!   - **[`dto::purchases`]**: Purchase orders
//!   - **[`dto::suppliers`]**: Suppliers
//!   - **[`dto::kardex`]**: Stock movement ledger
//! - **[`utils`]**: Cosmetic helpers shared by every view
//!   - **[`utils::stock_level`]**: Normal / warning / critical badge
//!
//! ## Wire Format
//!
//! The backend owns these shapes; the client only parses them. Every field
//! that is not an identifier is optional or defaulted, so a backend that adds,
//! drops or nulls a column does not break deserialization:
//!
//! - Field names use **snake_case**, matching the backend
//! - Optional fields are omitted from request bodies when `None`
//! - Dates are kept as the backend's strings and parsed on demand
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::inventory::Material;
//! use shared::utils::{stock_level, StockLevel};
//!
//! let material: Material = serde_json::from_str(
//!     r#"{"id": 1, "name": "Float glass", "type": "vidrio", "stock": 3, "min_stock": 5}"#,
//! ).unwrap();
//!
//! assert_eq!(stock_level(material.stock, material.min_stock), StockLevel::Critical);
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library and everything here is public API
pub use dto::*;
pub use utils::*;

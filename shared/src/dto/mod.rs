//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the inventory backend.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login form and bearer token response
//! - [`inventory`] - Materials and finished products
//! - [`purchases`] - Purchase orders and their status
//! - [`suppliers`] - Suppliers, each tied to one material
//! - [`kardex`] - Inventory movement ledger entries
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /auth/login
//! Content-Type: application/x-www-form-urlencoded
//!
//! username=admin&password=secret
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "token_type": "bearer"
//! }
//! ```

pub mod auth;
pub mod inventory;
pub mod kardex;
pub mod purchases;
pub mod suppliers;

pub use auth::*;
pub use inventory::*;
pub use kardex::*;
pub use purchases::*;
pub use suppliers::*;

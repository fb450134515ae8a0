//! # Backend API Client Module
//!
//! HTTP client for the PyGlass Stock backend.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── client.rs     - ApiClient, request pipeline, retry loop
//! ├── retry.rs      - RetryPolicy and the Sleeper seam
//! ├── normalize.rs  - Error body -> display message
//! ├── auth.rs       - POST /auth/login (form), logout
//! ├── materials.rs  - /materials/
//! ├── products.rs   - /products/ and stock adjustments
//! ├── inventory.rs  - /inventory/alerts/*
//! ├── purchases.rs  - /purchases/orders
//! ├── suppliers.rs  - /suppliers/
//! └── kardex.rs     - /kardex/
//! ```

pub mod auth;
pub mod client;
pub mod inventory;
pub mod kardex;
pub mod materials;
pub mod normalize;
pub mod products;
pub mod purchases;
pub mod retry;
pub mod suppliers;

#[cfg(test)]
mod tests;

pub use client::ApiClient;
pub use normalize::normalize_error_body;
pub use retry::{RetryPolicy, Sleeper, TokioSleeper};

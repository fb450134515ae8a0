//! # PyGlass Stock Client - Library Root
//!
//! Client side of the PyGlass Stock inventory system: materials, finished
//! glass products, purchase orders to suppliers and the kardex (stock
//! movement ledger). The backend owns every rule; this crate talks to it.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              pyglass (console front-end)               │
//! ├────────────────────────────────────────────────────────┤
//! │  app       - page handlers, list views, guards         │
//! │  ui        - text tables                               │
//! ├────────────────────────────────────────────────────────┤
//! │  services  - ApiClient (retry, auth, normalization)    │
//! │              Session (bearer token store)              │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP + Authorization: Bearer <token>
//!          ▼
//! ┌─────────────────┐
//! │  Backend API    │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **core**: error types and the [`crate::core::service::InventoryService`] trait
//! - **config**: [`config::ClientConfig`], loaded from `PYGLASS_*` variables
//! - **services**: the API client and the session store
//! - **app**: page logic shared by the CLI and tests
//! - **ui**: console rendering
//! - **debug**: file logging setup
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pyglass_client::{ApiClient, ClientConfig, InventoryService, Session};
//!
//! # async fn run() -> pyglass_client::Result<()> {
//! let config = ClientConfig::from_env()?;
//! config.validate()?;
//!
//! let session = Arc::new(Session::unpersisted());
//! let client = ApiClient::new(&config, session);
//! client.login("admin", "secret").await?;
//!
//! for material in client.get_materials().await? {
//!     println!("{}: {}", material.name, material.stock);
//! }
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;

pub use config::ClientConfig;
pub use crate::core::{ApiError, ApiErrorKind, AppError, InventoryService, Result};
pub use services::api::{ApiClient, RetryPolicy};
pub use services::session::{FileTokenStorage, MemoryTokenStorage, Session, TokenStorage};

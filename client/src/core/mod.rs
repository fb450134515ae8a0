//! # Core Abstractions
//!
//! Error types and service traits shared by the API client and the views.
//!
//! - **[`error`]**: [`ApiError`] (normalized backend failure) and [`AppError`]
//! - **[`service`]**: [`InventoryService`], the seam between views and the backend
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pyglass_client::config::ClientConfig;
//! use pyglass_client::core::InventoryService;
//! use pyglass_client::services::{api::ApiClient, session::Session};
//!
//! let session = Arc::new(Session::unpersisted());
//! let api: Arc<dyn InventoryService> =
//!     Arc::new(ApiClient::new(&ClientConfig::default(), session));
//! ```

pub mod error;
pub mod service;

pub use error::{ApiError, ApiErrorKind, AppError, Result};
pub use service::InventoryService;

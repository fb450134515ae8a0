//! # Services Module
//!
//! ```text
//! services/
//! ├── api/        - Backend HTTP client (auth, inventory, purchasing, kardex)
//! └── session.rs  - Bearer token store, memory + persisted copy
//! ```
//!
//! The session is created once by the application root and shared:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pyglass_client::config::ClientConfig;
//! use pyglass_client::services::api::ApiClient;
//! use pyglass_client::services::session::{FileTokenStorage, Session};
//!
//! let config = ClientConfig::from_env().unwrap();
//! let session = match &config.state_dir {
//!     Some(dir) => Session::new(FileTokenStorage::new(dir)),
//!     None => Session::unpersisted(),
//! };
//! let api = ApiClient::new(&config, Arc::new(session));
//! ```

pub mod api;
pub mod session;

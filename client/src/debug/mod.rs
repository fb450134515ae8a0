//! # Logging
//!
//! File-based structured logging for the `pyglass` binary.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pyglass_client::debug::{self, LogConfig};
//!
//! // Keep the guard alive until exit or buffered lines are lost
//! let _guard = debug::init(&LogConfig::from_env());
//! tracing::info!(endpoint = "/materials/", "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `pyglass_client=debug,info`)
//! - `PYGLASS_LOG_DIR`: Directory for `pyglass.log.<date>` (default: `logs`)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init;

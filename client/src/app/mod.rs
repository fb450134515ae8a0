//! # View Layer
//!
//! Page logic without rendering: each handler takes the backend as a
//! [`crate::core::service::InventoryService`], validates input, guards
//! duplicate submissions, asks before destructive actions and updates the
//! page's [`ListView`].
//!
//! The console front-end in `main.rs` and the tests drive the same handlers.

pub mod confirm;
pub mod guard;
pub mod handlers;
pub mod list_view;

pub use confirm::{AutoConfirm, Confirm, ScriptedConfirm, StdinConfirm};
pub use guard::{InFlight, InFlightGuard};
pub use list_view::ListView;

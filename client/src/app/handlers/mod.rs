//! # Page Handlers
//!
//! Handlers organized by page, one module each.

pub mod auth;
pub mod inventory;
pub mod kardex;
pub mod purchases;
pub mod suppliers;

#[cfg(test)]
pub(crate) mod mock;

use crate::core::error::AppError;

/// Turn a lib-utils validation message into an [`AppError`].
pub(crate) fn invalid(message: String) -> AppError {
    AppError::Validation(message)
}

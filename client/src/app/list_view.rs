//! # List View State
//!
//! What a page of records shows: the last list that loaded, plus the message
//! of the last failed refresh. A failed refresh never wipes the list.

use crate::core::error::ApiError;

#[derive(Debug, Clone)]
pub struct ListView<T> {
    items: Vec<T>,
    error: Option<String>,
    loaded: bool,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            error: None,
            loaded: false,
        }
    }
}

impl<T> ListView<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a refresh.
    ///
    /// Success replaces the items and clears the error. Failure keeps the
    /// previous items, stores the message and hands the error back.
    pub fn apply(&mut self, result: Result<Vec<T>, ApiError>) -> Result<(), ApiError> {
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                self.loaded = true;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, kept = self.items.len(), "Refresh failed, keeping previous items");
                self.error = Some(e.message.clone());
                Err(e)
            }
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True once at least one refresh succeeded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

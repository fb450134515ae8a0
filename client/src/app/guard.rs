//! # In-Flight Guard
//!
//! Refuses a second submission of the same operation while the first one is
//! still running (double-clicking "complete order", a retried CLI command in
//! another task, ...).
//!
//! Keys name the operation and its target, e.g. `complete-order:42`. A key is
//! held from [`InFlight::acquire`] until the returned [`InFlightGuard`] drops,
//! whether the operation succeeded, failed or panicked.

use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

use crate::core::error::{AppError, Result};

/// Registry of operations currently in flight.
///
/// Cloning shares the registry.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    keys: Arc<Mutex<HashSet<String>>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `key`, or fail with [`AppError::Busy`] if it is already held.
    pub fn acquire(&self, key: impl Into<String>) -> Result<InFlightGuard> {
        let key = key.into();
        if !self.keys.lock().insert(key.clone()) {
            tracing::debug!(key = %key, "Duplicate submission refused");
            return Err(AppError::Busy(key));
        }
        Ok(InFlightGuard {
            keys: Arc::clone(&self.keys),
            key,
        })
    }

    pub fn is_busy(&self, key: &str) -> bool {
        self.keys.lock().contains(key)
    }
}

/// Holds one key of an [`InFlight`] registry; releases it on drop.
#[derive(Debug)]
pub struct InFlightGuard {
    keys: Arc<Mutex<HashSet<String>>>,
    key: String,
}

impl InFlightGuard {
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.keys.lock().remove(&self.key);
    }
}

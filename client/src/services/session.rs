//! # Session Store
//!
//! Single source of truth for the bearer token.
//!
//! The token lives in memory and is mirrored to a [`TokenStorage`] so it
//! survives restarts. Exactly one key is ever persisted: [`TOKEN_KEY`].
//!
//! ## Lifecycle
//!
//! ```text
//! login ──► set_token(Some) ──► memory + storage
//! start ──► get_token()     ──► memory, else storage (then cached)
//! logout ─► set_token(None) ──► memory cleared, key removed
//! ```
//!
//! The store never fails. Storage errors are logged and the in-memory value
//! stays authoritative for the rest of the process.
//!
//! ## Thread Safety
//!
//! The token sits behind a `parking_lot::RwLock`. `set_token` keeps the write
//! lock while it updates storage, so a concurrent `get_token` sees either the
//! old pair or the new pair, never a mix.

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Fixed storage key of the persisted bearer token.
pub const TOKEN_KEY: &str = "token";

/// Client-local persistent key-value storage.
pub trait TokenStorage: Send + Sync {
    fn load(&self, key: &str) -> io::Result<Option<String>>;
    fn store(&self, key: &str, value: &str) -> io::Result<()>;
    fn remove(&self, key: &str) -> io::Result<()>;
}

/// Stores each key as a file inside a state directory.
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    dir: PathBuf,
}

impl FileTokenStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default location: `<platform local data dir>/pyglass-stock`.
    ///
    /// Returns `None` on platforms without a data directory.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join("pyglass-stock"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => {
                let value = contents.trim();
                Ok((!value.is_empty()).then(|| value.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn store(&self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

/// In-process storage, for tests and for contexts without a disk.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().contains_key(key)
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> io::Result<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// Bearer token holder shared by the API client and the views.
///
/// Owned by the application root and handed to [`crate::services::api::ApiClient`]
/// as an `Arc<Session>`.
pub struct Session {
    token: RwLock<Option<String>>,
    storage: Option<Box<dyn TokenStorage>>,
}

impl Session {
    pub fn new(storage: impl TokenStorage + 'static) -> Self {
        Self {
            token: RwLock::new(None),
            storage: Some(Box::new(storage)),
        }
    }

    /// Session with no persistent storage at all.
    pub fn unpersisted() -> Self {
        Self {
            token: RwLock::new(None),
            storage: None,
        }
    }

    /// Set or clear the token in memory and in storage.
    ///
    /// An empty token clears the session.
    pub fn set_token(&self, token: Option<String>) {
        let token = token.filter(|t| !t.is_empty());
        let mut guard = self.token.write();
        *guard = token;

        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        let result = match guard.as_deref() {
            Some(value) => storage.store(TOKEN_KEY, value),
            None => storage.remove(TOKEN_KEY),
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to update persisted session token");
        }
    }

    /// Current token, loading it from storage on first use.
    pub fn get_token(&self) -> Option<String> {
        if let Some(token) = self.token.read().as_ref() {
            return Some(token.clone());
        }

        let storage = self.storage.as_ref()?;
        let mut guard = self.token.write();
        // Another caller may have set or loaded it while we waited for the lock
        if guard.is_none() {
            match storage.load(TOKEN_KEY) {
                Ok(loaded) => *guard = loaded,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read persisted session token");
                }
            }
        }
        guard.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }

    /// Logout: drop the token everywhere.
    pub fn clear(&self) {
        self.set_token(None);
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the token itself
        f.debug_struct("Session")
            .field("has_token", &self.token.read().is_some())
            .field("persistent", &self.storage.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Storage handle that can be shared between two sessions, standing in
    /// for the same file seen by two processes.
    #[derive(Clone, Default)]
    struct SharedStorage(Arc<MemoryTokenStorage>);

    impl TokenStorage for SharedStorage {
        fn load(&self, key: &str) -> io::Result<Option<String>> {
            self.0.load(key)
        }
        fn store(&self, key: &str, value: &str) -> io::Result<()> {
            self.0.store(key, value)
        }
        fn remove(&self, key: &str) -> io::Result<()> {
            self.0.remove(key)
        }
    }

    struct BrokenStorage;

    impl TokenStorage for BrokenStorage {
        fn load(&self, _key: &str) -> io::Result<Option<String>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
        fn store(&self, _key: &str, _value: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
        fn remove(&self, _key: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn test_token_round_trip_across_sessions() {
        let storage = SharedStorage::default();

        let session = Session::new(storage.clone());
        session.set_token(Some("abc".to_string()));
        assert_eq!(session.get_token(), Some("abc".to_string()));

        // Fresh process: nothing in memory, only storage populated
        let restarted = Session::new(storage.clone());
        assert_eq!(restarted.get_token(), Some("abc".to_string()));
    }

    #[test]
    fn test_clearing_removes_persisted_key() {
        let storage = SharedStorage::default();
        let session = Session::new(storage.clone());

        session.set_token(Some("abc".to_string()));
        assert!(storage.0.contains(TOKEN_KEY));

        session.set_token(None);
        assert_eq!(session.get_token(), None);
        assert!(!storage.0.contains(TOKEN_KEY));
        assert_eq!(Session::new(storage).get_token(), None);
    }

    #[test]
    fn test_empty_token_clears_session() {
        let storage = SharedStorage::default();
        let session = Session::new(storage.clone());
        session.set_token(Some("abc".to_string()));

        session.set_token(Some(String::new()));

        assert_eq!(session.get_token(), None);
        assert!(!session.is_authenticated());
        assert!(!storage.0.contains(TOKEN_KEY));
    }

    #[test]
    fn test_unpersisted_session() {
        let session = Session::unpersisted();
        assert_eq!(session.get_token(), None);

        session.set_token(Some("memory-only".to_string()));
        assert!(session.is_authenticated());

        session.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_broken_storage_never_fails_callers() {
        let session = Session::new(BrokenStorage);
        assert_eq!(session.get_token(), None);

        session.set_token(Some("kept-in-memory".to_string()));
        assert_eq!(session.get_token(), Some("kept-in-memory".to_string()));
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let state_dir = dir.path().join("nested").join("state");

        let session = Session::new(FileTokenStorage::new(&state_dir));
        session.set_token(Some("file-token".to_string()));
        assert!(state_dir.join(TOKEN_KEY).exists());

        let restarted = Session::new(FileTokenStorage::new(&state_dir));
        assert_eq!(restarted.get_token(), Some("file-token".to_string()));

        restarted.set_token(None);
        assert!(!state_dir.join(TOKEN_KEY).exists());
        // Removing twice is fine
        restarted.set_token(None);
    }

    #[test]
    fn test_debug_output_hides_token() {
        let session = Session::unpersisted();
        session.set_token(Some("secret-value".to_string()));
        let printed = format!("{:?}", session);
        assert!(!printed.contains("secret-value"));
        assert!(printed.contains("has_token: true"));
    }
}

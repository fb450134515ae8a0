//! # Client Configuration
//!
//! Everything the client reads from the environment, loaded once at startup
//! and validated before any request is made.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `PYGLASS_API_URL` | `http://127.0.0.1:8000` | Backend base URL |
//! | `PYGLASS_HTTP_TIMEOUT_SECS` | `10` | Timeout of a single attempt |
//! | `PYGLASS_RETRY_ATTEMPTS` | `3` | Attempts per request, first included |
//! | `PYGLASS_RETRY_BASE_MS` | `500` | First backoff delay, doubled each retry |
//! | `PYGLASS_STATE_DIR` | platform data dir | Where the token file lives |

use lib_utils::envs::{get_env, get_env_or, get_env_parse_or};
use std::path::PathBuf;
use std::time::Duration;

use crate::core::error::{AppError, Result};
use crate::services::api::retry::{RetryPolicy, DEFAULT_BASE_DELAY, DEFAULT_MAX_ATTEMPTS};
use crate::services::session::FileTokenStorage;

/// Backend address used when `PYGLASS_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Per-attempt timeout used when `PYGLASS_HTTP_TIMEOUT_SECS` is not set.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const MAX_RETRY_ATTEMPTS: u32 = 10;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL without a trailing slash.
    pub api_url: String,
    pub timeout: Duration,
    pub retry: RetryPolicy,
    /// Directory of the persisted token. `None` disables persistence.
    pub state_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry: RetryPolicy::default(),
            state_dir: FileTokenStorage::default_dir(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_url = normalize_base_url(&get_env_or("PYGLASS_API_URL", DEFAULT_API_URL));
        let timeout_secs = get_env_parse_or("PYGLASS_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let max_attempts = get_env_parse_or("PYGLASS_RETRY_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?;
        let base_delay_ms = get_env_parse_or(
            "PYGLASS_RETRY_BASE_MS",
            DEFAULT_BASE_DELAY.as_millis() as u64,
        )?;
        let state_dir = get_env("PYGLASS_STATE_DIR")
            .ok()
            .map(PathBuf::from)
            .or_else(FileTokenStorage::default_dir);

        Ok(Self {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
            retry: RetryPolicy::new(max_attempts, Duration::from_millis(base_delay_ms)),
            state_dir,
        })
    }

    /// Same configuration pointed at another backend.
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = normalize_base_url(api_url);
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "PYGLASS_API_URL must start with http:// or https:// (got '{}')",
                self.api_url
            )));
        }

        if self.timeout.is_zero() {
            return Err(AppError::Config(
                "PYGLASS_HTTP_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }

        if self.retry.max_attempts == 0 || self.retry.max_attempts > MAX_RETRY_ATTEMPTS {
            return Err(AppError::Config(format!(
                "PYGLASS_RETRY_ATTEMPTS must be between 1 and {}",
                MAX_RETRY_ATTEMPTS
            )));
        }

        Ok(())
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

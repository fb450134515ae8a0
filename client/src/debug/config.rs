//! Logging configuration from environment variables

use lib_utils::envs::get_env_or;
use std::path::PathBuf;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "pyglass_client=info,warn";

/// Base name of the rolling log file.
pub const LOG_FILE_NAME: &str = "pyglass.log";

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level filter (e.g., "pyglass_client=debug,info")
    pub log_level: String,
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            log_level: get_env_or("RUST_LOG", DEFAULT_LOG_LEVEL),
            log_dir: PathBuf::from(get_env_or("PYGLASS_LOG_DIR", "logs")),
        }
    }

    /// Path of today's log file prefix, for display.
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

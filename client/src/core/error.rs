//! # Common Error Types
//!
//! Consolidated error handling for the PyGlass Stock client.
//!
//! Two layers of errors exist:
//!
//! - [`ApiError`]: the single normalized shape every backend call fails with.
//!   Its `Display` is the display-ready message, nothing more, so views can put
//!   it straight into an error panel.
//! - [`AppError`]: what views and the CLI deal with. Wraps `ApiError` and adds
//!   the failures that never reach the network (validation, configuration,
//!   declined confirmations, duplicate submissions).
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use pyglass_client::core::error::AppError;
//!
//! fn validate_quantity(quantity: i64) -> Result<i64, AppError> {
//!     if quantity <= 0 {
//!         return Err(AppError::Validation("Quantity must be positive".to_string()));
//!     }
//!     Ok(quantity)
//! }
//! ```

use reqwest::StatusCode;
use thiserror::Error;

/// Failure class of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// No response was ever received, even after retrying.
    Connection,
    /// The server answered with a 5xx status on every attempt.
    Server,
    /// The server rejected the request (4xx). Never retried.
    Client,
    /// A success status came back with a body that is not JSON.
    Parse,
}

/// Normalized backend error.
///
/// `message` is always human readable. `http_status` is `None` only when no
/// response was received at all.
///
/// ```rust
/// use pyglass_client::core::error::ApiError;
///
/// let err = ApiError::from_status(404, "Material no encontrado");
/// assert_eq!(err.to_string(), "Material no encontrado");
/// assert_eq!(err.http_status, Some(404));
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub http_status: Option<u16>,
    pub kind: ApiErrorKind,
}

impl ApiError {
    /// Error for a response that came back with a non-success status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let kind = if status >= 500 {
            ApiErrorKind::Server
        } else {
            ApiErrorKind::Client
        };
        Self {
            message: message.into(),
            http_status: Some(status),
            kind,
        }
    }

    /// Terminal error after every attempt failed without a response.
    pub fn connection(attempts: u32, cause: impl std::fmt::Display) -> Self {
        Self {
            message: format!(
                "Persistent connection failure after {} attempts: {}",
                attempts, cause
            ),
            http_status: None,
            kind: ApiErrorKind::Connection,
        }
    }

    /// A success response whose body could not be parsed.
    pub fn parse(status: StatusCode) -> Self {
        Self {
            message: status_line(status),
            http_status: Some(status.as_u16()),
            kind: ApiErrorKind::Parse,
        }
    }

    /// The server rejected the bearer token (or there was none).
    ///
    /// Callers use this to clear the session and force a new login.
    pub fn is_unauthorized(&self) -> bool {
        self.http_status == Some(StatusCode::UNAUTHORIZED.as_u16())
    }

    pub fn is_connection_failure(&self) -> bool {
        self.kind == ApiErrorKind::Connection
    }
}

/// `"Error {status}: {statusText}"`, the fallback message when a body is unusable.
pub fn status_line(status: StatusCode) -> String {
    format!(
        "Error {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown Status")
    )
}

/// Application-wide error type for views and the CLI.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend call failed; the message is already normalized.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Input rejected before sending anything.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing or malformed configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The user declined a destructive action.
    #[error("Cancelled: {0}")]
    Cancelled(String),

    /// The same operation is already in flight.
    #[error("Already in progress: {0}")]
    Busy(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_kind_classification() {
        assert_eq!(ApiError::from_status(503, "down").kind, ApiErrorKind::Server);
        assert_eq!(ApiError::from_status(422, "bad").kind, ApiErrorKind::Client);
        assert!(ApiError::from_status(401, "nope").is_unauthorized());
    }

    #[test]
    fn test_status_line() {
        assert_eq!(status_line(StatusCode::NOT_FOUND), "Error 404: Not Found");
        assert_eq!(
            status_line(StatusCode::BAD_GATEWAY),
            "Error 502: Bad Gateway"
        );
    }

    #[test]
    fn test_connection_message_mentions_attempts() {
        let err = ApiError::connection(3, "connection refused");
        assert!(err.is_connection_failure());
        assert_eq!(err.http_status, None);
        assert!(err.message.contains("after 3 attempts"));
    }

    #[test]
    fn test_app_error_displays_api_message_verbatim() {
        let err: AppError = ApiError::from_status(400, "Insufficient stock").into();
        assert_eq!(err.to_string(), "Insufficient stock");
    }
}

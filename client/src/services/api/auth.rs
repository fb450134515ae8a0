//! # Authentication Endpoints
//!
//! Exchanges credentials for a bearer token and stores it in the session.

use reqwest::Method;
use shared::{LoginForm, TokenResponse};

use super::client::{decode, ApiClient, RequestBody};
use crate::core::error::ApiError;

/// Login with username and password.
///
/// The backend expects an OAuth2-style form (`application/x-www-form-urlencoded`),
/// not JSON. On success the `access_token` becomes the session token.
#[tracing::instrument(skip(client, password), fields(username = %username))]
pub async fn login(
    client: &ApiClient,
    username: &str,
    password: &str,
) -> Result<TokenResponse, ApiError> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let form = LoginForm {
        username: username.to_string(),
        password: password.to_string(),
    };
    let (status, value) = client
        .execute("/auth/login", Method::POST, RequestBody::Form(&form), false)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Login failed"))?;

    let token: TokenResponse = decode(status, value)?;
    client.session().set_token(Some(token.access_token.clone()));

    tracing::info!(duration_ms = start.elapsed().as_millis() as u64, "Login successful");
    Ok(token)
}

/// Drop the session token (memory and persisted copy).
pub fn logout(client: &ApiClient) {
    client.session().clear();
    tracing::info!("Logged out");
}

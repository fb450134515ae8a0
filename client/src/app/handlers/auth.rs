//! # Authentication Handlers
//!
//! Login and logout. A failed login leaves the session untouched.

use lib_utils::validation::validate_not_empty;
use shared::TokenResponse;

use super::invalid;
use crate::core::error::Result;
use crate::core::service::InventoryService;

/// Handle the login form.
pub async fn login(
    service: &dyn InventoryService,
    username: &str,
    password: &str,
) -> Result<TokenResponse> {
    validate_not_empty(username, "Username").map_err(invalid)?;
    validate_not_empty(password, "Password").map_err(invalid)?;

    Ok(service.login(username.trim(), password).await?)
}

pub fn logout(service: &dyn InventoryService) {
    service.logout();
}

//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! Every call goes through [`ApiClient::execute`]:
//!
//! ```text
//! request(endpoint, method, body)
//!   │
//!   ├─ attach "Authorization: Bearer <token>" if the session has one
//!   ├─ send ──► no response ────────┐
//!   │        └► status >= 500 ──────┤ retry after 500ms, 1000ms, ...
//!   │        └► anything else ─► done (2xx parsed, others normalized)
//!   └─ attempts exhausted: last 5xx normalized, or connection failure
//! ```

use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared::{
    KardexEntry, LoginForm, Material, MaterialUpdate, NewMaterial, NewProduct, NewPurchaseOrder,
    NewSupplier, Product, ProductUpdate, PurchaseOrder, Supplier, TokenResponse,
};
use std::sync::Arc;
use std::time::Instant;

use super::normalize::normalize_error_body;
use super::retry::{RetryPolicy, Sleeper, TokioSleeper};
use crate::config::ClientConfig;
use crate::core::error::{ApiError, ApiErrorKind};
use crate::core::service::InventoryService;
use crate::services::session::Session;

/// Body of an outgoing request.
#[derive(Debug, Clone, Copy)]
pub(crate) enum RequestBody<'a> {
    Empty,
    Json(&'a Value),
    /// URL-encoded form (login only)
    Form(&'a LoginForm),
}

/// HTTP client for communicating with the inventory backend.
///
/// Cheap to share behind an `Arc`; the inner `reqwest::Client` keeps a
/// connection pool.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    session: Arc<Session>,
    policy: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
}

impl ApiClient {
    /// Create a client from configuration and a session owned by the caller.
    ///
    /// Each attempt is bounded by `config.timeout`.
    pub fn new(config: &ClientConfig, session: Arc<Session>) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                Client::new()
            });

        Self {
            client,
            base_url: config.api_url.clone(),
            session,
            policy: config.retry,
            sleeper: Arc::new(TokioSleeper),
        }
    }

    /// Replace the sleeper used between attempts.
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Get the base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.policy
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Generic authenticated request.
    ///
    /// `endpoint` is relative to the base URL (e.g. `/materials/`). Resolves to
    /// the parsed JSON body, or `{}` when the response has no content.
    pub async fn request(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let body = body.map_or(RequestBody::Empty, RequestBody::Json);
        self.execute(endpoint, method, body, true)
            .await
            .map(|(_, value)| value)
    }

    /// `GET` shorthand for [`ApiClient::request`].
    pub async fn get(&self, endpoint: &str) -> Result<Value, ApiError> {
        self.request(endpoint, Method::GET, None).await
    }

    /// Typed request: serializes `body`, deserializes the response into `T`.
    pub(crate) async fn call<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = body.map(encode_body).transpose()?;
        let body = payload.as_ref().map_or(RequestBody::Empty, RequestBody::Json);
        let (status, value) = self.execute(endpoint, method, body, true).await?;
        decode(status, value)
    }

    /// Send with retries and turn the outcome into JSON or a normalized error.
    #[tracing::instrument(
        skip(self, body, with_auth),
        fields(method = %method, endpoint = %endpoint, request_id = %uuid::Uuid::new_v4())
    )]
    pub(crate) async fn execute(
        &self,
        endpoint: &str,
        method: Method,
        body: RequestBody<'_>,
        with_auth: bool,
    ) -> Result<(StatusCode, Value), ApiError> {
        let url = self.url(endpoint);
        let attempts = self.policy.attempts();
        let mut last_failure = String::new();

        for attempt in 1..=attempts {
            let start = Instant::now();
            let mut builder = self.client.request(method.clone(), &url);

            if with_auth {
                if let Some(token) = self.session.get_token() {
                    builder = builder.bearer_auth(token);
                }
            }

            builder = match body {
                RequestBody::Empty => builder,
                RequestBody::Json(value) => builder.json(value),
                RequestBody::Form(form) => builder.form(form),
            };

            match builder.send().await {
                Ok(response) => {
                    let status = response.status();
                    let duration = start.elapsed();

                    if self.policy.should_retry(status) && attempt < attempts {
                        let delay = self.policy.delay_after(attempt);
                        tracing::warn!(
                            status = status.as_u16(),
                            attempt,
                            max_attempts = attempts,
                            retry_in_ms = delay.as_millis() as u64,
                            duration_ms = duration.as_millis() as u64,
                            "Transient server error, retrying"
                        );
                        self.sleeper.sleep(delay).await;
                        continue;
                    }

                    tracing::debug!(
                        status = status.as_u16(),
                        attempt,
                        duration_ms = duration.as_millis() as u64,
                        "Response received"
                    );
                    return read_response(response).await;
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        attempt,
                        max_attempts = attempts,
                        timed_out = e.is_timeout(),
                        "Request failed without a response"
                    );
                    last_failure = e.to_string();

                    if attempt < attempts {
                        self.sleeper.sleep(self.policy.delay_after(attempt)).await;
                    }
                }
            }
        }

        tracing::error!(attempts, error = %last_failure, "Giving up after persistent connection failure");
        Err(ApiError::connection(attempts, last_failure))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .field("policy", &self.policy)
            .finish()
    }
}

/// Turn a final response into JSON (success) or a normalized error.
async fn read_response(response: Response) -> Result<(StatusCode, Value), ApiError> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(|e| {
        tracing::error!(error = %e, status = status.as_u16(), "Failed to read response body");
        ApiError {
            message: format!("Failed to read response: {}", e),
            http_status: Some(status.as_u16()),
            kind: ApiErrorKind::Parse,
        }
    })?;

    if status.is_success() {
        if status == StatusCode::NO_CONTENT || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok((status, Value::Object(Default::default())));
        }
        return serde_json::from_slice(&bytes)
            .map(|value| (status, value))
            .map_err(|e| {
                tracing::error!(error = %e, status = status.as_u16(), "Response parse error");
                ApiError::parse(status)
            });
    }

    let message = normalize_error_body(status, &bytes);
    tracing::warn!(status = status.as_u16(), error = %message, "Request rejected");
    Err(ApiError::from_status(status.as_u16(), message))
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError {
        message: format!("Failed to encode request: {}", e),
        http_status: None,
        kind: ApiErrorKind::Parse,
    })
}

/// Deserialize a successful body into the expected record type.
pub(crate) fn decode<T: DeserializeOwned>(status: StatusCode, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| {
        tracing::error!(error = %e, "Response does not match the expected shape");
        ApiError {
            message: format!("Failed to parse response: {}", e),
            http_status: Some(status.as_u16()),
            kind: ApiErrorKind::Parse,
        }
    })
}

// Implement InventoryService trait for ApiClient
#[async_trait::async_trait]
impl InventoryService for ApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        super::auth::login(self, username, password).await
    }

    fn logout(&self) {
        super::auth::logout(self)
    }

    fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    async fn get_materials(&self) -> Result<Vec<Material>, ApiError> {
        super::materials::get_materials(self).await
    }

    async fn add_material(&self, data: &NewMaterial) -> Result<Material, ApiError> {
        super::materials::add_material(self, data).await
    }

    async fn update_material(&self, id: i64, data: &MaterialUpdate) -> Result<Material, ApiError> {
        super::materials::update_material(self, id, data).await
    }

    async fn delete_material(&self, id: i64) -> Result<Value, ApiError> {
        super::materials::delete_material(self, id).await
    }

    async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        super::products::get_products(self).await
    }

    async fn add_product(&self, data: &NewProduct) -> Result<Product, ApiError> {
        super::products::add_product(self, data).await
    }

    async fn update_product(&self, id: i64, data: &ProductUpdate) -> Result<Product, ApiError> {
        super::products::update_product(self, id, data).await
    }

    async fn delete_product(&self, id: i64) -> Result<Value, ApiError> {
        super::products::delete_product(self, id).await
    }

    async fn add_product_stock(&self, id: i64, quantity: i64) -> Result<Product, ApiError> {
        super::products::add_product_stock(self, id, quantity).await
    }

    async fn remove_product_stock(&self, id: i64, quantity: i64) -> Result<Product, ApiError> {
        super::products::remove_product_stock(self, id, quantity).await
    }

    async fn get_material_alerts(&self) -> Result<Vec<Material>, ApiError> {
        super::inventory::get_material_alerts(self).await
    }

    async fn get_product_alerts(&self) -> Result<Vec<Product>, ApiError> {
        super::inventory::get_product_alerts(self).await
    }

    async fn get_orders(&self) -> Result<Vec<PurchaseOrder>, ApiError> {
        super::purchases::get_orders(self).await
    }

    async fn create_order(&self, data: &NewPurchaseOrder) -> Result<PurchaseOrder, ApiError> {
        super::purchases::create_order(self, data).await
    }

    async fn complete_order(&self, id: i64) -> Result<PurchaseOrder, ApiError> {
        super::purchases::complete_order(self, id).await
    }

    async fn cancel_order(&self, id: i64) -> Result<PurchaseOrder, ApiError> {
        super::purchases::cancel_order(self, id).await
    }

    async fn get_suppliers(&self) -> Result<Vec<Supplier>, ApiError> {
        super::suppliers::get_suppliers(self).await
    }

    async fn get_suppliers_by_material(&self, material_id: i64) -> Result<Vec<Supplier>, ApiError> {
        super::suppliers::get_suppliers_by_material(self, material_id).await
    }

    async fn create_supplier(&self, data: &NewSupplier) -> Result<Supplier, ApiError> {
        super::suppliers::create_supplier(self, data).await
    }

    async fn get_kardex(&self) -> Result<Vec<KardexEntry>, ApiError> {
        super::kardex::get_kardex(self).await
    }
}

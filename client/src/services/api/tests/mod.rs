//! # API Client Tests
//!
//! Runs the real client against stub backends built with axum on `127.0.0.1:0`.
//! Delays are captured by a recording sleeper, so retry tests finish instantly.


use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::extract::State;
use axum::Router;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::retry::RecordingSleeper;
use super::ApiClient;
use crate::config::ClientConfig;
use crate::services::session::Session;

/// Request as seen by a stub backend.
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }
}

/// Backend that answers with a fixed sequence of responses, in order.
#[derive(Clone, Default)]
pub(crate) struct Script {
    responses: Arc<Mutex<VecDeque<(StatusCode, String)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    hits: Arc<AtomicUsize>,
}

impl Script {
    pub fn new(responses: &[(StatusCode, &str)]) -> Self {
        let script = Self::default();
        script.responses.lock().extend(
            responses
                .iter()
                .map(|(status, body)| (*status, body.to_string())),
        );
        script
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    pub async fn serve(&self) -> String {
        let router = Router::new().fallback(scripted).with_state(self.clone());
        spawn_backend(router).await
    }
}

async fn scripted(
    State(script): State<Script>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    script.hits.fetch_add(1, Ordering::SeqCst);
    script.requests.lock().push(RecordedRequest {
        method,
        uri,
        headers,
        body,
    });

    // Running past the script is a test bug; make it loud
    let (status, body) = script
        .responses
        .lock()
        .pop_front()
        .unwrap_or((StatusCode::IM_A_TEAPOT, r#""script exhausted""#.to_string()));

    (
        status,
        [(axum::http::header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

/// Serve `router` on an ephemeral port and return its base URL.
pub(crate) async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub backend address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub backend crashed");
    });
    format!("http://{}", addr)
}

/// Base URL of a port nothing listens on.
pub(crate) async fn unreachable_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}", addr)
}

/// Client pointed at `base_url` with an in-memory session and a recording sleeper.
pub(crate) fn test_client(base_url: &str) -> (ApiClient, Arc<RecordingSleeper>) {
    let session = Arc::new(Session::unpersisted());
    let sleeper = Arc::new(RecordingSleeper::default());
    let config = ClientConfig::default().with_api_url(base_url);
    let client = ApiClient::new(&config, session).with_sleeper(sleeper.clone());
    (client, sleeper)
}

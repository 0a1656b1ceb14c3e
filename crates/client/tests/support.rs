//! Shared scaffolding for client integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use tapverse_client::api::ApiClient;
use tapverse_client::auth::{MemorySessionStore, RedirectSink};
use tapverse_domain::{SessionData, SessionToken};
use wiremock::MockServer;

static INIT: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,tapverse_client=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Redirect sink that records every session-expiry notification.
#[derive(Default)]
pub struct RecordingRedirect {
    targets: Mutex<Vec<String>>,
}

impl RecordingRedirect {
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }
}

impl RedirectSink for RecordingRedirect {
    fn on_session_expired(&self, login_url: &str) {
        self.targets.lock().unwrap().push(login_url.to_string());
    }
}

/// Everything a facade test needs: mock server, wired client, and handles
/// to the session store and redirect recorder.
pub struct TestHarness {
    pub server: MockServer,
    pub client: ApiClient,
    pub store: Arc<MemorySessionStore>,
    pub redirect: Arc<RecordingRedirect>,
}

/// Harness with a stored session token.
pub async fn authenticated_harness() -> TestHarness {
    harness_with(Some("test-token")).await
}

/// Harness with an empty session store.
pub async fn anonymous_harness() -> TestHarness {
    harness_with(None).await
}

async fn harness_with(token: Option<&str>) -> TestHarness {
    init_tracing();

    let server = MockServer::start().await;
    let store = match token {
        Some(token) => Arc::new(MemorySessionStore::with_session(SessionData::token_only(
            SessionToken::new(token),
        ))),
        None => Arc::new(MemorySessionStore::new()),
    };
    let redirect = Arc::new(RecordingRedirect::default());
    let client = ApiClient::builder()
        .base_url(server.uri())
        .session_store(store.clone())
        .redirect_sink(redirect.clone())
        .build()
        .expect("client builds against the mock server");

    TestHarness { server, client, store, redirect }
}

/// Wrap a payload in the standard success envelope.
pub fn success_body(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "success": true, "data": data })
}

/// Standard failure envelope.
pub fn failure_body(message: &str) -> serde_json::Value {
    serde_json::json!({ "success": false, "error": message })
}

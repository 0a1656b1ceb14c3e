//! API client facade
//!
//! Configured once per process with the service base URL and an injected
//! session store. The client is cheap to clone and shares its transport,
//! store, and redirect sink across clones.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{multipart, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tapverse_domain::{ApiEnvelope, ApiSettings, EnvelopeError};
use tracing::{debug, instrument, warn};

use crate::auth::{NoopRedirect, RedirectSink, SessionStore};
use crate::errors::ApiError;
use crate::http::HttpTransport;

/// Where the 401 handler points the redirect sink.
const LOGIN_PATH: &str = "/login";

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL of the dashboard API, without a trailing slash
    /// (e.g., "https://dashboard.tapverse.io/api")
    pub base_url: String,
    /// Optional client-side timeout. The facade imposes none by default;
    /// long-running generation endpoints are expected to be slow.
    pub timeout: Option<Duration>,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self { base_url: "http://localhost:8000/api".to_string(), timeout: None }
    }
}

impl From<&ApiSettings> for ApiClientConfig {
    fn from(settings: &ApiSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            timeout: settings.timeout_seconds.map(Duration::from_secs),
        }
    }
}

/// The dashboard API client.
///
/// All resource groups ([`crate::resources`]) borrow this client; it owns
/// the transport, the session store, and the redirect sink.
#[derive(Clone)]
pub struct ApiClient {
    transport: HttpTransport,
    config: ApiClientConfig,
    store: Arc<dyn SessionStore>,
    redirect: Arc<dyn RedirectSink>,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Arguments
    ///
    /// * `config` - Base URL and optional timeout
    /// * `store` - Session store the bearer token is read from
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the base URL is empty or ends with a
    /// trailing slash, or if the transport cannot be built.
    pub fn new(config: ApiClientConfig, store: Arc<dyn SessionStore>) -> Result<Self, ApiError> {
        if config.base_url.trim().is_empty() {
            return Err(ApiError::Config("base URL must not be empty".to_string()));
        }
        if config.base_url.ends_with('/') {
            return Err(ApiError::Config(
                "base URL must not end with a trailing slash".to_string(),
            ));
        }

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let mut builder = HttpTransport::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let transport = builder.build()?;

        Ok(Self { transport, config, store, redirect: Arc::new(NoopRedirect) })
    }

    /// Create a builder for fluent configuration.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub(crate) fn session_store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Execute a GET request and decode the envelope payload.
    ///
    /// # Errors
    ///
    /// Returns an error when the transport fails, the status maps to an
    /// error, or the envelope is malformed.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let request = self.transport.request(Method::GET, self.endpoint_url(path));
        self.dispatch(request, path).await
    }

    /// Execute a POST request with a JSON body and decode the envelope
    /// payload.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<T, R>(&self, path: &str, body: &T) -> Result<R, ApiError>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.transport.request(Method::POST, self.endpoint_url(path)).json(body);
        self.dispatch(request, path).await
    }

    /// Execute a PUT request with a JSON body and decode the envelope
    /// payload.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<T, R>(&self, path: &str, body: &T) -> Result<R, ApiError>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.transport.request(Method::PUT, self.endpoint_url(path)).json(body);
        self.dispatch(request, path).await
    }

    /// Execute a DELETE request and decode the envelope payload.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let request = self.transport.request(Method::DELETE, self.endpoint_url(path));
        self.dispatch(request, path).await
    }

    /// Execute a multipart POST (binary uploads) and decode the envelope
    /// payload. The multipart content type replaces the default JSON header
    /// for this one request.
    #[instrument(skip(self, form), fields(path = %path))]
    pub async fn post_multipart<R: DeserializeOwned>(
        &self,
        path: &str,
        form: multipart::Form,
    ) -> Result<R, ApiError> {
        let request =
            self.transport.request(Method::POST, self.endpoint_url(path)).multipart(form);
        self.dispatch(request, path).await
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// The single request path: attach the bearer token, send once, decode.
    async fn dispatch<R: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &str,
    ) -> Result<R, ApiError> {
        let request = self.attach_bearer(request).await?;
        let response = self.transport.send(request).await?;
        let payload = self.decode(response, endpoint).await?;

        debug!(endpoint, "request completed");
        Ok(payload)
    }

    /// Attach `Authorization: Bearer <token>` when a session is active;
    /// otherwise the request goes out unauthenticated. No other side effects.
    async fn attach_bearer(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        match self.store.token().await? {
            Some(token) => {
                Ok(request.header(AUTHORIZATION, format!("Bearer {}", token.as_str())))
            }
            None => Ok(request),
        }
    }

    async fn decode<R: DeserializeOwned>(
        &self,
        response: Response,
        endpoint: &str,
    ) -> Result<R, ApiError> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            self.expire_session().await;
            return Err(ApiError::Unauthorized);
        }

        let body = response.text().await.map_err(|e| {
            ApiError::Network(format!("failed to read response body from {}: {}", endpoint, e))
        })?;

        match serde_json::from_str::<ApiEnvelope<R>>(&body) {
            Ok(envelope) => {
                if envelope.success && !status.is_success() {
                    return Err(ApiError::Envelope(format!(
                        "{} returned status {} with a success envelope",
                        endpoint, status
                    )));
                }

                envelope.into_result().map_err(|violation| match violation {
                    EnvelopeError::Failure(message) => ApiError::Api { message },
                    other => ApiError::Envelope(format!("{}: {}", endpoint, other)),
                })
            }
            Err(decode_error) => {
                if status.is_server_error() {
                    Err(ApiError::Server(status_message(endpoint, status, &body)))
                } else if status.is_client_error() {
                    Err(ApiError::Client(status_message(endpoint, status, &body)))
                } else {
                    Err(ApiError::Envelope(format!(
                        "{} returned an undecodable body: {}",
                        endpoint, decode_error
                    )))
                }
            }
        }
    }

    /// Global 401 handler: evict the session, notify the redirect sink.
    /// Runs for any endpoint; the caller still sees `ApiError::Unauthorized`.
    async fn expire_session(&self) {
        warn!("received 401; clearing session and redirecting to login");

        if let Err(error) = self.store.clear().await {
            warn!(%error, "failed to clear session after 401");
        }

        self.redirect.on_session_expired(LOGIN_PATH);
    }
}

fn status_message(endpoint: &str, status: StatusCode, body: &str) -> String {
    if body.is_empty() {
        format!("{} returned status {}", endpoint, status)
    } else {
        format!("{} returned status {}: {}", endpoint, status, body)
    }
}

/// Builder for the API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    store: Option<Arc<dyn SessionStore>>,
    redirect: Option<Arc<dyn RedirectSink>>,
}

impl ApiClientBuilder {
    /// Set the client configuration.
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the service base URL, keeping the rest of the configuration.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut config = self.config.take().unwrap_or_default();
        config.base_url = base_url.into();
        self.config = Some(config);
        self
    }

    /// Set the per-request timeout, keeping the rest of the configuration.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        let mut config = self.config.take().unwrap_or_default();
        config.timeout = Some(timeout);
        self.config = Some(config);
        self
    }

    /// Set the session store.
    pub fn session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Install a redirect sink for session-expiry notifications.
    pub fn redirect_sink(mut self, sink: Arc<dyn RedirectSink>) -> Self {
        self.redirect = Some(sink);
        self
    }

    /// Build the API client.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the session store is missing or the
    /// configuration is invalid.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let store =
            self.store.ok_or_else(|| ApiError::Config("session store not set".to_string()))?;

        let mut client = ApiClient::new(config, store)?;
        if let Some(redirect) = self.redirect {
            client.redirect = redirect;
        }

        Ok(client)
    }
}

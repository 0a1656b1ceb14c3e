//! SDK-wide error types
//!
//! Provides error classification for every facade and poller operation.

use thiserror::Error;

/// Categories of API errors, exposed so callers can drive their own
/// per-endpoint retry decisions (the facade itself never retries).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Session is missing or rejected (401, after eviction)
    Authentication,
    /// The server processed the request and reported `success: false`
    Application,
    /// Other 4xx responses - non-retryable
    Client,
    /// 5xx responses - retryable
    Server,
    /// Connection, timeout, and body-read failures - retryable
    Network,
    /// The server violated the envelope contract - non-retryable
    Contract,
    /// Local configuration problems - non-retryable
    Config,
}

/// Errors surfaced by the API client facade and the job poller probes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("session expired or unauthorized")]
    Unauthorized,

    #[error("{message}")]
    Api { message: String },

    #[error("client error: {0}")]
    Client(String),

    #[error("server error: {0}")]
    Server(String),

    #[error("malformed envelope: {0}")]
    Envelope(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Network(_) => ApiErrorCategory::Network,
            Self::Unauthorized => ApiErrorCategory::Authentication,
            Self::Api { .. } => ApiErrorCategory::Application,
            Self::Client(_) => ApiErrorCategory::Client,
            Self::Server(_) => ApiErrorCategory::Server,
            Self::Envelope(_) => ApiErrorCategory::Contract,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// Whether a caller-side retry of the same request could plausibly
    /// succeed. Application failures and contract violations never qualify.
    pub fn is_transient(&self) -> bool {
        matches!(self.category(), ApiErrorCategory::Network | ApiErrorCategory::Server)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(
            ApiError::Network("test".to_string()).category(),
            ApiErrorCategory::Network
        );
        assert_eq!(ApiError::Unauthorized.category(), ApiErrorCategory::Authentication);
        assert_eq!(
            ApiError::Api { message: "test".to_string() }.category(),
            ApiErrorCategory::Application
        );
        assert_eq!(
            ApiError::Server("test".to_string()).category(),
            ApiErrorCategory::Server
        );
        assert_eq!(
            ApiError::Envelope("test".to_string()).category(),
            ApiErrorCategory::Contract
        );
    }

    #[test]
    fn test_transient_classification() {
        assert!(ApiError::Network("test".to_string()).is_transient());
        assert!(ApiError::Server("test".to_string()).is_transient());
        assert!(!ApiError::Unauthorized.is_transient());
        assert!(!ApiError::Api { message: "test".to_string() }.is_transient());
        assert!(!ApiError::Client("test".to_string()).is_transient());
        assert!(!ApiError::Envelope("test".to_string()).is_transient());
        assert!(!ApiError::Config("test".to_string()).is_transient());
    }

    #[test]
    fn application_error_displays_server_message_verbatim() {
        let err = ApiError::Api { message: "Client not found".to_string() };
        assert_eq!(err.to_string(), "Client not found");
    }
}

//! The uniform response envelope spoken by every dashboard endpoint.
//!
//! Every JSON response body is `{ "success": true, "data": ... }` or
//! `{ "success": false, "error": "..." }`. The envelope invariants are
//! enforced here rather than assumed: a success body without `data`, or a
//! failure body without a usable `error` string, is a contract violation
//! that must fail fast instead of leaking `None` into caller state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Uniform `{success, data, error}` wrapper around every endpoint payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    /// Whether the server-side operation succeeded.
    pub success: bool,
    /// Payload; present exactly when `success` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable failure message; present exactly when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Ways an envelope can fail to produce a payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    /// The server reported an application-level failure.
    #[error("{0}")]
    Failure(String),

    /// `success` was true but `data` was absent or null.
    #[error("success envelope carried no data")]
    MissingData,

    /// `success` was false but `error` was absent or blank.
    #[error("failure envelope carried no error message")]
    BlankFailure,
}

impl<T> ApiEnvelope<T> {
    /// Wrap a payload in a success envelope.
    pub fn success(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    /// Wrap a message in a failure envelope.
    pub fn failure(error: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(error.into()) }
    }

    /// Enforce the envelope invariants and extract the payload.
    ///
    /// # Errors
    ///
    /// - [`EnvelopeError::Failure`] when the server reported `success: false`
    ///   with a non-empty message
    /// - [`EnvelopeError::MissingData`] / [`EnvelopeError::BlankFailure`] when
    ///   the server violated the envelope contract
    pub fn into_result(self) -> Result<T, EnvelopeError> {
        if self.success {
            self.data.ok_or(EnvelopeError::MissingData)
        } else {
            match self.error {
                Some(message) if !message.trim().is_empty() => {
                    Err(EnvelopeError::Failure(message))
                }
                _ => Err(EnvelopeError::BlankFailure),
            }
        }
    }
}

//! Configuration structures

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, Result};

/// Client SDK configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiSettings,
    pub polling: PollSettings,
    pub session: SessionSettings,
}

/// API endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the dashboard API, without a trailing slash.
    pub base_url: String,
    /// Request timeout in seconds. `None` means no client-side timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

/// Job polling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollSettings {
    /// Seconds between consecutive status checks.
    pub interval_seconds: u64,
    /// Consecutive transient failures tolerated before a job is abandoned.
    pub max_transient_failures: u32,
    /// Wall-clock cap on a single job poll, in seconds.
    pub max_poll_duration_seconds: u64,
}

/// Session persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Path for the on-disk session file. `None` keeps sessions in memory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiSettings {
                base_url: "http://localhost:8000/api".to_string(),
                timeout_seconds: None,
            },
            polling: PollSettings {
                interval_seconds: 5,
                max_transient_failures: 5,
                max_poll_duration_seconds: 600,
            },
            session: SessionSettings { store_path: None },
        }
    }
}

impl Config {
    /// Validate configuration values
    ///
    /// # Errors
    /// Returns `DomainError::Config` if any value is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(DomainError::Config("api.base_url must not be empty".to_string()));
        }
        if self.api.base_url.ends_with('/') {
            return Err(DomainError::Config(
                "api.base_url must not end with a trailing slash".to_string(),
            ));
        }
        if self.polling.interval_seconds == 0 {
            return Err(DomainError::Config(
                "polling.interval_seconds must be greater than zero".to_string(),
            ));
        }
        if self.polling.max_transient_failures == 0 {
            return Err(DomainError::Config(
                "polling.max_transient_failures must be greater than zero".to_string(),
            ));
        }
        if self.polling.max_poll_duration_seconds < self.polling.interval_seconds {
            return Err(DomainError::Config(
                "polling.max_poll_duration_seconds must cover at least one interval".to_string(),
            ));
        }
        Ok(())
    }
}

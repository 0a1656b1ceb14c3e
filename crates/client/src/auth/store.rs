//! Session persistence
//!
//! Stores the bearer token and cached user profile between requests.

use std::path::PathBuf;

use async_trait::async_trait;
use tapverse_domain::{SessionData, SessionToken, UserProfile};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::errors::ApiError;

/// Where the current session lives.
///
/// This trait allows dependency injection and testing with mock stores.
/// Implementations must be safe for concurrent access; the facade reads the
/// token on every request.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Current bearer token, if a session is active.
    async fn token(&self) -> Result<Option<SessionToken>, ApiError>;

    /// Cached user profile, if one was stored with the session.
    async fn profile(&self) -> Result<Option<UserProfile>, ApiError>;

    /// Replace the stored session.
    async fn store(&self, session: SessionData) -> Result<(), ApiError>;

    /// Remove the stored session, token and profile together.
    async fn clear(&self) -> Result<(), ApiError>;
}

/// In-memory session store; state lives for the life of the process.
#[derive(Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<SessionData>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a session, mostly useful in tests.
    pub fn with_session(session: SessionData) -> Self {
        Self { session: RwLock::new(Some(session)) }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn token(&self) -> Result<Option<SessionToken>, ApiError> {
        Ok(self.session.read().await.as_ref().map(|s| s.token.clone()))
    }

    async fn profile(&self) -> Result<Option<UserProfile>, ApiError> {
        Ok(self.session.read().await.as_ref().and_then(|s| s.profile.clone()))
    }

    async fn store(&self, session: SessionData) -> Result<(), ApiError> {
        *self.session.write().await = Some(session);
        Ok(())
    }

    async fn clear(&self) -> Result<(), ApiError> {
        *self.session.write().await = None;
        Ok(())
    }
}

/// File-backed session store: the session survives process restarts.
///
/// The file is read once at construction and rewritten on every store or
/// clear. A missing or corrupt file means "no session", never an error.
pub struct FileSessionStore {
    path: PathBuf,
    cache: RwLock<Option<SessionData>>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cache = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<SessionData>(&contents) {
                Ok(session) => Some(session),
                Err(error) => {
                    warn!(path = %path.display(), %error, "ignoring corrupt session file");
                    None
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "no session file found");
                None
            }
        };

        Self { path, cache: RwLock::new(cache) }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn token(&self) -> Result<Option<SessionToken>, ApiError> {
        Ok(self.cache.read().await.as_ref().map(|s| s.token.clone()))
    }

    async fn profile(&self) -> Result<Option<UserProfile>, ApiError> {
        Ok(self.cache.read().await.as_ref().and_then(|s| s.profile.clone()))
    }

    async fn store(&self, session: SessionData) -> Result<(), ApiError> {
        let contents = serde_json::to_string_pretty(&session)
            .map_err(|e| ApiError::Config(format!("failed to serialize session: {}", e)))?;

        tokio::fs::write(&self.path, contents).await.map_err(|e| {
            ApiError::Config(format!(
                "failed to write session file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        *self.cache.write().await = Some(session);
        Ok(())
    }

    async fn clear(&self) -> Result<(), ApiError> {
        *self.cache.write().await = None;

        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApiError::Config(format!(
                "failed to remove session file {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> SessionData {
        SessionData {
            token: SessionToken::new("tok-1"),
            profile: Some(UserProfile {
                id: "u-1".to_string(),
                email: "ops@acme.test".to_string(),
                name: Some("Ops".to_string()),
                role: "admin".to_string(),
                agency_id: None,
            }),
        }
    }

    #[tokio::test]
    async fn memory_store_round_trip() {
        let store = MemorySessionStore::new();
        assert!(store.token().await.unwrap().is_none());

        store.store(sample_session()).await.unwrap();
        assert_eq!(store.token().await.unwrap(), Some(SessionToken::new("tok-1")));
        assert!(store.profile().await.unwrap().is_some());

        store.clear().await.unwrap();
        assert!(store.token().await.unwrap().is_none());
        assert!(store.profile().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileSessionStore::new(&path);
        store.store(sample_session()).await.unwrap();

        // A fresh instance reads the same session back from disk.
        let reopened = FileSessionStore::new(&path);
        assert_eq!(reopened.token().await.unwrap(), Some(SessionToken::new("tok-1")));
    }

    #[tokio::test]
    async fn file_store_treats_corrupt_file_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = FileSessionStore::new(&path);
        assert!(store.token().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn file_store_clear_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileSessionStore::new(&path);
        store.store(sample_session()).await.unwrap();
        assert!(path.exists());

        store.clear().await.unwrap();
        assert!(!path.exists());

        // Clearing again is not an error.
        store.clear().await.unwrap();
    }
}

//! Authentication operations

use serde_json::json;
use tapverse_domain::{LoginRequest, LoginResponse, SessionData, UserProfile};
use tracing::{debug, instrument, warn};

use crate::api::ApiClient;
use crate::errors::ApiError;

/// Operations on `/auth`.
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a session.
    ///
    /// On success the token and profile are written to the session store,
    /// so every later request picks up the bearer header automatically.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<UserProfile, ApiError> {
        let response: LoginResponse = self.client.post("/auth/login", request).await?;
        let profile = response.user.clone();
        let session = SessionData {
            token: response.token,
            profile: Some(response.user),
        };
        self.client.session_store().store(session).await?;
        debug!(user_id = %profile.id, "login succeeded, session stored");
        Ok(profile)
    }

    /// Invalidate the session server-side and locally.
    ///
    /// The local session is cleared even when the server call fails; a
    /// half-dead token is worse than an extra login prompt.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result: Result<serde_json::Value, ApiError> =
            self.client.post("/auth/logout", &json!({})).await;
        if let Err(error) = self.client.session_store().clear().await {
            warn!(%error, "failed to clear session during logout");
        }
        result.map(|_| ())
    }

    /// Fetch the current user's profile and refresh the cached copy.
    #[instrument(skip(self))]
    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        let profile: UserProfile = self.client.get("/auth/me").await?;
        if let Some(token) = self.client.session_store().token().await? {
            let session = SessionData {
                token,
                profile: Some(profile.clone()),
            };
            self.client.session_store().store(session).await?;
        }
        Ok(profile)
    }
}

//! Assistant chat operations

use tapverse_domain::{AssistantReply, ChatSession, CreateSessionRequest, SendMessageRequest};
use tracing::{debug, instrument};
use urlencoding::encode;

use crate::api::ApiClient;
use crate::errors::ApiError;

/// Operations on `/chat`.
pub struct ChatApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ChatApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch every chat session.
    #[instrument(skip(self))]
    pub async fn sessions(&self) -> Result<Vec<ChatSession>, ApiError> {
        self.client.get("/chat/sessions").await
    }

    /// Open a new conversation thread.
    #[instrument(skip(self, request))]
    pub async fn create_session(&self, request: &CreateSessionRequest) -> Result<ChatSession, ApiError> {
        let session: ChatSession = self.client.post("/chat/sessions", request).await?;
        debug!(session_id = %session.id, "chat session created");
        Ok(session)
    }

    /// Send one message and wait for the assistant's reply.
    #[instrument(skip(self, request), fields(session_id = %session_id))]
    pub async fn send_message(
        &self,
        session_id: &str,
        request: &SendMessageRequest,
    ) -> Result<AssistantReply, ApiError> {
        let path = format!("/chat/sessions/{}/messages", encode(session_id));
        self.client.post(&path, request).await
    }
}

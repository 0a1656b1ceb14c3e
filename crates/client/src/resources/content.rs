//! Generated content operations

use tapverse_domain::{ContentItem, ContentKind, GenerateContentRequest, UpdateContentRequest};
use tracing::{debug, instrument};
use urlencoding::encode;

use crate::api::ApiClient;
use crate::errors::ApiError;

/// Operations on `/content`.
pub struct ContentApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ContentApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch stored content, optionally narrowed to one kind.
    #[instrument(skip(self))]
    pub async fn get_all(&self, kind: Option<ContentKind>) -> Result<Vec<ContentItem>, ApiError> {
        let path = match kind {
            Some(kind) => format!("/content?kind={}", kind.as_str()),
            None => "/content".to_string(),
        };
        self.client.get(&path).await
    }

    /// Fetch one content item by id.
    #[instrument(skip(self), fields(content_id = %id))]
    pub async fn get_by_id(&self, id: &str) -> Result<ContentItem, ApiError> {
        let path = format!("/content/{}", encode(id));
        self.client.get(&path).await
    }

    /// Ask the generation service for a new piece of content.
    #[instrument(skip(self, request), fields(project_id = %request.project_id, kind = ?request.kind))]
    pub async fn generate(&self, request: &GenerateContentRequest) -> Result<ContentItem, ApiError> {
        let item: ContentItem = self.client.post("/content/generate", request).await?;
        debug!(content_id = %item.id, "content generated");
        Ok(item)
    }

    /// Edit the title or body of a stored item.
    #[instrument(skip(self, request), fields(content_id = %id))]
    pub async fn update(&self, id: &str, request: &UpdateContentRequest) -> Result<ContentItem, ApiError> {
        let path = format!("/content/{}", encode(id));
        self.client.put(&path, request).await
    }

    /// Delete a content item.
    #[instrument(skip(self), fields(content_id = %id))]
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/content/{}", encode(id));
        self.client.delete::<serde_json::Value>(&path).await?;
        debug!(content_id = %id, "content deleted");
        Ok(())
    }
}

//! Image generation operations

use async_trait::async_trait;
use tapverse_domain::{GeneratedImage, ImageGenerationRequest, ImageJobAck, ImageStatusPayload, JobState};
use tracing::{debug, instrument};
use urlencoding::encode;

use crate::api::ApiClient;
use crate::errors::ApiError;
use crate::polling::StatusProbe;

/// Operations on `/images`.
pub struct ImagesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ImagesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Start an image generation job.
    #[instrument(skip(self, request))]
    pub async fn generate(&self, request: &ImageGenerationRequest) -> Result<ImageJobAck, ApiError> {
        let ack: ImageJobAck = self.client.post("/images/generate", request).await?;
        debug!(image_id = %ack.image_id, "image generation started");
        Ok(ack)
    }

    /// Read the current status of one job.
    #[instrument(skip(self), fields(image_id = %id))]
    pub async fn check_status(&self, id: &str) -> Result<ImageStatusPayload, ApiError> {
        let path = format!("/images/status/{}", encode(id));
        self.client.get(&path).await
    }

    /// Fetch every generated image.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<GeneratedImage>, ApiError> {
        self.client.get("/images").await
    }

    /// Probe handle for driving a [`crate::polling::JobPoller`].
    pub fn status_probe(&self) -> ImageStatusProbe {
        ImageStatusProbe {
            client: self.client.clone(),
        }
    }
}

/// Polls `GET /images/status/{id}` on behalf of the job poller.
#[derive(Clone)]
pub struct ImageStatusProbe {
    client: ApiClient,
}

#[async_trait]
impl StatusProbe for ImageStatusProbe {
    async fn check(&self, job_id: &str) -> Result<JobState, ApiError> {
        let payload = self.client.images().check_status(job_id).await?;
        Ok(payload.into_job_state(job_id))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tapverse_domain::{ImageGenerationRequest, JobResult, JobStatus, SessionData, SessionToken};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::ApiClient;
    use crate::auth::MemorySessionStore;
    use crate::polling::StatusProbe;

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::builder()
            .base_url(server.uri())
            .session_store(Arc::new(MemorySessionStore::with_session(
                SessionData::token_only(SessionToken::new("test-token")),
            )))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn generate_returns_the_ack_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/images/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": { "image_id": "img-1" }
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let request = ImageGenerationRequest {
            prompt: "Sunny rooftop brunch".to_string(),
            style: Some("photo".to_string()),
            project_id: None,
        };
        let ack = client.images().generate(&request).await.unwrap();
        assert_eq!(ack.image_id, "img-1");
    }

    #[tokio::test]
    async fn probe_reports_a_failed_job_as_ok_with_failure_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/images/status/img-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": { "status": "failed", "error": "NSFW prompt rejected" }
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let probe = client.images().status_probe();
        let state = probe.check("img-1").await.unwrap();

        assert_eq!(state.status, JobStatus::Failed);
        assert_eq!(
            state.result,
            Some(JobResult::Failed {
                message: "NSFW prompt rejected".to_string()
            })
        );
    }
}

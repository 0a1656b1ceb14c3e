//! Video generation operations

use async_trait::async_trait;
use tapverse_domain::{JobState, VideoGenerationRequest, VideoJobAck, VideoRecord, VideoStatusPayload};
use tracing::{debug, instrument};
use urlencoding::encode;

use crate::api::ApiClient;
use crate::errors::ApiError;
use crate::polling::StatusProbe;

/// Operations on `/video`.
pub struct VideoApi<'a> {
    client: &'a ApiClient,
}

impl<'a> VideoApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Start a video generation job.
    ///
    /// The acknowledgement carries only the job id; the job is processing
    /// from the moment the ack arrives, there is no status field to read.
    #[instrument(skip(self, request), fields(avatar_id = %request.avatar_id))]
    pub async fn generate_script(
        &self,
        request: &VideoGenerationRequest,
    ) -> Result<VideoJobAck, ApiError> {
        let ack: VideoJobAck = self.client.post("/video/generate", request).await?;
        debug!(video_id = %ack.video_id, "video generation started");
        Ok(ack)
    }

    /// Read the current status of one job.
    #[instrument(skip(self), fields(video_id = %id))]
    pub async fn check_status(&self, id: &str) -> Result<VideoStatusPayload, ApiError> {
        let path = format!("/video/status/{}", encode(id));
        self.client.get(&path).await
    }

    /// Fetch every video the agency has generated.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<VideoRecord>, ApiError> {
        self.client.get("/video").await
    }

    /// Probe handle for driving a [`crate::polling::JobPoller`].
    pub fn status_probe(&self) -> VideoStatusProbe {
        VideoStatusProbe {
            client: self.client.clone(),
        }
    }
}

/// Polls `GET /video/status/{id}` on behalf of the job poller.
#[derive(Clone)]
pub struct VideoStatusProbe {
    client: ApiClient,
}

#[async_trait]
impl StatusProbe for VideoStatusProbe {
    async fn check(&self, job_id: &str) -> Result<JobState, ApiError> {
        let payload = self.client.video().check_status(job_id).await?;
        Ok(payload.into_job_state(job_id))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tapverse_domain::{JobStatus, SessionData, SessionToken, VideoGenerationRequest};
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
            .and(path("/video/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": { "video_id": "v1" }
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let request = VideoGenerationRequest {
            script: "Welcome to Acme.".to_string(),
            avatar_id: "av-1".to_string(),
            project_id: None,
        };
        let ack = client.video().generate_script(&request).await.unwrap();
        assert_eq!(ack.video_id, "v1");
    }

    #[tokio::test]
    async fn status_probe_folds_the_payload_into_job_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/video/status/v1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": {
                    "status": "completed",
                    "video_url": "https://cdn.tapverse.io/v1.mp4",
                    "thumbnail_url": "https://cdn.tapverse.io/v1.jpg"
                }
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let probe = client.video().status_probe();
        let state = probe.check("v1").await.unwrap();

        assert_eq!(state.job_id, "v1");
        assert_eq!(state.status, JobStatus::Completed);
        assert!(state.result.is_some());
    }
}

//! Avatar management
//!
//! Avatar creation is the one endpoint that does not speak JSON on the way
//! in: the reference video is uploaded as `multipart/form-data`. Responses
//! still use the standard envelope.

use async_trait::async_trait;
use reqwest::multipart;
use serde_json::json;
use tapverse_domain::{AvatarRecord, AvatarStatusPayload, JobState};
use tracing::{debug, instrument};
use urlencoding::encode;

use crate::api::ApiClient;
use crate::errors::ApiError;
use crate::polling::StatusProbe;

/// Reference-video payload for avatar creation.
#[derive(Debug, Clone)]
pub struct AvatarVideoUpload {
    /// File name reported in the multipart part.
    pub file_name: String,
    /// MIME type of the video, e.g. `video/mp4`.
    pub mime_type: String,
    /// Raw video bytes.
    pub bytes: Vec<u8>,
}

/// Operations on `/avatars`.
pub struct AvatarsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AvatarsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Upload a reference video and start avatar training.
    #[instrument(skip(self, video), fields(name = %name, bytes = video.bytes.len()))]
    pub async fn create(&self, name: &str, video: AvatarVideoUpload) -> Result<AvatarRecord, ApiError> {
        let part = multipart::Part::bytes(video.bytes)
            .file_name(video.file_name)
            .mime_str(&video.mime_type)
            .map_err(|e| ApiError::Config(format!("invalid avatar video mime type: {}", e)))?;
        let form = multipart::Form::new()
            .text("name", name.to_string())
            .part("video", part);

        let record: AvatarRecord = self.client.post_multipart("/avatars", form).await?;
        debug!(avatar_id = %record.id, "avatar upload accepted");
        Ok(record)
    }

    /// Ask the server to refresh and report one avatar's training status.
    #[instrument(skip(self), fields(avatar_id = %id))]
    pub async fn check_status(&self, id: &str) -> Result<AvatarStatusPayload, ApiError> {
        let path = format!("/avatars/{}/check-status", encode(id));
        self.client.post(&path, &json!({})).await
    }

    /// Fetch every avatar.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<AvatarRecord>, ApiError> {
        self.client.get("/avatars").await
    }

    /// Delete an avatar.
    #[instrument(skip(self), fields(avatar_id = %id))]
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/avatars/{}", encode(id));
        self.client.delete::<serde_json::Value>(&path).await?;
        debug!(avatar_id = %id, "avatar deleted");
        Ok(())
    }

    /// Probe handle for driving a [`crate::polling::JobPoller`].
    pub fn status_probe(&self) -> AvatarStatusProbe {
        AvatarStatusProbe {
            client: self.client.clone(),
        }
    }
}

/// Polls `POST /avatars/{id}/check-status` on behalf of the job poller.
///
/// Unlike video and images this probe issues a POST; the server refreshes
/// its copy of the provider state as a side effect of the check.
#[derive(Clone)]
pub struct AvatarStatusProbe {
    client: ApiClient,
}

#[async_trait]
impl StatusProbe for AvatarStatusProbe {
    async fn check(&self, job_id: &str) -> Result<JobState, ApiError> {
        let payload = self.client.avatars().check_status(job_id).await?;
        Ok(payload.into_job_state(job_id))
    }
}

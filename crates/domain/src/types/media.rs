//! Media generation types: video, image, and avatar jobs
//!
//! Video, image, and avatar generation run server-side against third-party
//! providers and complete asynchronously. The start call acknowledges with a
//! job identifier; progress is observed through status endpoints that all
//! report the same `processing | completed | failed` vocabulary.

use serde::{Deserialize, Serialize};

/// Remote job status as reported by every status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Work is still running server-side.
    Processing,
    /// Work finished and produced a result.
    Completed,
    /// The server-side job itself failed (distinct from a failed status check).
    Failed,
}

impl JobStatus {
    /// Whether this status admits no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Terminal payload attached to a job when it leaves `processing`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobResult {
    /// The job completed; URLs point at the produced artifacts.
    Completed {
        /// Primary artifact URL (video, image, or avatar).
        url: Option<String>,
        /// Secondary artifact URL when the endpoint provides one (thumbnails).
        thumbnail_url: Option<String>,
    },
    /// The job failed server-side with the given message.
    Failed {
        /// Failure description from the provider.
        message: String,
    },
}

/// Client-side record tracking a long-running generation job.
///
/// Mutated only by the poller; once `status` leaves
/// [`JobStatus::Processing`] no further transitions occur.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobState {
    /// Server-issued job identifier.
    pub job_id: String,
    /// Last observed status.
    pub status: JobStatus,
    /// Terminal payload, attached on transition out of `processing`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<JobResult>,
}

impl JobState {
    /// Fresh handle for a job the server just acknowledged.
    pub fn processing(job_id: impl Into<String>) -> Self {
        Self { job_id: job_id.into(), status: JobStatus::Processing, result: None }
    }
}

// ============================================================================
// Video
// ============================================================================

/// Request body for starting a video generation job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoGenerationRequest {
    /// Script or talking points the avatar should present.
    pub script: String,
    /// Avatar to render the video with.
    pub avatar_id: String,
    /// Optional project to file the finished video under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

/// Acknowledgement returned by `POST /video/generate`.
///
/// Carries no status field: receipt of the identifier alone means the job
/// is processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoJobAck {
    /// Identifier to poll `GET /video/status/{id}` with.
    pub video_id: String,
}

/// Body of `GET /video/status/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoStatusPayload {
    pub status: JobStatus,
    /// Present once `status` is `completed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Present once `status` is `failed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VideoStatusPayload {
    /// Fold this status report into the job-tracking shape the poller uses.
    pub fn into_job_state(self, job_id: impl Into<String>) -> JobState {
        let result = match self.status {
            JobStatus::Processing => None,
            JobStatus::Completed => Some(JobResult::Completed {
                url: self.video_url,
                thumbnail_url: self.thumbnail_url,
            }),
            JobStatus::Failed => Some(JobResult::Failed {
                message: self.error.unwrap_or_else(unreported_failure),
            }),
        };
        JobState { job_id: job_id.into(), status: self.status, result }
    }
}

/// A finished (or failed) video as listed by `GET /video`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// ============================================================================
// Images
// ============================================================================

/// Request body for starting an image generation job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageGenerationRequest {
    /// Prompt forwarded to the image provider.
    pub prompt: String,
    /// Provider-side style preset, when the campaign calls for one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

/// Acknowledgement returned by `POST /images/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageJobAck {
    /// Identifier to poll `GET /images/status/{id}` with.
    pub image_id: String,
}

/// Body of `GET /images/status/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageStatusPayload {
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ImageStatusPayload {
    /// Fold this status report into the job-tracking shape the poller uses.
    pub fn into_job_state(self, job_id: impl Into<String>) -> JobState {
        let result = match self.status {
            JobStatus::Processing => None,
            JobStatus::Completed => {
                Some(JobResult::Completed { url: self.image_url, thumbnail_url: None })
            }
            JobStatus::Failed => Some(JobResult::Failed {
                message: self.error.unwrap_or_else(unreported_failure),
            }),
        };
        JobState { job_id: job_id.into(), status: self.status, result }
    }
}

/// A generated image as listed by `GET /images`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub id: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// ============================================================================
// Avatars
// ============================================================================

/// A presenter avatar created from an uploaded reference video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarRecord {
    pub id: String,
    pub name: String,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Body of `POST /avatars/{id}/check-status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarStatusPayload {
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AvatarStatusPayload {
    /// Fold this status report into the job-tracking shape the poller uses.
    pub fn into_job_state(self, job_id: impl Into<String>) -> JobState {
        let result = match self.status {
            JobStatus::Processing => None,
            JobStatus::Completed => {
                Some(JobResult::Completed { url: self.avatar_url, thumbnail_url: None })
            }
            JobStatus::Failed => Some(JobResult::Failed {
                message: self.error.unwrap_or_else(unreported_failure),
            }),
        };
        JobState { job_id: job_id.into(), status: self.status, result }
    }
}

fn unreported_failure() -> String {
    "job failed without a reported reason".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_status_wire_values_are_lowercase() {
        assert_eq!(serde_json::to_string(&JobStatus::Processing).unwrap(), r#""processing""#);
        assert_eq!(serde_json::to_string(&JobStatus::Completed).unwrap(), r#""completed""#);
        assert_eq!(serde_json::to_string(&JobStatus::Failed).unwrap(), r#""failed""#);
    }

    #[test]
    fn terminal_statuses() {
        assert!(!JobStatus::Processing.is_terminal());
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
    }

    #[test]
    fn video_status_payload_tolerates_missing_urls() {
        let payload: VideoStatusPayload =
            serde_json::from_str(r#"{"status":"processing"}"#).unwrap();

        assert_eq!(payload.status, JobStatus::Processing);
        assert!(payload.video_url.is_none());
        assert!(payload.error.is_none());
    }

    #[test]
    fn fresh_job_state_is_processing() {
        let state = JobState::processing("v1");

        assert_eq!(state.job_id, "v1");
        assert_eq!(state.status, JobStatus::Processing);
        assert!(state.result.is_none());
    }

    #[test]
    fn completed_video_payload_carries_urls_into_job_state() {
        let payload = VideoStatusPayload {
            status: JobStatus::Completed,
            video_url: Some("https://cdn.tapverse.io/v1.mp4".to_string()),
            thumbnail_url: Some("https://cdn.tapverse.io/v1.jpg".to_string()),
            error: None,
        };

        let state = payload.into_job_state("v1");
        assert_eq!(state.status, JobStatus::Completed);
        assert_eq!(
            state.result,
            Some(JobResult::Completed {
                url: Some("https://cdn.tapverse.io/v1.mp4".to_string()),
                thumbnail_url: Some("https://cdn.tapverse.io/v1.jpg".to_string()),
            })
        );
    }

    #[test]
    fn failed_payload_without_error_gets_placeholder_message() {
        let payload = ImageStatusPayload {
            status: JobStatus::Failed,
            image_url: None,
            error: None,
        };

        let state = payload.into_job_state("img-1");
        match state.result {
            Some(JobResult::Failed { message }) => {
                assert!(!message.is_empty());
            }
            other => panic!("expected failed result, got {:?}", other),
        }
    }
}

//! Generated marketing content

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of content the generation service produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    BlogPost,
    AdCopy,
    VideoScript,
}

impl ContentKind {
    /// Wire value, as used in query strings (`?kind=blog_post`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BlogPost => "blog_post",
            Self::AdCopy => "ad_copy",
            Self::VideoScript => "video_script",
        }
    }
}

/// A piece of generated content stored for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub project_id: String,
    pub kind: ContentKind,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /content/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub project_id: String,
    pub kind: ContentKind,
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

/// Request body for `PUT /content/{id}`; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

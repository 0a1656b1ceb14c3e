//! Domain types for the dashboard API surface
//!
//! One module per resource family; wire shapes follow the dashboard's REST
//! contract (`snake_case` JSON, string identifiers minted server-side).

pub mod auth;
pub mod chat;
pub mod client;
pub mod content;
pub mod keyword;
pub mod media;
pub mod project;
pub mod task;

// Re-export the frequently used types for convenience
pub use auth::{LoginRequest, LoginResponse, SessionData, SessionToken, UserProfile};
pub use chat::{AssistantReply, ChatMessage, ChatRole, ChatSession, CreateSessionRequest, SendMessageRequest};
pub use client::{ClientRecord, CreateClientRequest, UpdateClientRequest};
pub use content::{ContentItem, ContentKind, GenerateContentRequest, UpdateContentRequest};
pub use keyword::{KeywordResearchRequest, KeywordRow};
pub use media::{
    AvatarRecord, AvatarStatusPayload, GeneratedImage, ImageGenerationRequest, ImageJobAck,
    ImageStatusPayload, JobResult, JobState, JobStatus, VideoGenerationRequest, VideoJobAck,
    VideoRecord, VideoStatusPayload,
};
pub use project::{CreateProjectRequest, Project, ProjectStatus, UpdateProjectRequest};
pub use task::{CreateTaskRequest, RoadmapTask, TaskStatus, UpdateTaskRequest};

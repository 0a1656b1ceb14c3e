//! Resource method groups
//!
//! One accessor per backend resource family. Each group is a borrow-cheap
//! view over the shared [`ApiClient`]; every method funnels through the
//! facade's single request path, so bearer attachment, envelope decoding,
//! and the 401 handler apply uniformly.

pub mod auth;
pub mod avatars;
pub mod chat;
pub mod clients;
pub mod content;
pub mod images;
pub mod keywords;
pub mod projects;
pub mod tasks;
pub mod video;

pub use auth::AuthApi;
pub use avatars::{AvatarStatusProbe, AvatarVideoUpload, AvatarsApi};
pub use chat::ChatApi;
pub use clients::ClientsApi;
pub use content::ContentApi;
pub use images::{ImageStatusProbe, ImagesApi};
pub use keywords::KeywordsApi;
pub use projects::ProjectsApi;
pub use tasks::TasksApi;
pub use video::{VideoApi, VideoStatusProbe};

use crate::api::ApiClient;
use crate::export::ExportLinks;

impl ApiClient {
    /// Login, logout, and profile operations.
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// Client account CRUD.
    pub fn clients(&self) -> ClientsApi<'_> {
        ClientsApi::new(self)
    }

    /// Campaign project CRUD.
    pub fn projects(&self) -> ProjectsApi<'_> {
        ProjectsApi::new(self)
    }

    /// Generated content operations.
    pub fn content(&self) -> ContentApi<'_> {
        ContentApi::new(self)
    }

    /// Video generation jobs.
    pub fn video(&self) -> VideoApi<'_> {
        VideoApi::new(self)
    }

    /// Image generation jobs.
    pub fn images(&self) -> ImagesApi<'_> {
        ImagesApi::new(self)
    }

    /// Avatar uploads and processing status.
    pub fn avatars(&self) -> AvatarsApi<'_> {
        AvatarsApi::new(self)
    }

    /// Assistant chat sessions.
    pub fn chat(&self) -> ChatApi<'_> {
        ChatApi::new(self)
    }

    /// Keyword research.
    pub fn keywords(&self) -> KeywordsApi<'_> {
        KeywordsApi::new(self)
    }

    /// Roadmap task CRUD.
    pub fn tasks(&self) -> TasksApi<'_> {
        TasksApi::new(self)
    }

    /// Builders for export download URLs. These never issue HTTP; exports
    /// are opened by direct navigation.
    pub fn exports(&self) -> ExportLinks {
        ExportLinks::new(self.base_url())
    }
}

//! # Tapverse Client
//!
//! SDK for the Tapverse marketing-agency dashboard backend.
//!
//! This crate contains:
//! - The HTTP facade ([`api::ApiClient`]) with bearer auth, the JSON
//!   envelope contract, and the global 401 handler
//! - Resource method groups (clients, projects, content, video, images,
//!   avatars, chat, keywords, tasks)
//! - Session storage (in-memory and on-disk) and redirect notification
//! - The fixed-interval job poller for asynchronous generation jobs
//! - Export URL builders and the configuration loader
//!
//! ## Architecture
//! - Wire types live in `tapverse-domain`; this crate owns all I/O
//! - Every JSON endpoint flows through one request path, so cross-cutting
//!   policy (auth header, envelope enforcement, 401 eviction) is uniform

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod export;
pub mod http;
pub mod polling;
pub mod resources;

// Re-export commonly used items
pub use api::*;
pub use auth::*;
pub use config::*;
pub use errors::*;
pub use export::*;
pub use http::*;
pub use polling::*;
pub use resources::*;

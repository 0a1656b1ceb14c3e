//! # Tapverse Domain
//!
//! Data types shared across the Tapverse client SDK.
//!
//! This crate contains:
//! - The API envelope every dashboard endpoint speaks
//! - Resource payload types (clients, projects, content, media, chat, ...)
//! - Session and job-tracking types
//! - Configuration structures
//! - Domain error types
//!
//! ## Architecture
//! - No dependencies on other Tapverse crates
//! - Only external dependencies allowed
//! - Pure data structures; all I/O lives in `tapverse-client`

pub mod config;
pub mod envelope;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use envelope::*;
pub use errors::*;
pub use types::*;

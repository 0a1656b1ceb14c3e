//! Configuration loading
//!
//! Environment variables win; a TOML file is the fallback. The parsed
//! [`tapverse_domain::Config`] feeds [`crate::api::ApiClientConfig`] and
//! [`crate::polling::PollingConfig`].

mod loader;

pub use loader::{load, load_from_env, load_from_file, probe_config_paths};

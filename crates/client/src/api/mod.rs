//! Dashboard API facade
//!
//! One configured client per process. Every resource method funnels through
//! the same request path: bearer attachment from the session store, a single
//! transport attempt, envelope decoding, and the global 401 handler.

pub mod client;

pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig};

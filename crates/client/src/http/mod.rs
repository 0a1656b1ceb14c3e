//! HTTP transport
//!
//! Thin reqwest wrapper the facade sends every request through.

pub mod transport;

pub use transport::{HttpTransport, HttpTransportBuilder};

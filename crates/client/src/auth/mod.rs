//! Session storage and auth events
//!
//! The session store is the single shared mutable resource in the SDK: the
//! outbound request path reads it, and only login success, logout, and the
//! global 401 handler write it. Applications inject the store (and
//! optionally a redirect sink) when constructing the facade, which keeps
//! auth state explicit and testable instead of ambient.

pub mod events;
pub mod store;

pub use events::{NoopRedirect, RedirectSink};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};

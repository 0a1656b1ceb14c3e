//! Auth event hooks

/// Receiver for session-expiry notifications.
///
/// When any request comes back 401 the facade clears the session and calls
/// `on_session_expired` with the login entry point. A desktop shell would
/// navigate its webview there; a CLI might print a re-login hint. The
/// default sink does nothing.
pub trait RedirectSink: Send + Sync {
    fn on_session_expired(&self, login_url: &str);
}

/// Sink that ignores session expiry.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRedirect;

impl RedirectSink for NoopRedirect {
    fn on_session_expired(&self, _login_url: &str) {}
}

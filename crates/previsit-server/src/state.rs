use std::sync::Arc;
use std::time::Duration;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Read-only after startup; requests share nothing else.
pub struct AppState<B> {
    pub backend: Arc<B>,
    pub request_timeout: Duration,
}

impl<B> AppState<B> {
    pub fn new(backend: B, request_timeout: Duration) -> Self {
        Self {
            backend: Arc::new(backend),
            request_timeout,
        }
    }
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            request_timeout: self.request_timeout,
        }
    }
}

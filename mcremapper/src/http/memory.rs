//! In-memory HTTP client.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{HttpClient, HttpError};

/// HTTP client that serves responses from a fixed route table.
///
/// Every requested URL is recorded in order, which lets callers assert
/// exactly which network calls a run performed. URLs with no route answer
/// with HTTP 404.
#[derive(Debug, Default)]
pub struct MemoryHttpClient {
    routes: HashMap<String, Result<Vec<u8>, HttpError>>,
    requests: Mutex<Vec<String>>,
}

impl MemoryHttpClient {
    /// Create a client with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`.
    pub fn with_response(mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.routes.insert(url.into(), Ok(body.into()));
        self
    }

    /// Fail every request for `url` with `error`.
    pub fn with_error(mut self, url: impl Into<String>, error: HttpError) -> Self {
        self.routes.insert(url.into(), Err(error));
        self
    }

    /// Replace or add a route after construction.
    pub fn set_response(&mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) {
        self.routes.insert(url.into(), Ok(body.into()));
    }

    /// All requested URLs, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.lock_requests().clone()
    }

    /// Number of requests made for `url`.
    pub fn request_count(&self, url: &str) -> usize {
        self.lock_requests().iter().filter(|u| *u == url).count()
    }

    /// Forget the recorded request history.
    pub fn clear_requests(&self) {
        self.lock_requests().clear();
    }

    fn lock_requests(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // A poisoned history is still a valid history.
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl HttpClient for MemoryHttpClient {
    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        self.lock_requests().push(url.to_string());

        match self.routes.get(url) {
            Some(response) => response.clone(),
            None => Err(HttpError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

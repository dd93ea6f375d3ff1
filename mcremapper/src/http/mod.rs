//! HTTP fetch capability.
//!
//! Every network access in the crate goes through the [`HttpClient`] trait,
//! which issues a single GET and returns the whole body. The production
//! implementation is [`ReqwestClient`]; [`MemoryHttpClient`] serves canned
//! responses so catalog and pipeline code can be exercised without a network.

mod memory;

pub use memory::MemoryHttpClient;

use std::time::Duration;

use thiserror::Error;

/// Default timeout for HTTP requests in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300; // 5 minutes

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("mcremapper/", env!("CARGO_PKG_VERSION"));

/// Errors surfaced by an [`HttpClient`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpError {
    /// The underlying client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    Client(String),

    /// The request could not be sent or the body could not be read.
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    /// The body was expected to be text but is not valid UTF-8.
    #[error("response from {url} is not valid UTF-8")]
    Decode { url: String },
}

/// Trait for HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling in-memory HTTP clients in tests.
pub trait HttpClient {
    /// Performs an HTTP GET request and returns the full body.
    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, HttpError>;

    /// Performs an HTTP GET request and decodes the body as UTF-8.
    fn get_string(&self, url: &str) -> Result<String, HttpError> {
        let bytes = self.get_bytes(url)?;
        String::from_utf8(bytes).map_err(|_| HttpError::Decode {
            url: url.to_string(),
        })
    }
}

impl<T: HttpClient + ?Sized> HttpClient for &T {
    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        (**self).get_bytes(url)
    }
}

/// Real HTTP client implementation using reqwest.
#[derive(Debug)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
    timeout: Duration,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with default configuration.
    pub fn new() -> Result<Self, HttpError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new ReqwestClient with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        Self::with_options(timeout, DEFAULT_USER_AGENT)
    }

    /// Creates a new ReqwestClient with a custom timeout and user agent.
    pub fn with_options(timeout: Duration, user_agent: &str) -> Result<Self, HttpError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| HttpError::Client(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    /// Timeout applied to each request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn request_error(&self, url: &str, error: reqwest::Error) -> HttpError {
        if error.is_timeout() {
            HttpError::Timeout {
                url: url.to_string(),
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            HttpError::Request {
                url: url.to_string(),
                reason: error.to_string(),
            }
        }
    }
}

impl HttpClient for ReqwestClient {
    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| self.request_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| self.request_error(url, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reqwest_client_default_timeout() {
        let client = ReqwestClient::new().unwrap();
        assert_eq!(client.timeout().as_secs(), DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_reqwest_client_with_timeout() {
        let client = ReqwestClient::with_timeout(Duration::from_secs(60)).unwrap();
        assert_eq!(client.timeout().as_secs(), 60);
    }

    #[test]
    fn test_get_string_rejects_invalid_utf8() {
        let client = MemoryHttpClient::new().with_response("http://example.com/bin", vec![0xff, 0xfe]);

        let err = client.get_string("http://example.com/bin").unwrap_err();
        assert_eq!(
            err,
            HttpError::Decode {
                url: "http://example.com/bin".to_string()
            }
        );
    }

    #[test]
    fn test_reference_forwards_to_client() {
        let client = MemoryHttpClient::new().with_response("http://example.com/a", "hello");
        let by_ref = &client;

        assert_eq!(by_ref.get_string("http://example.com/a").unwrap(), "hello");
        assert_eq!(client.request_count("http://example.com/a"), 1);
    }

    #[test]
    fn test_error_display() {
        let err = HttpError::Status {
            url: "http://example.com".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "HTTP 404 from http://example.com");
    }
}

//! Error types for artifact acquisition.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::http::HttpError;

/// Result type for acquisition operations.
pub type AcquisitionResult<T> = Result<T, AcquisitionError>;

/// Errors that can occur while acquiring a cached artifact.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    /// The artifact could not be downloaded.
    #[error("failed to download {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: HttpError,
    },

    /// The existing artifact or its sidecar could not be inspected.
    #[error("failed to inspect {}: {source}", .path.display())]
    Inspect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The downloaded content could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The digest sidecar could not be written.
    #[error("failed to write sha1 file {}: {source}", .path.display())]
    WriteSidecar {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = AcquisitionError::Fetch {
            url: "https://example.com/client.jar".to_string(),
            source: HttpError::Status {
                url: "https://example.com/client.jar".to_string(),
                status: 503,
            },
        };
        assert!(err.to_string().contains("failed to download https://example.com/client.jar"));
        assert!(err.to_string().contains("HTTP 503"));
    }

    #[test]
    fn test_sidecar_error_display() {
        let err = AcquisitionError::WriteSidecar {
            path: PathBuf::from("/out/1.14.4.jar.sha1"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "failed to write sha1 file /out/1.14.4.jar.sha1: denied"
        );
    }
}

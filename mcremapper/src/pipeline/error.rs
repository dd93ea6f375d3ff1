//! Error types for the pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::stage::Stage;
use crate::download::AcquisitionError;
use crate::http::HttpError;
use crate::tools::{DecompileError, RemapError};

/// Result type for pipeline operations.
pub type ProcessingResult<T> = Result<T, ProcessingError>;

/// Fatal pipeline failures. Each one aborts the remaining stages.
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// The run directory could not be created.
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The version metadata could not be downloaded.
    #[error("failed to download version metadata for {version}: {source}")]
    MetadataFetch {
        version: String,
        #[source]
        source: HttpError,
    },

    /// The version metadata is not a valid document.
    #[error("failed to parse version metadata from {url}: {reason}")]
    MetadataParse { url: String, reason: String },

    /// The version metadata lists no download for an artifact kind.
    #[error("version {version} has no '{key}' download")]
    MissingDownload { version: String, key: String },

    /// An artifact could not be acquired.
    #[error("{stage} failed: {source}")]
    Acquisition {
        stage: Stage,
        #[source]
        source: AcquisitionError,
    },

    /// The server jar could not be unpacked.
    #[error("failed to unpack server jar {}: {reason}", .path.display())]
    Unpack { path: PathBuf, reason: String },

    /// The mapping file could not be loaded.
    #[error("failed to load mappings {}: {source}", .path.display())]
    MappingLoad {
        path: PathBuf,
        #[source]
        source: RemapError,
    },

    /// Remapping failed.
    #[error("failed to remap {}: {source}", .path.display())]
    Remap {
        path: PathBuf,
        #[source]
        source: RemapError,
    },

    /// Decompilation failed.
    #[error("failed to decompile {}: {source}", .path.display())]
    Decompile {
        path: PathBuf,
        #[source]
        source: DecompileError,
    },
}

impl ProcessingError {
    /// The stage that failed.
    pub fn stage(&self) -> Stage {
        match self {
            Self::CreateDirectory { .. } => Stage::PrepareDirectory,
            Self::MetadataFetch { .. } | Self::MetadataParse { .. } => Stage::FetchDescriptor,
            Self::MissingDownload { key, .. } if key.ends_with("_mappings") => {
                Stage::AcquireMappings
            }
            Self::MissingDownload { .. } => Stage::AcquirePrimary,
            Self::Acquisition { stage, .. } => *stage,
            Self::Unpack { .. } => Stage::Unpack,
            Self::MappingLoad { .. } | Self::Remap { .. } => Stage::Remap,
            Self::Decompile { .. } => Stage::Decompile,
        }
    }

    /// Short identifier of the failure cause (e.g. `metadata-fetch`).
    pub fn cause(&self) -> &'static str {
        match self {
            Self::MissingDownload { .. } => "metadata-fetch",
            Self::MappingLoad { .. } => "mapping-load",
            _ => self.stage().cause(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_download_stage() {
        let jar = ProcessingError::MissingDownload {
            version: "1.13".to_string(),
            key: "server".to_string(),
        };
        let mappings = ProcessingError::MissingDownload {
            version: "1.13".to_string(),
            key: "server_mappings".to_string(),
        };

        assert_eq!(jar.stage(), Stage::AcquirePrimary);
        assert_eq!(mappings.stage(), Stage::AcquireMappings);
        assert_eq!(mappings.cause(), "metadata-fetch");
        assert_eq!(
            mappings.to_string(),
            "version 1.13 has no 'server_mappings' download"
        );
    }

    #[test]
    fn test_causes() {
        let err = ProcessingError::CreateDirectory {
            path: PathBuf::from("/readonly/1.14.4server"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.cause(), "directory-create");

        let err = ProcessingError::MappingLoad {
            path: PathBuf::from("1.14.4.map"),
            source: RemapError::InvalidMappings {
                path: PathBuf::from("1.14.4.map"),
                reason: "empty".to_string(),
            },
        };
        assert_eq!(err.stage(), Stage::Remap);
        assert_eq!(err.cause(), "mapping-load");
    }

    #[test]
    fn test_acquisition_display_names_stage() {
        let err = ProcessingError::Acquisition {
            stage: Stage::AcquireMappings,
            source: AcquisitionError::Fetch {
                url: "https://example.com/server.txt".to_string(),
                source: HttpError::Status {
                    url: "https://example.com/server.txt".to_string(),
                    status: 404,
                },
            },
        };
        assert!(err.to_string().starts_with("Downloading mappings failed"));
        assert_eq!(err.cause(), "download");
    }
}

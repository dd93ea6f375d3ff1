//! Download-or-reuse logic for cached artifacts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};

use super::error::{AcquisitionError, AcquisitionResult};
use super::freshness::{check_freshness, sidecar_path, ArtifactKind, Freshness};
use crate::http::HttpClient;

/// Everything needed to acquire one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRequest {
    /// Human-readable name used in log lines (e.g. "Version jar").
    pub display: String,
    /// Where the content lives on disk.
    pub path: PathBuf,
    /// Where to download the content from.
    pub url: String,
    /// Digest advertised by the descriptor; written verbatim to the sidecar.
    pub expected_digest: String,
    /// How the content is validated.
    pub kind: ArtifactKind,
}

impl ArtifactRequest {
    /// Create a new request.
    pub fn new(
        display: impl Into<String>,
        path: impl Into<PathBuf>,
        url: impl Into<String>,
        expected_digest: impl Into<String>,
        kind: ArtifactKind,
    ) -> Self {
        Self {
            display: display.into(),
            path: path.into(),
            url: url.into(),
            expected_digest: expected_digest.into(),
            kind,
        }
    }
}

/// Outcome of [`ArtifactCache::acquire`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acquired {
    /// Path of the content file.
    pub path: PathBuf,
    /// Verdict on the previous cache state. `Fresh` means nothing was
    /// downloaded.
    pub freshness: Freshness,
    /// Bytes written by this call; zero when fresh.
    pub bytes_written: u64,
}

impl Acquired {
    /// Whether the cached content was reused without a download.
    pub fn is_fresh(&self) -> bool {
        self.freshness.is_fresh()
    }
}

/// Content cache backed by the filesystem and an [`HttpClient`].
#[derive(Debug)]
pub struct ArtifactCache<'a, C: HttpClient + ?Sized> {
    client: &'a C,
}

impl<'a, C: HttpClient + ?Sized> ArtifactCache<'a, C> {
    /// Create a cache that downloads through `client`.
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Reuse the artifact if it is fresh, otherwise download it.
    ///
    /// A stale artifact is rewritten content first, digest second, with any
    /// old sidecar removed beforehand. A crash at any point therefore leaves
    /// the pair judged stale on the next call, never falsely fresh.
    pub fn acquire(&self, request: &ArtifactRequest) -> AcquisitionResult<Acquired> {
        let freshness = check_freshness(&request.path, &request.expected_digest, request.kind)
            .map_err(|e| AcquisitionError::Inspect {
                path: request.path.clone(),
                source: e,
            })?;

        if freshness.is_fresh() {
            info!("SKIP --> {} is already downloaded.", request.display);
            return Ok(Acquired {
                path: request.path.clone(),
                freshness,
                bytes_written: 0,
            });
        }

        debug!(
            path = %request.path.display(),
            reason = %freshness,
            "Cached artifact is stale"
        );
        info!("Downloading {}...", request.display);
        let start = Instant::now();

        let content = self
            .client
            .get_bytes(&request.url)
            .map_err(|e| AcquisitionError::Fetch {
                url: request.url.clone(),
                source: e,
            })?;

        let sidecar = sidecar_path(&request.path);
        remove_if_exists(&sidecar).map_err(|e| AcquisitionError::WriteSidecar {
            path: sidecar.clone(),
            source: e,
        })?;

        fs::write(&request.path, &content).map_err(|e| AcquisitionError::Write {
            path: request.path.clone(),
            source: e,
        })?;

        fs::write(&sidecar, &request.expected_digest).map_err(|e| {
            AcquisitionError::WriteSidecar {
                path: sidecar.clone(),
                source: e,
            }
        })?;

        info!(
            "{} is downloaded in {}ms",
            request.display,
            start.elapsed().as_millis()
        );

        Ok(Acquired {
            path: request.path.clone(),
            freshness,
            bytes_written: content.len() as u64,
        })
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

//! Freshness verdicts for cached artifacts.
//!
//! A cached artifact is the pair `(content, content.sha1)`. The sidecar
//! records the digest the descriptor advertised when the content was
//! written; it is the only freshness oracle; the content is never hashed.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::archive::is_valid_archive;

/// Extension appended to an artifact's file name for its digest sidecar.
pub const SIDECAR_EXTENSION: &str = "sha1";

/// How an artifact's content is validated beyond the sidecar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Zip-like container, structurally validated before it is trusted.
    Archive,
    /// Opaque content, trusted on the sidecar alone.
    Plain,
}

/// Verdict on a previously cached artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Content and sidecar are present and the sidecar matches.
    Fresh,
    /// The content file does not exist.
    Missing,
    /// The content is expected to be an archive but does not open as one.
    InvalidArchive,
    /// The content exists but has no sidecar.
    MissingSidecar,
    /// The sidecar records a different digest.
    DigestMismatch,
}

impl Freshness {
    /// Whether the cached content can be reused without downloading.
    pub fn is_fresh(&self) -> bool {
        matches!(self, Self::Fresh)
    }

    /// Short human-readable description.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Fresh => "up to date",
            Self::Missing => "not downloaded",
            Self::InvalidArchive => "not a valid archive",
            Self::MissingSidecar => "no sha1 file",
            Self::DigestMismatch => "sha1 changed",
        }
    }
}

impl fmt::Display for Freshness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Path of the digest sidecar for `path` (`<file name>.sha1`).
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use mcremapper::download::sidecar_path;
///
/// assert_eq!(
///     sidecar_path(Path::new("out/1.14.4server/1.14.4.jar")),
///     Path::new("out/1.14.4server/1.14.4.jar.sha1")
/// );
/// ```
pub fn sidecar_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(SIDECAR_EXTENSION);
    path.with_file_name(name)
}

/// Decide whether the artifact at `path` is still valid for `expected_digest`.
///
/// The comparison is a byte-exact match of the whole sidecar against
/// `expected_digest`, with no trimming or case folding.
///
/// # Errors
///
/// Returns an error only if the content or sidecar exists but cannot be
/// read.
pub fn check_freshness(
    path: &Path,
    expected_digest: &str,
    kind: ArtifactKind,
) -> io::Result<Freshness> {
    if !path.try_exists()? {
        return Ok(Freshness::Missing);
    }

    if kind == ArtifactKind::Archive && !is_valid_archive(path) {
        return Ok(Freshness::InvalidArchive);
    }

    let sidecar = sidecar_path(path);
    if !sidecar.try_exists()? {
        return Ok(Freshness::MissingSidecar);
    }

    let recorded = fs::read(&sidecar)?;
    if recorded == expected_digest.as_bytes() {
        Ok(Freshness::Fresh)
    } else {
        Ok(Freshness::DigestMismatch)
    }
}

//! Content cache for downloaded artifacts.
//!
//! This module provides:
//! - Structural archive validation (`archive`)
//! - Sidecar-based freshness verdicts (`freshness`)
//! - Download-or-reuse acquisition (`cache`)
//!
//! # On-disk layout
//!
//! ```text
//! <dir>/1.14.4.jar        content
//! <dir>/1.14.4.jar.sha1   digest advertised when the content was written
//! ```
//!
//! # Example
//!
//! ```ignore
//! use mcremapper::download::{ArtifactCache, ArtifactKind, ArtifactRequest};
//!
//! let cache = ArtifactCache::new(&client);
//! let acquired = cache.acquire(&ArtifactRequest::new(
//!     "Version jar",
//!     "out/1.14.4server/1.14.4.jar",
//!     url,
//!     sha1,
//!     ArtifactKind::Archive,
//! ))?;
//!
//! if acquired.is_fresh() {
//!     // nothing was downloaded
//! }
//! ```

mod archive;
mod cache;
mod error;
mod freshness;

pub use archive::is_valid_archive;
pub use cache::{Acquired, ArtifactCache, ArtifactRequest};
pub use error::{AcquisitionError, AcquisitionResult};
pub use freshness::{check_freshness, sidecar_path, ArtifactKind, Freshness, SIDECAR_EXTENSION};

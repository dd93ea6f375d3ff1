//! Catalog model types.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Serialize, Serializer};

/// Release classification of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseType {
    /// Stable release.
    Release,
    /// Development snapshot.
    Snapshot,
    /// Historical beta build.
    OldBeta,
    /// Historical alpha build.
    OldAlpha,
}

impl ReleaseType {
    /// All known classifications.
    pub const ALL: [ReleaseType; 4] = [
        ReleaseType::Release,
        ReleaseType::Snapshot,
        ReleaseType::OldBeta,
        ReleaseType::OldAlpha,
    ];

    /// Map a raw manifest value onto a known classification.
    ///
    /// Matching ignores ASCII case. Unknown values yield `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use mcremapper::catalog::ReleaseType;
    ///
    /// assert_eq!(ReleaseType::from_raw("old_beta"), Some(ReleaseType::OldBeta));
    /// assert_eq!(ReleaseType::from_raw("RELEASE"), Some(ReleaseType::Release));
    /// assert_eq!(ReleaseType::from_raw("experiment"), None);
    /// ```
    pub fn from_raw(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(raw))
    }

    /// Manifest spelling of this classification.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Release => "release",
            Self::Snapshot => "snapshot",
            Self::OldBeta => "old_beta",
            Self::OldAlpha => "old_alpha",
        }
    }

    /// Whether this is one of the historical pre-release kinds.
    pub fn is_old(&self) -> bool {
        matches!(self, Self::OldBeta | Self::OldAlpha)
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ReleaseType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One release record from the version manifest.
///
/// Serializes back to the manifest record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Unique, stable identifier (e.g. "1.14.4").
    pub id: String,

    /// Release classification.
    #[serde(rename = "type")]
    pub release_type: ReleaseType,

    /// URL of the per-version metadata document.
    pub url: String,

    /// Time the entry was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<FixedOffset>>,

    /// Time the version was released.
    #[serde(rename = "releaseTime", skip_serializing_if = "Option::is_none")]
    pub release_time: Option<DateTime<FixedOffset>>,
}

impl CatalogEntry {
    /// Create an entry without timestamps.
    pub fn new(id: impl Into<String>, release_type: ReleaseType, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            release_type,
            url: url.into(),
            time: None,
            release_time: None,
        }
    }

    /// Set the update and release timestamps.
    pub fn with_times(
        mut self,
        time: Option<DateTime<FixedOffset>>,
        release_time: Option<DateTime<FixedOffset>>,
    ) -> Self {
        self.time = time;
        self.release_time = release_time;
        self
    }
}

/// A manifest record that was dropped while building the catalog.
///
/// Warnings never abort a fetch; they are logged and kept on the
/// [`VersionCatalog`] for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// The record's `type` is not a known classification.
    UnknownReleaseType { id: String, raw: String },

    /// A record repeats an id already seen earlier in the manifest.
    DuplicateId { id: String },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownReleaseType { id, raw } => {
                write!(f, "invalid version type on '{}': {}", id, raw)
            }
            Self::DuplicateId { id } => write!(f, "duplicate version id '{}'", id),
        }
    }
}

/// Ordered sequence of catalog entries, as received from the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionCatalog {
    entries: Vec<CatalogEntry>,
    warnings: Vec<ParseWarning>,
}

impl VersionCatalog {
    /// Build a catalog from already-validated entries.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries,
            warnings: Vec::new(),
        }
    }

    pub(crate) fn with_warnings(entries: Vec<CatalogEntry>, warnings: Vec<ParseWarning>) -> Self {
        Self { entries, warnings }
    }

    /// Entries in manifest order (newest first).
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Records dropped while parsing.
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in manifest order.
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    /// Find an entry by exact id.
    pub fn find(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}

impl<'a> IntoIterator for &'a VersionCatalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

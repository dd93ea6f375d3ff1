//! Per-version download descriptor.

use std::collections::HashMap;

use serde::Deserialize;

/// Download location and digest of one artifact.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtifactDownload {
    pub url: String,
    pub sha1: String,
    #[serde(default)]
    pub size: Option<u64>,
}

/// The `downloads` section of a version metadata document.
///
/// Keys are logical artifact kinds such as `client`, `server`,
/// `client_mappings` and `server_mappings`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadDescriptor {
    downloads: HashMap<String, ArtifactDownload>,
}

#[derive(Debug, Deserialize)]
struct RawMetadata {
    downloads: HashMap<String, ArtifactDownload>,
}

impl DownloadDescriptor {
    /// Parse a version metadata document.
    ///
    /// Everything outside `downloads` is ignored, as are fields of each
    /// download other than `url`, `sha1` and `size`.
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawMetadata = serde_json::from_str(json)?;
        Ok(Self {
            downloads: raw.downloads,
        })
    }

    /// Download for an artifact kind.
    pub fn get(&self, key: &str) -> Option<&ArtifactDownload> {
        self.downloads.get(key)
    }

    /// Artifact kinds present, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.downloads.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

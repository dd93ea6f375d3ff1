//! Version manifest fetching and parsing.

use std::collections::HashSet;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use super::types::{CatalogEntry, ParseWarning, ReleaseType, VersionCatalog};
use crate::http::{HttpClient, HttpError};

/// Default location of the version manifest.
pub const DEFAULT_MANIFEST_URL: &str =
    "https://launchermeta.mojang.com/mc/game/version_manifest.json";

/// Errors that abort a catalog fetch.
///
/// A partial catalog is never returned: downstream selection cannot tell
/// "not found" apart from "catalog truncated".
#[derive(Debug, Error)]
pub enum CatalogFetchError {
    /// The manifest could not be downloaded.
    #[error("failed to fetch version manifest from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: HttpError,
    },

    /// The manifest body is not a valid manifest document.
    #[error("failed to parse version manifest from {url}: {reason}")]
    Parse { url: String, reason: String },
}

/// Source of the version catalog.
pub trait CatalogSource {
    /// Fetch the complete catalog.
    fn fetch_catalog(&self) -> Result<VersionCatalog, CatalogFetchError>;
}

/// Fetches the catalog from a remote version manifest.
#[derive(Debug)]
pub struct ManifestFetcher<C: HttpClient> {
    client: C,
    url: String,
}

impl<C: HttpClient> ManifestFetcher<C> {
    /// Create a fetcher for the default manifest URL.
    pub fn new(client: C) -> Self {
        Self::with_url(client, DEFAULT_MANIFEST_URL)
    }

    /// Create a fetcher for a custom manifest URL.
    pub fn with_url(client: C, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Manifest URL this fetcher reads.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl<C: HttpClient> CatalogSource for ManifestFetcher<C> {
    fn fetch_catalog(&self) -> Result<VersionCatalog, CatalogFetchError> {
        let body = self
            .client
            .get_string(&self.url)
            .map_err(|source| CatalogFetchError::Fetch {
                url: self.url.clone(),
                source,
            })?;

        let catalog = parse_manifest(&body).map_err(|e| CatalogFetchError::Parse {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;

        debug!(
            url = %self.url,
            entries = catalog.len(),
            dropped = catalog.warnings().len(),
            "Version manifest fetched"
        );
        Ok(catalog)
    }
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    versions: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    url: String,
    #[serde(default)]
    time: Option<String>,
    #[serde(default, rename = "releaseTime")]
    release_time: Option<String>,
}

/// Errors parsing a version manifest document.
#[derive(Debug, Error)]
pub enum ManifestParseError {
    /// The document does not match the manifest shape.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A kept record carries a timestamp that is not RFC 3339.
    #[error("invalid {field} on '{id}': {value}")]
    InvalidTimestamp {
        id: String,
        field: &'static str,
        value: String,
    },
}

/// Parse a version manifest document into a catalog.
///
/// Records with an unknown classification or a repeated id are dropped
/// with a warning; every other record is kept in manifest order. A
/// malformed document or a malformed timestamp on a kept record fails the
/// whole parse. Absent timestamps are `None`.
pub fn parse_manifest(json: &str) -> Result<VersionCatalog, ManifestParseError> {
    let manifest: RawManifest = serde_json::from_str(json)?;

    let mut entries = Vec::with_capacity(manifest.versions.len());
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();

    for raw in manifest.versions {
        let Some(release_type) = ReleaseType::from_raw(&raw.kind) else {
            warnings.push(ParseWarning::UnknownReleaseType {
                id: raw.id,
                raw: raw.kind,
            });
            continue;
        };

        let time = parse_time(&raw.id, "time", raw.time.as_deref())?;
        let release_time = parse_time(&raw.id, "releaseTime", raw.release_time.as_deref())?;

        if !seen.insert(raw.id.clone()) {
            warnings.push(ParseWarning::DuplicateId { id: raw.id });
            continue;
        }
        entries.push(
            CatalogEntry::new(raw.id, release_type, raw.url).with_times(time, release_time),
        );
    }

    for warning in &warnings {
        warn!("Dropped catalog record: {}", warning);
    }

    Ok(VersionCatalog::with_warnings(entries, warnings))
}

fn parse_time(
    id: &str,
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<DateTime<FixedOffset>>, ManifestParseError> {
    match value {
        None => Ok(None),
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(Some)
            .map_err(|_| ManifestParseError::InvalidTimestamp {
                id: id.to_string(),
                field,
                value: value.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::MemoryHttpClient;

    const MANIFEST: &str = r#"{
        "latest": { "release": "1.14.4", "snapshot": "19w34a" },
        "versions": [
            { "id": "19w34a", "type": "snapshot", "url": "https://meta/19w34a.json",
              "time": "2019-08-22T12:06:21+00:00", "releaseTime": "2019-08-22T12:06:21+00:00" },
            { "id": "1.14.4", "type": "release", "url": "https://meta/1.14.4.json",
              "time": "2019-07-19T09:25:47+00:00", "releaseTime": "2019-07-19T09:25:47+00:00" },
            { "id": "1.14.4-combat", "type": "experiment", "url": "https://meta/combat.json" },
            { "id": "b1.7.3", "type": "old_beta", "url": "https://meta/b1.7.3.json",
              "time": "2019-06-28T07:06:16+00:00", "releaseTime": "2011-07-07T22:00:00+00:00" }
        ]
    }"#;

    #[test]
    fn test_parse_keeps_known_records_in_order() {
        let catalog = parse_manifest(MANIFEST).unwrap();

        let ids: Vec<&str> = catalog.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["19w34a", "1.14.4", "b1.7.3"]);
        assert_eq!(catalog.entries()[2].release_type, ReleaseType::OldBeta);
    }

    #[test]
    fn test_parse_drops_unknown_type_with_warning() {
        let catalog = parse_manifest(MANIFEST).unwrap();

        assert!(catalog.find("1.14.4-combat").is_none());
        assert_eq!(
            catalog.warnings(),
            &[ParseWarning::UnknownReleaseType {
                id: "1.14.4-combat".to_string(),
                raw: "experiment".to_string(),
            }]
        );
    }

    #[test]
    fn test_parse_timestamps() {
        let catalog = parse_manifest(MANIFEST).unwrap();
        let entry = catalog.find("b1.7.3").unwrap();

        let release = entry.release_time.unwrap();
        assert_eq!(release.to_rfc3339(), "2011-07-07T22:00:00+00:00");
    }

    #[test]
    fn test_parse_missing_timestamps_are_none() {
        let json = r#"{ "versions": [ { "id": "a", "type": "release", "url": "u" } ] }"#;
        let catalog = parse_manifest(json).unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.entries()[0].time.is_none());
        assert!(catalog.entries()[0].release_time.is_none());
    }

    #[test]
    fn test_parse_invalid_timestamp_fails() {
        let json = r#"{ "versions": [
            { "id": "a", "type": "release", "url": "u", "releaseTime": "yesterday" },
            { "id": "b", "type": "release", "url": "u" }
        ] }"#;

        let err = parse_manifest(json).unwrap_err();

        assert!(matches!(
            err,
            ManifestParseError::InvalidTimestamp { field: "releaseTime", .. }
        ));
        assert_eq!(err.to_string(), "invalid releaseTime on 'a': yesterday");
    }

    #[test]
    fn test_invalid_timestamp_on_unknown_type_is_only_dropped() {
        let json = r#"{ "versions": [
            { "id": "x", "type": "experiment", "url": "u", "time": "soon" },
            { "id": "b", "type": "release", "url": "u" }
        ] }"#;
        let catalog = parse_manifest(json).unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(matches!(
            catalog.warnings()[0],
            ParseWarning::UnknownReleaseType { .. }
        ));
    }

    #[test]
    fn test_fetcher_fails_on_invalid_timestamp() {
        let manifest = r#"{ "versions": [
            { "id": "1.15", "type": "release", "url": "https://meta/1.15.json",
              "releaseTime": "2019-12-09T12:00:00+00:00" },
            { "id": "1.14.4", "type": "release", "url": "https://meta/1.14.4.json",
              "releaseTime": "2019-07-19 09:25:47" },
            { "id": "1.13", "type": "release", "url": "https://meta/1.13.json" }
        ] }"#;
        let client = MemoryHttpClient::new().with_response(DEFAULT_MANIFEST_URL, manifest);

        let err = ManifestFetcher::new(&client).fetch_catalog().unwrap_err();

        assert!(matches!(err, CatalogFetchError::Parse { .. }));
        assert!(err.to_string().contains("1.14.4"));
    }

    #[test]
    fn test_parse_duplicate_id_keeps_first() {
        let json = r#"{ "versions": [
            { "id": "a", "type": "release", "url": "first" },
            { "id": "a", "type": "snapshot", "url": "second" }
        ] }"#;
        let catalog = parse_manifest(json).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].url, "first");
        assert_eq!(
            catalog.warnings(),
            &[ParseWarning::DuplicateId { id: "a".to_string() }]
        );
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(parse_manifest("[]").is_err());
        assert!(parse_manifest(r#"{ "versions": 3 }"#).is_err());
        assert!(parse_manifest("not json").is_err());
    }

    #[test]
    fn test_fetcher_reads_manifest_url() {
        let client = MemoryHttpClient::new().with_response("https://example.com/manifest.json", MANIFEST);
        let fetcher = ManifestFetcher::with_url(&client, "https://example.com/manifest.json");

        let catalog = fetcher.fetch_catalog().unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(client.requests(), vec!["https://example.com/manifest.json"]);
    }

    #[test]
    fn test_fetcher_transport_failure() {
        let client = MemoryHttpClient::new();
        let fetcher = ManifestFetcher::new(&client);

        let err = fetcher.fetch_catalog().unwrap_err();
        assert!(matches!(err, CatalogFetchError::Fetch { .. }));
        assert_eq!(client.request_count(DEFAULT_MANIFEST_URL), 1);
    }

    #[test]
    fn test_fetcher_parse_failure() {
        let client = MemoryHttpClient::new().with_response(DEFAULT_MANIFEST_URL, "{}");
        let fetcher = ManifestFetcher::new(&client);

        let err = fetcher.fetch_catalog().unwrap_err();
        assert!(matches!(err, CatalogFetchError::Parse { .. }));
        assert!(err.to_string().contains("failed to parse version manifest"));
    }
}

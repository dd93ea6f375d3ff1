//! Version catalog: model, manifest fetching, and selection.
//!
//! # Architecture
//!
//! ```text
//! CatalogSource (trait)
//!     └── ManifestFetcher ──► HttpClient ──► version manifest (JSON)
//!                 │
//!                 ▼
//!         VersionCatalog (ordered CatalogEntry list + dropped-record warnings)
//!                 │
//!                 ├── list()     filtered view for `--list`
//!                 └── resolve()  id → CatalogEntry
//! ```

mod fetcher;
mod select;
mod types;

pub use fetcher::{
    parse_manifest, CatalogFetchError, CatalogSource, ManifestFetcher, ManifestParseError,
    DEFAULT_MANIFEST_URL,
};
pub use select::{list, list_until, resolve, ListedVersion, Listing, LAST_MAPPED_VERSION};
pub use types::{CatalogEntry, ParseWarning, ReleaseType, VersionCatalog};

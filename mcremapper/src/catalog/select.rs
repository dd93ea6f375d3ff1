//! Catalog listing and version resolution.

use super::types::{CatalogEntry, ReleaseType, VersionCatalog};

/// Oldest version for which mapping files are published upstream.
///
/// The manifest is newest-first, so listing stops once this id is reached.
pub const LAST_MAPPED_VERSION: &str = "1.14.4";

/// A version shown by [`list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedVersion {
    pub id: String,
    pub release_type: ReleaseType,
}

/// Result of listing the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    /// Listed versions in catalog order.
    pub entries: Vec<ListedVersion>,
    /// Size of the whole catalog, listed or not.
    pub catalog_len: usize,
}

impl Listing {
    /// Number of non-old versions encountered up to and including the
    /// sentinel.
    pub fn total(&self) -> usize {
        self.entries.len()
    }
}

/// List the versions that can be remapped.
///
/// Old beta/alpha entries are skipped. Enumeration stops right after
/// [`LAST_MAPPED_VERSION`].
pub fn list(catalog: &VersionCatalog) -> Listing {
    list_until(catalog, LAST_MAPPED_VERSION)
}

/// Like [`list`] with a custom sentinel id.
pub fn list_until(catalog: &VersionCatalog, sentinel: &str) -> Listing {
    let mut entries = Vec::new();

    for entry in catalog.iter().filter(|e| !e.release_type.is_old()) {
        entries.push(ListedVersion {
            id: entry.id.clone(),
            release_type: entry.release_type,
        });
        if entry.id == sentinel {
            break;
        }
    }

    Listing {
        entries,
        catalog_len: catalog.len(),
    }
}

/// Resolve a user-supplied id to a catalog entry.
///
/// Exact, case-sensitive match; the first match wins.
pub fn resolve<'a>(catalog: &'a VersionCatalog, id: &str) -> Option<&'a CatalogEntry> {
    catalog.find(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entry(id: &str, release_type: ReleaseType) -> CatalogEntry {
        CatalogEntry::new(id, release_type, format!("https://meta/{}.json", id))
    }

    fn sample_catalog() -> VersionCatalog {
        VersionCatalog::new(vec![
            entry("1.15", ReleaseType::Release),
            entry("19w34a", ReleaseType::Snapshot),
            entry("b2.0", ReleaseType::OldBeta),
            entry("1.14.4", ReleaseType::Release),
            entry("1.14.3", ReleaseType::Release),
            entry("a1.0", ReleaseType::OldAlpha),
        ])
    }

    #[test]
    fn test_list_stops_at_sentinel_inclusive() {
        let listing = list(&sample_catalog());

        let ids: Vec<&str> = listing.entries.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["1.15", "19w34a", "1.14.4"]);
        assert_eq!(listing.total(), 3);
        assert_eq!(listing.catalog_len, 6);
    }

    #[test]
    fn test_list_without_sentinel_lists_all_non_old() {
        let catalog = VersionCatalog::new(vec![
            entry("1.15", ReleaseType::Release),
            entry("a1.0", ReleaseType::OldAlpha),
            entry("1.15-pre1", ReleaseType::Snapshot),
        ]);

        let listing = list(&catalog);
        assert_eq!(listing.total(), 2);
        assert_eq!(listing.entries[1].release_type, ReleaseType::Snapshot);
    }

    #[test]
    fn test_list_empty_catalog() {
        let listing = list(&VersionCatalog::default());
        assert_eq!(listing, Listing::default());
    }

    #[test]
    fn test_resolve_exact_match() {
        let catalog = sample_catalog();

        assert_eq!(resolve(&catalog, "1.14.3").map(|e| e.id.as_str()), Some("1.14.3"));
        assert!(resolve(&catalog, "1.14").is_none());
        assert!(resolve(&catalog, "19W34A").is_none());
    }

    fn release_type() -> impl Strategy<Value = ReleaseType> {
        prop_oneof![
            Just(ReleaseType::Release),
            Just(ReleaseType::Snapshot),
            Just(ReleaseType::OldBeta),
            Just(ReleaseType::OldAlpha),
        ]
    }

    proptest! {
        #[test]
        fn prop_listing_never_contains_old_and_stops_at_sentinel(
            kinds in prop::collection::vec(release_type(), 0..40),
            sentinel_at in prop::option::of(0usize..40),
        ) {
            let entries: Vec<CatalogEntry> = kinds
                .iter()
                .enumerate()
                .map(|(i, kind)| {
                    let id = if Some(i) == sentinel_at { LAST_MAPPED_VERSION.to_string() } else { format!("v{}", i) };
                    CatalogEntry::new(id, *kind, "u")
                })
                .collect();
            let catalog = VersionCatalog::new(entries);

            let listing = list(&catalog);

            prop_assert!(listing.entries.iter().all(|v| !v.release_type.is_old()));
            prop_assert_eq!(listing.catalog_len, kinds.len());

            let sentinel_listed = sentinel_at
                .filter(|&i| i < kinds.len() && !kinds[i].is_old());
            let expected_total = match sentinel_listed {
                Some(i) => kinds[..=i].iter().filter(|k| !k.is_old()).count(),
                None => kinds.iter().filter(|k| !k.is_old()).count(),
            };
            prop_assert_eq!(listing.total(), expected_total);

            if sentinel_listed.is_some() {
                prop_assert_eq!(
                    listing.entries.last().map(|v| v.id.as_str()),
                    Some(LAST_MAPPED_VERSION)
                );
            }
        }
    }
}

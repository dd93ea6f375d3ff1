//! `--list`: show the versions that can be remapped.

use mcremapper::catalog::{self, CatalogSource, Listing};

use crate::error::CliError;

/// Lines printed for a listing.
pub fn render(listing: &Listing) -> Vec<String> {
    let mut lines: Vec<String> = listing
        .entries
        .iter()
        .map(|version| format!("{} ({})", version.id, version.release_type))
        .collect();
    lines.push(format!(
        "Versions found: {}/{}",
        listing.total(),
        listing.catalog_len
    ));
    lines
}

/// Fetch the catalog and print the listing.
pub fn run<S: CatalogSource>(source: &S) -> Result<(), CliError> {
    let catalog = source.fetch_catalog()?;
    for line in render(&catalog::list(&catalog)) {
        println!("{}", line);
    }
    Ok(())
}

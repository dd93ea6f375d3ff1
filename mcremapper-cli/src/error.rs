//! CLI error type.

use std::path::PathBuf;

use mcremapper::catalog::CatalogFetchError;
use mcremapper::config::ConfigError;
use mcremapper::http::HttpError;
use mcremapper::pipeline::ProcessingError;
use mcremapper::tools::ToolError;
use thiserror::Error;

/// Everything that makes the CLI exit unsuccessfully.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Please specify type between 'client' and 'server'.")]
    MissingTarget,

    #[error("Please specify a version with --version (see --list).")]
    MissingVersion,

    #[error("Version '{0}' is not found!")]
    VersionNotFound(String),

    #[error("Failed to load config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },

    #[error("Failed to create HTTP client: {0}")]
    Http(#[from] HttpError),

    #[error("Failed to fetch Minecraft versions: {0}")]
    Catalog(#[from] CatalogFetchError),

    #[error("Invalid tool command: {0}")]
    Tool(#[from] ToolError),

    #[error("Processing failed at stage '{}': {source}", .source.stage())]
    Processing {
        #[from]
        source: ProcessingError,
    },
}

//! Common types and utilities shared across CLI commands.

use std::path::PathBuf;
use std::time::Duration;

use mcremapper::config::{ConfigError, ConfigFile, RemapperConfig};
use mcremapper::http::ReqwestClient;

use crate::error::CliError;

/// Configuration values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Explicit config file; the default location is used otherwise.
    pub config_file: Option<PathBuf>,
    pub manifest_url: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub remap_command: Option<String>,
    pub decompile_command: Option<String>,
}

impl ConfigOverrides {
    /// Apply every value that was given.
    pub fn apply(&self, mut config: RemapperConfig) -> RemapperConfig {
        if let Some(url) = &self.manifest_url {
            config = config.with_manifest_url(url.clone());
        }
        if let Some(dir) = &self.output_dir {
            config = config.with_output_dir(dir.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(command) = &self.remap_command {
            config = config.with_remap_command(command.clone());
        }
        if let Some(command) = &self.decompile_command {
            config = config.with_decompile_command(command.clone());
        }
        config
    }
}

/// Load the config file and resolve the final configuration.
///
/// CLI flags take precedence over the file, the file over built-in
/// defaults. An explicitly given file must exist.
pub fn resolve_config(overrides: &ConfigOverrides) -> Result<RemapperConfig, CliError> {
    let file = match &overrides.config_file {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::Config {
                    path: path.clone(),
                    source: ConfigError::Read {
                        path: path.clone(),
                        source: std::io::Error::new(
                            std::io::ErrorKind::NotFound,
                            "file does not exist",
                        ),
                    },
                });
            }
            ConfigFile::load(path).map_err(|e| CliError::Config {
                path: path.clone(),
                source: e,
            })?
        }
        None => ConfigFile::load_default().map_err(|e| CliError::Config {
            path: mcremapper::config::default_config_path().unwrap_or_default(),
            source: e,
        })?,
    };

    Ok(overrides.apply(RemapperConfig::default().with_file(&file)))
}

/// Create the HTTP client described by `config`.
pub fn http_client(config: &RemapperConfig) -> Result<ReqwestClient, CliError> {
    Ok(ReqwestClient::with_options(config.timeout, &config.user_agent)?)
}

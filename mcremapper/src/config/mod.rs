//! Runtime configuration.
//!
//! [`RemapperConfig`] is the resolved configuration handed to every
//! component at construction. It starts from built-in defaults, is
//! overlaid with an optional [`ConfigFile`], and finally with command
//! line flags, so a flag always wins over the file and the file over the
//! default.

mod file;

pub use file::{default_config_path, ConfigError, ConfigFile, CONFIG_DIR_NAME, CONFIG_FILE_NAME};

use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::DEFAULT_MANIFEST_URL;
use crate::http::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::tools::{DEFAULT_DECOMPILE_COMMAND, DEFAULT_REMAP_COMMAND};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "MinecraftRemapper";

/// Configuration for a remapper run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemapperConfig {
    /// URL of the version manifest.
    pub manifest_url: String,

    /// Root under which per-version run directories are created.
    pub output_dir: PathBuf,

    /// HTTP request timeout.
    pub timeout: Duration,

    /// User agent sent with every request.
    pub user_agent: String,

    /// Remapping command line template.
    pub remap_command: String,

    /// Decompilation command line template.
    pub decompile_command: String,
}

impl Default for RemapperConfig {
    fn default() -> Self {
        Self {
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            remap_command: DEFAULT_REMAP_COMMAND.to_string(),
            decompile_command: DEFAULT_DECOMPILE_COMMAND.to_string(),
        }
    }
}

impl RemapperConfig {
    /// Create a configuration with the given output directory.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Set the manifest URL.
    pub fn with_manifest_url(mut self, url: impl Into<String>) -> Self {
        self.manifest_url = url.into();
        self
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    /// Set the HTTP timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the remapping command line.
    pub fn with_remap_command(mut self, command: impl Into<String>) -> Self {
        self.remap_command = command.into();
        self
    }

    /// Set the decompilation command line.
    pub fn with_decompile_command(mut self, command: impl Into<String>) -> Self {
        self.decompile_command = command.into();
        self
    }

    /// Overlay every value present in `file`.
    pub fn with_file(mut self, file: &ConfigFile) -> Self {
        if let Some(url) = &file.manifest_url {
            self.manifest_url = url.clone();
        }
        if let Some(secs) = file.timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(dir) = &file.output_dir {
            self.output_dir = dir.clone();
        }
        if let Some(command) = &file.remap_command {
            self.remap_command = command.clone();
        }
        if let Some(command) = &file.decompile_command {
            self.decompile_command = command.clone();
        }
        self
    }
}

//! INI configuration file.
//!
//! ```ini
//! [catalog]
//! manifest_url = https://launchermeta.mojang.com/mc/game/version_manifest.json
//!
//! [http]
//! timeout_secs = 300
//!
//! [output]
//! directory = MinecraftRemapper
//!
//! [tools]
//! remap_command = java -jar SpecialSource.jar --in-jar {input} --out-jar {output} --srg-in {mappings} --kill-lvt
//! decompile_command = java -jar vineflower.jar {input} {output}
//! ```
//!
//! Every key is optional.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

/// Directory under the home directory holding the configuration file.
pub const CONFIG_DIR_NAME: &str = ".mcremapper";

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Errors reading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("invalid value '{value}' for [{section}] {key}: {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}

/// Values read from the configuration file. `None` means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub manifest_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub output_dir: Option<PathBuf>,
    pub remap_command: Option<String>,
    pub decompile_command: Option<String>,
}

/// `~/.mcremapper/config.ini`, if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl ConfigFile {
    /// Load `path`. A missing file yields an empty configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { reason, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })
    }

    /// Load the file at [`default_config_path`], if any.
    pub fn load_default() -> Result<Self, ConfigError> {
        match default_config_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Parse INI text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            reason: e.to_string(),
        })?;

        let get = |section: &str, key: &str| -> Option<String> {
            ini.section(Some(section))
                .and_then(|props| props.get(key))
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        let timeout_secs = match get("http", "timeout_secs") {
            Some(raw) => Some(parse_timeout(&raw)?),
            None => None,
        };

        Ok(Self {
            manifest_url: get("catalog", "manifest_url"),
            timeout_secs,
            output_dir: get("output", "directory").map(PathBuf::from),
            remap_command: get("tools", "remap_command"),
            decompile_command: get("tools", "decompile_command"),
        })
    }
}

fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        section: "http".to_string(),
        key: "timeout_secs".to_string(),
        value: raw.to_string(),
        reason,
    };

    let secs: u64 = raw.parse().map_err(|e: std::num::ParseIntError| invalid(e.to_string()))?;
    if secs == 0 {
        return Err(invalid("must be greater than zero".to_string()));
    }
    Ok(secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_all_keys() {
        let file = ConfigFile::parse(
            "[catalog]\nmanifest_url = http://localhost/manifest.json\n\
             [http]\ntimeout_secs = 45\n\
             [output]\ndirectory = /srv/out\n\
             [tools]\nremap_command = remap {input} {output} {mappings}\n\
             decompile_command = decompile {input} {output}\n",
        )
        .unwrap();

        assert_eq!(
            file.manifest_url.as_deref(),
            Some("http://localhost/manifest.json")
        );
        assert_eq!(file.timeout_secs, Some(45));
        assert_eq!(file.output_dir, Some(PathBuf::from("/srv/out")));
        assert_eq!(
            file.remap_command.as_deref(),
            Some("remap {input} {output} {mappings}")
        );
        assert_eq!(
            file.decompile_command.as_deref(),
            Some("decompile {input} {output}")
        );
    }

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!(ConfigFile::parse("").unwrap(), ConfigFile::default());
        assert_eq!(
            ConfigFile::parse("[output]\ndirectory =\n").unwrap(),
            ConfigFile::default()
        );
    }

    #[test]
    fn test_invalid_timeout() {
        let err = ConfigFile::parse("[http]\ntimeout_secs = soon\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        let err = ConfigFile::parse("[http]\ntimeout_secs = 0\n").unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn test_missing_file_is_default() {
        let temp = TempDir::new().unwrap();
        let file = ConfigFile::load(&temp.path().join("config.ini")).unwrap();
        assert_eq!(file, ConfigFile::default());
    }

    #[test]
    fn test_load_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.ini");
        fs::write(&path, "[http]\ntimeout_secs = 12\n").unwrap();

        let file = ConfigFile::load(&path).unwrap();
        assert_eq!(file.timeout_secs, Some(12));
    }

    #[test]
    fn test_default_path_location() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with(".mcremapper/config.ini"));
        }
    }
}

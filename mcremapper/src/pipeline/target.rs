//! Target binary selection.

use std::fmt;
use std::str::FromStr;

/// Which distribution of a version the pipeline processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Client,
    Server,
}

impl Target {
    /// Descriptor key of the primary jar (`client` / `server`).
    pub fn key(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Server => "server",
        }
    }

    /// Descriptor key of the mapping file (`client_mappings` / `server_mappings`).
    pub fn mappings_key(&self) -> &'static str {
        match self {
            Self::Client => "client_mappings",
            Self::Server => "server_mappings",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "client" => Ok(Self::Client),
            "server" => Ok(Self::Server),
            other => Err(format!(
                "unknown target '{}', expected 'client' or 'server'",
                other
            )),
        }
    }
}

//! External remapping and decompilation capabilities.
//!
//! The pipeline treats both steps as opaque: it hands a jar (and for
//! remapping, a loaded mapping set) to a [`Remapper`] or [`Decompiler`] and
//! only cares whether the call succeeded. The bundled implementations run
//! an external command line, e.g. SpecialSource and Vineflower.

mod command;
mod mappings;

pub use command::{
    CommandDecompiler, CommandLine, CommandRemapper, DEFAULT_DECOMPILE_COMMAND,
    DEFAULT_REMAP_COMMAND,
};
pub use mappings::{load_mapping_file, MappingFile};

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Remapping capability.
pub trait Remapper {
    /// Loaded form of a mapping file.
    type Mappings;

    /// Load the mapping file at `path`.
    fn load_mappings(&self, path: &Path) -> Result<Self::Mappings, RemapError>;

    /// Remap `input` with `mappings`, writing the result to `output`.
    fn remap(&self, mappings: &Self::Mappings, input: &Path, output: &Path)
        -> Result<(), RemapError>;
}

/// Decompilation capability.
pub trait Decompiler {
    /// Decompile `jar` into source files under `output_dir`.
    fn decompile(&self, jar: &Path, output_dir: &Path) -> Result<(), DecompileError>;
}

/// Failure to run an external tool.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The configured command line cannot be parsed.
    #[error("invalid command line '{command}': {reason}")]
    InvalidCommand { command: String, reason: String },

    /// The program could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The program exited unsuccessfully.
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },
}

/// Errors from a [`Remapper`].
#[derive(Debug, Error)]
pub enum RemapError {
    /// The mapping file could not be read.
    #[error("failed to read mappings {}: {source}", .path.display())]
    ReadMappings {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The mapping file is not in a recognised format.
    #[error("invalid mappings {}: {reason}", .path.display())]
    InvalidMappings { path: PathBuf, reason: String },

    /// The remapping tool failed.
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// The tool reported success but produced no output jar.
    #[error("remapper produced no output at {}", .path.display())]
    MissingOutput { path: PathBuf },
}

/// Errors from a [`Decompiler`].
#[derive(Debug, Error)]
pub enum DecompileError {
    /// The output directory could not be created.
    #[error("failed to create {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The decompiler tool failed.
    #[error(transparent)]
    Tool(#[from] ToolError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_failure_display() {
        let err = RemapError::from(ToolError::Failed {
            program: "java".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "Unable to access jarfile".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "java exited with exit status: 1: Unable to access jarfile"
        );
    }

    #[test]
    fn test_invalid_mappings_display() {
        let err = RemapError::InvalidMappings {
            path: PathBuf::from("out/1.14.4.map"),
            reason: "no class mappings".to_string(),
        };
        assert!(err.to_string().contains("out/1.14.4.map"));
    }
}

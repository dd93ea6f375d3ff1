//! Command-line backed remapper and decompiler.
//!
//! Command lines are split with shell quoting rules and may reference the
//! placeholders `{input}`, `{output}` and `{mappings}`, which are replaced
//! per argument before the program runs. No shell is involved.

use std::fs;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use super::mappings::{load_mapping_file, MappingFile};
use super::{DecompileError, Decompiler, RemapError, Remapper, ToolError};

/// Default remapping command (SpecialSource reads ProGuard mappings).
pub const DEFAULT_REMAP_COMMAND: &str =
    "java -jar SpecialSource.jar --in-jar {input} --out-jar {output} --srg-in {mappings} --kill-lvt";

/// Default decompilation command (Vineflower).
pub const DEFAULT_DECOMPILE_COMMAND: &str = "java -jar vineflower.jar {input} {output}";

/// A parsed command line template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    raw: String,
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    /// Parse a command line template.
    pub fn parse(raw: &str) -> Result<Self, ToolError> {
        let invalid = |reason: String| ToolError::InvalidCommand {
            command: raw.to_string(),
            reason,
        };

        let mut words = shell_words::split(raw).map_err(|e| invalid(e.to_string()))?;
        if words.is_empty() {
            return Err(invalid("empty command".to_string()));
        }
        let program = words.remove(0);

        Ok(Self {
            raw: raw.to_string(),
            program,
            args: words,
        })
    }

    /// Program name (first word).
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The template as configured.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Arguments with every `{name}` placeholder replaced by its path.
    pub fn render(&self, substitutions: &[(&str, &Path)]) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| {
                substitutions
                    .iter()
                    .fold(arg.clone(), |acc, (name, path)| {
                        acc.replace(&format!("{{{}}}", name), &path.to_string_lossy())
                    })
            })
            .collect()
    }

    /// Run the command to completion.
    pub fn run(&self, substitutions: &[(&str, &Path)]) -> Result<(), ToolError> {
        let args = self.render(substitutions);
        debug!(program = %self.program, args = ?args, "Running external tool");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| ToolError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ToolError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(())
    }
}

/// Remapper that runs an external tool.
#[derive(Debug, Clone)]
pub struct CommandRemapper {
    command: CommandLine,
}

impl CommandRemapper {
    /// Create a remapper from a command line template.
    pub fn new(command: &str) -> Result<Self, ToolError> {
        Ok(Self {
            command: CommandLine::parse(command)?,
        })
    }

    /// The command line template.
    pub fn command(&self) -> &CommandLine {
        &self.command
    }
}

impl Remapper for CommandRemapper {
    type Mappings = MappingFile;

    fn load_mappings(&self, path: &Path) -> Result<MappingFile, RemapError> {
        let mappings = load_mapping_file(path)?;
        debug!(
            path = %path.display(),
            classes = mappings.class_count,
            "Mappings loaded"
        );
        Ok(mappings)
    }

    fn remap(&self, mappings: &MappingFile, input: &Path, output: &Path) -> Result<(), RemapError> {
        self.command.run(&[
            ("input", input),
            ("output", output),
            ("mappings", mappings.path.as_path()),
        ])?;

        if !output.exists() {
            return Err(RemapError::MissingOutput {
                path: output.to_path_buf(),
            });
        }
        Ok(())
    }
}

/// Decompiler that runs an external tool.
#[derive(Debug, Clone)]
pub struct CommandDecompiler {
    command: CommandLine,
}

impl CommandDecompiler {
    /// Create a decompiler from a command line template.
    pub fn new(command: &str) -> Result<Self, ToolError> {
        Ok(Self {
            command: CommandLine::parse(command)?,
        })
    }

    /// The command line template.
    pub fn command(&self) -> &CommandLine {
        &self.command
    }
}

impl Decompiler for CommandDecompiler {
    fn decompile(&self, jar: &Path, output_dir: &Path) -> Result<(), DecompileError> {
        fs::create_dir_all(output_dir).map_err(|e| DecompileError::CreateDir {
            path: output_dir.to_path_buf(),
            source: e,
        })?;

        self.command
            .run(&[("input", jar), ("output", output_dir)])?;
        Ok(())
    }
}

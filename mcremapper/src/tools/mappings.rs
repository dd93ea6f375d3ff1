//! ProGuard mapping file loading.
//!
//! Only enough of the format is read to reject files that are clearly not
//! mappings (empty, binary, HTML error pages). Member lines are left to the
//! remapping tool.

use std::fs;
use std::path::{Path, PathBuf};

use super::RemapError;

/// A mapping file that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingFile {
    /// Location of the file.
    pub path: PathBuf,
    /// Number of `original -> obfuscated:` class lines.
    pub class_count: usize,
}

/// Read and validate a ProGuard-style mapping file.
pub fn load_mapping_file(path: &Path) -> Result<MappingFile, RemapError> {
    let content = fs::read_to_string(path).map_err(|e| RemapError::ReadMappings {
        path: path.to_path_buf(),
        source: e,
    })?;

    let class_count = content.lines().filter(|line| is_class_line(line)).count();
    if class_count == 0 {
        return Err(RemapError::InvalidMappings {
            path: path.to_path_buf(),
            reason: "no class mappings found".to_string(),
        });
    }

    Ok(MappingFile {
        path: path.to_path_buf(),
        class_count,
    })
}

/// `net.minecraft.server.MinecraftServer -> net.minecraft.server.MinecraftServer:`
fn is_class_line(line: &str) -> bool {
    if line.starts_with('#') || line.starts_with(char::is_whitespace) {
        return false;
    }
    match line.split_once(" -> ") {
        Some((original, obfuscated)) => !original.is_empty() && obfuscated.ends_with(':'),
        None => false,
    }
}

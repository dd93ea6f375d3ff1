//! Server bundler jar unpacking.
//!
//! Newer server downloads are bundler jars that carry the real server jar
//! at `META-INF/versions/{id}/server-{id}.jar`. Older ones are the server
//! jar itself and have nothing to unpack.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use super::error::{ProcessingError, ProcessingResult};

/// Result of an unpack attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnpackOutcome {
    /// The embedded jar was copied out.
    Extracted { bytes: u64 },
    /// The jar has no embedded server jar.
    NoEmbeddedJar,
}

/// Copy `entry_name` out of the jar at `jar` to `destination`.
///
/// `destination` may be `jar` itself; the entry is read fully before
/// anything is written. An existing destination is overwritten.
pub fn unpack_embedded_jar(
    jar: &Path,
    entry_name: &str,
    destination: &Path,
) -> ProcessingResult<UnpackOutcome> {
    let unpack_error = |reason: String| ProcessingError::Unpack {
        path: jar.to_path_buf(),
        reason,
    };

    let file = File::open(jar).map_err(|e| unpack_error(e.to_string()))?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| unpack_error(e.to_string()))?;

    let content = match archive.by_name(entry_name) {
        Ok(mut entry) => {
            let mut content = Vec::new();
            entry
                .read_to_end(&mut content)
                .map_err(|e| unpack_error(format!("failed to read {}: {}", entry_name, e)))?;
            content
        }
        Err(zip::result::ZipError::FileNotFound) => return Ok(UnpackOutcome::NoEmbeddedJar),
        Err(e) => return Err(unpack_error(e.to_string())),
    };
    drop(archive);

    fs::write(destination, &content).map_err(|e| {
        unpack_error(format!("failed to write {}: {}", destination.display(), e))
    })?;

    Ok(UnpackOutcome::Extracted {
        bytes: content.len() as u64,
    })
}

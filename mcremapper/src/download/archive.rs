//! Structural validation of zip-like archives.

use std::fs::File;
use std::path::Path;

/// Check whether `path` opens as a zip container (jar files included).
///
/// Missing files, unreadable files, and truncated or corrupt archives all
/// report `false`. Only the central directory is read; entry contents are
/// not decompressed.
pub fn is_valid_archive(path: &Path) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };
    zip::ZipArchive::new(file).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn write_jar(path: &Path) {
        let mut writer = zip::ZipWriter::new(File::create(path).unwrap());
        writer
            .start_file("META-INF/MANIFEST.MF", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"Manifest-Version: 1.0\n").unwrap();
        writer.finish().unwrap();
    }

    #[test]
    fn test_valid_jar() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("valid.jar");
        write_jar(&path);

        assert!(is_valid_archive(&path));
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        assert!(!is_valid_archive(&temp.path().join("missing.jar")));
    }

    #[test]
    fn test_truncated_jar() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("truncated.jar");
        write_jar(&path);

        let bytes = fs::read(&path).unwrap();
        fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

        assert!(!is_valid_archive(&path));
    }

    #[test]
    fn test_plain_text_is_not_archive() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mappings.txt");
        fs::write(&path, "a.b.C -> a:\n").unwrap();

        assert!(!is_valid_archive(&path));
    }
}

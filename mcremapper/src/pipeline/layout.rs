//! On-disk layout of one version/target run.
//!
//! ```text
//! {output_root}/{id}{target}/
//!     {id}.jar            primary jar (server jars are unpacked in place)
//!     {id}.jar.sha1
//!     {id}.map            ProGuard mappings
//!     {id}.map.sha1
//!     remapped-{id}.jar
//!     decompiled/
//! ```

use std::path::{Path, PathBuf};

use super::target::Target;

/// Name of the decompiled sources directory.
pub const DECOMPILED_DIR: &str = "decompiled";

/// Deterministic paths for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLayout {
    root: PathBuf,
    version_id: String,
}

impl RunLayout {
    /// Layout for `version_id` and `target` under `output_root`.
    pub fn new(output_root: &Path, version_id: &str, target: Target) -> Self {
        Self {
            root: output_root.join(format!("{}{}", version_id, target.key())),
            version_id: version_id.to_string(),
        }
    }

    /// Run directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Primary jar.
    pub fn primary_jar(&self) -> PathBuf {
        self.root.join(format!("{}.jar", self.version_id))
    }

    /// Mapping file.
    pub fn mappings(&self) -> PathBuf {
        self.root.join(format!("{}.map", self.version_id))
    }

    /// Remapped jar.
    pub fn remapped_jar(&self) -> PathBuf {
        self.root.join(format!("remapped-{}.jar", self.version_id))
    }

    /// Decompiled sources directory (sibling of the remapped jar).
    pub fn decompiled_dir(&self) -> PathBuf {
        self.root.join(DECOMPILED_DIR)
    }

    /// Path inside a bundled server jar of the real server jar.
    pub fn embedded_server_entry(&self) -> String {
        format!(
            "META-INF/versions/{id}/server-{id}.jar",
            id = self.version_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = RunLayout::new(Path::new("MinecraftRemapper"), "1.14.4", Target::Server);

        assert_eq!(layout.root(), Path::new("MinecraftRemapper/1.14.4server"));
        assert_eq!(
            layout.primary_jar(),
            PathBuf::from("MinecraftRemapper/1.14.4server/1.14.4.jar")
        );
        assert_eq!(
            layout.mappings(),
            PathBuf::from("MinecraftRemapper/1.14.4server/1.14.4.map")
        );
        assert_eq!(
            layout.remapped_jar(),
            PathBuf::from("MinecraftRemapper/1.14.4server/remapped-1.14.4.jar")
        );
        assert_eq!(
            layout.decompiled_dir(),
            PathBuf::from("MinecraftRemapper/1.14.4server/decompiled")
        );
    }

    #[test]
    fn test_embedded_server_entry() {
        let layout = RunLayout::new(Path::new("out"), "1.18", Target::Server);
        assert_eq!(
            layout.embedded_server_entry(),
            "META-INF/versions/1.18/server-1.18.jar"
        );
    }

    #[test]
    fn test_client_root() {
        let layout = RunLayout::new(Path::new("out"), "1.15", Target::Client);
        assert_eq!(layout.root(), Path::new("out/1.15client"));
    }
}

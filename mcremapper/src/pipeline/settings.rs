//! Per-invocation pipeline settings.

use std::path::{Path, PathBuf};

use super::layout::RunLayout;
use super::target::Target;
use crate::catalog::CatalogEntry;

/// Everything one pipeline run decides on.
///
/// Built once per invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    output_root: PathBuf,
    target: Target,
    entry: CatalogEntry,
    remap: bool,
    decompile: bool,
}

impl PipelineSettings {
    /// Settings with remapping on and decompilation off.
    pub fn new(output_root: impl Into<PathBuf>, target: Target, entry: CatalogEntry) -> Self {
        Self {
            output_root: output_root.into(),
            target,
            entry,
            remap: true,
            decompile: false,
        }
    }

    /// Enable or disable remapping.
    pub fn with_remap(mut self, remap: bool) -> Self {
        self.remap = remap;
        self
    }

    /// Enable or disable decompilation.
    pub fn with_decompile(mut self, decompile: bool) -> Self {
        self.decompile = decompile;
        self
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn entry(&self) -> &CatalogEntry {
        &self.entry
    }

    pub fn remap(&self) -> bool {
        self.remap
    }

    pub fn decompile(&self) -> bool {
        self.decompile
    }

    /// Deterministic on-disk paths for this run.
    pub fn layout(&self) -> RunLayout {
        RunLayout::new(&self.output_root, &self.entry.id, self.target)
    }
}

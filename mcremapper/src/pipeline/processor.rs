//! Pipeline orchestrator.
//!
//! Runs the stages of one version/target strictly in order:
//!
//! 1. Prepare the run directory
//! 2. Fetch the download descriptor
//! 3. Acquire the primary jar
//! 4. Unpack the embedded server jar (server only)
//! 5. Acquire the mapping file
//! 6. Remap (if requested)
//! 7. Decompile (if requested, after remapping)
//!
//! Every stage either completes, is skipped with a recorded reason, or
//! fails and aborts the run.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::descriptor::DownloadDescriptor;
use super::error::{ProcessingError, ProcessingResult};
use super::layout::RunLayout;
use super::settings::PipelineSettings;
use super::stage::{PipelineReport, SkipReason, Stage, StageOutcome};
use super::target::Target;
use super::unpack::{unpack_embedded_jar, UnpackOutcome};
use crate::download::{is_valid_archive, Acquired, ArtifactCache, ArtifactKind, ArtifactRequest};
use crate::http::HttpClient;
use crate::tools::{Decompiler, Remapper};

/// Executes the pipeline for one [`PipelineSettings`].
pub struct Processor<'a, H, R, D>
where
    H: HttpClient + ?Sized,
    R: Remapper,
    D: Decompiler,
{
    settings: &'a PipelineSettings,
    http: &'a H,
    remapper: &'a R,
    decompiler: &'a D,
    layout: RunLayout,
}

impl<'a, H, R, D> Processor<'a, H, R, D>
where
    H: HttpClient + ?Sized,
    R: Remapper,
    D: Decompiler,
{
    /// Create a processor.
    ///
    /// # Arguments
    ///
    /// * `settings` - What to process
    /// * `http` - Client for metadata and artifact downloads
    /// * `remapper` - Remapping capability
    /// * `decompiler` - Decompilation capability
    pub fn new(
        settings: &'a PipelineSettings,
        http: &'a H,
        remapper: &'a R,
        decompiler: &'a D,
    ) -> Self {
        Self {
            settings,
            http,
            remapper,
            decompiler,
            layout: settings.layout(),
        }
    }

    /// Paths used by this run.
    pub fn layout(&self) -> &RunLayout {
        &self.layout
    }

    /// Run every stage.
    ///
    /// # Errors
    ///
    /// Returns the first fatal stage error; later stages do not run.
    pub fn process(&self) -> ProcessingResult<PipelineReport> {
        let mut report = PipelineReport::default();

        let outcome = self.prepare_directory()?;
        report.record(Stage::PrepareDirectory, outcome);

        let descriptor = self.fetch_descriptor()?;
        report.record(Stage::FetchDescriptor, StageOutcome::Completed);

        let primary = self.acquire(
            &descriptor,
            Stage::AcquirePrimary,
            "Version jar",
            self.settings.target().key(),
            self.layout.primary_jar(),
            ArtifactKind::Archive,
        )?;
        report.record(Stage::AcquirePrimary, acquisition_outcome(&primary));

        let outcome = self.unpack(&primary)?;
        report.record(Stage::Unpack, outcome);

        let mappings = self.acquire(
            &descriptor,
            Stage::AcquireMappings,
            "Version mapping",
            self.settings.target().mappings_key(),
            self.layout.mappings(),
            ArtifactKind::Plain,
        )?;
        report.record(Stage::AcquireMappings, acquisition_outcome(&mappings));

        if self.settings.remap() {
            let (outcome, remapped) = self.remap(&primary, &mappings.path)?;
            report.record(Stage::Remap, outcome);
            report.remapped_jar = Some(remapped.clone());

            if self.settings.decompile() {
                let decompiled = self.decompile(&remapped)?;
                report.record(Stage::Decompile, StageOutcome::Completed);
                report.decompiled_dir = Some(decompiled);
            } else {
                report.record(Stage::Decompile, StageOutcome::Skipped(SkipReason::NotRequested));
            }
        } else {
            report.record(Stage::Remap, StageOutcome::Skipped(SkipReason::NotRequested));
            let reason = if self.settings.decompile() {
                warn!("Decompiling requires remapping, skipping decompile.");
                SkipReason::RemapDisabled
            } else {
                SkipReason::NotRequested
            };
            report.record(Stage::Decompile, StageOutcome::Skipped(reason));
        }

        report.primary = Some(primary);
        report.mappings = Some(mappings);
        Ok(report)
    }

    fn prepare_directory(&self) -> ProcessingResult<StageOutcome> {
        let root = self.layout.root();
        if root.is_dir() {
            return Ok(StageOutcome::Skipped(SkipReason::AlreadyExists));
        }

        fs::create_dir_all(root).map_err(|e| ProcessingError::CreateDirectory {
            path: root.to_path_buf(),
            source: e,
        })?;
        Ok(StageOutcome::Completed)
    }

    fn fetch_descriptor(&self) -> ProcessingResult<DownloadDescriptor> {
        let entry = self.settings.entry();
        let json = self
            .http
            .get_string(&entry.url)
            .map_err(|e| ProcessingError::MetadataFetch {
                version: entry.id.clone(),
                source: e,
            })?;

        DownloadDescriptor::parse(&json).map_err(|e| ProcessingError::MetadataParse {
            url: entry.url.clone(),
            reason: e.to_string(),
        })
    }

    fn acquire(
        &self,
        descriptor: &DownloadDescriptor,
        stage: Stage,
        display: &str,
        key: &str,
        path: PathBuf,
        kind: ArtifactKind,
    ) -> ProcessingResult<Acquired> {
        let Some(download) = descriptor.get(key) else {
            debug!(available = ?descriptor.keys(), "Version metadata has no '{}' download", key);
            return Err(ProcessingError::MissingDownload {
                version: self.settings.entry().id.clone(),
                key: key.to_string(),
            });
        };

        let request = ArtifactRequest::new(display, path, &download.url, &download.sha1, kind);
        ArtifactCache::new(self.http)
            .acquire(&request)
            .map_err(|e| ProcessingError::Acquisition { stage, source: e })
    }

    fn unpack(&self, primary: &Acquired) -> ProcessingResult<StageOutcome> {
        if self.settings.target() != Target::Server {
            return Ok(StageOutcome::Skipped(SkipReason::NotApplicable));
        }
        if primary.is_fresh() {
            info!("SKIP --> Unpack server is already done.");
            return Ok(StageOutcome::Skipped(SkipReason::AlreadyUnpacked));
        }

        info!("Unpack server jar...");
        let entry = self.layout.embedded_server_entry();
        match unpack_embedded_jar(&primary.path, &entry, &self.layout.primary_jar())? {
            UnpackOutcome::Extracted { .. } => Ok(StageOutcome::Completed),
            UnpackOutcome::NoEmbeddedJar => {
                info!("Server jar has no embedded jar, nothing to unpack.");
                Ok(StageOutcome::Skipped(SkipReason::NoEmbeddedJar))
            }
        }
    }

    fn remap(
        &self,
        primary: &Acquired,
        mapping_path: &Path,
    ) -> ProcessingResult<(StageOutcome, PathBuf)> {
        let output = self.layout.remapped_jar();
        if primary.is_fresh() && is_valid_archive(&output) {
            info!("SKIP --> Remapping is already done.");
            return Ok((StageOutcome::Skipped(SkipReason::AlreadyRemapped), output));
        }

        info!("Load mappings...");
        let mappings = self
            .remapper
            .load_mappings(mapping_path)
            .map_err(|e| ProcessingError::MappingLoad {
                path: mapping_path.to_path_buf(),
                source: e,
            })?;

        info!("Remapping...");
        self.remapper
            .remap(&mappings, &primary.path, &output)
            .map_err(|e| ProcessingError::Remap {
                path: primary.path.clone(),
                source: e,
            })?;

        Ok((StageOutcome::Completed, output))
    }

    fn decompile(&self, remapped: &Path) -> ProcessingResult<PathBuf> {
        info!("Decompiling...");
        let output = self.layout.decompiled_dir();

        if let Err(e) = remove_dir_if_exists(&output) {
            warn!(
                "Failed to delete directory with decompiled files, continue to decompile...: {}",
                e
            );
        }

        self.decompiler
            .decompile(remapped, &output)
            .map_err(|e| ProcessingError::Decompile {
                path: remapped.to_path_buf(),
                source: e,
            })?;

        Ok(output)
    }
}

fn acquisition_outcome(acquired: &Acquired) -> StageOutcome {
    if acquired.is_fresh() {
        StageOutcome::Skipped(SkipReason::AlreadyDownloaded)
    } else {
        StageOutcome::Completed
    }
}

fn remove_dir_if_exists(path: &Path) -> std::io::Result<()> {
    if path.exists() {
        fs::remove_dir_all(path)?;
    }
    Ok(())
}

//! Pipeline stages and the run report.

use std::fmt;
use std::path::PathBuf;

use crate::download::Acquired;

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    /// Creating the run directory.
    PrepareDirectory,
    /// Fetching the per-version download descriptor.
    FetchDescriptor,
    /// Acquiring the client or server jar.
    AcquirePrimary,
    /// Extracting the real server jar from a bundler jar.
    Unpack,
    /// Acquiring the mapping file.
    AcquireMappings,
    /// Remapping the primary jar.
    Remap,
    /// Decompiling the remapped jar.
    Decompile,
}

impl Stage {
    /// Get a human-readable name for the stage.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PrepareDirectory => "Preparing directory",
            Self::FetchDescriptor => "Fetching metadata",
            Self::AcquirePrimary => "Downloading jar",
            Self::Unpack => "Unpacking server",
            Self::AcquireMappings => "Downloading mappings",
            Self::Remap => "Remapping",
            Self::Decompile => "Decompiling",
        }
    }

    /// Short identifier of the failure cause raised by this stage.
    pub fn cause(&self) -> &'static str {
        match self {
            Self::PrepareDirectory => "directory-create",
            Self::FetchDescriptor => "metadata-fetch",
            Self::AcquirePrimary | Self::AcquireMappings => "download",
            Self::Unpack => "unpack",
            Self::Remap => "remap",
            Self::Decompile => "decompile",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a stage did not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The directory already existed.
    AlreadyExists,
    /// The cached artifact was fresh.
    AlreadyDownloaded,
    /// The primary jar was fresh, so it was unpacked on an earlier run.
    AlreadyUnpacked,
    /// A valid remapped jar exists for an unchanged primary jar.
    AlreadyRemapped,
    /// The target has nothing to unpack (client jars).
    NotApplicable,
    /// The bundler jar has no embedded server jar (older versions ship flat).
    NoEmbeddedJar,
    /// The stage was not requested.
    NotRequested,
    /// Decompilation needs a remapped jar and remapping was disabled.
    RemapDisabled,
}

/// What happened to a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutcome {
    Completed,
    Skipped(SkipReason),
}

impl StageOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}

/// Ordered record of a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    /// Stage outcomes in execution order.
    pub stages: Vec<(Stage, StageOutcome)>,
    /// Result of acquiring the primary jar.
    pub primary: Option<Acquired>,
    /// Result of acquiring the mapping file.
    pub mappings: Option<Acquired>,
    /// Remapped jar, when remapping ran or was skipped as up to date.
    pub remapped_jar: Option<PathBuf>,
    /// Decompiled sources directory, when decompilation ran.
    pub decompiled_dir: Option<PathBuf>,
}

impl PipelineReport {
    pub(crate) fn record(&mut self, stage: Stage, outcome: StageOutcome) {
        self.stages.push((stage, outcome));
    }

    /// Outcome of `stage`, if it was reached.
    pub fn outcome(&self, stage: Stage) -> Option<StageOutcome> {
        self.stages
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, outcome)| *outcome)
    }

    /// Whether `stage` ran to completion.
    pub fn completed(&self, stage: Stage) -> bool {
        self.outcome(stage) == Some(StageOutcome::Completed)
    }

    /// Whether `stage` was skipped.
    pub fn skipped(&self, stage: Stage) -> bool {
        self.outcome(stage).is_some_and(|outcome| outcome.is_skipped())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order() {
        assert!(Stage::PrepareDirectory < Stage::FetchDescriptor);
        assert!(Stage::AcquireMappings < Stage::Remap);
        assert!(Stage::Remap < Stage::Decompile);
    }

    #[test]
    fn test_stage_cause() {
        assert_eq!(Stage::PrepareDirectory.cause(), "directory-create");
        assert_eq!(Stage::AcquireMappings.cause(), "download");
        assert_eq!(Stage::Decompile.cause(), "decompile");
    }

    #[test]
    fn test_report_lookup() {
        let mut report = PipelineReport::default();
        report.record(Stage::PrepareDirectory, StageOutcome::Completed);
        report.record(
            Stage::Unpack,
            StageOutcome::Skipped(SkipReason::AlreadyUnpacked),
        );

        assert!(report.completed(Stage::PrepareDirectory));
        assert!(report.skipped(Stage::Unpack));
        assert_eq!(report.outcome(Stage::Remap), None);
        assert!(!report.skipped(Stage::Remap));
    }
}

//! Staged processing of one version/target.
//!
//! # Stages
//!
//! ```text
//! PrepareDirectory ─► FetchDescriptor ─► AcquirePrimary ─► Unpack (server)
//!                                                              │
//!                      Decompile ◄─ Remap ◄─ AcquireMappings ◄─┘
//! ```
//!
//! Stages run in this order and never overlap. A skipped stage records a
//! [`SkipReason`] in the [`PipelineReport`]; a failed stage returns a
//! [`ProcessingError`] and the remaining stages do not run.
//!
//! # Example
//!
//! ```ignore
//! use mcremapper::pipeline::{PipelineSettings, Processor, Target};
//!
//! let settings = PipelineSettings::new("MinecraftRemapper", Target::Server, entry)
//!     .with_decompile(true);
//! let report = Processor::new(&settings, &client, &remapper, &decompiler).process()?;
//! println!("{:?}", report.remapped_jar);
//! ```

mod descriptor;
mod error;
mod layout;
mod processor;
mod settings;
mod stage;
mod target;
mod unpack;

pub use descriptor::{ArtifactDownload, DownloadDescriptor};
pub use error::{ProcessingError, ProcessingResult};
pub use layout::{RunLayout, DECOMPILED_DIR};
pub use processor::Processor;
pub use settings::PipelineSettings;
pub use stage::{PipelineReport, SkipReason, Stage, StageOutcome};
pub use target::Target;
pub use unpack::{unpack_embedded_jar, UnpackOutcome};

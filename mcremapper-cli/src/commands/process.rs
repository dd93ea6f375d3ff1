//! Version processing: select a version and run the pipeline.

use std::time::Instant;

use mcremapper::catalog::{self, CatalogSource, VersionCatalog};
use mcremapper::config::RemapperConfig;
use mcremapper::http::HttpClient;
use mcremapper::pipeline::{PipelineReport, PipelineSettings, Processor, Target};
use mcremapper::tools::{CommandDecompiler, CommandRemapper};
use tracing::{debug, info};

use crate::error::CliError;

/// Selection flags for a processing run.
#[derive(Debug, Clone)]
pub struct ProcessArgs {
    pub version: Option<String>,
    pub target: Option<Target>,
    pub remap: bool,
    pub decompile: bool,
}

/// Check the flags that need no network access.
pub fn validate(args: &ProcessArgs) -> Result<(Target, &str), CliError> {
    let target = args.target.ok_or(CliError::MissingTarget)?;
    let version = args.version.as_deref().ok_or(CliError::MissingVersion)?;
    Ok((target, version))
}

/// Resolve the selected version into pipeline settings.
pub fn select(
    catalog: &VersionCatalog,
    args: &ProcessArgs,
    config: &RemapperConfig,
) -> Result<PipelineSettings, CliError> {
    let (target, version) = validate(args)?;
    let entry = catalog::resolve(catalog, version)
        .ok_or_else(|| CliError::VersionNotFound(version.to_string()))?;

    Ok(
        PipelineSettings::new(config.output_dir.clone(), target, entry.clone())
            .with_remap(args.remap)
            .with_decompile(args.decompile),
    )
}

/// Fetch the catalog, select the version and run the pipeline.
pub fn run<S, H>(
    config: &RemapperConfig,
    source: &S,
    http: &H,
    args: &ProcessArgs,
) -> Result<PipelineReport, CliError>
where
    S: CatalogSource,
    H: HttpClient,
{
    validate(args)?;
    let remapper = CommandRemapper::new(&config.remap_command)?;
    let decompiler = CommandDecompiler::new(&config.decompile_command)?;
    debug!(
        remap = remapper.command().as_str(),
        decompile = decompiler.command().as_str(),
        "Tool commands"
    );

    let catalog = source.fetch_catalog()?;
    let settings = select(&catalog, args, config)?;

    info!(
        "Selected version: {} ({})",
        settings.entry().id,
        settings.target()
    );
    info!("Remapping: {}", settings.remap());
    info!("Decompiling: {}", settings.decompile());
    info!("Output directory: {}", settings.output_root().display());
    info!("----------------");

    let start = Instant::now();
    let report = Processor::new(&settings, http, &remapper, &decompiler).process()?;
    info!("Finished in {} seconds", start.elapsed().as_secs());

    if let Some(jar) = &report.remapped_jar {
        info!("Remapped jar: {}", jar.display());
    }
    if let Some(dir) = &report.decompiled_dir {
        info!("Decompiled sources: {}", dir.display());
    }
    Ok(report)
}

//! mcremapper CLI - Command-line interface
//!
//! Lists remappable Minecraft versions and runs the download, remap and
//! decompile pipeline for one of them.

mod commands;
mod error;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, CommandFactory, Parser};
use mcremapper::catalog::ManifestFetcher;
use mcremapper::pipeline::Target;
use tracing::error;

use commands::common::{self, ConfigOverrides};
use commands::process::ProcessArgs;
use error::CliError;

/// Download, remap and decompile Minecraft release jars.
#[derive(Debug, Parser)]
#[command(name = "mcremapper", disable_version_flag = true)]
struct Cli {
    /// List the versions that can be remapped
    #[arg(short, long)]
    list: bool,

    /// Version to process (e.g. 1.14.4)
    #[arg(short = 'v', long = "version", value_name = "ID")]
    version: Option<String>,

    /// Which jar to process
    #[arg(short = 't', long = "type", value_name = "client|server")]
    target: Option<Target>,

    /// Remap the jar with the official mappings
    #[arg(short, long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
    remap: bool,

    /// Decompile the remapped jar
    #[arg(short, long)]
    decompile: bool,

    /// Root directory for downloaded and generated files [default: MinecraftRemapper]
    #[arg(short = 'o', long = "output-directory", value_name = "DIR")]
    output_directory: Option<PathBuf>,

    /// Config file [default: ~/.mcremapper/config.ini]
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Version manifest URL
    #[arg(long, value_name = "URL")]
    manifest_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Remapping command ({input}, {output} and {mappings} are substituted)
    #[arg(long, value_name = "CMD")]
    remap_command: Option<String>,

    /// Decompilation command ({input} and {output} are substituted)
    #[arg(long, value_name = "CMD")]
    decompile_command: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_file: self.config.clone(),
            manifest_url: self.manifest_url.clone(),
            output_dir: self.output_directory.clone(),
            timeout_secs: self.timeout,
            remap_command: self.remap_command.clone(),
            decompile_command: self.decompile_command.clone(),
        }
    }

    fn process_args(&self) -> ProcessArgs {
        ProcessArgs {
            version: self.version.clone(),
            target: self.target,
            remap: self.remap,
            decompile: self.decompile,
        }
    }
}

fn main() -> ExitCode {
    if std::env::args_os().len() <= 1 {
        // Best effort; nothing useful to do if stdout is gone.
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    }

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = common::resolve_config(&cli.overrides())?;
    let http = common::http_client(&config)?;
    let source = ManifestFetcher::with_url(&http, config.manifest_url.clone());

    if cli.list {
        return commands::list::run(&source);
    }

    commands::process::run(&config, &source, &http, &cli.process_args())?;
    Ok(())
}

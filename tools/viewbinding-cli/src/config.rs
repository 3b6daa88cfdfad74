//! Command-line arguments and the validated run configuration

use crate::error::{CliError, CliResult};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use viewbinding_codegen::validate_application_id;

/// View Binding Code Generator - generate C binding headers from GTK .ui files
#[derive(Debug, Parser)]
#[command(name = "viewbinding")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The application ID
    #[arg(short, long, value_name = "ID")]
    pub application_id: String,

    /// The directory to scan for UI files
    #[arg(short, long, value_name = "DIR")]
    pub directory: PathBuf,

    /// The output directory for generated files
    #[arg(short, long, value_name = "DIR")]
    pub output_directory: PathBuf,

    /// Print generated headers to stdout instead of writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Checked settings, read-only for the rest of the run.
#[derive(Debug, Clone)]
pub struct Config {
    pub application_id: String,
    pub directory: PathBuf,
    pub output_directory: PathBuf,
    pub dry_run: bool,
}

impl Config {
    /// Validate the arguments and make sure the output directory exists.
    ///
    /// Checks run in order: application id, input directory, output
    /// directory. The output directory is created with its parents when
    /// missing, except in dry-run mode where nothing is written.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        validate_application_id(&cli.application_id)?;

        if !cli.directory.is_dir() {
            return Err(CliError::NotADirectory(cli.directory.clone()));
        }

        let output = &cli.output_directory;
        if output.exists() {
            if !output.is_dir() {
                return Err(CliError::OutputNotADirectory(output.clone()));
            }
        } else if !cli.dry_run {
            debug!(path = %output.display(), "creating output directory");
            std::fs::create_dir_all(output).map_err(|source| {
                CliError::CreateOutputDirectory {
                    path: output.clone(),
                    source,
                }
            })?;
        }

        Ok(Self {
            application_id: cli.application_id.clone(),
            directory: cli.directory.clone(),
            output_directory: output.clone(),
            dry_run: cli.dry_run,
        })
    }
}

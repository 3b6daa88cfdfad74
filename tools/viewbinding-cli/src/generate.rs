//! Header generation run
//!
//! Walks `--directory` for `*.ui` files and, one file at a time, scans it,
//! renders its header and writes `<output-directory>/<base_name>_viewbinding.h`.
//! A failing file is reported on stderr and skipped; the run carries on.

use crate::config::Config;
use crate::error::{CliError, CliResult};
use anyhow::Context;
use colored::Colorize;
use std::path::Path;
use tracing::{debug, info};
use viewbinding_codegen::{render_header, scan_str, RenderedHeader};

/// Extension of the files picked up from `--directory`.
pub const UI_EXTENSION: &str = ".ui";

/// Outcome of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Headers written (or printed, in dry-run mode)
    pub generated: usize,
    /// Files skipped because of a read, parse or write error
    pub failed: usize,
}

impl RunSummary {
    pub fn print(&self) {
        println!("{} {} header(s) generated", "✓".green(), self.generated);
        if self.failed > 0 {
            eprintln!("{} {} file(s) skipped", "!".yellow(), self.failed);
        }
    }
}

/// Process every `.ui` file in `config.directory`.
///
/// Only a failure to list the directory is returned as an error; per-file
/// failures are printed and counted in the summary.
pub fn run(config: &Config) -> CliResult<RunSummary> {
    let files = ui_files(&config.directory)?;
    info!(
        directory = %config.directory.display(),
        files = files.len(),
        "generating view bindings"
    );

    let mut summary = RunSummary::default();
    for file_name in &files {
        match process_file(config, file_name) {
            Ok(()) => summary.generated += 1,
            Err(e) => {
                debug_assert!(e.is_per_file());
                eprintln!("{} {}", "✗".red(), e);
                summary.failed += 1;
            }
        }
    }

    info!(
        generated = summary.generated,
        failed = summary.failed,
        "done"
    );
    Ok(summary)
}

/// Names of the `.ui` files directly inside `directory`, sorted.
pub fn ui_files(directory: &Path) -> CliResult<Vec<String>> {
    let entries = std::fs::read_dir(directory)
        .with_context(|| format!("reading directory {}", directory.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("reading directory {}", directory.display()))?;
        match entry.file_name().into_string() {
            Ok(name) if name.ends_with(UI_EXTENSION) => names.push(name),
            Ok(_) => {}
            Err(name) => debug!(?name, "skipping non UTF-8 file name"),
        }
    }
    names.sort();
    Ok(names)
}

/// Scan, render and emit the header for one `.ui` file.
pub fn process_file(config: &Config, file_name: &str) -> CliResult<()> {
    let source_path = config.directory.join(file_name);
    debug!(path = %source_path.display(), "scanning");

    let xml = std::fs::read_to_string(&source_path).map_err(|source| CliError::ReadFile {
        path: source_path.clone(),
        source,
    })?;

    let bindings = scan_str(&xml).map_err(|source| CliError::ParseFile {
        path: source_path.clone(),
        source,
    })?;
    debug!(
        objects = bindings.objects.len(),
        signals = bindings.signals.len(),
        "collected bindings"
    );

    let header = render_header(&config.application_id, file_name, &bindings);
    if config.dry_run {
        print_header(config, &header);
        Ok(())
    } else {
        write_header(config, &header)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Write (truncating) the header into the output directory.
fn write_header(config: &Config, header: &RenderedHeader) -> CliResult<()> {
    let path = config.output_directory.join(&header.file_name);
    std::fs::write(&path, &header.contents).map_err(|source| CliError::WriteFile {
        path: path.clone(),
        source,
    })?;
    println!("  {} {} written", "→".cyan(), path.display());
    Ok(())
}

fn print_header(config: &Config, header: &RenderedHeader) {
    let path = config.output_directory.join(&header.file_name);
    println!("{}  {}", "──".dimmed(), path.display());
    print!("{}", header.contents);
}

//! viewbinding - generate C view binding headers from GTK .ui files
//!
//! ```text
//! viewbinding -a com_example_App -d src/ui -o build/generated
//! viewbinding -a com_example_App -d src/ui -o build/generated --dry-run
//! ```

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use viewbinding_cli::{generate, Cli, Config};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries status lines and dry-run output
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = Config::from_cli(&cli).and_then(|config| generate::run(&config));

    match result {
        Ok(summary) => summary.print(),
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            std::process::exit(1);
        }
    }
}

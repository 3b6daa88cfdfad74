//! View binding CLI
//!
//! Argument handling, directory scanning and file I/O around
//! [`viewbinding_codegen`]. The `viewbinding` binary is a thin wrapper over
//! [`config::Config::from_cli`] and [`generate::run`].

pub mod config;
pub mod error;
pub mod generate;

pub use config::{Cli, Config};
pub use error::{CliError, CliResult};
pub use generate::{run, RunSummary};

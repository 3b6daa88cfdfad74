//! CLI Error Types
//!
//! Configuration errors end the run; per-file errors are reported and the
//! run moves on to the next file.

use std::path::PathBuf;
use thiserror::Error;
use viewbinding_codegen::{CodegenError, ValidationError};

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// `--application-id` does not match `com_example_AppName`
    #[error(transparent)]
    InvalidApplicationId(#[from] ValidationError),

    /// `--directory` is missing or not a directory
    #[error("--directory '{}' is not a valid directory.", .0.display())]
    NotADirectory(PathBuf),

    /// `--output-directory` exists but is not a directory
    #[error("--output-directory '{}' is not a valid directory.", .0.display())]
    OutputNotADirectory(PathBuf),

    /// `--output-directory` could not be created
    #[error("could not create output directory '{}': {source}", path.display())]
    CreateOutputDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A `.ui` file could not be read
    #[error("reading file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A `.ui` file is not well-formed XML
    #[error("parsing XML file {}: {source}", path.display())]
    ParseFile {
        path: PathBuf,
        source: CodegenError,
    },

    /// A header could not be written
    #[error("writing to file {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Generic error
    #[error("{0:#}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// `true` for errors that only concern a single `.ui` file.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            CliError::ReadFile { .. } | CliError::ParseFile { .. } | CliError::WriteFile { .. }
        )
    }
}

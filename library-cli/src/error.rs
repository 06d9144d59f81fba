//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
///
/// Only whole-run failures end up here. Per-line registry failures are
/// reported by the interpreter and never abort the run.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input or output file could not be opened
    #[error("couldn't open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error while reading commands or writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::path::{Path, PathBuf};
use tracing::Level;

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Command file path
    pub input: PathBuf,
    /// Results file path
    pub output: PathBuf,
    /// Quiet mode
    pub quiet: bool,
    /// Maximum log level for the subscriber
    pub log_level: Level,
}

impl Config {
    /// Build config from CLI args, expanding `~` and validating paths
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let input = expand_tilde(&args.input);
        let output = expand_tilde(&args.output);

        // Opening the output truncates it, which would wipe the commands
        if input == output {
            return Err(CliError::Config(format!(
                "input and output must be different files: {}",
                input.display()
            )));
        }

        Ok(Config {
            input,
            output,
            quiet: args.quiet,
            log_level: log_level(args.verbose),
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(home) = dirs::home_dir()
    {
        if path_str == "~" {
            return home;
        }
        if let Some(rest) = path_str.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

/// Map the `-v` count to a tracing level
fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

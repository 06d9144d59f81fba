//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Lending library command runner
#[derive(Parser, Debug)]
#[command(
    name = "library",
    about = "Run a lending library command file",
    version
)]
pub struct Args {
    /// Command file to read (one `<verb> [args...]` per line)
    pub input: PathBuf,

    /// File that receives query results (`listTitles`, `containsAuthor`)
    pub output: PathBuf,

    /// Quiet mode - suppress status lines and the summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

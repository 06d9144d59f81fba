//! Lending library CLI - runs a command file against an in-memory registry

mod cli;
mod config;
mod error;
mod interpreter;
mod output;

use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use interpreter::Interpreter;
use output::OutputFormatter;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::info;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    setup_tracing(&config);

    // Both files are opened before any command runs
    let input = open_input(&config.input)?;
    let output = create_output(&config.output)?;

    let formatter = OutputFormatter::new(std::io::stdout().lock(), config.quiet);
    let mut interpreter = Interpreter::new(formatter, output);
    let stats = interpreter.run(input)?;

    info!(
        records = interpreter.registry().len(),
        applied = stats.applied,
        failed = stats.failed,
        skipped = stats.skipped,
        "run finished"
    );
    Ok(())
}

/// Install a stderr fmt subscriber at the configured level
fn setup_tracing(config: &Config) {
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open_input(path: &Path) -> Result<BufReader<File>, CliError> {
    info!(path = %path.display(), "opening command file");
    let file = File::open(path).map_err(|source| CliError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

fn create_output(path: &Path) -> Result<BufWriter<File>, CliError> {
    info!(path = %path.display(), "creating results file");
    let file = File::create(path).map_err(|source| CliError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

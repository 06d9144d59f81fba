//! Command interpreter driving the registry from a command file

use crate::error::CliError;
use crate::output::OutputFormatter;
use itertools::Itertools;
use library_registry::{Command, Registry, RegistryError, parse_line};
use std::borrow::Cow;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Result of applying one command to the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added { title: String, author: String },
    CheckedOut { title: String, author: String },
    Returned { title: String, author: String },
    /// Available titles, already sorted
    Titles(Vec<String>),
    ContainsAuthor(bool),
    /// Unrecognized verb
    Unknown(String),
    /// Registry rejected the command
    Failed(RegistryError),
}

/// Per-run counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Every line read, including blanks and comments
    pub lines_read: usize,
    /// Commands that succeeded, queries included
    pub applied: usize,
    /// Commands the registry rejected
    pub failed: usize,
    /// Lines with an unrecognized verb
    pub skipped: usize,
}

impl RunStats {
    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Failed(_) => self.failed += 1,
            Outcome::Unknown(_) => self.skipped += 1,
            _ => self.applied += 1,
        }
    }
}

/// Applies command lines to a registry
///
/// Status lines go through the [`OutputFormatter`]; query answers
/// (`listTitles`, `containsAuthor`) are written to the results sink.
pub struct Interpreter<S: Write, R: Write> {
    registry: Registry,
    formatter: OutputFormatter<S>,
    results: R,
    stats: RunStats,
}

impl<S: Write, R: Write> Interpreter<S, R> {
    /// Create an interpreter over an empty registry
    pub fn new(formatter: OutputFormatter<S>, results: R) -> Self {
        Self {
            registry: Registry::new(),
            formatter,
            results,
            stats: RunStats::default(),
        }
    }

    /// Apply a parsed command to the registry
    pub fn execute(&mut self, command: Command<'_>) -> Outcome {
        let result = match command {
            Command::Add { title, author } => {
                self.registry.add(title, author).map(|record| Outcome::Added {
                    title: record.title().to_string(),
                    author: record.author().to_string(),
                })
            }
            Command::Checkout { title } => {
                self.registry
                    .checkout(title)
                    .map(|record| Outcome::CheckedOut {
                        title: record.title().to_string(),
                        author: record.author().to_string(),
                    })
            }
            Command::Return { title } => {
                self.registry
                    .return_item(title)
                    .map(|record| Outcome::Returned {
                        title: record.title().to_string(),
                        author: record.author().to_string(),
                    })
            }
            Command::ListTitles => Ok(Outcome::Titles(
                self.registry
                    .available_titles()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            )),
            Command::ContainsAuthor { author } => {
                Ok(Outcome::ContainsAuthor(self.registry.contains_author(author)))
            }
            Command::Unknown(verb) => Ok(Outcome::Unknown(verb.to_string())),
        };

        result.unwrap_or_else(Outcome::Failed)
    }

    /// Parse, apply and report a single line
    ///
    /// Returns `Ok(None)` for blank and comment lines. Registry failures
    /// come back as `Outcome::Failed`; only sink I/O errors are `Err`.
    pub fn process_line(&mut self, line: &str) -> Result<Option<Outcome>, CliError> {
        self.stats.lines_read += 1;
        let line_no = self.stats.lines_read;

        let Some(command) = parse_line(line) else {
            return Ok(None);
        };
        debug!(line = line_no, mutating = command.is_mutating(), ?command, "executing");

        let outcome = self.execute(command);
        match &outcome {
            Outcome::Failed(e) => {
                info!(line = line_no, error = %e, "command failed");
            }
            Outcome::Unknown(verb) => {
                warn!(line = line_no, verb = %verb, "unknown command");
            }
            _ => {}
        }

        self.stats.record(&outcome);
        self.write_result(&outcome)?;
        self.formatter.print_outcome(&outcome)?;
        Ok(Some(outcome))
    }

    fn write_result(&mut self, outcome: &Outcome) -> Result<(), CliError> {
        match outcome {
            Outcome::Titles(titles) => writeln!(self.results, "{}", titles.iter().join(" "))?,
            Outcome::ContainsAuthor(found) => writeln!(self.results, "{}", found)?,
            _ => {}
        }
        Ok(())
    }

    /// Process every line of `input`, then flush results and print the summary
    ///
    /// Lines are read as raw bytes; invalid UTF-8 is replaced with U+FFFD
    /// so one bad line cannot stop the run.
    pub fn run<B: BufRead>(&mut self, mut input: B) -> Result<RunStats, CliError> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }

            let line = String::from_utf8_lossy(&buf);
            if matches!(line, Cow::Owned(_)) {
                warn!(line = self.stats.lines_read + 1, "invalid UTF-8 replaced");
            }
            self.process_line(&line)?;
        }
        self.results.flush()?;
        self.formatter.print_summary(&self.stats)?;
        Ok(self.stats)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Consume the interpreter, returning the status and results sinks
    #[cfg(test)]
    pub fn into_sinks(self) -> (S, R) {
        (self.formatter.into_inner(), self.results)
    }
}

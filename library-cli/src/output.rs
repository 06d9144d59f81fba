//! Output formatting for command outcomes

use crate::interpreter::{Outcome, RunStats};
use chrono::TimeDelta;
use std::io::{self, Write};
use std::time::Instant;

/// Writes human-readable status lines to the status sink
///
/// Query answers are not written here; they go to the results sink.
pub struct OutputFormatter<W: Write> {
    status: W,
    quiet: bool,
    start_time: Instant,
}

impl<W: Write> OutputFormatter<W> {
    /// Create a new output formatter
    pub fn new(status: W, quiet: bool) -> Self {
        Self {
            status,
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Print the status line for one outcome, if it has one
    ///
    /// Quiet mode drops confirmations but keeps errors and skipped commands.
    pub fn print_outcome(&mut self, outcome: &Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Added { title, author } if !self.quiet => writeln!(
                self.status,
                "Successfully added {} by {} to the library",
                title, author
            ),
            Outcome::CheckedOut { title, author } if !self.quiet => writeln!(
                self.status,
                "Successfully checked out {} by {}",
                title, author
            ),
            Outcome::Returned { title, author } if !self.quiet => {
                writeln!(self.status, "Successfully returned {} by {}", title, author)
            }
            Outcome::Unknown(verb) => writeln!(
                self.status,
                "\"{}\" is an invalid command, skipping...",
                verb
            ),
            Outcome::Failed(e) => writeln!(self.status, "Error: {}", e),
            _ => Ok(()),
        }
    }

    /// Print a summary after all lines have been processed
    pub fn print_summary(&mut self, stats: &RunStats) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        let elapsed = TimeDelta::from_std(self.start_time.elapsed()).unwrap_or(TimeDelta::MAX);

        writeln!(self.status)?;
        writeln!(self.status, "--- Summary ---")?;
        writeln!(
            self.status,
            "Commands: {} applied, {} failed, {} skipped ({} lines read)",
            stats.applied, stats.failed, stats.skipped, stats.lines_read
        )?;
        writeln!(self.status, "Elapsed time: {}", format_duration(elapsed))
    }

    /// Recover the status sink
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.status
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

//! Line-oriented command grammar
//!
//! Each non-blank, non-comment line is `<verb> [args...]` with arguments
//! separated by whitespace. A missing argument reads as the empty string;
//! surplus arguments are ignored.

/// A single parsed command line, borrowing from the input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `add <title> <author>`
    Add { title: &'a str, author: &'a str },
    /// `checkout <title> [author]`
    Checkout { title: &'a str },
    /// `return <title> [author]`
    Return { title: &'a str },
    /// `list` or `listTitles`
    ListTitles,
    /// `containsAuthor <author>`
    ContainsAuthor { author: &'a str },
    /// Any other verb
    Unknown(&'a str),
}

impl Command<'_> {
    /// Whether this command changes registry state
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Add { .. } | Self::Checkout { .. } | Self::Return { .. }
        )
    }
}

/// Parse one input line
///
/// Returns `None` for blank lines and lines that begin with `#`. A `#`
/// after leading whitespace is not a comment; it parses as an unknown verb.
///
/// # Example
///
/// ```
/// use library_registry::{Command, parse_line};
///
/// assert_eq!(parse_line("# comment"), None);
/// assert_eq!(
///     parse_line("add Dune Herbert"),
///     Some(Command::Add { title: "Dune", author: "Herbert" })
/// );
/// assert_eq!(parse_line("listTitles"), Some(Command::ListTitles));
/// ```
pub fn parse_line(line: &str) -> Option<Command<'_>> {
    if line.starts_with('#') {
        return None;
    }
    let mut tokens = line.split_whitespace();
    let verb = tokens.next()?;

    let mut arg = || tokens.next().unwrap_or("");

    let command = match verb {
        "add" => {
            let title = arg();
            let author = arg();
            Command::Add { title, author }
        }
        "checkout" => Command::Checkout { title: arg() },
        "return" => Command::Return { title: arg() },
        "list" | "listTitles" => Command::ListTitles,
        "containsAuthor" => Command::ContainsAuthor { author: arg() },
        other => Command::Unknown(other),
    };
    Some(command)
}

//! A single catalog entry

use std::fmt;

/// A catalog entry: title, author, sequential id and checkout flag
///
/// Title, author and id are fixed at creation. The checkout flag only
/// changes through [`Registry::checkout`](crate::Registry::checkout) and
/// [`Registry::return_item`](crate::Registry::return_item).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    title: String,
    author: String,
    id: u32,
    checked_out: bool,
}

impl Record {
    pub(crate) fn new(title: &str, author: &str, id: u32) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            id,
            checked_out: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Sequential id assigned by the owning registry, starting at 1
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn is_checked_out(&self) -> bool {
        self.checked_out
    }

    pub(crate) fn set_checked_out(&mut self, checked_out: bool) {
        self.checked_out = checked_out;
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

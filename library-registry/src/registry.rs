//! In-memory registry of records keyed by title

use crate::error::{RegistryError, TransitionConflict};
use crate::record::Record;
use tracing::debug;

/// First id handed out by a fresh registry
pub const FIRST_ID: u32 = 1;

/// Owns the records and the next-id counter
///
/// Records are kept in insertion order. Title lookups scan that order and
/// stop at the first match, so if the same title is added twice the older
/// record shadows the newer one.
///
/// # Example
///
/// ```
/// use library_registry::Registry;
///
/// let mut registry = Registry::new();
/// registry.add("Dune", "Herbert").unwrap();
/// registry.add("Foundation", "Asimov").unwrap();
/// registry.checkout("Dune").unwrap();
///
/// assert_eq!(registry.available_titles(), vec!["Foundation"]);
/// assert!(registry.contains_author("Asimov"));
/// assert!(!registry.contains_author("Clarke"));
/// ```
#[derive(Debug)]
pub struct Registry {
    records: Vec<Record>,
    next_id: u32,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        debug!("registry created");
        Self {
            records: Vec::new(),
            next_id: FIRST_ID,
        }
    }

    /// Insert a new record with the next sequential id
    ///
    /// # Returns
    /// * `Ok(&Record)` - The stored record
    /// * `Err(RegistryError::InvalidArgument)` - Title or author is empty
    /// * `Err(RegistryError::IdsExhausted)` - The id counter cannot advance
    pub fn add(&mut self, title: &str, author: &str) -> Result<&Record, RegistryError> {
        if title.is_empty() {
            return Err(RegistryError::InvalidArgument { field: "title" });
        }
        if author.is_empty() {
            return Err(RegistryError::InvalidArgument { field: "author" });
        }

        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or(RegistryError::IdsExhausted { last_id: id })?;
        debug!(id, title, author, "record created");

        self.records.push(Record::new(title, author, id));
        let index = self.records.len() - 1;
        Ok(&self.records[index])
    }

    /// Find the first record (in insertion order) with the given title
    pub fn find_by_title(&self, title: &str) -> Result<&Record, RegistryError> {
        self.records
            .iter()
            .find(|record| record.title() == title)
            .ok_or_else(|| RegistryError::NotFound(title.to_string()))
    }

    fn find_by_title_mut(&mut self, title: &str) -> Result<&mut Record, RegistryError> {
        self.records
            .iter_mut()
            .find(|record| record.title() == title)
            .ok_or_else(|| RegistryError::NotFound(title.to_string()))
    }

    /// Mark a record as checked out
    ///
    /// # Returns
    /// * `Ok(&Record)` - The record, now checked out
    /// * `Err(RegistryError::NotFound)` - No record with this title
    /// * `Err(RegistryError::InvalidState)` - Record is already checked out
    pub fn checkout(&mut self, title: &str) -> Result<&Record, RegistryError> {
        self.transition(title, true)
    }

    /// Mark a checked-out record as returned
    ///
    /// # Returns
    /// * `Ok(&Record)` - The record, now available
    /// * `Err(RegistryError::NotFound)` - No record with this title
    /// * `Err(RegistryError::InvalidState)` - Record is not checked out
    pub fn return_item(&mut self, title: &str) -> Result<&Record, RegistryError> {
        self.transition(title, false)
    }

    fn transition(&mut self, title: &str, checked_out: bool) -> Result<&Record, RegistryError> {
        let record = self.find_by_title_mut(title)?;
        if record.is_checked_out() == checked_out {
            let conflict = if checked_out {
                TransitionConflict::AlreadyCheckedOut
            } else {
                TransitionConflict::NotCheckedOut
            };
            return Err(RegistryError::InvalidState {
                title: title.to_string(),
                conflict,
            });
        }

        record.set_checked_out(checked_out);
        debug!(id = record.id(), title, checked_out, "record state changed");
        Ok(&*record)
    }

    /// Titles of every record that is not checked out, sorted ascending
    ///
    /// Ordering is byte-wise on the UTF-8 text, so it is case-sensitive
    /// (`"Zebra"` sorts before `"apple"`).
    pub fn available_titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = self
            .records
            .iter()
            .filter(|record| !record.is_checked_out())
            .map(Record::title)
            .collect();
        titles.sort();
        titles
    }

    /// Whether any record, in any checkout state, has exactly this author
    pub fn contains_author(&self, author: &str) -> bool {
        self.records.iter().any(|record| record.author() == author)
    }

    /// Checkout state of the record with this title
    pub fn is_checked_out(&self, title: &str) -> Result<bool, RegistryError> {
        self.find_by_title(title).map(Record::is_checked_out)
    }

    /// Records in insertion order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn sample() -> Registry {
        let mut registry = Registry::new();
        registry.add("Dune", "Herbert").unwrap();
        registry.add("Foundation", "Asimov").unwrap();
        registry
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut registry = Registry::new();
        assert_eq!(registry.add("Dune", "Herbert").unwrap().id(), 1);
        assert_eq!(registry.add("Foundation", "Asimov").unwrap().id(), 2);
        assert_eq!(registry.add("Emma", "Austen").unwrap().id(), 3);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_add_rejects_empty_fields() {
        let mut registry = Registry::new();

        let err = registry.add("", "Herbert").unwrap_err();
        assert_eq!(err, RegistryError::InvalidArgument { field: "title" });

        let err = registry.add("Dune", "").unwrap_err();
        assert_eq!(err, RegistryError::InvalidArgument { field: "author" });

        let err = registry.add("", "").unwrap_err();
        assert_eq!(err, RegistryError::InvalidArgument { field: "title" });

        assert!(registry.is_empty());
    }

    #[test]
    fn test_failed_add_does_not_consume_an_id() {
        let mut registry = Registry::new();
        registry.add("", "Herbert").unwrap_err();
        assert_eq!(registry.add("Dune", "Herbert").unwrap().id(), 1);
    }

    #[test]
    fn test_id_overflow_is_an_error() {
        let mut registry = Registry::new();
        registry.next_id = u32::MAX;

        let err = registry.add("Dune", "Herbert").unwrap_err();
        assert_eq!(err, RegistryError::IdsExhausted { last_id: u32::MAX });
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert!(registry.is_empty());
        assert_eq!(registry.next_id, u32::MAX);
    }

    #[test]
    fn test_new_record_is_available() {
        let mut registry = Registry::new();
        let record = registry.add("Dune", "Herbert").unwrap();
        assert!(!record.is_checked_out());
        assert_eq!(record.to_string(), "Dune by Herbert");
    }

    #[test]
    fn test_checkout_and_return() {
        let mut registry = sample();

        let record = registry.checkout("Dune").unwrap();
        assert!(record.is_checked_out());
        assert_eq!(record.author(), "Herbert");
        assert_eq!(registry.is_checked_out("Dune"), Ok(true));

        let record = registry.return_item("Dune").unwrap();
        assert!(!record.is_checked_out());
        assert_eq!(registry.is_checked_out("Dune"), Ok(false));
    }

    #[test]
    fn test_double_checkout_fails() {
        let mut registry = sample();
        registry.checkout("Dune").unwrap();

        let err = registry.checkout("Dune").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(
            err,
            RegistryError::InvalidState {
                title: "Dune".to_string(),
                conflict: TransitionConflict::AlreadyCheckedOut,
            }
        );
        assert_eq!(registry.is_checked_out("Dune"), Ok(true));
    }

    #[test]
    fn test_return_without_checkout_fails() {
        let mut registry = sample();

        let err = registry.return_item("Foundation").unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidState {
                title: "Foundation".to_string(),
                conflict: TransitionConflict::NotCheckedOut,
            }
        );
        assert_eq!(registry.is_checked_out("Foundation"), Ok(false));
    }

    #[test]
    fn test_unknown_title() {
        let mut registry = sample();

        assert_eq!(
            registry.checkout("Emma").unwrap_err(),
            RegistryError::NotFound("Emma".to_string())
        );
        assert_eq!(
            registry.return_item("Emma").unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert!(registry.find_by_title("Emma").is_err());
        assert!(registry.find_by_title("dune").is_err());
    }

    #[test]
    fn test_duplicate_title_resolves_to_first() {
        let mut registry = Registry::new();
        registry.add("Dune", "Herbert").unwrap();
        registry.add("Dune", "Someone Else").unwrap();

        assert_eq!(registry.find_by_title("Dune").unwrap().id(), 1);

        registry.checkout("Dune").unwrap();
        // Second copy is still on the shelf
        assert_eq!(registry.available_titles(), vec!["Dune"]);
        assert!(registry.checkout("Dune").is_err());
    }

    #[test]
    fn test_available_titles_sorted_and_filtered() {
        let mut registry = Registry::new();
        registry.add("zebra", "A").unwrap();
        registry.add("Zebra", "B").unwrap();
        registry.add("apple", "C").unwrap();
        registry.add("Mango", "D").unwrap();
        registry.checkout("Mango").unwrap();

        assert_eq!(registry.available_titles(), vec!["Zebra", "apple", "zebra"]);
    }

    #[test]
    fn test_available_titles_empty() {
        let mut registry = Registry::new();
        assert!(registry.available_titles().is_empty());

        registry.add("Dune", "Herbert").unwrap();
        registry.checkout("Dune").unwrap();
        assert!(registry.available_titles().is_empty());
    }

    #[test]
    fn test_contains_author_ignores_checkout_state() {
        let mut registry = sample();
        registry.checkout("Foundation").unwrap();

        assert!(registry.contains_author("Asimov"));
        assert!(registry.contains_author("Herbert"));
        assert!(!registry.contains_author("asimov"));
        assert!(!registry.contains_author("Clarke"));
        assert!(!registry.contains_author(""));
    }

    #[test]
    fn test_records_in_insertion_order() {
        let registry = sample();
        let titles: Vec<&str> = registry.records().map(Record::title).collect();
        assert_eq!(titles, vec!["Dune", "Foundation"]);
    }
}

//! Lending Library Registry
//!
//! An in-memory catalog of records keyed by title, each carrying an author,
//! a sequential id and a checkout flag, plus the line-oriented command
//! grammar used to drive it from a command file.
//!
//! # Overview
//!
//! This library provides:
//! - [`Registry`]: insertion, title lookup, checkout/return transitions and
//!   derived views (sorted available titles, author containment)
//! - [`Record`]: a single catalog entry with immutable title, author and id
//! - [`RegistryError`]: recoverable per-operation failures
//! - [`parse_line`] / [`Command`]: tokenizing of command-file lines
//!
//! # Quick Example
//!
//! ```
//! use library_registry::{Command, Registry, parse_line};
//!
//! let mut registry = Registry::new();
//! for line in ["# catalog", "add Dune Herbert", "checkout Dune"] {
//!     match parse_line(line) {
//!         Some(Command::Add { title, author }) => {
//!             registry.add(title, author).unwrap();
//!         }
//!         Some(Command::Checkout { title }) => {
//!             registry.checkout(title).unwrap();
//!         }
//!         _ => {}
//!     }
//! }
//! assert_eq!(registry.is_checked_out("Dune"), Ok(true));
//! ```
//!
//! # Failure Semantics
//!
//! Every operation either applies completely or fails without touching the
//! registry, so callers can report an error and keep going.

mod command;
mod error;
mod record;
mod registry;

// Re-export public API
pub use command::{Command, parse_line};
pub use error::{ErrorKind, RegistryError, TransitionConflict};
pub use record::Record;
pub use registry::{FIRST_ID, Registry};

//! Error types for the registry

use std::fmt;
use thiserror::Error;

/// Which side of the checkout/return toggle a rejected transition ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionConflict {
    /// Checkout requested for a record that is already out
    AlreadyCheckedOut,
    /// Return requested for a record that is on the shelf
    NotCheckedOut,
}

impl fmt::Display for TransitionConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyCheckedOut => f.write_str("is already checked out"),
            Self::NotCheckedOut => f.write_str("is not checked out"),
        }
    }
}

/// Coarse category of a [`RegistryError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    InvalidState,
}

/// Error type for registry operations
///
/// Every failing operation leaves the registry exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A required field was empty on insertion
    #[error("Can't add a record with an empty {field}")]
    InvalidArgument { field: &'static str },

    /// No record carries the requested title
    #[error("No record titled \"{0}\"")]
    NotFound(String),

    /// Checkout or return called out of sequence
    #[error("\"{title}\" {conflict}")]
    InvalidState {
        title: String,
        conflict: TransitionConflict,
    },

    /// Every id in the counter's range has been handed out
    #[error("No ids left to assign after {last_id}")]
    IdsExhausted { last_id: u32 },
}

impl RegistryError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidState { .. } | Self::IdsExhausted { .. } => ErrorKind::InvalidState,
        }
    }
}

//! Store error types.

use std::fmt;

/// Errors surfaced by [`Store`](crate::Store) writes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// A put addressed a key whose parent path does not exist.
    MissingPath {
        /// The full dotted key as given.
        key: String,
    },
    /// A put addressed a list index more than one past its end.
    IndexOutOfRange {
        /// The full dotted key as given.
        key: String,
        /// The offending index.
        index: usize,
        /// The list length at the time of the write.
        len: usize,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPath { key } => write!(f, "key {key:?} does not exist"),
            Self::IndexOutOfRange { key, index, len } => {
                write!(f, "key {key:?}: index {index} out of range for list of {len}")
            }
        }
    }
}

impl std::error::Error for StoreError {}

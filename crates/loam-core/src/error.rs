//! Error types for grid construction.

use std::fmt;

/// Errors arising from [`Grid`](crate::Grid) construction.
///
/// A grid is a non-empty rectangle of binary cells; anything else is
/// rejected before a `Grid` value can exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no rows, or a row has no cells.
    Empty,
    /// A row's length differs from the first row's length.
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Length of the first row, which sets the grid width.
        expected: usize,
    },
    /// A cell holds a value other than 0 or 1.
    NonBinaryCell {
        /// Column of the offending cell.
        x: usize,
        /// Row of the offending cell.
        y: usize,
        /// The rejected value.
        value: u8,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid must have at least one row and one column"),
            Self::RaggedRows { row, len, expected } => {
                write!(f, "row {row} has {len} cells, expected {expected}")
            }
            Self::NonBinaryCell { x, y, value } => {
                write!(f, "cell ({x}, {y}) holds {value}, expected 0 or 1")
            }
        }
    }
}

impl std::error::Error for GridError {}

//! Error types for world construction and access.

use loam_core::{Generation, GridError};
use loam_rule::RuleError;
use std::fmt;

/// Errors surfaced by the [`World`](crate::World) façade.
///
/// All variants are raised synchronously at the offending call, and a
/// failed operation never leaves the world partially mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorldError {
    /// The initial cells do not form a valid grid.
    InvalidGrid(GridError),
    /// The rule text does not parse.
    InvalidRule(RuleError),
    /// A coordinate is outside the accepted range.
    InvalidCoordinate {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
    /// A generation is ahead of the lineage, or a tick target is behind
    /// the current generation.
    InvalidGeneration {
        /// The requested generation.
        requested: Generation,
        /// The world's current generation.
        current: Generation,
    },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid(err) => write!(f, "invalid grid: {err}"),
            Self::InvalidRule(err) => write!(f, "invalid rule: {err}"),
            Self::InvalidCoordinate {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "coordinate ({x}, {y}) out of bounds for {width}x{height} grid"
                )
            }
            Self::InvalidGeneration { requested, current } => {
                write!(
                    f,
                    "generation {requested} unavailable at generation {current}"
                )
            }
        }
    }
}

impl std::error::Error for WorldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGrid(err) => Some(err),
            Self::InvalidRule(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for WorldError {
    fn from(err: GridError) -> Self {
        Self::InvalidGrid(err)
    }
}

impl From<RuleError> for WorldError {
    fn from(err: RuleError) -> Self {
        Self::InvalidRule(err)
    }
}

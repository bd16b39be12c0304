//! The [`Generation`] counter newtype.

use std::fmt;

/// Monotonically increasing generation counter.
///
/// Counts how many single-step transitions a world has undergone.
/// Also used to index into the recorded lineage: the grid stored at
/// position `n` of the geology was current at generation `n`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation immediately after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

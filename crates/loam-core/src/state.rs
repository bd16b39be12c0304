//! The world lifecycle verdict.

use std::fmt;

/// Long-run classification of a world, recomputed after every step.
///
/// A world starts `Alive`. Once it reaches `Dead` or `Looped` it is
/// logically final: further ticking is permitted but cannot produce new
/// behavior, so callers are expected to check the state before
/// continuing to run a world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WorldState {
    /// The simulation is still evolving: no extinction or repeat detected.
    Alive,
    /// Every cell in the current grid is dead.
    Dead,
    /// The grid lineage has settled into a periodic cycle.
    Looped,
}

impl WorldState {
    /// `true` for `Dead` and `Looped`, the verdicts that end a run.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Alive)
    }
}

impl fmt::Display for WorldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Alive => "alive",
            Self::Dead => "dead",
            Self::Looped => "looped",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(!WorldState::Alive.is_terminal());
        assert!(WorldState::Dead.is_terminal());
        assert!(WorldState::Looped.is_terminal());
    }

    #[test]
    fn display_labels_are_lowercase() {
        assert_eq!(WorldState::Alive.to_string(), "alive");
        assert_eq!(WorldState::Dead.to_string(), "dead");
        assert_eq!(WorldState::Looped.to_string(), "looped");
    }
}

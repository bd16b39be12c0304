//! The recorded lineage and its long-run classifier.

use crate::fingerprint::grid_fingerprint;
use indexmap::IndexMap;
use loam_core::{Grid, WorldState};

/// The full record of a world's past: every superseded grid (the
/// geology), every superseded state (the history), and an incremental
/// fingerprint index over the geology.
///
/// Position `n` of both sequences describes the world as it was at
/// generation `n`; after every step both have length equal to the
/// current generation. The fingerprint index maps each distinct grid
/// content to the sorted generations that held it, with map order equal
/// to first-occurrence order, so cycle checks scan small integer lists
/// instead of re-partitioning grid contents every step.
#[derive(Clone, Debug, Default)]
pub struct Lineage {
    geology: Vec<Grid>,
    history: Vec<WorldState>,
    classes: IndexMap<u64, Vec<u64>>,
}

impl Lineage {
    /// An empty lineage, for a freshly constructed world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a superseded grid and the state it was in.
    pub fn record(&mut self, grid: Grid, state: WorldState) {
        let generation = self.geology.len() as u64;
        self.classes
            .entry(grid_fingerprint(&grid))
            .or_default()
            .push(generation);
        self.geology.push(grid);
        self.history.push(state);
    }

    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.geology.len()
    }

    /// `true` before the first step.
    pub fn is_empty(&self) -> bool {
        self.geology.is_empty()
    }

    /// The grid that was current at `generation`, if recorded.
    pub fn grid_at(&self, generation: usize) -> Option<&Grid> {
        self.geology.get(generation)
    }

    /// All recorded grids, oldest first.
    pub fn geology(&self) -> &[Grid] {
        &self.geology
    }

    /// All recorded states, oldest first.
    pub fn states(&self) -> &[WorldState] {
        &self.history
    }

    /// Classify the world given its current grid.
    ///
    /// Extinction wins over looping: an all-dead grid is `Dead` even
    /// though continued ticking would also repeat forever.
    pub fn classify(&self, current: &Grid) -> WorldState {
        if current.is_extinct() {
            WorldState::Dead
        } else if self.period().is_some() {
            WorldState::Looped
        } else {
            WorldState::Alive
        }
    }

    /// The cycle length of the recorded lineage, if it has settled into
    /// one.
    ///
    /// The lineage is periodic when grouping generations by grid
    /// content yields `p` classes such that class `i` holds exactly the
    /// generations `i, i+p, i+2p, …` (a gap-free tiling of the whole
    /// record), and at least two full periods have elapsed. Fewer than
    /// two recorded grids, or all grids pairwise distinct, is never a
    /// cycle. A fingerprint-level match is confirmed against actual
    /// grid content before being reported, so hash collisions cannot
    /// fake a cycle.
    pub fn period(&self) -> Option<usize> {
        let n = self.geology.len() as u64;
        let p = self.classes.len() as u64;
        if n < 2 || p == n || n % p != 0 || n / p < 2 {
            return None;
        }
        let occurrences = n / p;
        for (phase, generations) in self.classes.values().enumerate() {
            if generations.len() as u64 != occurrences {
                return None;
            }
            for (repeat, &generation) in generations.iter().enumerate() {
                if generation != phase as u64 + repeat as u64 * p {
                    return None;
                }
            }
        }
        // Fingerprints tile perfectly; confirm one period boundary on
        // actual content to rule out collisions.
        let p = p as usize;
        for phase in 0..p {
            if self.geology[phase] != self.geology[phase + p] {
                return None;
            }
        }
        Some(p)
    }
}

//! The `World` aggregate: stepper, accessors, and run loop.

use crate::error::WorldError;
use crate::lineage::Lineage;
use crate::torus::Torus;
use loam_core::grid::GridBuilder;
use loam_core::{Generation, Grid, WorldState};
use loam_rule::Rulestring;

/// A Life-like world on a wrapping rectangle.
///
/// Constructed once from an initial grid and a rulestring, then mutated
/// in place by [`tick`](World::tick)/[`tick_to`](World::tick_to). The
/// world exclusively owns its grid and lineage buffers; all mutation
/// goes through the stepper, and a step that fails validation mutates
/// nothing.
///
/// Once [`state`](World::state) turns terminal ([`WorldState::Dead`] or
/// [`WorldState::Looped`]) the world is logically final. Further ticking
/// is permitted but pointless; callers are expected to check the state
/// before continuing.
#[derive(Clone, Debug)]
pub struct World {
    torus: Torus,
    rules: Rulestring,
    generation: Generation,
    grid: Grid,
    lineage: Lineage,
    state: WorldState,
}

impl World {
    /// Construct a world from nested rows under classic `B3/S23` rules.
    pub fn new(cells: &[Vec<u8>]) -> Result<Self, WorldError> {
        Ok(Self::from_parts(Grid::from_rows(cells)?, Rulestring::default()))
    }

    /// Construct a world from nested rows and a rulestring.
    pub fn with_rules(cells: &[Vec<u8>], rules: &str) -> Result<Self, WorldError> {
        Ok(Self::from_parts(Grid::from_rows(cells)?, Rulestring::parse(rules)?))
    }

    /// Construct a world from an already validated grid and rule.
    pub fn from_parts(grid: Grid, rules: Rulestring) -> Self {
        let torus = Torus::new(grid.width(), grid.height());
        Self {
            torus,
            rules,
            generation: Generation(0),
            grid,
            lineage: Lineage::new(),
            state: WorldState::Alive,
        }
    }

    /// Grid width, fixed at construction.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Grid height, fixed at construction.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Number of completed single-step transitions.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The current long-run verdict.
    pub fn state(&self) -> WorldState {
        self.state
    }

    /// The parsed rule.
    pub fn rules(&self) -> &Rulestring {
        &self.rules
    }

    /// Canonical rule text, digits sorted ascending.
    pub fn rulestring(&self) -> String {
        self.rules.canonical()
    }

    /// The recorded lineage.
    pub fn lineage(&self) -> &Lineage {
        &self.lineage
    }

    /// Cell value at `(x, y)` in the current grid.
    ///
    /// Coordinate validation accepts `x <= width` and `y <= height`,
    /// one past the last valid index, kept for compatibility with the
    /// published behavior. The boundary row and column hold no
    /// cell, so every coordinate outside `x < width && y < height`
    /// surfaces [`WorldError::InvalidCoordinate`].
    pub fn peek(&self, x: usize, y: usize) -> Result<u8, WorldError> {
        if x > self.width() || y > self.height() {
            return Err(self.coordinate_error(x, y));
        }
        self.grid.get(x, y).ok_or_else(|| self.coordinate_error(x, y))
    }

    /// The current grid.
    pub fn cells(&self) -> &Grid {
        &self.grid
    }

    /// The grid that was current at `generation`.
    ///
    /// Returns the current grid at the current generation, a recorded
    /// grid for any earlier generation, and
    /// [`WorldError::InvalidGeneration`] beyond that.
    pub fn cells_at(&self, generation: Generation) -> Result<&Grid, WorldError> {
        if generation == self.generation {
            return Ok(&self.grid);
        }
        self.lineage
            .grid_at(generation.0 as usize)
            .ok_or(WorldError::InvalidGeneration {
                requested: generation,
                current: self.generation,
            })
    }

    /// The recorded past states, one per completed generation.
    pub fn history(&self) -> &[WorldState] {
        self.lineage.states()
    }

    /// The first `generation` entries of the state sequence, where the
    /// sequence is the recorded past states with the current state
    /// appended.
    ///
    /// Valid for `0 <= generation <= current generation + 1`; the
    /// final admissible index is the only way to observe the current
    /// verdict alongside the past.
    pub fn history_at(&self, generation: Generation) -> Result<Vec<WorldState>, WorldError> {
        if generation.0 > self.generation.0 + 1 {
            return Err(WorldError::InvalidGeneration {
                requested: generation,
                current: self.generation,
            });
        }
        let recorded = self.lineage.states();
        let take = (generation.0 as usize).min(recorded.len());
        let mut states = recorded[..take].to_vec();
        if generation.0 as usize > recorded.len() {
            states.push(self.state);
        }
        Ok(states)
    }

    /// Advance exactly one generation.
    pub fn tick(&mut self) {
        self.step();
    }

    /// Advance to the target generation.
    ///
    /// Applies `to - generation` single steps in sequence; a target
    /// behind the current generation is
    /// [`WorldError::InvalidGeneration`] and leaves the world untouched.
    pub fn tick_to(&mut self, to: Generation) -> Result<(), WorldError> {
        if to < self.generation {
            return Err(WorldError::InvalidGeneration {
                requested: to,
                current: self.generation,
            });
        }
        while self.generation < to {
            self.step();
        }
        Ok(())
    }

    /// Step until the world goes extinct or its whole lineage settles
    /// into a cycle.
    ///
    /// A loop is only reported when the full record is periodic from
    /// generation 0; a world that settles into a cycle after a
    /// one-off transient keeps running, and even when a verdict is
    /// reached the worst case is exponential in the cell count.
    /// Callers that cannot tolerate unbounded work should use
    /// [`run_capped`](World::run_capped).
    pub fn run(&mut self) -> WorldState {
        while !self.state.is_terminal() {
            self.step();
        }
        self.state
    }

    /// Step until a terminal verdict or `max_steps` transitions,
    /// whichever comes first.
    ///
    /// Returns the state reached, which is still [`WorldState::Alive`]
    /// when the cap cut the run short.
    pub fn run_capped(&mut self, max_steps: u64) -> WorldState {
        let mut steps = 0;
        while !self.state.is_terminal() && steps < max_steps {
            self.step();
            steps += 1;
        }
        self.state
    }

    /// One full transition: record, advance, reclassify.
    fn step(&mut self) {
        // Lineage logs the world as it was, at the index equal to the
        // generation about to be superseded.
        self.lineage.record(self.grid.clone(), self.state);

        // Every new state reads the pre-step grid; writes land in a
        // fresh builder.
        let mut next = GridBuilder::new(self.width(), self.height());
        for y in 0..self.height() {
            for x in 0..self.width() {
                let count = self.torus.live_neighbours(&self.grid, x, y);
                let alive = self.grid.get(x, y) == Some(1);
                let cell = if alive {
                    u8::from(self.rules.survives(count))
                } else {
                    u8::from(self.rules.born(count))
                };
                next.push(cell);
            }
        }

        self.grid = next.finish();
        self.generation = self.generation.next();
        self.state = self.lineage.classify(&self.grid);

        debug_assert_eq!(self.lineage.len() as u64, self.generation.0);
        debug_assert_eq!(self.lineage.states().len() as u64, self.generation.0);
    }

    fn coordinate_error(&self, x: usize, y: usize) -> WorldError {
        WorldError::InvalidCoordinate {
            x,
            y,
            width: self.width(),
            height: self.height(),
        }
    }
}

//! Moore-neighborhood sampling on a wrapping rectangle.

use loam_core::Grid;
use smallvec::SmallVec;
use std::f64::consts::{FRAC_PI_4, SQRT_2};

/// Neighborhood sampler for a fixed-size rectangle with wrap-around
/// edges.
///
/// The 8 Moore offsets are generated by rotating a vector of length √2
/// through 45° steps and rounding each component, which collapses to
/// the usual `(±1, 0), (0, ±1), (±1, ±1)` set.
///
/// Wrapping is deliberately asymmetric: a negative coordinate wraps by
/// adding the dimension and a coordinate strictly greater than the
/// dimension wraps by modulo, but a coordinate exactly equal to the
/// dimension stays out of range and that sample is dropped. Cells on
/// the bottom and right edges therefore see fewer than 8 neighbors.
/// The recorded lineage vectors depend on this, so it must not be
/// folded into a plain modulo.
#[derive(Clone, Debug)]
pub struct Torus {
    width: usize,
    height: usize,
    offsets: [(i64, i64); 8],
}

/// Rotate a √2-length vector through the 8 multiples of 45° and round.
fn moore_offsets() -> [(i64, i64); 8] {
    let mut offsets = [(0i64, 0i64); 8];
    for (step, slot) in offsets.iter_mut().enumerate() {
        let angle = step as f64 * FRAC_PI_4;
        let dx = (angle.cos() * SQRT_2).round() as i64;
        // Screen convention: y grows downward, so positive sin points up.
        let dy = -(angle.sin() * SQRT_2).round() as i64;
        *slot = (dx, dy);
    }
    offsets
}

/// Wrap one axis: negative values wrap by adding the dimension, values
/// past the dimension wrap by modulo, and the dimension itself is left
/// out of range for the caller to skip.
fn wrap_axis(value: i64, len: usize) -> i64 {
    let n = len as i64;
    if value < 0 {
        n + value
    } else if value > n {
        value % n
    } else {
        value
    }
}

impl Torus {
    /// Sampler for a `width x height` surface.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            offsets: moore_offsets(),
        }
    }

    /// Surface width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Surface height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The wrapped, in-range neighbors of `(x, y)`.
    ///
    /// At most 8 entries; samples that wrap onto the out-of-range
    /// boundary row or column are skipped.
    pub fn neighbours(&self, x: usize, y: usize) -> SmallVec<[(usize, usize); 8]> {
        let mut out = SmallVec::new();
        for &(dx, dy) in &self.offsets {
            let nx = wrap_axis(x as i64 + dx, self.width);
            let ny = wrap_axis(y as i64 + dy, self.height);
            if nx < self.width as i64 && ny < self.height as i64 {
                out.push((nx as usize, ny as usize));
            }
        }
        out
    }

    /// Number of live cells among the wrapped neighbors of `(x, y)`.
    pub fn live_neighbours(&self, grid: &Grid, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for (nx, ny) in self.neighbours(x, y) {
            if grid.get(nx, ny) == Some(1) {
                count += 1;
            }
        }
        count
    }
}

//! The rectangular binary grid.

use crate::error::GridError;

/// A rectangular grid of binary cell states, stored row-major.
///
/// Cell values are `0` (dead) or `1` (alive); construction rejects
/// anything else. All rows have equal length greater than zero, and
/// there is at least one row. A `Grid` is an immutable value: the
/// stepper produces a fresh grid each generation rather than mutating
/// in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Build a grid from nested rows.
    ///
    /// Returns [`GridError::Empty`] when there are no rows or the first
    /// row has no cells, [`GridError::RaggedRows`] when row lengths
    /// differ, and [`GridError::NonBinaryCell`] for values other than
    /// 0 or 1.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        let height = rows.len();
        if height == 0 {
            return Err(GridError::Empty);
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRows {
                    row: y,
                    len: row.len(),
                    expected: width,
                });
            }
            for (x, &value) in row.iter().enumerate() {
                if value > 1 {
                    return Err(GridError::NonBinaryCell { x, y, value });
                }
                cells.push(value);
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell value at `(x, y)`, or `None` when the coordinate falls
    /// outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    /// Iterate over the rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width)
    }

    /// The grid as nested rows, in the shape [`from_rows`](Self::from_rows)
    /// accepts.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    /// Row-major view of every cell.
    pub fn as_flat(&self) -> &[u8] {
        &self.cells
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    /// `true` when no cell is alive.
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }

    pub(crate) fn from_parts(width: usize, height: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }
}

/// Assemble a grid cell by cell, in row-major order.
///
/// Used by the stepper, which knows the dimensions up front and visits
/// every cell exactly once.
#[derive(Debug)]
pub struct GridBuilder {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl GridBuilder {
    /// Start a builder for a `width x height` grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: Vec::with_capacity(width * height),
        }
    }

    /// Append the next cell in row-major order.
    pub fn push(&mut self, value: u8) {
        debug_assert!(value <= 1);
        self.cells.push(value);
    }

    /// Finish the grid. Panics in debug builds if the cell count does
    /// not match the dimensions.
    pub fn finish(self) -> Grid {
        Grid::from_parts(self.width, self.height, self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn from_rows_sets_dimensions() {
        let g = Grid::from_rows(&[vec![1, 0, 1], vec![0, 0, 0]]).unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
    }

    #[test]
    fn from_rows_rejects_no_rows() {
        assert_eq!(Grid::from_rows(&[]), Err(GridError::Empty));
    }

    #[test]
    fn from_rows_rejects_empty_row() {
        assert_eq!(Grid::from_rows(&[vec![]]), Err(GridError::Empty));
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = Grid::from_rows(&[
            vec![1, 0, 1, 0],
            vec![0, 0, 1],
            vec![0, 0, 0, 0],
            vec![1, 0, 0, 0],
        ])
        .unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRows {
                row: 1,
                len: 3,
                expected: 4
            }
        );
    }

    #[test]
    fn from_rows_rejects_non_binary_values() {
        let err = Grid::from_rows(&[vec![0, 2]]).unwrap_err();
        assert_eq!(
            err,
            GridError::NonBinaryCell {
                x: 1,
                y: 0,
                value: 2
            }
        );
    }

    #[test]
    fn get_in_and_out_of_bounds() {
        let g = Grid::from_rows(&[vec![1, 0], vec![0, 1]]).unwrap();
        assert_eq!(g.get(0, 0), Some(1));
        assert_eq!(g.get(1, 0), Some(0));
        assert_eq!(g.get(1, 1), Some(1));
        assert_eq!(g.get(2, 0), None);
        assert_eq!(g.get(0, 2), None);
    }

    #[test]
    fn live_count_and_extinction() {
        let g = Grid::from_rows(&[vec![1, 0], vec![0, 1]]).unwrap();
        assert_eq!(g.live_count(), 2);
        assert!(!g.is_extinct());
        let empty = Grid::from_rows(&[vec![0, 0], vec![0, 0]]).unwrap();
        assert!(empty.is_extinct());
    }

    #[test]
    fn builder_matches_from_rows() {
        let mut b = GridBuilder::new(2, 2);
        for v in [1, 0, 0, 1] {
            b.push(v);
        }
        let g = b.finish();
        assert_eq!(g, Grid::from_rows(&[vec![1, 0], vec![0, 1]]).unwrap());
    }

    fn arb_rows() -> impl Strategy<Value = Vec<Vec<u8>>> {
        (1usize..6, 1usize..6).prop_flat_map(|(w, h)| {
            proptest::collection::vec(proptest::collection::vec(0u8..=1, w), h)
        })
    }

    proptest! {
        #[test]
        fn to_rows_round_trips(rows in arb_rows()) {
            let g = Grid::from_rows(&rows).unwrap();
            prop_assert_eq!(g.to_rows(), rows);
        }

        #[test]
        fn get_agrees_with_rows(rows in arb_rows()) {
            let g = Grid::from_rows(&rows).unwrap();
            for (y, row) in rows.iter().enumerate() {
                for (x, &v) in row.iter().enumerate() {
                    prop_assert_eq!(g.get(x, y), Some(v));
                }
            }
        }
    }
}

//! Fixed-size cell grid.
//!
//! Cells live in one row-major `Vec`, so a row is a contiguous slice and
//! whole-row moves are `copy_within`/`rotate_left` calls on the buffer. Row
//! slices never leave the crate.

use smallvec::SmallVec;

use super::cell::Cell;

/// Up to eight in-bounds neighbors of a position.
pub type Neighbors = SmallVec<[(usize, usize); 8]>;

/// Offsets of the eight surrounding positions.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Row-major grid of cells with fixed dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid. Callers guarantee `rows, cols >= 1`.
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get a cell, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Overwrite an in-bounds cell.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col] = cell;
    }

    pub(crate) fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Check if every cell in a row is empty.
    pub(crate) fn row_is_empty(&self, row: usize) -> bool {
        self.row(row).iter().all(|c| c.is_empty())
    }

    /// Copy row `src` over row `dst`. The source row is left as it was.
    pub(crate) fn copy_row(&mut self, src: usize, dst: usize) {
        let start = src * self.cols;
        self.cells.copy_within(start..start + self.cols, dst * self.cols);
    }

    /// Remove an empty row by shifting every row below it up by one.
    ///
    /// The removed row ends up at the bottom, so the bottom row becomes empty.
    pub(crate) fn collapse_row(&mut self, row: usize) {
        debug_assert!(self.row_is_empty(row));
        self.cells[row * self.cols..].rotate_left(self.cols);
    }

    /// In-bounds positions surrounding `(row, col)`, orthogonal and diagonal.
    pub(crate) fn neighbors(&self, row: usize, col: usize) -> Neighbors {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                (r < self.rows && c < self.cols).then_some((r, c))
            })
            .collect()
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}

//! Matrix module - generic 2D cell grids
//!
//! Both the playfield and every shape matrix are a [`Matrix`]: a flat, row-major array
//! of cells with fixed dimensions. Flat storage keeps rows contiguous for the row-clear
//! scan and avoids per-row allocations.
//!
//! Coordinates are `(row, col)` with row 0 at the top. Accessors take signed coordinates
//! so callers can test positions left of or above the grid without pre-checking.

use serde::{Deserialize, Serialize};

use crate::types::{Cell, EMPTY};

/// Fixed-size 2D grid of cells
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    /// Row-major cells (row * cols + col)
    cells: Vec<Cell>,
}

impl Matrix {
    /// Create an all-empty matrix with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        if rows == 0 || cols == 0 {
            return Self::empty();
        }
        Self {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
        }
    }

    /// Zero-size matrix
    pub fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
        }
    }

    /// Build from nested rows.
    ///
    /// Ragged input (rows of differing length) or input without any cells degrades to an
    /// empty matrix instead of failing.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Self {
        let Some(first) = rows.first() else {
            return Self::empty();
        };
        let cols = first.as_ref().len();
        if cols == 0 || rows.iter().any(|r| r.as_ref().len() != cols) {
            return Self::empty();
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            cells.extend_from_slice(row.as_ref());
        }
        Self {
            rows: rows.len(),
            cols,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat index for a signed coordinate, `None` when out of bounds
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    /// Check if a coordinate lies inside the matrix
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        self.index(row, col).is_some()
    }

    /// Get cell at (row, col); `None` if out of bounds
    #[inline]
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col); returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Borrow one row; panics if `row` is out of range
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Iterate rows top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() yields nothing for an empty cell vector
        self.cells.chunks(self.cols.max(1))
    }

    /// Iterate non-empty cells as (row, col, value)
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell != EMPTY)
            .map(move |(idx, &cell)| (idx / cols, idx % cols, cell))
    }

    /// Check if every cell in a row is occupied
    pub fn is_row_full(&self, row: usize) -> bool {
        row < self.rows && self.row(row).iter().all(|&cell| cell != EMPTY)
    }

    /// Reset every cell to empty, keeping the dimensions
    pub fn clear_cells(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Flat row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert to nested rows (for display, snapshots and tests)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.iter_rows().map(<[Cell]>::to_vec).collect()
    }

    /// Overwrite cells with the non-empty cells of `shape` placed at (row, col).
    /// Targets outside the matrix are dropped.
    pub fn merge_in_place(&mut self, shape: &Matrix, col: i32, row: i32) {
        for (r, c, cell) in shape.filled() {
            self.set(row + r as i32, col + c as i32, cell);
        }
    }
}

/// Return a copy of `grid` with `shape` stamped at (col, row).
///
/// Empty shape cells leave the grid untouched; out-of-bounds shape cells are silently
/// dropped.
pub fn merge_at(grid: &Matrix, shape: &Matrix, col: i32, row: i32) -> Matrix {
    let mut merged = grid.clone();
    merged.merge_in_place(shape, col, row);
    merged
}

/// Rotate a matrix 90° clockwise.
///
/// An `R x C` input produces a `C x R` output with `out[j][R-1-i] = in[i][j]`. The rule is
/// the same for every input; an empty input yields an empty matrix.
pub fn rotate_clockwise(matrix: &Matrix) -> Matrix {
    if matrix.is_empty() {
        return Matrix::empty();
    }

    let (rows, cols) = (matrix.rows, matrix.cols);
    let mut out = Matrix::new(cols, rows);
    for i in 0..rows {
        for j in 0..cols {
            out.cells[j * rows + (rows - 1 - i)] = matrix.cells[i * cols + j];
        }
    }
    out
}

//! Row-clear module - full row removal with gravity collapse
//!
//! Structural only: scoring for the removed lines belongs to [`crate::scoring`].

use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;
use crate::types::{Cell, EMPTY};

/// Outcome of one clear pass
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClearResult {
    /// Number of full rows removed
    pub lines_removed: u32,
    /// Indices of the removed rows in the grid as it was before the clear, top to bottom
    pub removed_rows: Vec<usize>,
    /// Grid after removal and collapse
    pub grid: Matrix,
}

impl ClearResult {
    /// Result for a pass that removed nothing
    pub fn unchanged(grid: Matrix) -> Self {
        Self {
            lines_removed: 0,
            removed_rows: Vec::new(),
            grid,
        }
    }

    pub fn cleared_any(&self) -> bool {
        self.lines_removed > 0
    }
}

/// Remove every full row and pack the survivors against the bottom.
///
/// Surviving rows keep their relative order; the rows freed at the top are empty.
pub fn clear(grid: &Matrix) -> ClearResult {
    let height = grid.rows();
    let width = grid.cols();

    let mut removed_rows = Vec::new();
    let mut survivors: Vec<&[Cell]> = Vec::with_capacity(height);
    for (y, row) in grid.iter_rows().enumerate() {
        if row.iter().all(|&cell| cell != EMPTY) {
            removed_rows.push(y);
        } else {
            survivors.push(row);
        }
    }

    if removed_rows.is_empty() {
        return ClearResult::unchanged(grid.clone());
    }

    // Empty rows on top, survivors below in original order
    let mut collapsed = Matrix::new(height, width);
    let first = height - survivors.len();
    for (offset, row) in survivors.iter().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            collapsed.set((first + offset) as i32, x as i32, cell);
        }
    }

    ClearResult {
        lines_removed: removed_rows.len() as u32,
        removed_rows,
        grid: collapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_full_row_collapses() {
        let grid = Matrix::from_rows(&[
            [0u8, 0, 0, 0],
            [1, 1, 1, 1],
            [0, 2, 0, 0],
            [0, 0, 0, 0],
        ]);
        let result = clear(&grid);
        assert_eq!(result.lines_removed, 1);
        assert_eq!(result.removed_rows, vec![1]);
        assert_eq!(
            result.grid.to_rows(),
            vec![
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 2, 0, 0],
                vec![0, 0, 0, 0],
            ]
        );
    }

    #[test]
    fn test_no_full_rows_is_unchanged() {
        let grid = Matrix::from_rows(&[[0u8, 3], [3, 0]]);
        let result = clear(&grid);
        assert!(!result.cleared_any());
        assert!(result.removed_rows.is_empty());
        assert_eq!(result.grid, grid);
    }

    #[test]
    fn test_non_adjacent_rows_keep_order() {
        let grid = Matrix::from_rows(&[
            [0u8, 5, 0],
            [1, 1, 1],
            [6, 0, 0],
            [2, 2, 2],
            [0, 0, 7],
        ]);
        let result = clear(&grid);
        assert_eq!(result.lines_removed, 2);
        assert_eq!(result.removed_rows, vec![1, 3]);
        assert_eq!(
            result.grid.to_rows(),
            vec![
                vec![0, 0, 0],
                vec![0, 0, 0],
                vec![0, 5, 0],
                vec![6, 0, 0],
                vec![0, 0, 7],
            ]
        );
    }

    #[test]
    fn test_every_row_full() {
        let grid = Matrix::from_rows(&[[1u8, 1], [2, 2], [3, 3], [4, 4], [5, 5]]);
        let result = clear(&grid);
        assert_eq!(result.lines_removed, 5);
        assert_eq!(result.grid, Matrix::new(5, 2));
    }

    #[test]
    fn test_empty_grid() {
        let result = clear(&Matrix::empty());
        assert_eq!(result.lines_removed, 0);
        assert!(result.grid.is_empty());
    }
}

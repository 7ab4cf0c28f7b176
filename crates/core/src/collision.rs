//! Collision module - placement predicates
//!
//! Every movement, rotation and spawn check goes through [`collides`]. The helpers below
//! only shift the offset before asking it.

use crate::matrix::Matrix;
use crate::pieces::PieceShape;
use crate::types::EMPTY;

/// Check whether `shape` placed with its top-left cell at (col, row) overlaps an occupied
/// grid cell or leaves the grid.
///
/// Only non-empty shape cells participate; empty cells may hang outside the grid freely.
pub fn collides(grid: &Matrix, shape: &Matrix, col: i32, row: i32) -> bool {
    shape.filled().any(|(r, c, _)| {
        match grid.get(row + r as i32, col + c as i32) {
            Some(cell) => cell != EMPTY,
            // Out of bounds
            None => true,
        }
    })
}

/// Same rule as [`collides`], for a state given as raw mino offsets
pub fn offsets_collide(grid: &Matrix, offsets: &PieceShape, col: i32, row: i32) -> bool {
    offsets.iter().any(|&(c, r)| {
        grid.get(row + r as i32, col + c as i32)
            .map_or(true, |cell| cell != EMPTY)
    })
}

pub fn can_move_down(grid: &Matrix, shape: &Matrix, col: i32, row: i32) -> bool {
    !collides(grid, shape, col, row + 1)
}

pub fn can_move_left(grid: &Matrix, shape: &Matrix, col: i32, row: i32) -> bool {
    !collides(grid, shape, col - 1, row)
}

pub fn can_move_right(grid: &Matrix, shape: &Matrix, col: i32, row: i32) -> bool {
    !collides(grid, shape, col + 1, row)
}

/// Rotation is tested in place: the rotated shape at the current offset, no kicks.
pub fn can_rotate(grid: &Matrix, rotated: &Matrix, col: i32, row: i32) -> bool {
    !collides(grid, rotated, col, row)
}

/// Spawns always happen on row 0.
pub fn can_spawn(grid: &Matrix, shape: &Matrix, spawn_col: i32) -> bool {
    !collides(grid, shape, spawn_col, 0)
}

/// Lowest row the shape can descend to from `row` without colliding.
///
/// Returns `row` itself when the shape cannot move down at all.
pub fn landing_row(grid: &Matrix, shape: &Matrix, col: i32, row: i32) -> i32 {
    let mut landing = row;
    while can_move_down(grid, shape, col, landing) {
        landing += 1;
    }
    landing
}

//! Pieces module - tetromino catalog and rotation policy
//!
//! Each kind owns a fixed, ordered list of pre-rotated states laid out in a 4x4 box.
//! Rotation always advances to `(index + 1) % state_count`; the square piece has a single
//! state, so rotating it yields the same shape without any special case.
//!
//! Layouts follow the familiar SRS spawn boxes. S and Z keep only their first two states
//! and O only its first, matching classic lookup tables.

use crate::matrix::Matrix;
use crate::types::{PieceKind, SHAPE_SIZE};

/// Offset of a single mino inside the shape box as (col, row)
pub type MinoOffset = (u8, u8);

/// Shape of one rotation state - 4 mino offsets inside the box
pub type PieceShape = [MinoOffset; 4];

const I_STATES: [PieceShape; 4] = [
    // horizontal, row 1
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    // vertical, column 2
    [(2, 0), (2, 1), (2, 2), (2, 3)],
    // horizontal, row 2
    [(0, 2), (1, 2), (2, 2), (3, 2)],
    // vertical, column 1
    [(1, 0), (1, 1), (1, 2), (1, 3)],
];

const O_STATES: [PieceShape; 1] = [[(1, 0), (2, 0), (1, 1), (2, 1)]];

const T_STATES: [PieceShape; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const S_STATES: [PieceShape; 2] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
];

const Z_STATES: [PieceShape; 2] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
];

const J_STATES: [PieceShape; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const L_STATES: [PieceShape; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

/// All rotation states of a kind, in rotation order
pub fn rotation_states(kind: PieceKind) -> &'static [PieceShape] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
    }
}

/// Number of distinct rotation states (1, 2 or 4)
pub fn rotation_count(kind: PieceKind) -> usize {
    rotation_states(kind).len()
}

/// Index of the state that follows `index`
pub fn next_rotation(kind: PieceKind, index: usize) -> usize {
    (index + 1) % rotation_count(kind)
}

/// Mino offsets for a state; `index` wraps around the state count
pub fn shape_cells(kind: PieceKind, index: usize) -> PieceShape {
    let states = rotation_states(kind);
    states[index % states.len()]
}

/// Shape matrix for a state, filled with the kind's cell value.
///
/// Every call builds a fresh matrix, so callers may mutate the result freely.
pub fn get_shape(kind: PieceKind, index: usize) -> Matrix {
    let mut shape = Matrix::new(SHAPE_SIZE, SHAPE_SIZE);
    write_shape(kind, index, &mut shape);
    shape
}

/// Overwrite `out` with a state's shape, reusing its buffer when it is already a shape box
pub fn write_shape(kind: PieceKind, index: usize, out: &mut Matrix) {
    if out.rows() == SHAPE_SIZE && out.cols() == SHAPE_SIZE {
        out.clear_cells();
    } else {
        *out = Matrix::new(SHAPE_SIZE, SHAPE_SIZE);
    }
    for (col, row) in shape_cells(kind, index) {
        out.set(row as i32, col as i32, kind.fill());
    }
}

/// Candidate state for a rotation: the next index and its shape
pub fn next_shape(kind: PieceKind, index: usize) -> (usize, Matrix) {
    let next = next_rotation(kind, index);
    (next, get_shape(kind, next))
}

/// Shape a freshly spawned piece starts with (state 0)
pub fn get_spawn_shape(kind: PieceKind) -> Matrix {
    get_shape(kind, 0)
}

/// Column that horizontally centers `shape` on a grid of `grid_width` columns, clamped so
/// the whole shape box stays inside `[0, grid_width)`.
pub fn spawn_column(grid_width: usize, shape: &Matrix) -> i32 {
    let max_col = grid_width.saturating_sub(shape.cols()) as i32;
    let centered = (grid_width as i32 - shape.cols() as i32) / 2;
    centered.clamp(0, max_col)
}

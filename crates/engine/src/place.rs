use blockfall_core::pieces::{get_shape, rotation_count};
use blockfall_core::{Board, HardDropOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    RotationBlocked,
    ColumnOutOfBounds,
    ColumnBlocked,
    NotPlayable,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::NotPlayable => "not_playable",
            PlaceError::RotationBlocked
            | PlaceError::ColumnOutOfBounds
            | PlaceError::ColumnBlocked => "invalid_place",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::RotationBlocked => "could not rotate to target rotation",
            PlaceError::ColumnOutOfBounds => "target column would place piece out of bounds",
            PlaceError::ColumnBlocked => "could not move to target column due to collision",
            PlaceError::NotPlayable => "no piece is falling",
        }
    }
}

impl std::fmt::Display for PlaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for PlaceError {}

/// Leftmost and rightmost occupied box columns of a rotation state
fn occupied_columns(kind: blockfall_core::types::PieceKind, rotation: usize) -> (i32, i32) {
    let shape = get_shape(kind, rotation);
    let mut min_dc = i32::MAX;
    let mut max_dc = i32::MIN;
    for (_, c, _) in shape.filled() {
        min_dc = min_dc.min(c as i32);
        max_dc = max_dc.max(c as i32);
    }
    (min_dc, max_dc)
}

/// Rotate the active piece to `target_rotation`, shift it so its shape box starts at
/// `target_col`, then hard drop.
///
/// Rotation only goes clockwise, one state at a time, with the usual no-kick check at each
/// step. On any error the board is restored to how it was before the call.
pub fn apply_place(
    board: &mut Board,
    target_col: i32,
    target_rotation: usize,
) -> Result<HardDropOutcome, PlaceError> {
    let Ok(pose) = board.active_pose() else {
        return Err(PlaceError::NotPlayable);
    };

    let count = rotation_count(pose.kind);
    if target_rotation >= count {
        return Err(PlaceError::RotationBlocked);
    }

    let (min_dc, max_dc) = occupied_columns(pose.kind, target_rotation);
    if target_col + min_dc < 0 || target_col + max_dc >= board.width() as i32 {
        return Err(PlaceError::ColumnOutOfBounds);
    }

    let snapshot = board.clone();
    match plan_moves(board, pose.rotation, count, target_col, target_rotation) {
        Ok(()) => board.hard_drop().map_err(|_| PlaceError::NotPlayable),
        Err(err) => {
            *board = snapshot;
            Err(err)
        }
    }
}

fn plan_moves(
    board: &mut Board,
    current_rotation: usize,
    count: usize,
    target_col: i32,
    target_rotation: usize,
) -> Result<(), PlaceError> {
    let steps = (target_rotation + count - current_rotation) % count;
    for _ in 0..steps {
        if !board.rotate() {
            return Err(PlaceError::RotationBlocked);
        }
    }

    let col = board
        .active_pose()
        .map_err(|_| PlaceError::NotPlayable)?
        .col;
    let dc = target_col - col;
    for _ in 0..dc.unsigned_abs() {
        let moved = if dc > 0 {
            board.move_right()
        } else {
            board.move_left()
        };
        if !moved {
            return Err(PlaceError::ColumnBlocked);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_core::{EngineConfig, Matrix};
    use blockfall_types::PieceKind;

    fn started(kinds: &[PieceKind]) -> Board {
        let mut board = Board::with_config(EngineConfig::default().with_seed(1)).unwrap();
        board.supply_mut().prime(kinds.iter().copied());
        board.reset();
        board
    }

    #[test]
    fn place_rejected_before_start() {
        let mut board = Board::with_config(EngineConfig::default().with_seed(1)).unwrap();
        let err = apply_place(&mut board, 0, 0).unwrap_err();
        assert_eq!(err, PlaceError::NotPlayable);
        assert_eq!(err.code(), "not_playable");
    }

    #[test]
    fn place_rejected_when_column_out_of_bounds() {
        let mut board = started(&[PieceKind::T]);
        let before = board.active_pose().unwrap();

        let err = apply_place(&mut board, -50, 0).unwrap_err();
        assert_eq!(err, PlaceError::ColumnOutOfBounds);
        assert_eq!(board.active_pose().unwrap(), before);

        // T state 0 spans box columns 0-2: col 8 would poke past the right wall
        assert_eq!(
            apply_place(&mut board, 8, 0).unwrap_err(),
            PlaceError::ColumnOutOfBounds
        );
    }

    #[test]
    fn place_rejected_for_missing_rotation() {
        let mut board = started(&[PieceKind::O]);
        assert_eq!(
            apply_place(&mut board, 3, 1).unwrap_err(),
            PlaceError::RotationBlocked
        );
    }

    #[test]
    fn place_rejected_when_column_blocked_restores_board() {
        let mut grid = Matrix::new(25, 10);
        // Wall in column 1 at the spawn rows
        grid.set(0, 1, 3);
        grid.set(1, 1, 3);
        let mut board = Board::with_grid(EngineConfig::default().with_seed(1), grid).unwrap();
        board.supply_mut().prime([PieceKind::T]);
        assert!(!board.spawn());

        board.rotate();
        let before = board.active_pose().unwrap();
        let err = apply_place(&mut board, 0, 0).unwrap_err();
        assert_eq!(err, PlaceError::ColumnBlocked);
        assert_eq!(err.code(), "invalid_place");
        assert_eq!(board.active_pose().unwrap(), before);
        assert_eq!(board.score(), 0);
    }

    #[test]
    fn place_rotates_shifts_and_drops() {
        let mut board = started(&[PieceKind::I, PieceKind::O]);
        // Vertical I (box column 2) against the left wall
        let outcome = apply_place(&mut board, -2, 1).unwrap();
        assert_eq!(outcome.rows_dropped, 21);

        for row in 21..25 {
            assert_eq!(board.grid().get(row, 0), Some(PieceKind::I.fill()));
        }
        assert_eq!(board.active_pose().unwrap().kind, PieceKind::O);
    }

    #[test]
    fn place_wraps_rotation_clockwise() {
        let mut board = started(&[PieceKind::J]);
        board.rotate();
        board.rotate();
        // From state 2 to state 1 takes three clockwise steps
        let outcome = apply_place(&mut board, 4, 1).unwrap();
        assert!(!outcome.game_over);
        assert_eq!(board.grid().filled().count(), 4);
    }
}

//! Greedy placement search used by the headless runner
//!
//! Every reachable (rotation, column) pair is simulated on a clone of the board and scored
//! by the classic grid features: aggregate height, holes and bumpiness, with a bonus for
//! cleared lines.

use blockfall_core::pieces::rotation_count;
use blockfall_core::{Board, Matrix};

use crate::place::apply_place;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridFeatures {
    pub max_height: u32,
    pub aggregate_height: u32,
    pub holes: u32,
    pub bumpiness: u32,
}

/// A target the placer can reach
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub col: i32,
    pub rotation: usize,
    pub score: f64,
}

fn column_heights(grid: &Matrix) -> Vec<u32> {
    let rows = grid.rows();
    (0..grid.cols())
        .map(|c| {
            (0..rows)
                .find(|&r| grid.get(r as i32, c as i32).unwrap_or(0) != 0)
                .map_or(0, |r| (rows - r) as u32)
        })
        .collect()
}

pub fn grid_features(grid: &Matrix) -> GridFeatures {
    let heights = column_heights(grid);
    let rows = grid.rows() as i32;

    let mut holes = 0;
    for (c, &h) in heights.iter().enumerate() {
        for r in (rows - h as i32)..rows {
            if grid.get(r, c as i32) == Some(0) {
                holes += 1;
            }
        }
    }

    GridFeatures {
        max_height: heights.iter().copied().max().unwrap_or(0),
        aggregate_height: heights.iter().sum(),
        holes,
        bumpiness: heights.windows(2).map(|w| w[0].abs_diff(w[1])).sum(),
    }
}

fn evaluate(features: GridFeatures, lines: u32) -> f64 {
    -0.51 * features.aggregate_height as f64 + 0.76 * lines as f64
        - 0.36 * features.holes as f64
        - 0.18 * features.bumpiness as f64
}

/// Best placement for the active piece, or `None` when no piece is falling
pub fn best_placement(board: &Board) -> Option<Placement> {
    let pose = board.active_pose().ok()?;
    let mut best: Option<Placement> = None;

    for rotation in 0..rotation_count(pose.kind) {
        for col in -3..board.width() as i32 {
            let mut trial = board.clone();
            let Ok(outcome) = apply_place(&mut trial, col, rotation) else {
                continue;
            };
            let mut score = evaluate(grid_features(trial.grid()), outcome.lines_cleared());
            if outcome.game_over {
                score -= 1000.0;
            }
            if best.map_or(true, |b| score > b.score) {
                best = Some(Placement {
                    col,
                    rotation,
                    score,
                });
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_core::EngineConfig;
    use blockfall_types::PieceKind;

    #[test]
    fn features_of_simple_grid() {
        let grid = Matrix::from_rows(&[
            [0u8, 0, 0, 0],
            [1, 0, 0, 0],
            [1, 0, 1, 0],
            [0, 1, 1, 0],
        ]);
        let f = grid_features(&grid);
        assert_eq!(f.max_height, 3);
        assert_eq!(f.aggregate_height, 3 + 1 + 2);
        assert_eq!(f.holes, 1);
        // |3-1| + |1-2| + |2-0|
        assert_eq!(f.bumpiness, 5);
    }

    #[test]
    fn empty_grid_has_no_features() {
        assert_eq!(grid_features(&Matrix::new(25, 10)), GridFeatures::default());
    }

    #[test]
    fn prefers_filling_a_well() {
        let mut grid = Matrix::new(25, 10);
        for row in 21..25 {
            for col in 1..10 {
                grid.set(row, col, 4);
            }
        }
        let mut board = Board::with_grid(EngineConfig::default().with_seed(2), grid).unwrap();
        board.supply_mut().prime([PieceKind::I]);
        board.spawn();

        let best = best_placement(&board).unwrap();
        assert_eq!(best.rotation % 2, 1);
        // Vertical I lands in column 0
        let mut trial = board.clone();
        let outcome = apply_place(&mut trial, best.col, best.rotation).unwrap();
        assert_eq!(outcome.lines_cleared(), 4);
    }

    #[test]
    fn no_placement_before_start() {
        let board = Board::with_config(EngineConfig::default().with_seed(2)).unwrap();
        assert!(best_placement(&board).is_none());
    }
}

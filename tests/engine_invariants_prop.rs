//! Property tests for the board transition rules.
//!
//! Random intent sequences from random seeds must keep these true:
//! - the falling piece never overlaps locked cells or leaves the grid
//! - score, lines and high score never decrease within a game
//! - level always equals `1 + lines / 10`
//! - locked cells only ever change on a lock
//! - a finished game ignores everything but reset
use proptest::prelude::*;

use blockfall::core::{Board, EngineConfig, Phase};
use blockfall::engine::{apply_intent, apply_place, IntentOutcome};
use blockfall::types::{Intent, EMPTY};

fn intent_strategy() -> impl Strategy<Value = Intent> {
    prop_oneof![
        4 => Just(Intent::MoveLeft),
        4 => Just(Intent::MoveRight),
        4 => Just(Intent::SoftDrop),
        4 => Just(Intent::Rotate),
        2 => Just(Intent::HardDrop),
        1 => Just(Intent::Reset),
    ]
}

fn assert_active_fits(board: &Board) {
    if let Ok(cells) = board.active_cells() {
        assert_eq!(cells.len(), 4);
        for (row, col) in cells {
            assert_eq!(board.grid().get(row, col), Some(EMPTY));
        }
    }
}

proptest! {
    #[test]
    fn random_intents_respect_invariants(
        seed in any::<u64>(),
        width in 4usize..12,
        height in 4usize..26,
        intents in prop::collection::vec(intent_strategy(), 1..200),
    ) {
        let config = EngineConfig::default().with_seed(seed).with_size(width, height);
        let mut board = Board::with_config(config).unwrap();
        board.reset();

        for intent in intents {
            let before_grid = board.grid_snapshot();
            let before_score = board.score();
            let before_lines = board.lines();
            let before_high = board.high_score();
            let was_over = board.is_game_over();

            let outcome = apply_intent(&mut board, intent);
            assert_active_fits(&board);
            prop_assert_eq!(board.level(), 1 + board.lines() / 10);
            prop_assert!(board.high_score() >= before_high);
            prop_assert!(board.high_score() >= board.score());

            match outcome {
                IntentOutcome::Restarted { .. } => {
                    prop_assert_eq!(board.score(), 0);
                    prop_assert_eq!(board.lines(), 0);
                }
                IntentOutcome::Dropped(dropped) => {
                    prop_assert!(board.score() >= before_score);
                    prop_assert_eq!(board.lines(), before_lines + dropped.lines_cleared());
                    prop_assert_eq!(dropped.clear.grid, board.grid_snapshot());
                    if dropped.game_over {
                        prop_assert_eq!(board.phase(), Phase::GameOver);
                    }
                }
                IntentOutcome::Moved(_) => {
                    prop_assert_eq!(board.grid(), &before_grid);
                    prop_assert!(board.score() >= before_score);
                    prop_assert_eq!(board.lines(), before_lines);
                }
                IntentOutcome::Rejected(_) => {
                    prop_assert!(was_over);
                    prop_assert_eq!(board.grid(), &before_grid);
                    prop_assert_eq!(board.score(), before_score);
                }
            }
        }
    }

    #[test]
    fn failed_placements_leave_board_untouched(
        seed in any::<u64>(),
        col in -6i32..14,
        rotation in 0usize..5,
    ) {
        let mut board = Board::with_config(EngineConfig::default().with_seed(seed)).unwrap();
        board.reset();
        let before = board.snapshot();

        if apply_place(&mut board, col, rotation).is_err() {
            prop_assert_eq!(board.snapshot(), before);
        } else {
            prop_assert!(board.score() > before.score);
        }
    }
}

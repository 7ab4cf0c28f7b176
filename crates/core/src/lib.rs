//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of a classic falling-block puzzle: the playfield grid, the
//! tetromino catalog, collision checks, row clearing, scoring, and the [`Board`] state
//! machine that ties them together. It has no dependencies on rendering, input devices or
//! timers; a driver calls [`Board::gravity_step`] at [`Board::fall_interval_ms`] intervals
//! and forwards player intents to the movement operations.
//!
//! # Module Structure
//!
//! - [`matrix`]: row-major cell grid, merge and clockwise rotation
//! - [`pieces`]: the seven tetrominoes and their rotation states
//! - [`collision`]: placement and movement predicates
//! - [`clear`]: full-row removal with gravity collapse
//! - [`scoring`]: line-clear and drop points, level and fall speed
//! - [`supply`]: uniform random piece queue with look-ahead
//! - [`config`]: board configuration
//! - [`board`]: the orchestrating state machine
//! - [`snapshot`]: serializable view for renderers
//!
//! # Game Rules
//!
//! - **Uniform supply**: every piece is an independent draw, repeats allowed
//! - **Simple rotation**: clockwise to the next stored state, no wall kicks
//! - **Immediate lock**: no lock delay; the driver decides when a resting piece locks
//! - **Scoring**: 100/300/500/800 × level, +1 per soft-dropped cell, +2 per hard-dropped cell
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Board, EngineConfig};
//!
//! let mut board = Board::with_config(EngineConfig::default().with_seed(12345)).unwrap();
//! let game_over = board.reset();
//! assert!(!game_over);
//!
//! board.move_right();
//! board.rotate();
//! let outcome = board.hard_drop().unwrap();
//!
//! assert!(outcome.rows_dropped > 0);
//! assert!(board.score() > 0); // Hard drop awards points
//! ```

pub mod board;
pub mod clear;
pub mod collision;
pub mod config;
pub mod matrix;
pub mod pieces;
pub mod scoring;
pub mod snapshot;
pub mod supply;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{
    ActiveCells, Board, BoardError, GravityOutcome, HardDropOutcome, LockOutcome, Phase, Pose,
};
pub use clear::{clear, ClearResult};
pub use config::{ConfigError, EngineConfig};
pub use matrix::{merge_at, rotate_clockwise, Matrix};
pub use pieces::{get_shape, get_spawn_shape, next_shape};
pub use scoring::ScoreState;
pub use snapshot::BoardSnapshot;
pub use supply::PieceSupply;

//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are plain data with no behavior beyond parsing and lookup, so they can
//! be shared by the rules engine, the drivers that feed it intents, and any renderer
//! that consumes its snapshots.
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 25 rows. Row 0 is the top of the board,
//! column 0 is the left edge. Both dimensions are configurable per board, but never
//! change after the board is built.
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LINES_PER_LEVEL` | 10 | Lines cleared per level step |
//! | `BASE_FALL_MS` | 400 | Fall interval at level 1 |
//! | `FALL_STEP_MS` | 50 | Interval reduction per level |
//! | `FALL_FLOOR_MS` | 50 | Fastest fall interval |
//! | `SOFT_DROP_POINTS` | 1 | Points per user soft-dropped cell |
//! | `HARD_DROP_POINTS` | 2 | Points per hard-dropped cell |
//! | `MAX_BOARD_DIM` | 1024 | Largest board width or height |
//!
//! # Line Clear Rates
//!
//! Awards are multiplied by the level in effect before the clear:
//!
//! | Lines | Points |
//! |-------|--------|
//! | 1 | 100 × level |
//! | 2 | 300 × level |
//! | 3 | 500 × level |
//! | 4+ | 800 × level |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Intent, PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
//!
//! // Every kind owns a distinct non-zero fill value
//! assert_eq!(PieceKind::O.fill(), 2);
//! assert_eq!(PieceKind::from_fill(2), Some(PieceKind::O));
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//!
//! // Parse a driver intent
//! assert_eq!(Intent::from_str("hardDrop"), Some(Intent::HardDrop));
//!
//! // Board dimensions
//! assert_eq!(DEFAULT_BOARD_WIDTH, 10);
//! assert_eq!(DEFAULT_BOARD_HEIGHT, 25);
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells (10 columns)
pub const DEFAULT_BOARD_WIDTH: usize = 10;

/// Default board height in cells (25 rows)
pub const DEFAULT_BOARD_HEIGHT: usize = 25;

/// Largest accepted board width or height in cells
pub const MAX_BOARD_DIM: usize = 1024;

/// Side length of every shape matrix (4x4)
pub const SHAPE_SIZE: usize = 4;

/// Minimum number of upcoming pieces the supply keeps buffered
pub const MIN_SUPPLY_LEN: usize = 2;

/// Default number of preview pieces exposed to the renderer
pub const DEFAULT_PREVIEW_COUNT: usize = 1;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Fall interval at level 1 (milliseconds per row)
pub const BASE_FALL_MS: u32 = 400;

/// Fall interval reduction per level (milliseconds)
pub const FALL_STEP_MS: u32 = 50;

/// Fastest fall interval (milliseconds per row)
pub const FALL_FLOOR_MS: u32 = 50;

/// Points per cell for a user-initiated soft drop
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per cell for a hard drop
pub const HARD_DROP_POINTS: u32 = 2;

/// Line clear rates indexed by lines cleared (0..=4), multiplied by level.
///
/// Clears of more than four lines use the four-line rate.
pub const LINE_CLEAR_RATES: [u32; 5] = [0, 100, 300, 500, 800];

/// A cell on the board or in a shape matrix.
///
/// `0` is empty; any other value is occupied and carries the fill value of the
/// piece kind that put it there.
pub type Cell = u8;

/// The empty cell value
pub const EMPTY: Cell = 0;

/// The seven tetromino piece kinds
///
/// Each kind owns a distinct fill value used for every cell it occupies:
/// - **I** (1): straight bar
/// - **O** (2): 2x2 square, single rotation state
/// - **T** (3): T-shaped
/// - **S** (4): S-shaped, two rotation states
/// - **Z** (5): Z-shaped (mirror of S), two rotation states
/// - **J** (6): J-shaped
/// - **L** (7): L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in fill-value order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Non-zero cell value written into the grid when this kind locks
    pub const fn fill(self) -> Cell {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Reverse lookup of [`PieceKind::fill`]
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_fill(7), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_fill(0), None);
    /// assert_eq!(PieceKind::from_fill(8), None);
    /// ```
    pub fn from_fill(cell: Cell) -> Option<Self> {
        PieceKind::ALL.iter().copied().find(|kind| kind.fill() == cell)
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Intents a driver can issue against a board
///
/// These are produced by whatever owns the input devices or the fall timer and
/// consumed by the engine's dispatch layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Intent {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (with soft drop scoring)
    SoftDrop,
    /// Advance to the next rotation state in place
    Rotate,
    /// Drop piece to its landing row and lock it
    HardDrop,
    /// Start a new game
    Reset,
}

impl Intent {
    /// Parse intent from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("moveLeft"), Some(Intent::MoveLeft));
    /// assert_eq!(Intent::from_str("ROTATE"), Some(Intent::Rotate));
    /// assert_eq!(Intent::from_str("newGame"), Some(Intent::Reset));
    /// assert_eq!(Intent::from_str("hold"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Intent::MoveLeft),
            "moveright" => Some(Intent::MoveRight),
            "softdrop" => Some(Intent::SoftDrop),
            "rotate" => Some(Intent::Rotate),
            "harddrop" => Some(Intent::HardDrop),
            "reset" | "newgame" => Some(Intent::Reset),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDrop => "softDrop",
            Intent::Rotate => "rotate",
            Intent::HardDrop => "hardDrop",
            Intent::Reset => "reset",
        }
    }
}

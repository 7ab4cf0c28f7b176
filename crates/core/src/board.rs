//! Board module - the orchestrating state machine
//!
//! The board owns the grid, the active piece pose, the piece supply and the score. Drivers
//! call the intent operations (`move_*`, `rotate`, `hard_drop`, `spawn`, `lock`, `reset`);
//! each one validates before it mutates, so a call either commits its whole transition or
//! leaves the board untouched.
//!
//! The grid only changes on lock (merge + row clear) and on reset. Free movement never
//! writes into it.
//!
//! Lifecycle: construct, then `reset()` (or `spawn()` on a preset grid). A failed spawn is
//! terminal: every movement returns `false` until the next `reset()`.

use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::clear::{clear, ClearResult};
use crate::collision::{
    can_move_down, can_move_left, can_move_right, can_spawn, landing_row, offsets_collide,
};
use crate::config::{ConfigError, EngineConfig};
use crate::matrix::{merge_at, Matrix};
use crate::pieces::{
    get_shape, get_spawn_shape, next_rotation, shape_cells, spawn_column, write_shape,
};
use crate::scoring::{drop_points, ScoreState};
use crate::supply::PieceSupply;
use crate::types::{PieceKind, SHAPE_SIZE};

/// Upper bound on cells in one shape box
pub const SHAPE_CELLS: usize = SHAPE_SIZE * SHAPE_SIZE;

/// Grid coordinates (row, col) of the active piece's occupied cells
pub type ActiveCells = ArrayVec<(i32, i32), SHAPE_CELLS>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Constructed, no piece spawned yet
    Empty,
    /// A piece is falling
    Falling,
    /// The last spawn collided; terminal until reset
    GameOver,
}

/// Where and how the active piece sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    pub kind: PieceKind,
    /// Index into the kind's rotation states
    pub rotation: usize,
    /// Column of the shape box's left edge (may be negative)
    pub col: i32,
    /// Row of the shape box's top edge
    pub row: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActivePiece {
    pose: Pose,
    /// Shape for `pose.rotation`, cached so movement checks don't rebuild it
    shape: Matrix,
}

/// Result of a lock: merge, clear, score, spawn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockOutcome {
    pub clear: ClearResult,
    /// Line-clear points awarded by this lock
    pub points: u32,
    /// The follow-up spawn collided
    pub game_over: bool,
}

impl LockOutcome {
    pub fn lines_cleared(&self) -> u32 {
        self.clear.lines_removed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardDropOutcome {
    pub rows_dropped: u32,
    pub clear: ClearResult,
    /// Drop points plus line-clear points
    pub points: u32,
    pub game_over: bool,
}

impl HardDropOutcome {
    pub fn lines_cleared(&self) -> u32 {
        self.clear.lines_removed
    }
}

/// What one gravity step did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GravityOutcome {
    Moved,
    Locked(LockOutcome),
}

/// Operations that need an active piece, called without one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Queried before the first `reset()` / `spawn()`
    NotStarted,
    /// The game ended; call `reset()`
    GameOver,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::NotStarted => write!(f, "board has no active piece; call reset() first"),
            BoardError::GameOver => write!(f, "game is over; call reset() to start again"),
        }
    }
}

impl std::error::Error for BoardError {}

/// The game board and everything that drives it
#[derive(Debug, Clone)]
pub struct Board {
    config: EngineConfig,
    grid: Matrix,
    active: Option<ActivePiece>,
    phase: Phase,
    supply: PieceSupply,
    score: ScoreState,
}

impl Board {
    /// Create a board with the default configuration
    pub fn new() -> Self {
        Self::build(EngineConfig::default(), None)
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, None))
    }

    /// Create a board whose grid starts from a preset layout.
    ///
    /// The preset is used until the first `reset()`; call `spawn()` to start playing on it.
    pub fn with_grid(config: EngineConfig, grid: Matrix) -> Result<Self, ConfigError> {
        config.validate()?;
        if grid.rows() != config.height || grid.cols() != config.width {
            return Err(ConfigError::GridMismatch {
                expected: (config.height, config.width),
                found: (grid.rows(), grid.cols()),
            });
        }
        Ok(Self::build(config, Some(grid)))
    }

    fn build(config: EngineConfig, grid: Option<Matrix>) -> Self {
        let supply = match config.seed {
            Some(seed) => PieceSupply::with_seed(seed),
            None => PieceSupply::new(),
        };
        Self {
            grid: grid.unwrap_or_else(|| Matrix::new(config.height, config.width)),
            active: None,
            phase: Phase::Empty,
            supply,
            score: ScoreState::with_high_score(config.initial_high_score),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn width(&self) -> usize {
        self.config.width
    }

    pub fn height(&self) -> usize {
        self.config.height
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Read-only view of the locked cells
    pub fn grid(&self) -> &Matrix {
        &self.grid
    }

    /// Independent copy of the locked cells
    pub fn grid_snapshot(&self) -> Matrix {
        self.grid.clone()
    }

    pub fn score_state(&self) -> &ScoreState {
        &self.score
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn high_score(&self) -> u32 {
        self.score.high_score()
    }

    pub fn lines(&self) -> u32 {
        self.score.lines()
    }

    pub fn level(&self) -> u32 {
        self.score.level()
    }

    /// Gravity interval the driver should use at the current level
    pub fn fall_interval_ms(&self) -> u32 {
        self.score.fall_interval_ms()
    }

    /// Access the supply, e.g. to prime a fixed opening
    pub fn supply_mut(&mut self) -> &mut PieceSupply {
        &mut self.supply
    }

    fn active(&self) -> Result<&ActivePiece, BoardError> {
        match self.phase {
            Phase::Empty => Err(BoardError::NotStarted),
            Phase::GameOver => Err(BoardError::GameOver),
            Phase::Falling => self.active.as_ref().ok_or(BoardError::NotStarted),
        }
    }

    fn ensure_falling(&self) -> Result<(), BoardError> {
        self.active().map(|_| ())
    }

    pub fn active_pose(&self) -> Result<Pose, BoardError> {
        self.active().map(|a| a.pose)
    }

    /// Copy of the active piece's current shape
    pub fn active_shape(&self) -> Result<Matrix, BoardError> {
        self.active().map(|a| a.shape.clone())
    }

    /// Occupied cells of the active piece in grid coordinates
    pub fn active_cells(&self) -> Result<ActiveCells, BoardError> {
        let active = self.active()?;
        Ok(Self::cells_at(&active.shape, active.pose.col, active.pose.row))
    }

    fn cells_at(shape: &Matrix, col: i32, row: i32) -> ActiveCells {
        shape
            .filled()
            .take(SHAPE_CELLS)
            .map(|(r, c, _)| (row + r as i32, col + c as i32))
            .collect()
    }

    /// Row the active piece would land on if hard-dropped
    pub fn ghost_row(&self) -> Result<i32, BoardError> {
        let active = self.active()?;
        Ok(landing_row(
            &self.grid,
            &active.shape,
            active.pose.col,
            active.pose.row,
        ))
    }

    /// Cells the active piece would occupy after a hard drop
    pub fn ghost_cells(&self) -> Result<ActiveCells, BoardError> {
        let active = self.active()?;
        let ghost = self.ghost_row()?;
        Ok(Self::cells_at(&active.shape, active.pose.col, ghost))
    }

    /// Grid with the active piece stamped in (for rendering)
    pub fn composite_grid(&self) -> Matrix {
        match self.active() {
            Ok(active) => merge_at(&self.grid, &active.shape, active.pose.col, active.pose.row),
            Err(_) => self.grid.clone(),
        }
    }

    /// The next `count` kinds, head first
    pub fn preview_kinds(&mut self, count: usize) -> Vec<PieceKind> {
        self.supply.peek_next(count)
    }

    /// Spawn-state shapes of the next `count` pieces
    pub fn preview_shapes(&mut self, count: usize) -> Vec<Matrix> {
        self.preview_kinds(count)
            .into_iter()
            .map(get_spawn_shape)
            .collect()
    }

    /// Preview using the configured count
    pub fn next_preview(&mut self) -> Vec<PieceKind> {
        self.preview_kinds(self.config.preview_count)
    }

    /// Move one cell left; false (and no change) if blocked or not playing
    pub fn move_left(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if !can_move_left(&self.grid, &active.shape, active.pose.col, active.pose.row) {
            return false;
        }
        active.pose.col -= 1;
        true
    }

    /// Move one cell right; false (and no change) if blocked or not playing
    pub fn move_right(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if !can_move_right(&self.grid, &active.shape, active.pose.col, active.pose.row) {
            return false;
        }
        active.pose.col += 1;
        true
    }

    /// Move one cell down.
    ///
    /// `user_initiated` separates a player's soft drop (1 point per cell) from gravity
    /// (no points). A blocked move returns false and does *not* lock; the caller decides
    /// when to run [`Board::lock`].
    pub fn move_down(&mut self, user_initiated: bool) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if !can_move_down(&self.grid, &active.shape, active.pose.col, active.pose.row) {
            return false;
        }
        active.pose.row += 1;
        if user_initiated {
            self.score.add_score(drop_points(1, false));
        }
        true
    }

    /// Player soft drop: one step down with soft-drop points
    pub fn soft_drop(&mut self) -> bool {
        self.move_down(true)
    }

    /// Advance to the next rotation state in place (no kicks)
    pub fn rotate(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        let kind = active.pose.kind;
        let next_index = next_rotation(kind, active.pose.rotation);
        let candidate = shape_cells(kind, next_index);
        if offsets_collide(&self.grid, &candidate, active.pose.col, active.pose.row) {
            return false;
        }
        active.pose.rotation = next_index;
        write_shape(kind, next_index, &mut active.shape);
        true
    }

    /// Spawn the next piece from the supply at row 0, centered.
    ///
    /// Returns `true` when the spawn collides, which ends the game. The grid is never
    /// touched by a failed spawn. Once the game is over this keeps returning `true` without
    /// drawing until `reset()`.
    pub fn spawn(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return true;
        }

        let kind = self.supply.take_next();
        let shape = get_spawn_shape(kind);
        let col = spawn_column(self.config.width, &shape);

        if !can_spawn(&self.grid, &shape, col) {
            self.active = None;
            self.phase = Phase::GameOver;
            return true;
        }

        self.active = Some(ActivePiece {
            pose: Pose {
                kind,
                rotation: 0,
                col,
                row: 0,
            },
            shape,
        });
        self.phase = Phase::Falling;
        false
    }

    /// Merge the active piece into the grid, clear full rows, score them and spawn the
    /// next piece.
    pub fn lock(&mut self) -> Result<LockOutcome, BoardError> {
        self.ensure_falling()?;
        let Some(active) = self.active.take() else {
            return Err(BoardError::NotStarted);
        };

        let merged = merge_at(&self.grid, &active.shape, active.pose.col, active.pose.row);
        let result = clear(&merged);
        self.grid = result.grid.clone();

        let points = self.score.award_clear(result.lines_removed);
        let game_over = self.spawn();

        Ok(LockOutcome {
            clear: result,
            points,
            game_over,
        })
    }

    /// Drop straight to the landing row, award 2 points per row, then lock.
    pub fn hard_drop(&mut self) -> Result<HardDropOutcome, BoardError> {
        let landing = self.ghost_row()?;
        let Some(active) = self.active.as_mut() else {
            return Err(BoardError::NotStarted);
        };

        let rows_dropped = (landing - active.pose.row).max(0) as u32;
        active.pose.row = landing;

        let drop_score = drop_points(rows_dropped, true);
        self.score.add_score(drop_score);

        let lock = self.lock()?;
        Ok(HardDropOutcome {
            rows_dropped,
            points: drop_score.saturating_add(lock.points),
            clear: lock.clear,
            game_over: lock.game_over,
        })
    }

    /// One gravity tick: move down without points, or lock if the piece is resting.
    pub fn gravity_step(&mut self) -> Result<GravityOutcome, BoardError> {
        self.ensure_falling()?;
        if self.move_down(false) {
            return Ok(GravityOutcome::Moved);
        }
        self.lock().map(GravityOutcome::Locked)
    }

    /// Start a new game: empty grid, fresh score (high score kept), first piece spawned.
    /// Returns `true` if even the first spawn collides.
    pub fn reset(&mut self) -> bool {
        self.grid = Matrix::new(self.config.height, self.config.width);
        self.score.reset();
        self.active = None;
        self.phase = Phase::Empty;
        self.spawn()
    }

    /// Same as [`Board::reset`]
    pub fn new_game(&mut self) -> bool {
        self.reset()
    }

    /// Test helper: replace the active piece pose, rebuilding its shape.
    /// Returns false if the pose collides (nothing changes).
    pub fn set_active_pose(&mut self, pose: Pose) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let shape = get_shape(pose.kind, pose.rotation);
        if crate::collision::collides(&self.grid, &shape, pose.col, pose.row) {
            return false;
        }
        self.active = Some(ActivePiece { pose, shape });
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

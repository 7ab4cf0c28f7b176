//! Scoring module - points, levels and fall speed
//!
//! Line clears use the classic per-level rates (100/300/500/800 × level) computed with the
//! level in effect *before* the clear is counted. Drops award 1 point per user soft-dropped
//! cell and 2 per hard-dropped cell. Level is `1 + lines / 10`.

use serde::{Deserialize, Serialize};

use crate::types::{
    BASE_FALL_MS, FALL_FLOOR_MS, FALL_STEP_MS, HARD_DROP_POINTS, LINES_PER_LEVEL,
    LINE_CLEAR_RATES, SOFT_DROP_POINTS,
};

/// Points for clearing `lines` lines at `level`.
/// Four or more lines use the four-line rate; zero lines award nothing.
pub fn line_clear_points(lines: u32, level: u32) -> u32 {
    let idx = (lines as usize).min(LINE_CLEAR_RATES.len() - 1);
    LINE_CLEAR_RATES[idx].saturating_mul(level)
}

/// Points for a drop
/// soft drop: +1 per cell
/// hard drop: +2 per cell
pub fn drop_points(cells: u32, is_hard_drop: bool) -> u32 {
    let per_cell = if is_hard_drop {
        HARD_DROP_POINTS
    } else {
        SOFT_DROP_POINTS
    };
    cells.saturating_mul(per_cell)
}

/// Level reached after `total_lines` lines (starts at 1)
pub fn level_for_lines(total_lines: u32) -> u32 {
    1 + total_lines / LINES_PER_LEVEL
}

/// Milliseconds between gravity steps at `level`, never below the floor
pub fn fall_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(FALL_STEP_MS);
    BASE_FALL_MS.saturating_sub(speedup).max(FALL_FLOOR_MS)
}

/// Score, high score, lines and level for one board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreState {
    score: u32,
    high_score: u32,
    lines: u32,
    level: u32,
}

impl ScoreState {
    pub fn new() -> Self {
        Self::with_high_score(0)
    }

    /// Start a session with a high score restored by the caller
    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            score: 0,
            high_score,
            lines: 0,
            level: 1,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn fall_interval_ms(&self) -> u32 {
        fall_interval_ms(self.level)
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.high_score = self.high_score.max(self.score);
    }

    pub fn add_lines_cleared(&mut self, lines: u32) {
        self.lines = self.lines.saturating_add(lines);
        self.level = level_for_lines(self.lines);
    }

    /// Award a line clear at the current level, then count the lines.
    /// Returns the points awarded.
    pub fn award_clear(&mut self, lines: u32) -> u32 {
        if lines == 0 {
            return 0;
        }
        let points = line_clear_points(lines, self.level);
        self.add_score(points);
        self.add_lines_cleared(lines);
        points
    }

    /// New game: score and lines back to zero, level 1. The high score survives.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lines = 0;
        self.level = 1;
    }
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::new()
    }
}

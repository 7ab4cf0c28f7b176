//! Read-only view of a board for renderers and serialization

use serde::{Deserialize, Serialize};

use crate::board::{Board, Phase, Pose};
use crate::matrix::Matrix;
use crate::types::PieceKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Locked cells only; the active piece is described by `active`
    pub grid: Matrix,
    pub active: Option<Pose>,
    /// Active piece cells as (row, col)
    pub active_cells: Vec<(i32, i32)>,
    pub ghost_row: Option<i32>,
    pub next: Vec<PieceKind>,
    pub phase: Phase,
    pub score: u32,
    pub high_score: u32,
    pub lines: u32,
    pub level: u32,
    pub fall_interval_ms: u32,
}

impl BoardSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == Phase::Falling
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            grid: Matrix::empty(),
            active: None,
            active_cells: Vec::new(),
            ghost_row: None,
            next: Vec::new(),
            phase: Phase::Empty,
            score: 0,
            high_score: 0,
            lines: 0,
            level: 1,
            fall_interval_ms: 0,
        }
    }
}

impl Board {
    /// Fill `out` in place, reusing its buffers.
    ///
    /// Takes `&mut self` because the preview tops up the piece supply.
    pub fn snapshot_into(&mut self, out: &mut BoardSnapshot) {
        out.grid.clone_from(self.grid());
        out.active = self.active_pose().ok();
        out.active_cells.clear();
        if let Ok(cells) = self.active_cells() {
            out.active_cells.extend(cells);
        }
        out.ghost_row = self.ghost_row().ok();

        let preview_count = self.config().preview_count;
        out.next.clear();
        out.next.extend(self.preview_kinds(preview_count));

        out.phase = self.phase();
        let score = *self.score_state();
        out.score = score.score();
        out.high_score = score.high_score();
        out.lines = score.lines();
        out.level = score.level();
        out.fall_interval_ms = score.fall_interval_ms();
    }

    pub fn snapshot(&mut self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

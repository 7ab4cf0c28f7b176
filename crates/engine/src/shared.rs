//! Shared board handle
//!
//! One board, many drivers: typically a gravity thread and an input thread. Every
//! operation runs under the lock, so each intent is applied atomically against the others.

use std::sync::{Arc, Mutex, MutexGuard};

use blockfall_core::{Board, BoardError, BoardSnapshot, GravityOutcome};
use blockfall_types::Intent;

use crate::intent::{apply_intent, IntentOutcome};

#[derive(Debug, Clone, Default)]
pub struct SharedBoard {
    inner: Arc<Mutex<Board>>,
}

impl SharedBoard {
    pub fn new(board: Board) -> Self {
        Self {
            inner: Arc::new(Mutex::new(board)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Board> {
        // A panicking driver leaves the board in a committed state; keep using it.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Run `f` with exclusive access to the board
    pub fn with<R>(&self, f: impl FnOnce(&mut Board) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }

    pub fn apply(&self, intent: Intent) -> IntentOutcome {
        self.with(|board| apply_intent(board, intent))
    }

    pub fn gravity_step(&self) -> Result<GravityOutcome, BoardError> {
        self.with(Board::gravity_step)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.with(Board::snapshot)
    }

    /// Current gravity interval, for the timer driver
    pub fn fall_interval_ms(&self) -> u32 {
        self.with(|board| board.fall_interval_ms())
    }
}

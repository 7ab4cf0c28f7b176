use blockfall_core::{Board, BoardError, HardDropOutcome};
use blockfall_types::Intent;

/// What applying one intent did to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
    /// Move or rotate; `false` means it was blocked and nothing changed
    Moved(bool),
    Dropped(HardDropOutcome),
    Restarted { game_over: bool },
    /// Piece intents while no piece is falling
    Rejected(BoardError),
}

impl IntentOutcome {
    /// Whether the board changed
    pub fn changed(&self) -> bool {
        match self {
            IntentOutcome::Moved(moved) => *moved,
            IntentOutcome::Dropped(_) | IntentOutcome::Restarted { .. } => true,
            IntentOutcome::Rejected(_) => false,
        }
    }

    pub fn game_over(&self) -> bool {
        match self {
            IntentOutcome::Dropped(outcome) => outcome.game_over,
            IntentOutcome::Restarted { game_over } => *game_over,
            IntentOutcome::Rejected(err) => *err == BoardError::GameOver,
            IntentOutcome::Moved(_) => false,
        }
    }
}

/// Dispatch a player intent to the matching board operation.
///
/// `Reset` is accepted in every phase; everything else needs a falling piece.
pub fn apply_intent(board: &mut Board, intent: Intent) -> IntentOutcome {
    if intent == Intent::Reset {
        return IntentOutcome::Restarted {
            game_over: board.reset(),
        };
    }

    if let Err(err) = board.active_pose() {
        return IntentOutcome::Rejected(err);
    }

    match intent {
        Intent::MoveLeft => IntentOutcome::Moved(board.move_left()),
        Intent::MoveRight => IntentOutcome::Moved(board.move_right()),
        Intent::SoftDrop => IntentOutcome::Moved(board.soft_drop()),
        Intent::Rotate => IntentOutcome::Moved(board.rotate()),
        Intent::HardDrop => match board.hard_drop() {
            Ok(outcome) => IntentOutcome::Dropped(outcome),
            Err(err) => IntentOutcome::Rejected(err),
        },
        Intent::Reset => IntentOutcome::Restarted {
            game_over: board.reset(),
        },
    }
}

/// Parse a textual intent (`"moveLeft"`, `"hardDrop"`, `"newGame"`, ...) and apply it.
/// Unknown names return `None` and leave the board alone.
pub fn apply_intent_str(board: &mut Board, name: &str) -> Option<IntentOutcome> {
    Intent::from_str(name).map(|intent| apply_intent(board, intent))
}

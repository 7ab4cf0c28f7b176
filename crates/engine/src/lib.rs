//! Driver-facing layer over `blockfall-core`
//!
//! - [`intent`]: dispatch of player intents onto a board
//! - [`place`]: rotate-shift-drop placement with rollback on failure
//! - [`plan`]: greedy placement search
//! - [`shared`]: thread-safe board handle for concurrent drivers

pub mod intent;
pub mod place;
pub mod plan;
pub mod shared;

pub use intent::{apply_intent, apply_intent_str, IntentOutcome};
pub use place::{apply_place, PlaceError};
pub use plan::{best_placement, grid_features, GridFeatures, Placement};
pub use shared::SharedBoard;

//! Step range invariant: the cursor always addresses a history entry.

use super::Invariant;
use crate::engine::GameState;

/// Invariant: `current_step` is a valid index into the history.
///
/// The history starts with one entry and is never emptied, so the
/// cursor always has something to point at.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(state: &GameState) -> bool {
        state.current_step() < state.history().len()
    }

    fn description() -> &'static str {
        "Current step addresses a recorded history entry"
    }
}

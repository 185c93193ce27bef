//! Turn balance invariant: marks alternate, X leads by at most one.

use super::Invariant;
use crate::engine::GameState;
use crate::types::Player;
use tracing::warn;

/// Invariant: The current board reflects alternating turns.
///
/// X-count equals O-count (X to move) or exceeds it by exactly one
/// (O to move). The turn flag must agree with the counts.
pub struct TurnBalanceInvariant;

impl Invariant<GameState> for TurnBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.current_board();
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        let valid = (x_count == o_count && state.x_is_next())
            || (x_count == o_count + 1 && !state.x_is_next());
        if !valid {
            warn!(x_count, o_count, x_is_next = state.x_is_next(), "Turn balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X-count equals O-count (X to move) or exceeds it by one (O to move)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        let state = GameState::new();
        assert!(TurnBalanceInvariant::holds(&state));
    }

    #[test]
    fn test_holds_after_each_move() {
        let mut state = GameState::new();
        for cell in [4, 0, 8, 2, 6] {
            state.apply_move(cell);
            assert!(TurnBalanceInvariant::holds(&state));
        }
    }

    #[test]
    fn test_holds_at_every_history_step() {
        let mut state = GameState::new();
        state.apply_move(0);
        state.apply_move(4);
        state.apply_move(1);

        for step in 0..state.history().len() {
            state.jump_to_step(step).expect("recorded step");
            assert!(TurnBalanceInvariant::holds(&state));
        }
    }
}

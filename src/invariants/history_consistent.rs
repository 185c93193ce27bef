//! History consistency invariant: each entry extends its predecessor.

use super::Invariant;
use crate::engine::GameState;
use crate::types::{Board, Player, Square};

/// Invariant: The history is a chain of single-move extensions.
///
/// Entry 0 is the empty board with no selected cell. Every later entry
/// records exactly one placement: its selected cell was empty in the
/// predecessor, holds the mark whose turn it was (X on odd steps), and
/// no other square differs.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let Some(first) = history.first() else {
            return false;
        };
        if first.selected_cell().is_some() || *first.board() != Board::new() {
            return false;
        }

        for (step, pair) in history.windows(2).enumerate() {
            let (prev, entry) = (&pair[0], &pair[1]);

            let Some(cell) = entry.selected_cell() else {
                return false;
            };
            let Some(mark) = entry.board().get(cell).and_then(Square::player) else {
                return false;
            };

            // `step` indexes the predecessor: X moves from even steps.
            let expected = if step % 2 == 0 { Player::X } else { Player::O };
            if mark != expected || !prev.board().is_empty(cell) {
                return false;
            }

            let mut reconstructed = prev.board().clone();
            reconstructed.set(cell, Square::Occupied(mark));
            if reconstructed != *entry.board() {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Each history entry extends its predecessor by exactly one placement"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        let state = GameState::new();
        assert!(HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut state = GameState::new();
        state.apply_move(0);
        state.apply_move(4);
        state.apply_move(1);
        assert!(HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_holds_after_branch_discard() {
        let mut state = GameState::new();
        state.apply_move(0);
        state.apply_move(4);
        state.apply_move(1);
        state.jump_to_step(1).expect("recorded step");
        state.apply_move(8);
        assert!(HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_rejected_moves_do_not_break_chain() {
        let mut state = GameState::new();
        state.apply_move(0);
        state.apply_move(0);
        assert!(HistoryConsistentInvariant::holds(&state));
        assert_eq!(state.history().len(), 2);
    }
}

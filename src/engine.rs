//! Game engine: turn management, move history, and time travel.
//!
//! [`GameState`] owns an append-only history of board snapshots and a
//! cursor into it. Moves always branch from the cursor: applying a move
//! while viewing an earlier step discards the entries beyond it, the
//! classic undo/redo branch-discard rule.

use crate::invariants::assert_invariants;
use crate::line::Line;
use crate::rules;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One step of the game: a board snapshot plus the cell whose move
/// produced it.
///
/// Entries are immutable once appended; each move clones the prior
/// board rather than mutating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    selected_cell: Option<usize>,
}

impl HistoryEntry {
    /// Returns the board at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cell filled by the move that produced this step.
    ///
    /// `None` only for the initial empty-board entry.
    pub fn selected_cell(&self) -> Option<usize> {
        self.selected_cell
    }
}

/// Error returned when a step index does not address a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StepError {
    /// The requested step is outside the recorded history.
    #[display("Step {step} is out of range (history has {len} entries)")]
    OutOfRange {
        /// The requested step index.
        step: usize,
        /// Number of entries in the history.
        len: usize,
    },
}

impl std::error::Error for StepError {}

/// Owned view of the current step, safe to hand to a renderer.
///
/// Everything is copied out of the history; holding a snapshot never
/// aliases engine internals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board at the current step.
    pub board: Board,
    /// The winning line on that board, if any.
    pub winning_line: Option<Line>,
    /// The cell filled by the move that produced the current step.
    pub selected_cell: Option<usize>,
}

/// Complete game state: history, cursor, turn flag, and display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    history: Vec<HistoryEntry>,
    current_step: usize,
    x_is_next: bool,
    move_order_ascending: bool,
}

impl GameState {
    /// Creates a new game: one empty-board entry, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry {
                board: Board::new(),
                selected_cell: None,
            }],
            current_step: 0,
            x_is_next: true,
            move_order_ascending: true,
        }
    }

    /// Places the next player's mark at `cell`.
    ///
    /// Illegal moves are ignored and leave the state unchanged: the
    /// game is already won, the cell is occupied, or `cell` is not a
    /// board cell. Legal moves discard any entries beyond the current
    /// step before appending, so playing from an earlier step starts a
    /// new branch.
    ///
    /// Every successful move resets the move-list order to ascending.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, cell: usize) {
        let board = self.current_board();
        if rules::detect_winner(board).is_some() {
            debug!(cell, "move ignored: game already won");
            return;
        }
        if !board.is_empty(cell) {
            debug!(cell, "move ignored: cell occupied or out of range");
            return;
        }

        let mut next = board.clone();
        next.set(cell, Square::Occupied(self.next_mark()));

        self.history.truncate(self.current_step + 1);
        self.history.push(HistoryEntry {
            board: next,
            selected_cell: Some(cell),
        });
        self.current_step = self.history.len() - 1;
        self.x_is_next = !self.x_is_next;
        self.move_order_ascending = true;

        assert_invariants(self);
    }

    /// Moves the cursor to an earlier or later recorded step.
    ///
    /// History contents and the move-list order are untouched; the
    /// turn flag is recomputed from step parity (even steps mean X
    /// moves next). Truncation only happens on the next successful
    /// [`GameState::apply_move`].
    ///
    /// # Errors
    ///
    /// Returns [`StepError::OutOfRange`] if `step` does not address a
    /// history entry.
    #[instrument(skip(self))]
    pub fn jump_to_step(&mut self, step: usize) -> Result<(), StepError> {
        if step >= self.history.len() {
            return Err(StepError::OutOfRange {
                step,
                len: self.history.len(),
            });
        }

        self.current_step = step;
        self.x_is_next = step % 2 == 0;

        assert_invariants(self);
        Ok(())
    }

    /// Flips the move-list display order. No other state is affected.
    #[instrument(skip(self))]
    pub fn toggle_move_order(&mut self) {
        self.move_order_ascending = !self.move_order_ascending;
    }

    /// Returns an owned view of the current step.
    #[instrument(skip(self))]
    pub fn current_state(&self) -> Snapshot {
        let entry = &self.history[self.current_step];
        Snapshot {
            board: entry.board.clone(),
            winning_line: rules::detect_winner(&entry.board),
            selected_cell: entry.selected_cell,
        }
    }

    /// Returns the board at the current step.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_step].board
    }

    /// Returns the recorded history, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the current step index.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns true if X moves next.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// Returns the player whose turn it is.
    pub fn next_mark(&self) -> Player {
        if self.x_is_next { Player::X } else { Player::O }
    }

    /// Returns true if the move list displays oldest first.
    pub fn move_order_ascending(&self) -> bool {
        self.move_order_ascending
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

//! View-model projection: display data derived from engine state.
//!
//! Pure functions only; a presentation layer renders what comes out
//! and feeds selections back into the engine.

use crate::engine::{GameState, HistoryEntry};
use crate::line::Line;
use crate::rules;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One entry in the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Absolute step index into the history. Selecting this entry
    /// jumps here regardless of display order.
    pub step: usize,
    /// Display label for the entry.
    pub label: String,
}

/// Display data for one rendered frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
    /// Status line: winner announcement or whose turn it is.
    pub status_text: String,
    /// Move list in the requested display order.
    pub moves: Vec<MoveEntry>,
    /// Cells of the winning line, empty while the game is open.
    pub highlighted_cells: Vec<usize>,
}

/// Projects engine state into display data.
#[instrument(skip(state))]
pub fn project(state: &GameState) -> ViewModel {
    let winning_line = rules::detect_winner(state.current_board());

    let status_text = match winning_mark(state, winning_line) {
        Some(player) => format!("Winner: {player}"),
        None => format!("Next player: {}", state.next_mark()),
    };

    let mut moves: Vec<MoveEntry> = state
        .history()
        .iter()
        .enumerate()
        .map(|(step, entry)| MoveEntry {
            step,
            label: label(entry),
        })
        .collect();
    if !state.move_order_ascending() {
        moves.reverse();
    }

    let highlighted_cells = winning_line
        .map(|line| line.cells().to_vec())
        .unwrap_or_default();

    ViewModel {
        status_text,
        moves,
        highlighted_cells,
    }
}

/// Reads the winning player's mark off the board at the line's first cell.
fn winning_mark(state: &GameState, line: Option<Line>) -> Option<Player> {
    let cells = line?.cells();
    state.current_board().get(cells[0])?.player()
}

/// Labels a history entry for the move list.
///
/// The initial entry has no selected cell and reads "Game Start";
/// every other entry names its mark and (row, column) coordinates.
fn label(entry: &HistoryEntry) -> String {
    let placed = entry
        .selected_cell()
        .and_then(|cell| Some((cell, entry.board().get(cell)?.player()?)));

    match placed {
        Some((cell, player)) => format!("Move: {player} on ({}, {})", cell / 3, cell % 3),
        None => "Game Start".to_string(),
    }
}

//! Win detection logic for tic-tac-toe.

use crate::line::Line;
use crate::types::{Board, Square};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks if there is a winning line on the board.
///
/// Returns the first line (in canonical order: rows, columns,
/// diagonals) whose three cells hold the same player's mark,
/// `None` otherwise. A single move can never complete two lines
/// for different players, so the order only fixes which of a
/// player's simultaneous lines is reported.
#[instrument]
pub fn detect_winner(board: &Board) -> Option<Line> {
    for line in Line::iter() {
        let [a, b, c] = line.cells();
        let sq = board.get(a);
        if sq != Some(Square::Empty) && sq == board.get(b) && sq == board.get(c) {
            return Some(line);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    fn board_with(cells: &[usize], player: Player) -> Board {
        let mut board = Board::new();
        for &cell in cells {
            board.set(cell, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(detect_winner(&board), None);
    }

    #[test]
    fn test_each_canonical_line() {
        for line in Line::iter() {
            let board = board_with(&line.cells(), Player::X);
            assert_eq!(detect_winner(&board), Some(line));
        }
    }

    #[test]
    fn test_winner_for_either_player() {
        let board = board_with(&[0, 4, 8], Player::O);
        assert_eq!(detect_winner(&board), Some(Line::Diagonal));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[0, 1], Player::X);
        assert_eq!(detect_winner(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = board_with(&[0, 1], Player::X);
        board.set(2, Square::Occupied(Player::O));
        assert_eq!(detect_winner(&board), None);
    }

    #[test]
    fn test_row_reported_before_column() {
        // Top row and left column both complete; rows come first.
        let mut board = board_with(&[0, 1, 2], Player::X);
        board.set(3, Square::Occupied(Player::X));
        board.set(6, Square::Occupied(Player::X));
        assert_eq!(detect_winner(&board), Some(Line::TopRow));
    }
}

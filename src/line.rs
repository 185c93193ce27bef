//! The eight winning lines of the board.

use serde::{Deserialize, Serialize};

/// A line of three cells that wins the game when filled by one player.
///
/// Declaration order is the canonical detection order: rows, then
/// columns, then diagonals. [`crate::rules::detect_winner`] reports the
/// first matching line in this order, which keeps tests reproducible.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Line {
    /// Cells 0, 1, 2.
    TopRow,
    /// Cells 3, 4, 5.
    MiddleRow,
    /// Cells 6, 7, 8.
    BottomRow,
    /// Cells 0, 3, 6.
    LeftColumn,
    /// Cells 1, 4, 7.
    CenterColumn,
    /// Cells 2, 5, 8.
    RightColumn,
    /// Cells 0, 4, 8.
    Diagonal,
    /// Cells 2, 4, 6.
    AntiDiagonal,
}

impl Line {
    /// Returns the three board cells of this line, in board order.
    pub fn cells(self) -> [usize; 3] {
        match self {
            Line::TopRow => [0, 1, 2],
            Line::MiddleRow => [3, 4, 5],
            Line::BottomRow => [6, 7, 8],
            Line::LeftColumn => [0, 3, 6],
            Line::CenterColumn => [1, 4, 7],
            Line::RightColumn => [2, 5, 8],
            Line::Diagonal => [0, 4, 8],
            Line::AntiDiagonal => [2, 4, 6],
        }
    }

    /// Get label for this line (for display).
    pub fn label(self) -> &'static str {
        match self {
            Line::TopRow => "Top row",
            Line::MiddleRow => "Middle row",
            Line::BottomRow => "Bottom row",
            Line::LeftColumn => "Left column",
            Line::CenterColumn => "Center column",
            Line::RightColumn => "Right column",
            Line::Diagonal => "Diagonal",
            Line::AntiDiagonal => "Anti-diagonal",
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_eight_lines() {
        assert_eq!(Line::iter().count(), 8);
    }

    #[test]
    fn test_cells_in_range() {
        for line in Line::iter() {
            for cell in line.cells() {
                assert!(cell < 9);
            }
        }
    }

    #[test]
    fn test_canonical_order() {
        let order: Vec<Line> = Line::iter().collect();
        assert_eq!(order[0], Line::TopRow);
        assert_eq!(order[3], Line::LeftColumn);
        assert_eq!(order[6], Line::Diagonal);
    }
}

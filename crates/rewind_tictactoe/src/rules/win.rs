//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Mark, Square};

/// The 8 lines in scan order: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win {
    /// The mark filling the line.
    pub mark: Mark,
    /// The cells of the line.
    pub line: [Position; 3],
}

/// Checks if there is a winner on the board.
///
/// When several lines are complete the first one in [`LINES`] order is
/// reported.
pub fn check_winner(board: &Board) -> Option<Win> {
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(mark) if sq == board.get(b) && sq == board.get(c) => {
                Some(Win { mark, line })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_diagonal() {
        let win = check_winner(&board("O...O...O")).unwrap();
        assert_eq!(win.mark, Mark::O);
        assert_eq!(
            win.line,
            [Position::TopLeft, Position::Center, Position::BottomRight]
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&board("XX.......")), None);
        assert_eq!(check_winner(&board("XOX......")), None);
    }

    #[test]
    fn test_rows_reported_before_columns() {
        // Top row and left column both complete.
        let win = check_winner(&board("XXXX..X..")).unwrap();
        assert_eq!(win.line, LINES[0]);
    }

    #[test]
    fn test_columns_reported_before_diagonals() {
        // Left column and main diagonal both complete.
        let win = check_winner(&board("O..OO.O.O")).unwrap();
        assert_eq!(win.line, LINES[3]);
    }
}

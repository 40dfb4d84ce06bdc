//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot: win detection, draw detection and
//! legal-move generation. The outcome of a board is always derived from its
//! squares and never stored.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{is_draw, is_full};
pub use moves::legal_moves;
pub use win::{LINES, Win, check_winner};

use crate::position::Position;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Classification of a board snapshot.
///
/// The three variants are mutually exclusive and exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner and at least one empty square.
    Ongoing,
    /// Three equal marks in a line.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The first complete line in scan order.
        line: [Position; 3],
    },
    /// No winner and no empty square.
    Drawn,
}

impl Outcome {
    /// Returns true for `Won` and `Drawn`.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }
}

/// Classifies a board as ongoing, won or drawn.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(Win { mark, line }) = check_winner(board) {
        Outcome::Won { mark, line }
    } else if is_full(board) {
        Outcome::Drawn
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&Board::new()), Outcome::Ongoing);
    }

    #[test]
    fn test_top_row_win() {
        assert_eq!(
            evaluate(&board("XXXOO....")),
            Outcome::Won {
                mark: Mark::X,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            }
        );
    }

    #[test]
    fn test_full_board_without_line_is_drawn() {
        let outcome = evaluate(&board("XOXOXXOXO"));
        assert_eq!(outcome, Outcome::Drawn);
        assert!(outcome.is_over());
        assert_eq!(outcome.winner(), None);
    }

    #[test]
    fn test_win_on_full_board_is_not_a_draw() {
        let outcome = evaluate(&board("XOXOXOXOX"));
        assert_eq!(outcome.winner(), Some(Mark::X));
        assert!(!is_draw(&board("XOXOXOXOX")));
    }

    #[test]
    fn test_classes_exclusive_and_exhaustive_over_all_boards() {
        // 3^9 assignments, reachable or not.
        for code in 0..3usize.pow(9) {
            let mut squares = [crate::Square::Empty; 9];
            let mut rest = code;
            for square in squares.iter_mut() {
                *square = match rest % 3 {
                    0 => crate::Square::Empty,
                    1 => crate::Square::Occupied(Mark::X),
                    _ => crate::Square::Occupied(Mark::O),
                };
                rest /= 3;
            }
            let b = Board::from_squares(squares);
            let won = check_winner(&b).is_some();
            let drawn = is_draw(&b);
            let ongoing = !won && !is_full(&b);
            assert_eq!(
                [won, drawn, ongoing].iter().filter(|c| **c).count(),
                1,
                "board {b}"
            );
        }
    }
}

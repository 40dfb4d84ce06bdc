//! The "easy" opponent: fixed-priority greedy rules.
//!
//! Tiers, first match wins: complete own line, block the opponent's line,
//! take the center, take a random corner, take a random cell.

use super::chooser::Chooser;
use crate::position::Position;
use crate::rules::{LINES, legal_moves};
use crate::types::{Board, Mark, Square};
use tracing::trace;

/// Returns the empty cell of the first line holding two `mark`s and one gap.
pub fn completing_cell(board: &Board, mark: Mark) -> Option<Position> {
    LINES.into_iter().find_map(|line| {
        let owned = line
            .iter()
            .filter(|p| board.get(**p) == Square::Occupied(mark))
            .count();
        let mut gaps = line.iter().filter(|p| board.is_empty(**p));
        match (owned, gaps.next(), gaps.next()) {
            (2, Some(gap), None) => Some(*gap),
            _ => None,
        }
    })
}

/// Picks the computer's move with the greedy priority rules.
///
/// # Panics
///
/// Panics if the board has no empty square; the orchestrator never asks for
/// a move on a finished board.
pub fn heuristic_move(board: &Board, chooser: &mut dyn Chooser) -> Position {
    let me = Mark::COMPUTER;

    if let Some(pos) = completing_cell(board, me) {
        trace!(%pos, "Winning move");
        return pos;
    }
    if let Some(pos) = completing_cell(board, me.opponent()) {
        trace!(%pos, "Blocking move");
        return pos;
    }
    if board.is_empty(Position::Center) {
        return Position::Center;
    }

    let corners: Vec<Position> = Position::CORNERS
        .into_iter()
        .filter(|p| board.is_empty(*p))
        .collect();
    if !corners.is_empty() {
        return corners[chooser.choose(corners.len())];
    }

    let empties = legal_moves(board);
    assert!(
        !empties.is_empty(),
        "computer asked to move on a full board: {board}"
    );
    empties[chooser.choose(empties.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::chooser::FirstChooser;

    /// Always picks the candidate at a fixed offset.
    struct Nth(usize);

    impl Chooser for Nth {
        fn choose(&mut self, len: usize) -> usize {
            self.0.min(len - 1)
        }
    }

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_blocks_immediate_threat() {
        assert_eq!(
            heuristic_move(&board("XX......."), &mut FirstChooser),
            Position::TopRight
        );
    }

    #[test]
    fn test_win_beats_block() {
        // O can finish the middle row; X threatens the top row.
        assert_eq!(
            heuristic_move(&board("XX.OO.X.."), &mut FirstChooser),
            Position::MiddleRight
        );
    }

    #[test]
    fn test_takes_center_when_quiet() {
        assert_eq!(
            heuristic_move(&board("X........"), &mut FirstChooser),
            Position::Center
        );
    }

    #[test]
    fn test_corner_tier_picks_among_empty_corners() {
        let b = board("....X....");
        assert_eq!(heuristic_move(&b, &mut Nth(1)), Position::TopRight);
        for n in 0..4 {
            let pos = heuristic_move(&b, &mut Nth(n));
            assert!(Position::CORNERS.contains(&pos));
        }
    }

    #[test]
    fn test_any_tier_when_center_and_corners_taken() {
        // Only cells 1 and 7 are free and no line is threatened.
        let b = board("X.OOXXX.O");
        assert_eq!(heuristic_move(&b, &mut Nth(0)), Position::TopCenter);
        assert_eq!(heuristic_move(&b, &mut Nth(1)), Position::BottomCenter);
    }

    #[test]
    fn test_full_line_is_not_a_threat() {
        assert_eq!(completing_cell(&board("XOX......"), Mark::X), None);
        assert_eq!(completing_cell(&board("X.X......"), Mark::X), Some(Position::TopCenter));
    }

    #[test]
    #[should_panic(expected = "full board")]
    fn test_full_board_is_a_programming_error() {
        heuristic_move(&board("XOXOXXOXO"), &mut FirstChooser);
    }
}

//! The "hard" opponent: exhaustive minimax search.
//!
//! Scores are from the computer's point of view. A computer win found `d`
//! plies below the candidate's position scores `10 - d`, a loss `-10 + d`,
//! a draw 0, so faster wins and slower losses are preferred.

use super::chooser::Chooser;
use super::heuristic::heuristic_move;
use crate::position::Position;
use crate::rules::{check_winner, legal_moves};
use crate::types::{Board, Mark};
use tracing::{debug, instrument};

/// Score of a won position before depth adjustment.
pub const WIN_SCORE: i32 = 10;

/// +10 for a computer win, -10 for a computer loss, 0 otherwise.
fn static_eval(board: &Board) -> i32 {
    match check_winner(board).map(|w| w.mark) {
        Some(Mark::COMPUTER) => WIN_SCORE,
        Some(_) => -WIN_SCORE,
        None => 0,
    }
}

fn minimax(board: &Board, maximizing: bool, depth: i32) -> i32 {
    let score = static_eval(board);
    if score == WIN_SCORE {
        return score - depth;
    }
    if score == -WIN_SCORE {
        return score + depth;
    }

    let moves = legal_moves(board);
    if moves.is_empty() {
        return 0;
    }

    if maximizing {
        moves
            .into_iter()
            .map(|pos| minimax(&board.with_mark(pos, Mark::COMPUTER), false, depth + 1))
            .max()
            .unwrap_or(0)
    } else {
        moves
            .into_iter()
            .map(|pos| minimax(&board.with_mark(pos, Mark::HUMAN), true, depth + 1))
            .min()
            .unwrap_or(0)
    }
}

/// Scores every legal computer move, in ascending cell order.
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn move_scores(board: &Board) -> Vec<(Position, i32)> {
    legal_moves(board)
        .into_iter()
        .map(|pos| {
            let child = board.with_mark(pos, Mark::COMPUTER);
            (pos, minimax(&child, false, 0))
        })
        .collect()
}

/// Returns the highest-scoring move, or `None` on a full board.
///
/// Candidates are scanned in ascending cell order and only a strictly
/// better score replaces the current pick, so ties go to the lowest cell.
pub fn best_move(board: &Board) -> Option<Position> {
    let mut best: Option<(Position, i32)> = None;
    for (pos, score) in move_scores(board) {
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((pos, score));
        }
    }
    if let Some((pos, score)) = best {
        debug!(%pos, score, "Search finished");
    }
    best.map(|(pos, _)| pos)
}

/// Picks the computer's move by exhaustive search.
///
/// # Panics
///
/// Panics if the board has no empty square (through the heuristic
/// fallback, which asserts).
pub fn optimal_move(board: &Board, chooser: &mut dyn Chooser) -> Position {
    best_move(board).unwrap_or_else(|| heuristic_move(board, chooser))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::chooser::FirstChooser;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_opening_is_top_left() {
        // Every opening is a draw under perfect play.
        let scores = move_scores(&Board::new());
        assert!(scores.iter().all(|(_, s)| *s == 0));
        assert_eq!(best_move(&Board::new()), Some(Position::TopLeft));
    }

    #[test]
    fn test_answers_corner_with_center() {
        assert_eq!(best_move(&board("X........")), Some(Position::Center));
    }

    #[test]
    fn test_answers_center_with_first_corner() {
        assert_eq!(best_move(&board("....X....")), Some(Position::TopLeft));
    }

    #[test]
    fn test_prefers_win_in_one_over_win_in_three() {
        let b = board("...XOXOX.");
        let scores = move_scores(&b);
        assert!(scores.contains(&(Position::TopLeft, WIN_SCORE - 2)));
        assert!(scores.contains(&(Position::TopRight, WIN_SCORE)));
        assert_eq!(best_move(&b), Some(Position::TopRight));
    }

    #[test]
    fn test_blocks_when_no_win_available() {
        // X threatens the top row; everything else loses next ply.
        assert_eq!(best_move(&board("XX..O....")), Some(Position::TopRight));
    }

    #[test]
    fn test_full_board_has_no_best_move() {
        assert_eq!(best_move(&board("XOXOXXOXO")), None);
    }

    #[test]
    #[should_panic]
    fn test_optimal_move_on_full_board_panics() {
        optimal_move(&board("XOXOXXOXO"), &mut FirstChooser);
    }
}

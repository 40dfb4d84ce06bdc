//! Computer opponents.
//!
//! Both strategies play [`Mark::COMPUTER`] and are pure functions of the
//! board, apart from the random tie-breaking the heuristic delegates to a
//! [`Chooser`].

mod chooser;
pub mod heuristic;
pub mod minimax;

pub use chooser::{Chooser, FirstChooser, RngChooser};
pub use heuristic::heuristic_move;
pub use minimax::{best_move, move_scores, optimal_move};

use crate::position::Position;
use crate::settings::Difficulty;
use crate::types::{Board, Mark};
use tracing::{debug, instrument};

/// Picks the computer's move with the strategy for `difficulty`.
///
/// # Panics
///
/// Panics if the board has no empty square.
#[instrument(skip(board, chooser), fields(board = %board))]
pub fn select_move(difficulty: Difficulty, board: &Board, chooser: &mut dyn Chooser) -> Position {
    let position = match difficulty {
        Difficulty::Easy => heuristic_move(board, chooser),
        Difficulty::Hard => optimal_move(board, chooser),
    };
    debug!(%position, mark = %Mark::COMPUTER, "Computer chose move");
    position
}

//! Legal-move generation.

use crate::position::Position;
use crate::types::Board;

/// Returns the empty cells in ascending index order.
///
/// An empty result means the board is full.
pub fn legal_moves(board: &Board) -> Vec<Position> {
    Position::ALL
        .into_iter()
        .filter(|pos| board.is_empty(*pos))
        .collect()
}

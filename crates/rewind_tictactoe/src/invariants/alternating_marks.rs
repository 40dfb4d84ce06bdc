//! Alternating marks invariant: X, O, X, O, ...

use super::Invariant;
use crate::history::History;
use crate::types::{Mark, Square};

/// Invariant: record `i` introduces `X` for odd `i` and `O` for even `i > 0`.
///
/// The human (`X`) always opens a round.
pub struct AlternatingMarksInvariant;

impl Invariant<History> for AlternatingMarksInvariant {
    fn holds(history: &History) -> bool {
        history
            .records()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(i, record)| {
                let expected = if i % 2 == 1 { Mark::X } else { Mark::O };
                record
                    .origin()
                    .is_some_and(|pos| record.board().get(pos) == Square::Occupied(expected))
            })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

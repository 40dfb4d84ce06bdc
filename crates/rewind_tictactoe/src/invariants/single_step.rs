//! Single-step invariant: each record adds exactly one mark at its origin.

use super::Invariant;
use crate::Position;
use crate::history::History;
use crate::types::Square;

/// Invariant: the first record is the empty board with no origin, and each
/// later record differs from its predecessor in exactly one cell, which was
/// empty before, is marked now, and is the record's origin.
pub struct SingleStepInvariant;

impl Invariant<History> for SingleStepInvariant {
    fn holds(history: &History) -> bool {
        let records = history.records();
        let Some(first) = records.first() else {
            return false;
        };
        if first.origin().is_some() || first.board().squares().iter().any(|s| *s != Square::Empty) {
            return false;
        }

        records.windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let changed: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|p| before.get(*p) != after.get(*p))
                .collect();
            match changed.as_slice() {
                [cell] => {
                    before.is_empty(*cell)
                        && !after.is_empty(*cell)
                        && pair[1].origin() == Some(*cell)
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each move marks exactly one previously empty cell at its origin"
    }
}

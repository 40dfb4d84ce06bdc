//! Cursor invariant: the cursor addresses a stored record.

use super::Invariant;
use crate::history::History;

/// Invariant: `0 <= cursor < len` and the history is never empty.
pub struct CursorInBoundsInvariant;

impl Invariant<History> for CursorInBoundsInvariant {
    fn holds(history: &History) -> bool {
        history.cursor() < history.len()
    }

    fn description() -> &'static str {
        "Cursor addresses a stored record"
    }
}

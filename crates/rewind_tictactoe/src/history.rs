//! Move history with a cursor for time travel.
//!
//! [`History`] is a value: every operation returns the successor store and
//! leaves the receiver untouched. Appending from a past cursor position
//! discards the redo-able future first (branch-on-overwrite).

use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::position::Position;
use crate::types::Board;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// One entry of the history: a snapshot and the cell that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    board: Board,
    origin: Option<Position>,
}

impl MoveRecord {
    /// The initial empty board.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            origin: None,
        }
    }

    /// The board after this move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cell marked by this move; `None` for the initial board.
    pub fn origin(&self) -> Option<Position> {
        self.origin
    }
}

/// Ordered snapshots plus the index of the active one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    records: Vec<MoveRecord>,
    cursor: usize,
}

impl History {
    /// A history holding only the empty board, cursor at 0.
    pub fn new() -> Self {
        Self {
            records: vec![MoveRecord::start()],
            cursor: 0,
        }
    }

    /// Truncates to `[0..=cursor]`, appends the record and moves the cursor onto it.
    ///
    /// In debug builds the result is checked against [`HistoryInvariants`].
    #[instrument(skip(self, board), fields(cursor = self.cursor, len = self.records.len(), %origin))]
    pub fn append(&self, board: Board, origin: Position) -> Self {
        let discarded = self.records.len() - 1 - self.cursor;
        if discarded > 0 {
            debug!(discarded, "Branching: dropping redo-able moves");
        }

        let mut records = self.records[..=self.cursor].to_vec();
        records.push(MoveRecord {
            board,
            origin: Some(origin),
        });
        let next = Self {
            cursor: records.len() - 1,
            records,
        };

        if cfg!(debug_assertions) {
            if let Err(violations) = HistoryInvariants::check_all(&next) {
                warn!(?violations, "History invariants violated by append");
                panic!("history invariants violated: {violations:?}");
            }
        }
        next
    }

    /// Moves the cursor to `step`, clamped to the stored range.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.records.len()))]
    pub fn jump_to(&self, step: usize) -> Self {
        Self {
            records: self.records.clone(),
            cursor: step.min(self.records.len() - 1),
        }
    }

    /// A fresh single-record history.
    pub fn reset(&self) -> Self {
        Self::new()
    }

    /// The record at the cursor.
    pub fn current(&self) -> &MoveRecord {
        &self.records[self.cursor]
    }

    /// The cursor (step index).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of records, including the initial board.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: the initial board is never removed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when the cursor is on the last record.
    pub fn at_latest(&self) -> bool {
        self.cursor + 1 == self.records.len()
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    #[cfg(test)]
    pub(crate) fn from_parts(records: Vec<MoveRecord>, cursor: usize) -> Self {
        Self { records, cursor }
    }

    #[cfg(test)]
    pub(crate) fn record(board: Board, origin: Option<Position>) -> MoveRecord {
        MoveRecord { board, origin }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

//! Error types.
//!
//! Rejected moves and navigation are not failures of the engine: they leave
//! state untouched and report why through these types.

use crate::position::Position;
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a human move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlayError {
    /// The round at the cursor is already won or drawn.
    #[display("The board is locked; the round is over")]
    BoardLocked,

    /// The cursor sits on a computer turn.
    #[display("It's not your turn")]
    NotHumanTurn,

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),
}

/// A scheduled computer move that no longer applies to the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Discarded stale computer move at {position} (scheduled at revision {scheduled}, now {current})")]
pub struct StaleMove {
    /// Target cell of the discarded move.
    pub position: Position,
    /// Revision the move was computed for.
    pub scheduled: u64,
    /// Revision at commit time.
    pub current: u64,
}

/// Failure to parse a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// Not exactly 9 squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(#[error(not(source))] usize),

    /// A character other than X, O or an empty marker.
    #[display("Invalid square symbol {:?}", _0)]
    InvalidSymbol(#[error(not(source))] char),
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

//! Rewind Tic-Tac-Toe - a human-versus-computer tic-tac-toe engine with
//! time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation and legal-move generation
//! - **AI**: a greedy heuristic ("easy") and exhaustive minimax ("hard")
//! - **History**: immutable snapshots with a cursor; appending from the past
//!   discards the redo-able future
//! - **State**: one immutable record of history, tally, difficulty and the
//!   auto-play gate, produced by pure transitions
//! - **Session**: the turn orchestrator that schedules the computer's move
//!   and rejects it if the state changed before it was applied
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Position, Session, SessionConfig};
//!
//! let mut session = Session::new(&SessionConfig::new().with_move_delay_ms(0));
//! session.play(Position::TopLeft).unwrap();
//! let reply = session.resolve_pending();
//! assert_eq!(reply, Some(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod ai;
mod config;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod settings;
mod state;
mod types;

// Crate-level exports - board and cells
pub use position::Position;
pub use types::{Board, Mark, Square};

// Crate-level exports - rules
pub use rules::{Outcome, evaluate, legal_moves};

// Crate-level exports - computer opponents
pub use ai::{Chooser, FirstChooser, RngChooser, best_move, heuristic_move, move_scores, select_move};

// Crate-level exports - history and state
pub use history::{History, MoveRecord};
pub use state::{GameState, Phase, ScoreTally};

// Crate-level exports - orchestration
pub use session::{HistoryLabel, PendingMove, Session};

// Crate-level exports - configuration and errors
pub use config::{DEFAULT_MOVE_DELAY_MS, SessionConfig};
pub use error::{ConfigError, ParseBoardError, PlayError, StaleMove};
pub use settings::{Difficulty, HistoryOrder};

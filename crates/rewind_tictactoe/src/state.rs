//! The complete game-session state as one immutable record.
//!
//! Every transition is a pure function returning the successor record, so
//! each one can be exercised in isolation. [`crate::Session`] holds the
//! current record and replaces it wholesale per operation.

use crate::history::{History, MoveRecord};
use crate::position::Position;
use crate::rules::{Outcome, evaluate};
use crate::settings::Difficulty;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Rounds won per mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTally {
    /// Rounds won by the human.
    pub x: u32,
    /// Rounds won by the computer.
    pub o: u32,
}

impl ScoreTally {
    /// Wins recorded for `mark`.
    pub fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// The tally with one more win for `mark`.
    pub fn with_win(self, mark: Mark) -> Self {
        match mark {
            Mark::X => Self { x: self.x + 1, ..self },
            Mark::O => Self { o: self.o + 1, ..self },
        }
    }
}

/// Whose move it is at the cursor, or how the round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Even cursor, round ongoing.
    HumanTurn,
    /// Odd cursor, round ongoing.
    ComputerTurn,
    /// The cursor snapshot is won or drawn; the board is locked.
    RoundOver(Outcome),
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::HumanTurn => write!(f, "Next: You ({})", Mark::HUMAN),
            Phase::ComputerTurn => write!(f, "Next: Computer ({})", Mark::COMPUTER),
            Phase::RoundOver(Outcome::Won { mark, .. }) => write!(f, "Winner: {mark}"),
            Phase::RoundOver(_) => write!(f, "Draw"),
        }
    }
}

/// History, tally, difficulty, auto-play gate and revision in one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    history: History,
    tally: ScoreTally,
    difficulty: Difficulty,
    auto_play: bool,
    revision: u64,
}

impl GameState {
    /// Fresh round at the given difficulty, zero tally, gate open.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            history: History::new(),
            tally: ScoreTally::default(),
            difficulty,
            auto_play: true,
            revision: 0,
        }
    }

    /// The move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The score tally.
    pub fn tally(&self) -> ScoreTally {
        self.tally
    }

    /// The active difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Whether the computer may move automatically.
    pub fn auto_play(&self) -> bool {
        self.auto_play
    }

    /// Bumped by every transition that changes history or cursor.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The record at the cursor.
    pub fn current(&self) -> &MoveRecord {
        self.history.current()
    }

    /// The board at the cursor.
    pub fn board(&self) -> &Board {
        self.history.current().board()
    }

    /// Outcome of the board at the cursor, recomputed on every call.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.board())
    }

    /// Phase at the cursor.
    pub fn phase(&self) -> Phase {
        match self.outcome() {
            Outcome::Ongoing if self.history.cursor() % 2 == 0 => Phase::HumanTurn,
            Outcome::Ongoing => Phase::ComputerTurn,
            over => Phase::RoundOver(over),
        }
    }

    /// True when the round at the cursor is over.
    pub fn is_locked(&self) -> bool {
        matches!(self.phase(), Phase::RoundOver(_))
    }

    /// The mark to play at the cursor (by parity, even when locked).
    pub fn to_move(&self) -> Mark {
        if self.history.cursor() % 2 == 0 {
            Mark::HUMAN
        } else {
            Mark::COMPUTER
        }
    }

    /// Places the mark to move at `pos`, branching off any redo-able moves.
    /// Opens the auto-play gate.
    ///
    /// The caller checks that `pos` is empty and the round is ongoing.
    #[instrument(skip(self), fields(revision = self.revision))]
    pub fn with_move(&self, pos: Position) -> Self {
        let board = self.board().with_mark(pos, self.to_move());
        Self {
            history: self.history.append(board, pos),
            auto_play: true,
            revision: self.revision + 1,
            ..self.clone()
        }
    }

    /// Moves the cursor to `step` (clamped) and closes the auto-play gate.
    #[instrument(skip(self), fields(revision = self.revision))]
    pub fn jumped_to(&self, step: usize) -> Self {
        Self {
            history: self.history.jump_to(step),
            auto_play: false,
            revision: self.revision + 1,
            ..self.clone()
        }
    }

    /// Replaces the history with the empty board and opens the gate.
    /// The tally is kept.
    pub fn new_round(&self) -> Self {
        Self {
            history: self.history.reset(),
            auto_play: true,
            revision: self.revision + 1,
            ..self.clone()
        }
    }

    /// Credits the winner of the cursor snapshot, if any, then starts a new round.
    #[instrument(skip(self), fields(revision = self.revision))]
    pub fn finalized(&self) -> Self {
        let tally = match self.outcome() {
            Outcome::Won { mark, .. } => {
                info!(%mark, "Round won");
                self.tally.with_win(mark)
            }
            _ => self.tally,
        };
        Self {
            tally,
            ..self.new_round()
        }
    }

    /// Zeroes the tally and starts a new round.
    pub fn scoreboard_reset(&self) -> Self {
        Self {
            tally: ScoreTally::default(),
            ..self.new_round()
        }
    }

    /// Switches difficulty and starts a new round; the tally is kept.
    #[instrument(skip(self))]
    pub fn with_difficulty(&self, difficulty: Difficulty) -> Self {
        debug!(from = %self.difficulty, to = %difficulty, "Changing difficulty");
        Self {
            difficulty,
            ..self.new_round()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

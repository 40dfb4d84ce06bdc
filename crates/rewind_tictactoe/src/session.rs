//! Turn orchestration for one human-versus-computer session.
//!
//! The session owns the current [`GameState`] and replaces it wholesale on
//! every operation. When a transition hands the move to the computer (and
//! the auto-play gate is open) the selected strategy runs once and its
//! answer is parked as a [`PendingMove`]. The front end applies it after
//! the pacing delay with [`Session::commit`]; a move whose captured state
//! has since changed is rejected as stale.

use crate::ai::{Chooser, RngChooser, select_move};
use crate::config::SessionConfig;
use crate::error::{PlayError, StaleMove};
use crate::history::MoveRecord;
use crate::position::Position;
use crate::rules::{Outcome, legal_moves};
use crate::settings::{Difficulty, HistoryOrder};
use crate::state::{GameState, Phase, ScoreTally};
use crate::types::Board;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// A computer move waiting for its pacing delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMove {
    revision: u64,
    board: Board,
    position: Position,
    delay: Duration,
}

impl PendingMove {
    /// Cell the computer will mark.
    pub fn position(&self) -> Position {
        self.position
    }

    /// How long the front end should wait before committing.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// State revision the move was computed for.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// One line of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryLabel {
    /// Step index, usable with [`Session::jump_to`].
    pub step: usize,
    /// Cell marked at this step; `None` for the start.
    pub origin: Option<Position>,
    /// Whether the cursor is on this step.
    pub current: bool,
}

impl std::fmt::Display for HistoryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.origin {
            None => write!(f, "Game start"),
            Some(pos) => write!(f, "Move #{} (r{}, c{})", self.step, pos.row(), pos.col()),
        }
    }
}

/// A human-versus-computer session: state, strategy randomness and the
/// pending computer move.
pub struct Session {
    state: GameState,
    chooser: Box<dyn Chooser>,
    pending: Option<PendingMove>,
    move_delay: Duration,
    history_order: HistoryOrder,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("pending", &self.pending)
            .field("move_delay", &self.move_delay)
            .field("history_order", &self.history_order)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Creates a session from configuration, seeding the chooser from
    /// `seed` when present.
    #[instrument(skip(config), fields(difficulty = %config.difficulty()))]
    pub fn new(config: &SessionConfig) -> Self {
        let chooser: Box<dyn Chooser> = match config.seed() {
            Some(seed) => Box::new(RngChooser::seeded(*seed)),
            None => Box::new(RngChooser::from_entropy()),
        };
        Self::with_chooser(config, chooser)
    }

    /// Creates a session with an explicit tie-breaking capability.
    pub fn with_chooser(config: &SessionConfig, chooser: Box<dyn Chooser>) -> Self {
        info!("Starting session");
        Self {
            state: GameState::new(*config.difficulty()),
            chooser,
            pending: None,
            move_delay: config.move_delay(),
            history_order: *config.history_order(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// The full state record.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The board at the cursor.
    pub fn current_snapshot(&self) -> Board {
        *self.state.board()
    }

    /// Outcome of the board at the cursor.
    pub fn cursor_outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Phase at the cursor.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Status line: whose turn it is, or how the round ended.
    pub fn status(&self) -> String {
        self.phase().to_string()
    }

    /// Whether the round at the cursor is over.
    pub fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    /// Empty cells of the board at the cursor.
    pub fn legal_moves(&self) -> Vec<Position> {
        legal_moves(self.state.board())
    }

    /// The score tally.
    pub fn score_tally(&self) -> ScoreTally {
        self.state.tally()
    }

    /// The active difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.state.difficulty()
    }

    /// Whether the computer may move automatically.
    pub fn auto_play(&self) -> bool {
        self.state.auto_play()
    }

    /// The scheduled computer move, if any.
    pub fn pending_move(&self) -> Option<&PendingMove> {
        self.pending.as_ref()
    }

    /// Current history label order.
    pub fn history_order(&self) -> HistoryOrder {
        self.history_order
    }

    /// Labels for every history step, in the configured order.
    pub fn history_labels(&self) -> Vec<HistoryLabel> {
        let history = self.state.history();
        let labels = history
            .records()
            .iter()
            .enumerate()
            .map(|(step, record): (usize, &MoveRecord)| HistoryLabel {
                step,
                origin: record.origin(),
                current: step == history.cursor(),
            });
        match self.history_order {
            HistoryOrder::Ascending => labels.collect(),
            HistoryOrder::Descending => labels.rev().collect(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Human actions
    // ─────────────────────────────────────────────────────────────

    /// Plays the human's mark at `pos`.
    ///
    /// # Errors
    ///
    /// Leaves the session unchanged and reports why when the board is
    /// locked, the cursor is on a computer turn, or `pos` is occupied.
    #[instrument(skip(self), fields(revision = self.state.revision()))]
    pub fn play(&mut self, pos: Position) -> Result<(), PlayError> {
        let rejection = match self.state.phase() {
            Phase::RoundOver(_) => Some(PlayError::BoardLocked),
            Phase::ComputerTurn => Some(PlayError::NotHumanTurn),
            Phase::HumanTurn if !self.state.board().is_empty(pos) => {
                Some(PlayError::SquareOccupied(pos))
            }
            Phase::HumanTurn => None,
        };
        if let Some(err) = rejection {
            warn!(%err, "Move ignored");
            return Err(err);
        }

        self.replace(self.state.with_move(pos));
        Ok(())
    }

    /// Moves the cursor to `step` (clamped) without letting the computer
    /// move. Returns whether the cursor changed.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> bool {
        let before = self.state.history().cursor();
        self.replace(self.state.jumped_to(step));
        self.state.history().cursor() != before
    }

    /// Steps back one move; no-op at the start.
    pub fn undo(&mut self) -> bool {
        match self.state.history().cursor().checked_sub(1) {
            Some(step) => self.jump_to(step),
            None => false,
        }
    }

    /// Steps forward one move; no-op at the latest move.
    pub fn redo(&mut self) -> bool {
        if self.state.history().at_latest() {
            return false;
        }
        self.jump_to(self.state.history().cursor() + 1)
    }

    /// Credits the winner at the cursor, if any, and starts a new round.
    #[instrument(skip(self))]
    pub fn restart_round(&mut self) {
        self.replace(self.state.finalized());
    }

    /// Zeroes the tally and starts a new round.
    #[instrument(skip(self))]
    pub fn reset_scoreboard(&mut self) {
        self.replace(self.state.scoreboard_reset());
    }

    /// Switches strategy and starts a new round; the tally is kept.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.replace(self.state.with_difficulty(difficulty));
    }

    /// Flips the history label order.
    pub fn toggle_history_order(&mut self) {
        self.history_order = self.history_order.toggle();
    }

    // ─────────────────────────────────────────────────────────────
    //  Computer move
    // ─────────────────────────────────────────────────────────────

    /// Removes and returns the scheduled computer move.
    pub fn take_pending(&mut self) -> Option<PendingMove> {
        self.pending.take()
    }

    /// Applies a computer move taken earlier with [`Session::take_pending`].
    ///
    /// # Errors
    ///
    /// Returns [`StaleMove`] and leaves the session unchanged when any
    /// transition happened since the move was scheduled, or when the
    /// target cell is no longer playable for the computer.
    #[instrument(skip(self, pending), fields(position = %pending.position, scheduled = pending.revision))]
    pub fn commit(&mut self, pending: PendingMove) -> Result<Position, StaleMove> {
        let fresh = pending.revision == self.state.revision()
            && pending.board == *self.state.board()
            && self.state.board().is_empty(pending.position)
            && self.state.auto_play()
            && self.state.phase() == Phase::ComputerTurn;
        if !fresh {
            let stale = StaleMove {
                position: pending.position,
                scheduled: pending.revision,
                current: self.state.revision(),
            };
            debug!(%stale, "Dropping computer move");
            return Err(stale);
        }

        self.replace(self.state.with_move(pending.position));
        Ok(pending.position)
    }

    /// Takes and commits the scheduled computer move immediately.
    pub fn resolve_pending(&mut self) -> Option<Position> {
        let pending = self.take_pending()?;
        self.commit(pending).ok()
    }

    /// Installs `next`, cancels any scheduled computer move and schedules
    /// a new one if the computer is now due.
    fn replace(&mut self, next: GameState) {
        if let Some(dropped) = self.pending.take() {
            debug!(position = %dropped.position, "Cancelled scheduled computer move");
        }
        self.state = next;
        self.schedule();
    }

    fn schedule(&mut self) {
        if !self.state.auto_play() || self.state.phase() != Phase::ComputerTurn {
            return;
        }
        let board = *self.state.board();
        let position = select_move(self.state.difficulty(), &board, self.chooser.as_mut());
        debug!(%position, revision = self.state.revision(), "Scheduled computer move");
        self.pending = Some(PendingMove {
            revision: self.state.revision(),
            board,
            position,
            delay: self.move_delay,
        });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

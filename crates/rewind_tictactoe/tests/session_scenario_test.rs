//! End-to-end rounds through the public session API.

use rewind_tictactoe::{
    Difficulty, FirstChooser, Mark, Outcome, Phase, PlayError, Position, ScoreTally, Session,
    SessionConfig,
};

fn session(difficulty: Difficulty) -> Session {
    let config = SessionConfig::new()
        .with_difficulty(difficulty)
        .with_move_delay_ms(0);
    Session::with_chooser(&config, Box::new(FirstChooser))
}

/// Plays a human move and lets the computer answer.
fn exchange(session: &mut Session, pos: Position) -> Option<Position> {
    session.play(pos).expect("human move should be legal");
    session.resolve_pending()
}

#[test]
fn test_fork_beats_easy_computer_and_scores_once() {
    let mut s = session(Difficulty::Easy);

    assert_eq!(exchange(&mut s, Position::TopLeft), Some(Position::Center));
    // No threats, center taken: first empty corner.
    assert_eq!(exchange(&mut s, Position::BottomRight), Some(Position::TopRight));
    // The fork: the bottom row is blocked, the left column is not.
    assert_eq!(exchange(&mut s, Position::BottomLeft), Some(Position::BottomCenter));
    assert_eq!(exchange(&mut s, Position::MiddleLeft), None);

    assert_eq!(
        s.cursor_outcome(),
        Outcome::Won {
            mark: Mark::X,
            line: [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
        }
    );
    assert!(s.is_locked());
    assert_eq!(s.play(Position::MiddleRight), Err(PlayError::BoardLocked));
    assert!(s.pending_move().is_none());

    s.restart_round();
    assert_eq!(s.score_tally(), ScoreTally { x: 1, o: 0 });
    assert_eq!(s.state().history().len(), 1);
    assert_eq!(s.phase(), Phase::HumanTurn);

    // A second restart on a fresh round credits nobody.
    s.restart_round();
    assert_eq!(s.score_tally().get(Mark::X), 1);
}

#[test]
fn test_navigation_stays_available_after_round_ends() {
    let mut s = session(Difficulty::Easy);
    exchange(&mut s, Position::TopLeft);
    exchange(&mut s, Position::BottomRight);
    exchange(&mut s, Position::BottomLeft);
    exchange(&mut s, Position::MiddleLeft);
    assert!(s.is_locked());

    assert!(s.undo());
    assert!(!s.is_locked());
    assert_eq!(s.phase(), Phase::HumanTurn);

    // Restarting from the past position credits nobody.
    s.restart_round();
    assert_eq!(s.score_tally(), ScoreTally::default());
}

#[test]
fn test_branching_from_the_past_discards_future() {
    let mut s = session(Difficulty::Easy);
    exchange(&mut s, Position::TopLeft);
    exchange(&mut s, Position::BottomRight);
    assert_eq!(s.state().history().len(), 5);

    s.jump_to(2);
    assert!(s.pending_move().is_none());
    s.play(Position::TopCenter).unwrap();
    assert_eq!(s.state().history().len(), 4);

    // X threatens the top row; the computer blocks.
    assert_eq!(s.resolve_pending(), Some(Position::TopRight));
    assert_eq!(s.state().history().len(), 5);
}

#[test]
fn test_reset_scoreboard_zeroes_tally() {
    let mut s = session(Difficulty::Easy);
    exchange(&mut s, Position::TopLeft);
    exchange(&mut s, Position::BottomRight);
    exchange(&mut s, Position::BottomLeft);
    exchange(&mut s, Position::MiddleLeft);
    s.restart_round();
    assert_eq!(s.score_tally().x, 1);

    s.reset_scoreboard();
    assert_eq!(s.score_tally(), ScoreTally::default());
    assert_eq!(s.state().history().len(), 1);
}

#[test]
fn test_hard_computer_holds_the_same_line_to_a_draw() {
    let mut s = session(Difficulty::Hard);
    assert_eq!(exchange(&mut s, Position::TopLeft), Some(Position::Center));
    assert_eq!(exchange(&mut s, Position::BottomRight), Some(Position::TopCenter));
    assert!(!s.is_locked());
}

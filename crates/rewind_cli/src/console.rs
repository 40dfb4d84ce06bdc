//! Line-based console front end.
//!
//! Renders the session after every command and applies the computer's
//! scheduled move once its pacing delay has elapsed. Commands typed during
//! the delay are handled first, so a quick undo drops the move as stale.

use anyhow::Result;
use rewind_tictactoe::{Difficulty, PendingMove, Phase, Position, Session, SessionConfig};
use std::str::FromStr;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  1-9 or a label   play that square (e.g. 5, center)
  u / r            undo / redo
  j N              jump to step N
  n                new round (scores the finished round)
  s                reset the scoreboard
  d easy|hard      change difficulty (starts a new round)
  o                flip history order
  h                show history
  ?                this help
  q                quit";

/// One parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Play(Position),
    Undo,
    Redo,
    Jump(usize),
    NewRound,
    ResetScore,
    Difficulty(Difficulty),
    ToggleOrder,
    History,
    Help,
    Quit,
}

impl FromStr for Input {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let head = words.next().unwrap_or_default().to_lowercase();
        let arg = words.next();
        let input = match (head.as_str(), arg) {
            ("u", None) => Input::Undo,
            ("r", None) => Input::Redo,
            ("j", Some(step)) => Input::Jump(
                step.parse()
                    .map_err(|_| format!("Not a step number: {step}"))?,
            ),
            ("n", None) => Input::NewRound,
            ("s", None) => Input::ResetScore,
            ("d", Some(mode)) => Input::Difficulty(
                Difficulty::from_str(mode).map_err(|_| format!("Unknown difficulty: {mode}"))?,
            ),
            ("o", None) => Input::ToggleOrder,
            ("h", None) => Input::History,
            ("?", None) => Input::Help,
            ("q", None) => Input::Quit,
            _ => Input::Play(
                Position::from_label_or_number(line)
                    .ok_or_else(|| format!("Unknown command: {}", line.trim()))?,
            ),
        };
        Ok(input)
    }
}

/// Runs an interactive session on stdin/stdout until `q` or end of input.
#[instrument(skip(config))]
pub async fn run(config: SessionConfig) -> Result<()> {
    let mut session = Session::new(&config);
    info!(difficulty = %session.difficulty(), "Console session started");

    println!("{HELP}\n");
    render(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut scheduled: Option<(PendingMove, Instant)> = None;
    loop {
        let next = match scheduled {
            Some((pending, deadline)) => tokio::select! {
                biased;
                () = sleep_until(deadline) => {
                    scheduled = None;
                    apply(&mut session, pending);
                    continue;
                }
                line = lines.next_line() => line?,
            },
            None => lines.next_line().await?,
        };
        let Some(line) = next else {
            if let Some((pending, deadline)) = scheduled.take() {
                sleep_until(deadline).await;
                apply(&mut session, pending);
            }
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let input = match line.parse::<Input>() {
            Ok(input) => input,
            Err(msg) => {
                println!("{msg} (? for help)");
                continue;
            }
        };
        debug!(?input, "Command");

        match input {
            Input::Play(pos) => {
                if let Err(err) = session.play(pos) {
                    println!("{err}");
                    continue;
                }
            }
            Input::Undo => {
                session.undo();
            }
            Input::Redo => {
                session.redo();
            }
            Input::Jump(step) => {
                session.jump_to(step);
            }
            Input::NewRound => session.restart_round(),
            Input::ResetScore => session.reset_scoreboard(),
            Input::Difficulty(difficulty) => session.set_difficulty(difficulty),
            Input::ToggleOrder => {
                session.toggle_history_order();
                print_history(&session);
                continue;
            }
            Input::History => {
                print_history(&session);
                continue;
            }
            Input::Help => {
                println!("{HELP}");
                continue;
            }
            Input::Quit => break,
        }

        render(&session);
        if let Some(pending) = session.take_pending() {
            scheduled = Some((pending, Instant::now() + pending.delay()));
        }
    }

    let tally = session.score_tally();
    println!("Final score: X {} - O {}", tally.x, tally.o);
    Ok(())
}

/// Commits a computer move whose delay has elapsed; stale moves are dropped.
fn apply(session: &mut Session, pending: PendingMove) {
    if let Ok(pos) = session.commit(pending) {
        println!("Computer plays {pos}");
        render(session);
    }
}

/// Explains why the computer is idle after time travel.
fn idle_hint(session: &Session) -> Option<&'static str> {
    if session.auto_play() {
        return None;
    }
    match session.phase() {
        Phase::HumanTurn => Some("(The computer waits until you place your next mark.)"),
        Phase::ComputerTurn => {
            Some("(This is the computer's turn. Undo or redo to one of your moves to play on.)")
        }
        Phase::RoundOver(_) => None,
    }
}

fn render(session: &Session) {
    let tally = session.score_tally();
    let history = session.state().history();
    println!(
        "\n[{}] Score X {} - O {}   step {}/{}",
        session.difficulty(),
        tally.x,
        tally.o,
        history.cursor(),
        history.len() - 1
    );
    println!("{}\n", session.current_snapshot().display());
    println!("{}", session.status());
    if let Some(hint) = idle_hint(session) {
        println!("{hint}");
    }
}

fn print_history(session: &Session) {
    for label in session.history_labels() {
        let marker = if label.current { '>' } else { ' ' };
        println!("{marker} {:>2}. {label}", label.step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("5".parse::<Input>(), Ok(Input::Play(Position::Center)));
        assert_eq!("top-left".parse::<Input>(), Ok(Input::Play(Position::TopLeft)));
        assert_eq!("u".parse::<Input>(), Ok(Input::Undo));
        assert_eq!("j 3".parse::<Input>(), Ok(Input::Jump(3)));
        assert_eq!("d HARD".parse::<Input>(), Ok(Input::Difficulty(Difficulty::Hard)));
        assert_eq!("Q".parse::<Input>(), Ok(Input::Quit));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("j x".parse::<Input>().is_err());
        assert!("d insane".parse::<Input>().is_err());
        assert!("10".parse::<Input>().is_err());
    }

    fn session() -> Session {
        let config = SessionConfig::new().with_move_delay_ms(0).with_seed(7);
        Session::new(&config)
    }

    #[test]
    fn test_idle_hint_after_undo_onto_computer_turn() {
        let mut s = session();
        assert_eq!(idle_hint(&s), None);

        s.play(Position::TopLeft).unwrap();
        s.resolve_pending();
        s.undo();
        assert!(idle_hint(&s).unwrap().contains("Undo or redo"));

        s.undo();
        assert!(idle_hint(&s).unwrap().contains("place your next mark"));
    }

    #[test]
    fn test_apply_drops_move_after_undo() {
        let mut s = session();
        s.play(Position::TopLeft).unwrap();
        let pending = s.take_pending().unwrap();
        s.undo();

        apply(&mut s, pending);
        assert_eq!(s.state().history().len(), 2);
        assert_eq!(s.state().history().cursor(), 0);
    }
}

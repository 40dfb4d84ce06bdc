//! Rewind - console front end.

#![warn(missing_docs)]

mod cli;
mod console;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rewind_tictactoe::{Board, Mark, SessionConfig, evaluate, move_scores};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            difficulty,
            delay_ms,
            seed,
        } => {
            let mut session_config = match config {
                Some(path) => SessionConfig::from_file(&path)?,
                None => SessionConfig::default(),
            };
            if let Some(difficulty) = difficulty {
                session_config = session_config.with_difficulty(difficulty);
            }
            if let Some(delay_ms) = delay_ms {
                session_config = session_config.with_move_delay_ms(delay_ms);
            }
            if let Some(seed) = seed {
                session_config = session_config.with_seed(seed);
            }
            console::run(session_config).await
        }
        Command::Analyze { board } => analyze(&board),
    }
}

/// Prints the evaluator's verdict and the search scores for a board.
#[instrument]
fn analyze(board: &str) -> Result<()> {
    let board: Board = board.parse().context("Invalid board")?;
    info!(%board, "Analyzing");

    println!("{}\n", board.display());
    println!("Outcome: {:?}", evaluate(&board));
    if !computer_to_move(&board) {
        println!("Note: O is not to move on this board; scores below are still for O.");
    }
    for (pos, score) in move_scores(&board) {
        println!("  {:>13}  {:+}", pos.label(), score);
    }
    Ok(())
}

/// True when the mark counts put O (the computer) on move.
fn computer_to_move(board: &Board) -> bool {
    board.count(Mark::X) == board.count(Mark::O) + 1
}

//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use rewind_tictactoe::Difficulty;

/// Rewind - tic-tac-toe against the computer, with undo and redo
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe against the computer with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to a TOML session config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Computer strategy (overrides config)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Delay before the computer's move, in milliseconds (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for the computer's random choices (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the outcome and the minimax score of every computer move
    Analyze {
        /// Nine squares, row-major: X, O, and . for empty (e.g. "X...O...X")
        board: String,
    },
}

//! Command-line interface for timeline_tictactoe.

use clap::{Parser, Subcommand};

/// Timeline Tic-Tac-Toe - tic-tac-toe with move history and time-travel
#[derive(Parser, Debug)]
#[command(name = "timeline_tictactoe")]
#[command(about = "Tic-tac-toe with move history and time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one command per line on stdin
    Play,

    /// Apply a list of moves and print the result
    Replay {
        /// Cells to play in order (0-8 or names such as `center`)
        cells: Vec<String>,

        /// Jump back to this step after the moves are applied
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the game state as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}

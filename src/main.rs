//! Timeline Tic-Tac-Toe - terminal front-end

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use timeline_tictactoe::{GameState, Position, console};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(),
        Command::Replay { cells, jump, json } => run_replay(&cells, jump, json),
    }
}

/// Logs go to stderr so they never mix with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,timeline_tictactoe=info")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Run the interactive console
fn run_play() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    console::run(stdin.lock(), stdout.lock())
}

/// Apply moves non-interactively and print the outcome
#[instrument]
fn run_replay(cells: &[String], jump: Option<usize>, json: bool) -> Result<()> {
    let positions = cells
        .iter()
        .map(|cell| {
            Position::from_label_or_number(cell)
                .with_context(|| format!("'{}' is not a cell (use 0-8 or a name)", cell))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut game = GameState::replay(&positions).context("Replay failed")?;
    if let Some(step) = jump {
        game = game.try_jump_to(step).context("Jump failed")?;
    }
    info!(steps = game.history().len(), status = %game.status(), "Replay finished");

    if json {
        let text = serde_json::to_string_pretty(&game).context("Failed to serialize game")?;
        println!("{}", text);
    } else {
        println!("{}", console::draw(&game));
    }
    Ok(())
}

//! Line-oriented terminal front-end.
//!
//! Reads one command per line, hands it to the engine and prints the
//! resulting board. Holds nothing beyond the current [`GameState`].
//!
//! [`GameState`]: crate::GameState

mod app;
mod input;
mod ui;

pub use app::{App, Reply};
pub use input::{Command, CommandError, HELP};
pub use ui::{draw, draw_board, draw_history, GAME_OVER_HINT};

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};

/// Runs the console until `quit` or end of input.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> Result<()> {
    info!("Starting console");

    let mut app = App::new();
    writeln!(output, "{}\n\nType 'help' for commands.", ui::draw(app.game()))
        .context("Failed to write to output")?;
    prompt(&mut output)?;

    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        match line.parse::<Command>() {
            Ok(command) => match app.handle(command) {
                Reply::Show(text) => writeln!(output, "{}", text)?,
                Reply::Quit => {
                    info!("User quit");
                    return Ok(());
                }
            },
            Err(CommandError::Empty) => {}
            Err(e) => {
                warn!(error = %e, "Bad command");
                writeln!(output, "{}", e)?;
            }
        }
        prompt(&mut output)?;
    }

    info!("Input closed");
    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> Result<()> {
    write!(output, "\n> ").context("Failed to write prompt")?;
    output.flush().context("Failed to flush output")
}

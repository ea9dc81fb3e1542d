//! Console application state and logic.

use super::input::{Command, HELP};
use super::ui;
use crate::games::tictactoe::{new_game, GameState};
use tracing::{debug, info};

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and keep reading.
    Show(String),
    /// Stop reading.
    Quit,
}

/// Console state: the one game the player is looking at.
#[derive(Debug, Clone, Default)]
pub struct App {
    game: GameState,
}

impl App {
    /// Creates a console with a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Applies one command and returns what to print.
    ///
    /// Rejected moves and jumps leave the game unchanged; the reason is
    /// shown above the board.
    pub fn handle(&mut self, command: Command) -> Reply {
        debug!(?command, "Handling command");

        let notice = match command {
            Command::Play(cell) => match self.game.try_apply_move(cell) {
                Ok(next) => {
                    self.game = next;
                    None
                }
                Err(e) => Some(format!("Move rejected: {}", e)),
            },
            Command::Jump(step) => match self.game.try_jump_to(step) {
                Ok(next) => {
                    info!(step, "Jumped back");
                    self.game = next;
                    None
                }
                Err(e) => Some(format!("Jump rejected: {}", e)),
            },
            Command::NewGame => {
                info!("New game");
                self.game = new_game();
                None
            }
            Command::History => return Reply::Show(ui::draw_history(&self.game)),
            Command::Help => return Reply::Show(HELP.to_string()),
            Command::Quit => return Reply::Quit,
        };

        let view = ui::draw(&self.game);
        Reply::Show(match notice {
            Some(notice) => format!("{}\n\n{}", notice, view),
            None => view,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::GameStatus;

    #[test]
    fn test_play_updates_game() {
        let mut app = App::new();
        let reply = app.handle(Command::Play(4));
        assert_eq!(app.game().cursor(), 1);
        assert!(matches!(reply, Reply::Show(text) if text.contains("Next player: O")));
    }

    #[test]
    fn test_rejected_move_shows_reason() {
        let mut app = App::new();
        app.handle(Command::Play(4));
        let reply = app.handle(Command::Play(4));
        assert_eq!(app.game().cursor(), 1);
        assert!(matches!(reply, Reply::Show(text) if text.starts_with("Move rejected: Center is already occupied")));
    }

    #[test]
    fn test_jump_and_new_game() {
        let mut app = App::new();
        for cell in [0, 4, 1] {
            app.handle(Command::Play(cell));
        }
        app.handle(Command::Jump(1));
        assert_eq!(app.game().history().len(), 2);
        assert_eq!(app.game().status(), GameStatus::InProgress(crate::games::tictactoe::Player::O));

        let reply = app.handle(Command::Jump(7));
        assert!(matches!(reply, Reply::Show(text) if text.starts_with("Jump rejected")));

        app.handle(Command::NewGame);
        assert_eq!(*app.game(), GameState::new());
    }

    #[test]
    fn test_quit() {
        assert_eq!(App::new().handle(Command::Quit), Reply::Quit);
    }
}

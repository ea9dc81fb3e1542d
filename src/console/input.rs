//! Parsing of typed console commands.

use crate::games::tictactoe::Position;
use derive_more::Display;
use tracing::instrument;

/// A user intent typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's mark.
    Play(usize),
    /// Travel back to a recorded step.
    Jump(usize),
    /// Start over with an empty board.
    NewGame,
    /// Print the move list.
    History,
    /// Print the command summary.
    Help,
    /// Leave the console.
    Quit,
}

/// A line that does not parse as a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandError {
    /// Nothing was typed.
    #[display("Empty command")]
    Empty,
    /// The verb is not recognised.
    #[display("Unknown command '{}' (type 'help')", _0)]
    Unknown(String),
    /// The verb needs an argument that is missing or malformed.
    #[display("'{}' needs {}", verb, expected)]
    BadArgument {
        /// Verb that was typed.
        verb: String,
        /// What the verb expects.
        expected: &'static str,
    },
}

impl std::error::Error for CommandError {}

/// Text shown by the `help` command.
pub const HELP: &str = "\
Commands:
  <cell>         play a cell: 0-8 or a name such as 'center' or 'top-left'
  play <cell>    same as above
  jump <step>    go back to a step from the history (later steps are dropped)
  new            start a new game
  history        show the move list
  help           show this text
  quit           leave";

impl std::str::FromStr for Command {
    type Err = CommandError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "play" | "p" => parse_cell(rest)
                .map(Command::Play)
                .ok_or_else(|| bad_argument(verb, "a cell (0-8 or a name)")),
            "jump" | "j" => rest
                .parse::<usize>()
                .map(Command::Jump)
                .map_err(|_| bad_argument(verb, "a step number")),
            "new" | "n" | "restart" => Ok(Command::NewGame),
            "history" | "h" => Ok(Command::History),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => parse_cell(line)
                .map(Command::Play)
                .ok_or_else(|| CommandError::Unknown(line.to_string())),
        }
    }
}

/// Accepts any number (so the engine can reject it) or a cell name.
fn parse_cell(s: &str) -> Option<usize> {
    s.parse::<usize>()
        .ok()
        .or_else(|| Position::from_label_or_number(s).map(Position::to_index))
}

fn bad_argument(verb: &str, expected: &'static str) -> CommandError {
    CommandError::BadArgument {
        verb: verb.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_cells() {
        assert_eq!("4".parse::<Command>(), Ok(Command::Play(4)));
        assert_eq!("center".parse::<Command>(), Ok(Command::Play(4)));
        assert_eq!("bottom right".parse::<Command>(), Ok(Command::Play(8)));
    }

    #[test]
    fn test_out_of_range_cell_reaches_engine() {
        assert_eq!("play 12".parse::<Command>(), Ok(Command::Play(12)));
    }

    #[test]
    fn test_verbs() {
        assert_eq!("jump 3".parse::<Command>(), Ok(Command::Jump(3)));
        assert_eq!("  NEW ".parse::<Command>(), Ok(Command::NewGame));
        assert_eq!("history".parse::<Command>(), Ok(Command::History));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert!(matches!("jump".parse::<Command>(), Err(CommandError::BadArgument { .. })));
        assert!(matches!("jump back".parse::<Command>(), Err(CommandError::BadArgument { .. })));
        assert_eq!(
            "dance".parse::<Command>(),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }
}

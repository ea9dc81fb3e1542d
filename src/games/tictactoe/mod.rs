mod action;
pub mod contracts;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod timeline;
mod types;

pub use action::{JumpError, Move, MoveError};
pub use engine::{new_game, GameState, GameStatus};
pub use position::Position;
pub use rules::{evaluate_winner, is_board_full, WinningLine};
pub use timeline::{timeline, StepSummary};
pub use types::{Board, Player, Square};

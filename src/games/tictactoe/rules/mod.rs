//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from history
//! storage so the engine, the contracts and a presentation layer can
//! all ask the same questions of any snapshot.

pub mod draw;
pub mod win;

pub use draw::{is_board_full, is_tie};
pub use win::{evaluate_winner, WinningLine, LINES};

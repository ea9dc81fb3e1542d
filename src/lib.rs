//! Timeline Tic-Tac-Toe - a tic-tac-toe engine with time-travel
//!
//! The engine keeps every board since the start of the game, so a
//! presentation layer can list past moves and jump back to any of them.
//! Jumping back forgets the later moves; playing on from there starts a
//! new branch.
//!
//! # Architecture
//!
//! - **Engine**: [`GameState`] with [`GameState::apply_move`], [`GameState::jump_to`]
//!   and [`GameState::status`]. All operations return a new state.
//! - **Rules**: pure board queries, [`evaluate_winner`] and [`is_board_full`]
//! - **Contracts/Invariants**: checks run after every transition in debug builds
//! - **Console**: line-oriented front-end used by the binary
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{new_game, GameStatus, Player};
//!
//! let game = new_game().apply_move(0).apply_move(4).apply_move(1);
//! assert_eq!(game.status(), GameStatus::InProgress(Player::O));
//!
//! let rewound = game.jump_to(1);
//! assert_eq!(rewound.history().len(), 2);
//! assert_eq!(rewound.to_move(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod console;
mod games;

// Crate-level exports - engine and rules
pub use games::tictactoe::{
    evaluate_winner, is_board_full, new_game, timeline, Board, GameState, GameStatus, JumpError,
    Move, MoveError, Player, Position, Square, StepSummary, WinningLine,
};

// Crate-level exports - contracts and invariants
pub use games::tictactoe::contracts::{Contract, JumpContract, LegalMove, MoveContract};
pub use games::tictactoe::invariants::{
    Invariant, InvariantSet, InvariantViolation, TimelineInvariants,
};
pub use games::tictactoe::rules::{is_tie, LINES};

//! History-based game engine for tic-tac-toe.
//!
//! A [`GameState`] is a list of board snapshots plus a cursor. Every
//! operation takes the state by reference and hands back a new one, so a
//! presentation layer can keep whichever snapshot it likes.
//!
//! The player to move is never stored: it is the parity of the cursor.
//! X moves on even steps, O on odd ones.

use super::action::{JumpError, Move, MoveError};
use super::contracts::{CellInBounds, Contract, JumpContract, MoveContract};
use super::invariants::{describe_violations, InvariantSet, TimelineInvariants};
use super::rules::{evaluate_winner, is_board_full, WinningLine};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Derived status of the board at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A player completed a line.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// The board is full and nobody completed a line.
    #[display("Tie game")]
    Tied,
    /// The game continues; holds the player to move next.
    #[display("Next player: {}", _0)]
    InProgress(Player),
}

impl GameStatus {
    /// Returns true if no further moves are accepted.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

/// Complete game state: every board since the start plus the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    /// Board snapshots; entry 0 is the empty board.
    history: Vec<Board>,
    /// Index of the displayed snapshot.
    cursor: usize,
}

/// Unvalidated wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<Board>,
    cursor: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = String;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = GameState {
            history: raw.history,
            cursor: raw.cursor,
        };
        TimelineInvariants::check_all(&state).map_err(|v| describe_violations(&v))?;
        Ok(state)
    }
}

/// Returns the canonical initial state.
#[instrument]
pub fn new_game() -> GameState {
    GameState::new()
}

impl GameState {
    /// Creates a new game: one empty board, cursor 0.
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Replays moves from the initial state, stopping at the first rejection.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<GameState, MoveError> {
        moves
            .iter()
            .try_fold(GameState::new(), |state, pos| state.try_apply_move(pos.to_index()))
    }

    /// Returns the board at the cursor.
    pub fn current_board(&self) -> &Board {
        &self.history[self.cursor]
    }

    /// Returns the cursor (current step index).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns every recorded board, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the last recorded step.
    pub fn last_step(&self) -> usize {
        self.history.len() - 1
    }

    /// Returns the board recorded at `step`, if any.
    pub fn board_at(&self, step: usize) -> Option<&Board> {
        self.history.get(step)
    }

    /// Returns the player whose turn it is at the cursor.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.cursor)
    }

    /// Returns the completed line on the current board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        evaluate_winner(self.current_board())
    }

    /// Derives the status of the current board.
    ///
    /// A winner takes priority over a full board.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(line) = evaluate_winner(board) {
            GameStatus::Won(*line.player())
        } else if is_board_full(board) {
            GameStatus::Tied
        } else {
            GameStatus::InProgress(self.to_move())
        }
    }

    /// Returns the positions a move may be made at right now.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.winning_line().is_some() {
            return Vec::new();
        }
        Position::valid_moves(self.current_board())
    }

    /// Returns the move that produced the board at `step`.
    ///
    /// Step 0 has no move.
    pub fn move_at(&self, step: usize) -> Option<Move> {
        let before = self.history.get(step.checked_sub(1)?)?;
        let after = self.history.get(step)?;
        move_between(before, after)
    }

    /// Returns the move that produced the current board.
    pub fn last_move(&self) -> Option<Move> {
        self.move_at(self.cursor)
    }

    /// Returns every move up to the cursor, in order.
    pub fn moves(&self) -> Vec<Move> {
        (1..=self.cursor).filter_map(|step| self.move_at(step)).collect()
    }

    /// Places the current player's mark at `cell` (0-8).
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the cell is off the board, already taken,
    /// or the current board already has a winner. `self` is never modified.
    #[instrument(skip(self), fields(cursor = self.cursor, player = %self.to_move()))]
    pub fn try_apply_move(&self, cell: usize) -> Result<GameState, MoveError> {
        let pos = CellInBounds::check(cell)?;
        MoveContract::pre(self, &pos)?;

        let board = self.current_board().with_mark(pos, self.to_move());
        let mut history = self.history[..=self.cursor].to_vec();
        history.push(board);
        let next = GameState {
            history,
            cursor: self.cursor + 1,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        debug!(position = %pos, step = next.cursor, "Move applied");
        Ok(next)
    }

    /// Places the current player's mark at `cell`, ignoring illegal moves.
    ///
    /// An illegal move returns a copy of `self`.
    pub fn apply_move(&self, cell: usize) -> GameState {
        self.try_apply_move(cell).unwrap_or_else(|e| {
            debug!(cell, error = %e, "Move rejected");
            self.clone()
        })
    }

    /// Travels back to `step`, forgetting every later step.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::StepOutOfRange`] if `step` was never recorded.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn try_jump_to(&self, step: usize) -> Result<GameState, JumpError> {
        JumpContract::pre(self, &step)?;

        let next = GameState {
            history: self.history[..=step].to_vec(),
            cursor: step,
        };

        #[cfg(debug_assertions)]
        JumpContract::post(self, &next)?;

        debug!(
            dropped = self.history.len() - next.history.len(),
            "Jumped back in history"
        );
        Ok(next)
    }

    /// Travels back to `step`, ignoring steps that do not exist.
    pub fn jump_to(&self, step: usize) -> GameState {
        self.try_jump_to(step).unwrap_or_else(|e| {
            debug!(step, error = %e, "Jump rejected");
            self.clone()
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the single mark placed between two consecutive boards.
fn move_between(before: &Board, after: &Board) -> Option<Move> {
    Position::ALL.iter().find_map(|&pos| {
        if before.get(pos) == after.get(pos) {
            return None;
        }
        after.get(pos).player().map(|player| Move::new(player, pos))
    })
}

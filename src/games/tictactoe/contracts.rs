//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{JumpError, MoveError};
use super::engine::GameState;
use super::invariants::{describe_violations, InvariantSet, TimelineInvariants};
use super::rules::evaluate_winner;
use super::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Error reported when either side of the contract fails.
    type Error;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Error>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Self::Error>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the cell index names a square on the board.
pub struct CellInBounds;

impl CellInBounds {
    /// Converts `cell` to a position, rejecting indexes past 8.
    pub fn check(cell: usize) -> Result<Position, MoveError> {
        Position::from_index(cell).ok_or(MoveError::OutOfBounds(cell))
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects a position that already holds a mark.
    pub fn check(pos: Position, game: &GameState) -> Result<(), MoveError> {
        if game.current_board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Precondition: nobody has completed a line on the current board.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Rejects any move once the current board has a winner.
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        match evaluate_winner(game.current_board()) {
            Some(line) => Err(MoveError::GameOver(*line.player())),
            None => Ok(()),
        }
    }
}

/// Composite precondition: the game is still open and the square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameState) -> Result<(), MoveError> {
        NoWinnerYet::check(game)?;
        SquareIsEmpty::check(pos, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions:
/// - No winner on the current board
/// - Square must be empty
///
/// Postconditions:
/// - History grew by exactly one step
/// - All timeline invariants still hold
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    type Error = MoveError;

    fn pre(game: &GameState, pos: &Position) -> Result<(), MoveError> {
        LegalMove::check(*pos, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.cursor() != before.cursor() + 1 {
            warn!(before = before.cursor(), after = after.cursor(), "Cursor did not advance by one");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: cursor must advance by one".to_string(),
            ));
        }
        TimelineInvariants::check_all(after).map_err(|violations| {
            MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                describe_violations(&violations)
            ))
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Contract
// ─────────────────────────────────────────────────────────────

/// Precondition: the requested step was recorded.
pub struct StepInRange;

impl StepInRange {
    /// Rejects a step past the end of the history.
    pub fn check(step: usize, game: &GameState) -> Result<(), JumpError> {
        let last = game.last_step();
        if step > last {
            Err(JumpError::StepOutOfRange { step, last })
        } else {
            Ok(())
        }
    }
}

/// Contract for time-travel jumps.
///
/// Postconditions:
/// - The kept steps are unchanged
/// - All timeline invariants still hold
pub struct JumpContract;

impl Contract<GameState, usize> for JumpContract {
    type Error = JumpError;

    fn pre(game: &GameState, step: &usize) -> Result<(), JumpError> {
        StepInRange::check(*step, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), JumpError> {
        if !before.history().starts_with(after.history()) {
            warn!("Jump rewrote a kept step");
            return Err(JumpError::InvariantViolation(
                "Postcondition failed: kept steps must be unchanged".to_string(),
            ));
        }
        TimelineInvariants::check_all(after).map_err(|violations| {
            JumpError::InvariantViolation(format!(
                "Postcondition failed: {}",
                describe_violations(&violations)
            ))
        })
    }
}

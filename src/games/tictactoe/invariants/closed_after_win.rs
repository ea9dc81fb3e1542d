//! Closed-after-win invariant: nothing is played once a line is complete.

use super::super::rules::evaluate_winner;
use super::super::GameState;
use super::Invariant;

/// Invariant: only the last recorded board may contain a winning line.
pub struct ClosedAfterWinInvariant;

impl Invariant<GameState> for ClosedAfterWinInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        let before_last = history.len().saturating_sub(1);
        history[..before_last]
            .iter()
            .all(|board| evaluate_winner(board).is_none())
    }

    fn description() -> &'static str {
        "No move is recorded after a player has won"
    }
}

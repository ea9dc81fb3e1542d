//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player, Position};
use super::Invariant;

/// Invariant: the mark added at step `k` belongs to the player for step `k - 1`.
///
/// X always opens, so X's marks appear on odd steps and O's on even ones.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().windows(2).enumerate().all(|(k, pair)| {
            Position::ALL
                .into_iter()
                .filter(|&pos| pair[0].get(pos) != pair[1].get(pos))
                .all(|pos| pair[1].get(pos).player() == Some(Player::for_step(k)))
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

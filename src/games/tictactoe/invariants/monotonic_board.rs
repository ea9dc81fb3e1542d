//! Monotonic board invariant: squares never change once set.

use super::super::{GameState, Position, Square};
use super::Invariant;

/// Invariant: the timeline starts empty and each step fills one square.
///
/// Between consecutive snapshots exactly one square goes from empty to
/// occupied and every other square is unchanged.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return false;
        };
        if first.occupied_count() != 0 {
            return false;
        }

        history.windows(2).all(|pair| {
            let changed: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|&pos| pair[0].get(pos) != pair[1].get(pos))
                .collect();
            match changed.as_slice() {
                [pos] => pair[0].get(*pos) == Square::Empty,
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Board squares are monotonic (one new mark per step, never overwritten)"
    }
}

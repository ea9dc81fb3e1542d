//! Cursor invariant: the cursor names the last recorded step.

use super::super::GameState;
use super::Invariant;

/// Invariant: history is non-empty and the cursor sits on its last entry.
///
/// Jumps truncate the history, so there is never a recorded step after
/// the cursor.
pub struct CursorAtTipInvariant;

impl Invariant<GameState> for CursorAtTipInvariant {
    fn holds(game: &GameState) -> bool {
        !game.history().is_empty() && game.cursor() == game.history().len() - 1
    }

    fn description() -> &'static str {
        "Cursor points at the last recorded step"
    }
}

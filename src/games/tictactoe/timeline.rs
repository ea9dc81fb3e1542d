//! Move-list view of a game's history.
//!
//! One entry per recorded step, in the shape a history sidebar needs:
//! a label to show, the move that led there, and which entry is current.

use super::action::Move;
use super::engine::GameState;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Summary of one recorded step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StepSummary {
    /// Step index, usable with [`GameState::jump_to`].
    step: usize,
    /// Display label ("Game start" or "Move #n").
    label: String,
    /// Move that produced this step; `None` for the starting board.
    mv: Option<Move>,
    /// Whether this step is the one at the cursor.
    current: bool,
}

impl std::fmt::Display for StepSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = if self.current { '>' } else { ' ' };
        write!(f, "{} {:>2}. {}", marker, self.step, self.label)?;
        if let Some(mv) = self.mv {
            write!(f, " ({})", mv)?;
        }
        Ok(())
    }
}

/// Builds the move list for `game`.
pub fn timeline(game: &GameState) -> Vec<StepSummary> {
    (0..game.history().len())
        .map(|step| StepSummary {
            step,
            label: if step == 0 {
                "Game start".to_string()
            } else {
                format!("Move #{}", step)
            },
            mv: game.move_at(step),
            current: step == game.cursor(),
        })
        .collect()
}

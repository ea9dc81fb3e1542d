//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: three equal marks and the player who owns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct WinningLine {
    /// The player owning all three squares.
    player: Player,
    /// The three positions of the line.
    positions: [Position; 3],
}

impl WinningLine {
    /// Returns true if `pos` is one of the three winning squares.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Board indexes of the line (0-8).
    pub fn indexes(&self) -> [usize; 3] {
        self.positions.map(Position::to_index)
    }
}

/// Checks if there is a winner on the board.
///
/// Lines are checked in [`LINES`] order and the first complete line is
/// returned, so a board with several complete lines reports the earliest.
#[instrument(level = "trace")]
pub fn evaluate_winner(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some(WinningLine {
                    player,
                    positions: [a, b, c],
                })
            }
            _ => None,
        }
    })
}

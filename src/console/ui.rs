//! Stateless text rendering for the console.

use crate::games::tictactoe::{timeline, GameState};

/// Renders the board at the cursor with the winning line bracketed.
pub fn draw_board(game: &GameState) -> String {
    let line = game.winning_line();
    game.current_board()
        .render(|pos| line.is_some_and(|l| l.contains(pos)))
}

/// Hint shown under a finished board.
pub const GAME_OVER_HINT: &str = "Type 'new' to play again or 'jump <step>' to go back.";

/// Renders board, status and the step the game is on.
///
/// A finished game gets [`GAME_OVER_HINT`] instead of waiting for a move.
pub fn draw(game: &GameState) -> String {
    let status = game.status();
    let mut text = format!("{}\n\n{}  (step {})", draw_board(game), status, game.cursor());
    if status.is_over() {
        text.push('\n');
        text.push_str(GAME_OVER_HINT);
    }
    text
}

/// Renders the move list, one step per line.
pub fn draw_history(game: &GameState) -> String {
    timeline(game)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_new_game() {
        let text = draw(&GameState::new());
        assert!(text.starts_with(" 0 | 1 | 2 "));
        assert!(text.ends_with("Next player: X  (step 0)"));
    }

    #[test]
    fn test_draw_highlights_winning_line() {
        let game = [0, 4, 1, 7, 2]
            .iter()
            .fold(GameState::new(), |g, &c| g.apply_move(c));
        let text = draw_board(&game);
        assert!(text.starts_with("[X]|[X]|[X]"));
        assert!(!text.contains("[O]"));
    }

    #[test]
    fn test_draw_finished_game_shows_hint() {
        let won = [0, 4, 1, 7, 2]
            .iter()
            .fold(GameState::new(), |g, &c| g.apply_move(c));
        assert!(draw(&won).ends_with(GAME_OVER_HINT));
        assert!(!draw(&won.jump_to(4)).contains(GAME_OVER_HINT));
    }

    #[test]
    fn test_draw_history() {
        let game = GameState::new().apply_move(4);
        assert_eq!(draw_history(&game), "   0. Game start\n>  1. Move #1 (X -> Center)");
    }
}

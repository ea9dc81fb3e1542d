//! Tests for the history-based tic-tac-toe engine.

use timeline_tictactoe::{
    evaluate_winner, is_board_full, is_tie, new_game, Board, GameState, GameStatus, JumpError, Move,
    MoveError, Player, Position, Square,
};

fn play(cells: &[usize]) -> GameState {
    cells.iter().fold(new_game(), |game, &cell| game.apply_move(cell))
}

#[test]
fn test_new_game_is_canonical() {
    let game = new_game();
    assert_eq!(*game.current_board(), Board::from_squares([Square::Empty; 9]));
    assert_eq!(game.cursor(), 0);
    assert_eq!(game.history().len(), 1);
    assert_eq!(game, GameState::new());
}

#[test]
fn test_top_row_win_scenario() {
    let game = play(&[0, 4, 1, 7, 2]);

    let line = evaluate_winner(game.current_board()).expect("X completed the top row");
    assert_eq!(line.indexes(), [0, 1, 2]);
    assert_eq!(*line.player(), Player::X);
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.winning_line(), Some(line));
}

#[test]
fn test_tie_scenario() {
    let game = play(&[0, 1, 2, 3, 5, 4, 6, 8, 7]);

    assert_eq!(game.history().len(), 10);
    assert!(is_board_full(game.current_board()));
    assert_eq!(evaluate_winner(game.current_board()), None);
    assert!(is_tie(game.current_board()));
    assert_eq!(game.status(), GameStatus::Tied);
    assert!(game.status().is_over());
}

#[test]
fn test_win_on_last_square_beats_tie() {
    // X's ninth mark fills the board and completes the diagonal.
    let game = play(&[0, 1, 2, 3, 4, 5, 7, 6, 8]);

    assert_eq!(game.history().len(), 10);
    assert!(is_board_full(game.current_board()));
    assert!(!is_tie(game.current_board()));
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert!(game.status().is_over());
    assert_eq!(game.winning_line().map(|line| line.indexes()), Some([0, 4, 8]));
}

#[test]
fn test_turns_follow_cursor_parity() {
    let mut game = new_game();
    for (step, cell) in [4, 0, 8, 2].into_iter().enumerate() {
        assert_eq!(game.to_move(), if step % 2 == 0 { Player::X } else { Player::O });
        game = game.apply_move(cell);
    }
    assert_eq!(game.status(), GameStatus::InProgress(Player::X));
    assert!(!game.status().is_over());
}

#[test]
fn test_rejections_are_no_ops() {
    let game = play(&[4]);

    assert_eq!(game.apply_move(4), game);
    assert_eq!(game.apply_move(9), game);
    assert_eq!(game.jump_to(5), game);

    assert_eq!(game.try_apply_move(4), Err(MoveError::SquareOccupied(Position::Center)));
    assert_eq!(game.try_apply_move(9), Err(MoveError::OutOfBounds(9)));
    assert_eq!(game.try_jump_to(5), Err(JumpError::StepOutOfRange { step: 5, last: 1 }));
}

#[test]
fn test_no_moves_after_win() {
    let game = play(&[0, 4, 1, 7, 2]);
    for cell in 0..9 {
        assert_eq!(game.apply_move(cell), game);
    }
}

#[test]
fn test_jump_reads_recorded_board() {
    let game = play(&[0, 4, 1, 7, 2]);
    for step in 0..game.history().len() {
        let back = game.jump_to(step);
        assert_eq!(back.current_board(), &game.history()[step]);
        assert_eq!(back.cursor(), step);
    }
}

#[test]
fn test_jump_evaluates_target_board() {
    let game = play(&[0, 4, 1, 7, 2]);
    let back = game.jump_to(3);
    assert_eq!(back.winning_line(), None);
    assert_eq!(back.status(), GameStatus::InProgress(Player::O));
}

#[test]
fn test_branch_on_jump() {
    let game = play(&[0, 4, 1, 7, 2]);
    let branched = game.jump_to(2).apply_move(8);

    assert_eq!(branched.history().len(), 4);
    assert_eq!(branched.history()[..3], game.history()[..3]);
    assert_eq!(
        branched.last_move(),
        Some(Move::new(Player::X, Position::BottomRight))
    );
    assert!(branched.current_board().is_empty(Position::TopCenter));
}

#[test]
fn test_jump_to_start_then_new_game_match() {
    let game = play(&[0, 4, 1]);
    assert_eq!(game.jump_to(0), new_game());
}

#[test]
fn test_serde_round_trip_keeps_history() {
    let game = play(&[0, 4, 1]);
    let json = serde_json::to_string(&game).expect("serialize");
    let back: GameState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, game);
}

#[test]
fn test_deserialize_rejects_empty_history() {
    let result = serde_json::from_str::<GameState>(r#"{"history":[],"cursor":0}"#);
    assert!(result.is_err());
}

//! Grid engine integration tests.

use arcade_core::core::BoardSize;
use arcade_core::grid::{detect_winner, game_result, Board, GameOutcome, Mark, Position};

// =============================================================================
// Move Application
// =============================================================================

#[test]
fn test_top_row_scenario() {
    let moves = [
        (0, 0, Mark::X),
        (1, 1, Mark::O),
        (0, 1, Mark::X),
        (2, 2, Mark::O),
        (0, 2, Mark::X),
    ];

    let mut board = Board::new(3);
    for (i, &(row, col, mark)) in moves.iter().enumerate() {
        board = board.apply_move(row, col, mark);
        let expected = if i + 1 < moves.len() { None } else { Some(Mark::X) };
        assert_eq!(detect_winner(&board, 3), expected);
    }

    assert_eq!(game_result(&board, 3, Mark::X), GameOutcome::Win);
}

#[test]
fn test_apply_move_keeps_source() {
    let board = Board::from_rows(&["X..", ".O.", "..."]);
    let next = board.apply_move(2, 0, Mark::X);

    assert_eq!(board.occupied_count(), 2);
    assert_eq!(next.occupied_count(), 3);
    for row in 0..3 {
        for col in 0..3 {
            if (row, col) != (2, 0) {
                assert_eq!(board.get(row, col), next.get(row, col));
            }
        }
    }
}

#[test]
fn test_board_sizes_from_config() {
    for size in BoardSize::ALL {
        let config = size.config();
        let board = Board::new(config.size.side());
        assert_eq!(board.available_moves().len(), size.side() * size.side());
        assert_eq!(detect_winner(&board, config.win_length), None);
    }
}

// =============================================================================
// Outcomes
// =============================================================================

#[test]
fn test_full_board_tie() {
    let board = Board::from_rows(&["XOX", "XXO", "OXO"]);
    assert!(board.is_full());
    assert_eq!(detect_winner(&board, 3), None);
    assert_eq!(game_result(&board, 3, Mark::X), GameOutcome::Tie);
    assert_eq!(game_result(&board, 3, Mark::O), GameOutcome::Tie);
}

#[test]
fn test_win_on_last_cell_is_not_tie() {
    let board = Board::from_rows(&["XOX", "OXO", "OXX"]);
    assert!(board.is_full());
    assert_eq!(game_result(&board, 3, Mark::X), GameOutcome::Win);
}

#[test]
fn test_six_by_six_needs_four() {
    let three = Board::from_rows(&[
        "......",
        ".O....",
        "..O...",
        "...O..",
        "......",
        "......",
    ]);
    assert_eq!(detect_winner(&three, 4), None);

    let four = three.apply_move(4, 4, Mark::O);
    assert_eq!(detect_winner(&four, 4), Some(Mark::O));
    assert_eq!(game_result(&four, 4, Mark::X), GameOutcome::Lose);
}

#[test]
fn test_nine_by_nine_anti_diagonal() {
    let mut board = Board::new(9);
    for i in 0..5 {
        board = board.apply_move(2 + i, 8 - i, Mark::X);
    }
    assert_eq!(detect_winner(&board, 5), Some(Mark::X));
    assert_eq!(detect_winner(&board, 6), None);
}

#[test]
fn test_available_moves_exclude_occupied() {
    let board = Board::from_rows(&["XO.", "...", "..X"]);
    let moves = board.available_moves();
    assert_eq!(moves.len(), 6);
    assert!(!moves.contains(&Position::new(0, 0)));
    assert!(!moves.contains(&Position::new(2, 2)));
    assert_eq!(moves[0], Position::new(0, 2));
}

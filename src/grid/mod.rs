//! Grid game engine: board model, move application, win detection.
//!
//! ```
//! use arcade_core::grid::{detect_winner, game_result, Board, GameOutcome, Mark};
//!
//! let board = Board::new(3)
//!     .apply_move(0, 0, Mark::X)
//!     .apply_move(1, 1, Mark::O)
//!     .apply_move(0, 1, Mark::X)
//!     .apply_move(2, 2, Mark::O)
//!     .apply_move(0, 2, Mark::X);
//!
//! assert_eq!(detect_winner(&board, 3), Some(Mark::X));
//! assert_eq!(game_result(&board, 3, Mark::O), GameOutcome::Lose);
//! ```

pub mod board;
pub mod rules;

pub use board::{Board, Cell, Mark, Position};
pub use rules::{detect_winner, game_result, line_windows, Direction, GameOutcome};

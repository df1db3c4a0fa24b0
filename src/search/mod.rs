//! Adversarial search for the grid game's computer opponent.
//!
//! ## Overview
//!
//! - **Minimax with alpha-beta**: depth-limited, row-major move order
//! - **Heuristic cutoff**: unblocked windows weighted `10^marks`
//! - **Fixed depth policy**: 10 plies up to 3x3, 5 up to 6x6, 4 beyond
//! - **Difficulty noise**: roughly one decision in twenty plays the
//!   second-ranked move
//!
//! ## Usage
//!
//! ```rust
//! use arcade_core::core::GameRng;
//! use arcade_core::grid::{Board, Mark, Position};
//! use arcade_core::search::{MinimaxAgent, SearchConfig};
//!
//! let board = Board::from_rows(&["XX.", ".O.", "..."]);
//! let mut agent = MinimaxAgent::new(SearchConfig::default().without_noise());
//! let mut rng = GameRng::new(42);
//!
//! let reply = agent.choose_move(&board, 3, Mark::O, Mark::X, &mut rng);
//! assert_eq!(reply, Some(Position::new(0, 2)));
//! ```
//!
//! The search is a blocking computation with no suspension points or
//! cancellation. Callers that need a responsive UI run it off the render
//! path. Boards are values, so concurrent calls on independent boards
//! share nothing.

pub mod agent;
pub mod config;
pub mod evaluator;
pub mod minimax;
pub mod policy;
pub mod stats;

pub use agent::{MinimaxAgent, ScoredMove};
pub use config::SearchConfig;
pub use evaluator::evaluate;
pub use minimax::{AlphaBeta, WIN_SCORE};
pub use policy::{MovePolicy, RandomMover};
pub use stats::SearchStats;

//! # arcade-core
//!
//! Game logic and AI for a small arcade of casual games whose payouts are
//! settled elsewhere.
//!
//! ## Design Principles
//!
//! 1. **Values, not mutation**: Boards and cards are values. Engine
//!    functions return new values and share no state, so independent calls
//!    are safe from any thread.
//!
//! 2. **Explicit configuration**: Board sizes, stakes, bet tiers and search
//!    depths are structs passed in, never globals.
//!
//! 3. **Seeded randomness**: Every random decision takes a `GameRng`, so a
//!    match or round replays exactly from its seed.
//!
//! 4. **Validate at the boundary**: The pure engines assert on malformed
//!    input; the `session` layer validates player input and returns
//!    `ArcadeError`.
//!
//! ## Modules
//!
//! - `core`: Money amounts, RNG, configuration tables, errors
//! - `grid`: Board model, move application, win detection
//! - `search`: Minimax agent with alpha-beta pruning and heuristic cutoff
//! - `lottery`: Card layout, draw sequences, line matching, rewards
//! - `session`: Validated grid matches and lottery rounds
//! - `chests`: Lucky-chest tier table and opening

pub mod core;
pub mod grid;
pub mod search;
pub mod lottery;
pub mod session;
pub mod chests;

// Re-export commonly used types
pub use crate::core::{
    Amount, ArcadeConfig, ArcadeError, BoardSize, GameRng, GameRngState, LotteryConfig,
    MatchConfig, Result,
};

pub use crate::grid::{detect_winner, game_result, Board, Cell, GameOutcome, Mark, Position};

pub use crate::search::{MinimaxAgent, MovePolicy, RandomMover, ScoredMove, SearchConfig, SearchStats};

pub use crate::lottery::{
    compute_reward, count_complete_lines, generate_draw_sequence, quick_pick, CardCell,
    DrawSequence, DrawnSet, Line, LotteryCard,
};

pub use crate::session::{GridMatch, LotteryOutcome, LotteryRound, MoveRecord};

pub use crate::chests::{open_chest, ChestOutcome, ChestTier};

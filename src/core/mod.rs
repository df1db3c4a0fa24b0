//! Core types shared by every game: money, RNG, configuration, errors.
//!
//! Nothing in here knows about boards or cards. The game modules build on
//! these and are configured via the structs in `config` rather than globals.

pub mod amount;
pub mod config;
pub mod error;
pub mod rng;

pub use amount::{Amount, BASE_UNITS_PER_COIN};
pub use config::{ArcadeConfig, BoardSize, LotteryConfig, MatchConfig};
pub use error::{ArcadeError, Result};
pub use rng::{GameRng, GameRngState};

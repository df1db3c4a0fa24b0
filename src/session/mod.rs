//! Validating session layer over the pure engines.
//!
//! - `GridMatch`: one grid match, turn order, settlement amounts
//! - `LotteryRound`: one lottery round from validated picks and bet
//!
//! Sessions live in memory for a single match or round. Settlement and
//! persistence belong to the external contract layer.

pub mod grid_match;
pub mod lottery_round;

pub use grid_match::{GridMatch, MoveRecord};
pub use lottery_round::{LotteryOutcome, LotteryRound};

//! Configuration tables.
//!
//! Configuration is explicit: callers pick a `BoardSize` (which fixes the
//! whole `MatchConfig` row) and pass a `LotteryConfig` / `SearchConfig` into
//! the engines. Nothing here is global state.
//!
//! - `BoardSize` / `MatchConfig`: grid game table (size, win length, stakes)
//! - `LotteryConfig`: bet tiers and per-line multiplier
//! - `ArcadeConfig`: everything tunable, loadable from JSON

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::error::{ArcadeError, Result};
use crate::search::SearchConfig;

/// Supported grid sizes. Each size is bound to a fixed win length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum BoardSize {
    /// 3x3, three in a row.
    Three,
    /// 6x6, four in a row.
    Six,
    /// 9x9, five in a row.
    Nine,
}

impl BoardSize {
    /// All supported sizes, smallest first.
    pub const ALL: [BoardSize; 3] = [BoardSize::Three, BoardSize::Six, BoardSize::Nine];

    /// Side length of the board.
    #[must_use]
    pub const fn side(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Six => 6,
            BoardSize::Nine => 9,
        }
    }

    /// Run length needed to win.
    #[must_use]
    pub const fn win_length(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Six => 4,
            BoardSize::Nine => 5,
        }
    }

    /// The full match configuration row for this size.
    #[must_use]
    pub fn config(self) -> MatchConfig {
        let (entry, win, tie) = match self {
            BoardSize::Three => (0.1, 0.2, 0.05),
            BoardSize::Six => (0.5, 1.0, 0.25),
            BoardSize::Nine => (1.0, 2.0, 0.5),
        };
        MatchConfig {
            size: self,
            win_length: self.win_length(),
            entry_cost: Amount::from_coins(entry),
            win_payout: Amount::from_coins(win),
            tie_payout: Amount::from_coins(tie),
        }
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = ArcadeError;

    fn try_from(side: usize) -> Result<Self> {
        match side {
            3 => Ok(BoardSize::Three),
            6 => Ok(BoardSize::Six),
            9 => Ok(BoardSize::Nine),
            other => Err(ArcadeError::UnsupportedBoardSize(other)),
        }
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> usize {
        size.side()
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.side(), self.side())
    }
}

/// Immutable per-match configuration, selected once at match start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub size: BoardSize,
    pub win_length: usize,
    /// Stake paid to start the match.
    pub entry_cost: Amount,
    /// Settlement when the player wins.
    pub win_payout: Amount,
    /// Settlement on a tie.
    pub tie_payout: Amount,
}

impl MatchConfig {
    /// Look up the configuration for a raw side length.
    pub fn for_side(side: usize) -> Result<Self> {
        Ok(BoardSize::try_from(side)?.config())
    }
}

/// Lottery stakes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotteryConfig {
    /// Payout multiplier per completed line.
    pub multiplier: u64,

    /// Bets a round may be played with.
    pub bet_tiers: Vec<Amount>,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            multiplier: crate::lottery::WIN_MULTIPLIER,
            bet_tiers: [0.1, 0.5, 1.0, 5.0].iter().map(|&c| Amount::from_coins(c)).collect(),
        }
    }
}

impl LotteryConfig {
    /// Set a custom multiplier.
    #[must_use]
    pub fn with_multiplier(mut self, multiplier: u64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Replace the bet tiers.
    #[must_use]
    pub fn with_bet_tiers(mut self, tiers: Vec<Amount>) -> Self {
        self.bet_tiers = tiers;
        self
    }

    /// Is `bet` one of the configured tiers?
    #[must_use]
    pub fn is_supported_bet(&self, bet: Amount) -> bool {
        self.bet_tiers.contains(&bet)
    }

    /// Reward for `lines_won` completed lines at this config's multiplier.
    #[must_use]
    pub fn reward(&self, bet: Amount, lines_won: u32) -> Amount {
        bet * self.multiplier * u64::from(lines_won)
    }
}

/// Top-level tunables for the arcade core.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub lottery: LotteryConfig,
    pub search: SearchConfig,
}

impl ArcadeConfig {
    /// Parse a configuration from JSON. Missing sections use defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

//! Lucky chests: buy a chest, open it, receive one of two fixed payouts.
//!
//! | Chest   | Price | Win chance | Win payout | Otherwise |
//! |---------|-------|------------|------------|-----------|
//! | Wooden  | 0.1   | 10%        | 0.15       | 0.05      |
//! | Golden  | 0.5   | 50%        | 0.8        | 0.3       |
//! | Diamond | 1.0   | 30%        | 2.5        | 0.7       |
//!
//! Payout-determining randomness for real stakes comes from the settlement
//! layer; `open_chest` is the local simulation of the same table.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{Amount, ArcadeError, GameRng, Result};

/// Chest tiers, identified on the wire by `id()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChestTier {
    Wooden,
    Golden,
    Diamond,
}

impl ChestTier {
    pub const ALL: [ChestTier; 3] = [ChestTier::Wooden, ChestTier::Golden, ChestTier::Diamond];

    /// Look a tier up by its numeric id (1-3).
    pub fn from_id(id: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.id() == id)
            .ok_or(ArcadeError::UnknownChest(id))
    }

    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            ChestTier::Wooden => 1,
            ChestTier::Golden => 2,
            ChestTier::Diamond => 3,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ChestTier::Wooden => "Wooden Chest",
            ChestTier::Golden => "Golden Chest",
            ChestTier::Diamond => "Diamond Chest",
        }
    }

    #[must_use]
    pub fn price(self) -> Amount {
        Amount::from_coins(match self {
            ChestTier::Wooden => 0.1,
            ChestTier::Golden => 0.5,
            ChestTier::Diamond => 1.0,
        })
    }

    /// Chance of the winning payout, in percent.
    #[must_use]
    pub const fn win_rate_percent(self) -> usize {
        match self {
            ChestTier::Wooden => 10,
            ChestTier::Golden => 50,
            ChestTier::Diamond => 30,
        }
    }

    #[must_use]
    pub fn win_payout(self) -> Amount {
        Amount::from_coins(match self {
            ChestTier::Wooden => 0.15,
            ChestTier::Golden => 0.8,
            ChestTier::Diamond => 2.5,
        })
    }

    #[must_use]
    pub fn lose_payout(self) -> Amount {
        Amount::from_coins(match self {
            ChestTier::Wooden => 0.05,
            ChestTier::Golden => 0.3,
            ChestTier::Diamond => 0.7,
        })
    }

    /// Display label and multiplier text for a result.
    #[must_use]
    pub const fn label(self, win: bool) -> (&'static str, &'static str) {
        match (self, win) {
            (ChestTier::Wooden, true) => ("STONKS", "1.5x"),
            (ChestTier::Wooden, false) => ("REKT", "0.5x"),
            (ChestTier::Golden, true) => ("WAGMI", "1.6x"),
            (ChestTier::Golden, false) => ("NGMI", "0.6x"),
            (ChestTier::Diamond, true) => ("LAMBO", "2.5x"),
            (ChestTier::Diamond, false) => ("DOWN BAD", "0.7x"),
        }
    }

    /// Expected payout per chest, in base units.
    #[must_use]
    pub fn expected_payout(self) -> f64 {
        let p = self.win_rate_percent() as f64 / 100.0;
        p * self.win_payout().base_units() as f64 + (1.0 - p) * self.lose_payout().base_units() as f64
    }
}

/// Result of opening a chest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ChestOutcome {
    pub tier: ChestTier,
    pub win: bool,
    pub amount: Amount,
    pub rarity: &'static str,
    pub multiplier: &'static str,
}

/// Open a chest of `tier`.
pub fn open_chest(tier: ChestTier, rng: &mut GameRng) -> ChestOutcome {
    let win = rng.gen_range_usize(0..100) < tier.win_rate_percent();
    let amount = if win { tier.win_payout() } else { tier.lose_payout() };
    let (rarity, multiplier) = tier.label(win);

    info!(chest = tier.name(), win, amount = %amount, "chest opened");

    ChestOutcome {
        tier,
        win,
        amount,
        rarity,
        multiplier,
    }
}

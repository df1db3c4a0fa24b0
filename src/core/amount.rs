//! Money amounts in integer base units.
//!
//! All stakes and payouts are stored as `u64` base units where one coin is
//! `BASE_UNITS_PER_COIN`. Payout arithmetic stays exact; conversion to a
//! floating coin value happens only at the display edge.
//!
//! ```
//! use arcade_core::core::Amount;
//!
//! let bet = Amount::from_coins(0.5);
//! assert_eq!(bet.base_units(), 500_000_000);
//! assert_eq!((bet * 5).as_coins(), 2.5);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Base units per whole coin (nine decimal places).
pub const BASE_UNITS_PER_COIN: u64 = 1_000_000_000;

/// A non-negative amount of money in base units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(pub u64);

impl Amount {
    /// Zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Create an amount from raw base units.
    #[must_use]
    pub const fn from_base_units(units: u64) -> Self {
        Self(units)
    }

    /// Create an amount from a coin value, rounded to the nearest base unit.
    ///
    /// Negative and non-finite inputs clamp to zero.
    #[must_use]
    pub fn from_coins(coins: f64) -> Self {
        if !coins.is_finite() || coins <= 0.0 {
            return Self::ZERO;
        }
        Self((coins * BASE_UNITS_PER_COIN as f64).round() as u64)
    }

    /// Raw base units.
    #[must_use]
    pub const fn base_units(self) -> u64 {
        self.0
    }

    /// Value in whole coins (for display).
    #[must_use]
    pub fn as_coins(self) -> f64 {
        self.0 as f64 / BASE_UNITS_PER_COIN as f64
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl Mul<u64> for Amount {
    type Output = Amount;

    fn mul(self, rhs: u64) -> Amount {
        Amount(self.0.saturating_mul(rhs))
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.0 / BASE_UNITS_PER_COIN;
        let frac = self.0 % BASE_UNITS_PER_COIN;
        if frac == 0 {
            return write!(f, "{}", whole);
        }
        let digits = format!("{:09}", frac);
        write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
    }
}

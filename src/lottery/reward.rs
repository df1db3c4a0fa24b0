//! Lottery payout arithmetic.

use crate::core::Amount;

/// Payout multiplier per completed line.
pub const WIN_MULTIPLIER: u64 = 5;

/// `bet * WIN_MULTIPLIER * lines_won`, exact in base units.
///
/// ```
/// use arcade_core::core::Amount;
/// use arcade_core::lottery::compute_reward;
///
/// assert_eq!(compute_reward(Amount::from_coins(0.5), 1), Amount::from_coins(2.5));
/// ```
#[must_use]
pub fn compute_reward(bet: Amount, lines_won: u32) -> Amount {
    bet * WIN_MULTIPLIER * u64::from(lines_won)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_lines_no_reward() {
        assert_eq!(compute_reward(Amount::from_coins(5.0), 0), Amount::ZERO);
    }

    #[test]
    fn test_reward_scales_with_lines() {
        let bet = Amount::from_coins(0.1);
        assert_eq!(compute_reward(bet, 1), Amount::from_coins(0.5));
        assert_eq!(compute_reward(bet, 3), Amount::from_coins(1.5));
        assert_eq!(compute_reward(Amount::from_coins(1.0), 12), Amount::from_coins(60.0));
    }
}

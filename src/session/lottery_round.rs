//! A single lottery round: validated picks and bet, one draw, one payout.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{info, warn};

use crate::core::{Amount, ArcadeError, GameRng, LotteryConfig, Result};
use crate::lottery::{completed_lines, DrawSequence, Line, LotteryCard, NUMBER_POOL, PICK_COUNT};

/// Result of a played round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotteryOutcome {
    pub draw_sequence: DrawSequence,
    pub lines: SmallVec<[Line; 12]>,
    pub lines_won: u32,
    pub payout: Amount,
}

/// A card and stake ready to be drawn against.
#[derive(Clone, Debug)]
pub struct LotteryRound {
    card: LotteryCard,
    bet: Amount,
    config: LotteryConfig,
}

impl LotteryRound {
    /// Validate the player's selection and bet.
    ///
    /// Picks must be exactly `PICK_COUNT` distinct numbers below
    /// `NUMBER_POOL`; the bet must be a configured tier.
    pub fn new(picks: &[u8], bet: Amount, config: &LotteryConfig) -> Result<Self> {
        Self::validate(picks, bet, config).map_err(|err| {
            warn!(error = %err, "lottery selection rejected");
            err
        })?;

        Ok(Self {
            card: LotteryCard::build(picks)?,
            bet,
            config: config.clone(),
        })
    }

    fn validate(picks: &[u8], bet: Amount, config: &LotteryConfig) -> Result<()> {
        if picks.len() != PICK_COUNT {
            return Err(ArcadeError::WrongPickCount {
                expected: PICK_COUNT,
                actual: picks.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for &n in picks {
            if n as usize >= NUMBER_POOL {
                return Err(ArcadeError::PickOutOfRange(n));
            }
            if !seen.insert(n) {
                return Err(ArcadeError::DuplicatePick(n));
            }
        }

        if !config.is_supported_bet(bet) {
            return Err(ArcadeError::UnsupportedBet(bet));
        }

        Ok(())
    }

    #[must_use]
    pub fn card(&self) -> &LotteryCard {
        &self.card
    }

    #[must_use]
    pub fn bet(&self) -> Amount {
        self.bet
    }

    /// Draw a fresh sequence and score the card against it.
    pub fn play(&self, rng: &mut GameRng) -> LotteryOutcome {
        self.settle(DrawSequence::generate(rng))
    }

    /// Score the card against a given sequence.
    pub fn settle(&self, draw_sequence: DrawSequence) -> LotteryOutcome {
        let lines = completed_lines(&self.card, &draw_sequence.drawn_set());
        let lines_won = lines.len() as u32;
        let payout = self.config.reward(self.bet, lines_won);

        info!(bet = %self.bet, lines_won, payout = %payout, "lottery round settled");

        LotteryOutcome {
            draw_sequence,
            lines,
            lines_won,
            payout,
        }
    }
}

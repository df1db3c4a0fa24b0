//! Draw sequence generation and reveal.
//!
//! A round draws `DRAW_COUNT` distinct numbers from `0..NUMBER_POOL`,
//! independently of the card. Reveal order matters for presentation only;
//! final scoring uses the whole set.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::GameRng;

use super::card::{LotteryCard, PICK_COUNT};
use super::lines::count_complete_lines;

/// Numbers are drawn from `0..NUMBER_POOL`.
pub const NUMBER_POOL: usize = 100;
/// Numbers drawn per round.
pub const DRAW_COUNT: usize = 40;

/// Set of numbers drawn so far.
pub type DrawnSet = FxHashSet<u8>;

/// An ordered sequence of distinct drawn numbers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSequence {
    numbers: Vec<u8>,
}

impl DrawSequence {
    /// Draw a fresh sequence.
    pub fn generate(rng: &mut GameRng) -> Self {
        Self {
            numbers: sample_numbers(rng, DRAW_COUNT),
        }
    }

    /// Wrap a sequence produced elsewhere (e.g. by the settlement layer) for
    /// replay.
    pub fn from_numbers(numbers: Vec<u8>) -> Self {
        Self { numbers }
    }

    #[must_use]
    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Every number in the sequence.
    #[must_use]
    pub fn drawn_set(&self) -> DrawnSet {
        self.numbers.iter().copied().collect()
    }

    /// Replay the sequence one number at a time against `card`.
    pub fn reveal<'a>(&'a self, card: &'a LotteryCard) -> DrawReveal<'a> {
        DrawReveal {
            card,
            remaining: self.numbers.iter(),
            drawn: DrawnSet::default(),
            index: 0,
        }
    }
}

/// Draw a fresh sequence of `DRAW_COUNT` distinct numbers.
pub fn generate_draw_sequence(rng: &mut GameRng) -> DrawSequence {
    DrawSequence::generate(rng)
}

/// Random picks for a whole card: `PICK_COUNT` distinct numbers.
pub fn quick_pick(rng: &mut GameRng) -> Vec<u8> {
    sample_numbers(rng, PICK_COUNT)
}

fn sample_numbers(rng: &mut GameRng, count: usize) -> Vec<u8> {
    rng.sample_distinct(NUMBER_POOL, count)
        .into_iter()
        .map(|n| n as u8)
        .collect()
}

/// State after one number is revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealStep {
    /// 0-based position in the sequence.
    pub index: usize,
    pub number: u8,
    /// Whether the number is on the card.
    pub hit: bool,
    /// Complete lines with everything revealed so far.
    pub lines_complete: u32,
}

/// Iterator over a draw sequence's reveal steps.
#[derive(Debug)]
pub struct DrawReveal<'a> {
    card: &'a LotteryCard,
    remaining: std::slice::Iter<'a, u8>,
    drawn: DrawnSet,
    index: usize,
}

impl DrawReveal<'_> {
    /// Numbers revealed so far.
    #[must_use]
    pub fn drawn(&self) -> &DrawnSet {
        &self.drawn
    }
}

impl Iterator for DrawReveal<'_> {
    type Item = RevealStep;

    fn next(&mut self) -> Option<RevealStep> {
        let number = *self.remaining.next()?;
        self.drawn.insert(number);

        let step = RevealStep {
            index: self.index,
            number,
            hit: self.card.numbers().any(|n| n == number),
            lines_complete: count_complete_lines(self.card, &self.drawn),
        };
        self.index += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining.size_hint()
    }
}

impl ExactSizeIterator for DrawReveal<'_> {}

//! 5x5 lottery card with a free center.

use serde::{Deserialize, Serialize};

use crate::core::{ArcadeError, Result};

use super::draw::DrawnSet;

/// Side length of the card.
pub const GRID_SIZE: usize = 5;
/// Cells on the card.
pub const CARD_CELLS: usize = GRID_SIZE * GRID_SIZE;
/// Row-major index of the free center cell.
pub const CENTER_INDEX: usize = CARD_CELLS / 2;
/// Numbers the player picks.
pub const PICK_COUNT: usize = CARD_CELLS - 1;

/// One card cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCell {
    /// Matched unconditionally.
    Free,
    Number(u8),
}

impl CardCell {
    /// True for the free cell, or a number present in `drawn`.
    #[inline]
    #[must_use]
    pub fn is_matched(self, drawn: &DrawnSet) -> bool {
        match self {
            CardCell::Free => true,
            CardCell::Number(n) => drawn.contains(&n),
        }
    }
}

/// A player's card: 24 picked numbers around a free center, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LotteryCard {
    cells: [CardCell; CARD_CELLS],
}

impl LotteryCard {
    /// Lay out `picks` in order, skipping the center.
    ///
    /// Only the count is checked here; range and uniqueness belong to the
    /// selection layer (`LotteryRound::new`).
    ///
    /// ```
    /// use arcade_core::lottery::{CardCell, LotteryCard, CENTER_INDEX};
    ///
    /// let picks: Vec<u8> = (0..24).collect();
    /// let card = LotteryCard::build(&picks).unwrap();
    /// assert_eq!(card.cells()[CENTER_INDEX], CardCell::Free);
    /// assert_eq!(card.cells()[CENTER_INDEX + 1], CardCell::Number(12));
    /// ```
    pub fn build(picks: &[u8]) -> Result<Self> {
        if picks.len() != PICK_COUNT {
            return Err(ArcadeError::WrongPickCount {
                expected: PICK_COUNT,
                actual: picks.len(),
            });
        }

        let mut cells = [CardCell::Free; CARD_CELLS];
        let mut numbers = picks.iter();
        for (i, cell) in cells.iter_mut().enumerate() {
            if i == CENTER_INDEX {
                continue;
            }
            if let Some(&n) = numbers.next() {
                *cell = CardCell::Number(n);
            }
        }

        Ok(Self { cells })
    }

    #[must_use]
    pub fn cells(&self) -> &[CardCell; CARD_CELLS] {
        &self.cells
    }

    /// Cell at (`row`, `col`).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> CardCell {
        self.cells[row * GRID_SIZE + col]
    }

    /// The picked numbers in card order.
    pub fn numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().filter_map(|cell| match cell {
            CardCell::Number(n) => Some(*n),
            CardCell::Free => None,
        })
    }

    /// Cells matched by `drawn`, free center included.
    #[must_use]
    pub fn matched_count(&self, drawn: &DrawnSet) -> usize {
        self.cells.iter().filter(|c| c.is_matched(drawn)).count()
    }
}

//! Line matching on a lottery card.
//!
//! Twelve lines: five rows, five columns, the main diagonal and the
//! anti-diagonal. A line is complete when all five of its cells are matched.
//! Both diagonals run through the free center; no line is all free.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{LotteryCard, GRID_SIZE};
use super::draw::DrawnSet;

/// A scoring line on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    Row(u8),
    Column(u8),
    MainDiagonal,
    AntiDiagonal,
}

impl Line {
    /// All lines in check order: rows, columns, main diagonal, anti-diagonal.
    pub const ALL: [Line; 12] = [
        Line::Row(0),
        Line::Row(1),
        Line::Row(2),
        Line::Row(3),
        Line::Row(4),
        Line::Column(0),
        Line::Column(1),
        Line::Column(2),
        Line::Column(3),
        Line::Column(4),
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// Row-major card indices on this line.
    #[must_use]
    pub fn cells(self) -> [usize; GRID_SIZE] {
        let mut out = [0usize; GRID_SIZE];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = match self {
                Line::Row(r) => r as usize * GRID_SIZE + i,
                Line::Column(c) => i * GRID_SIZE + c as usize,
                Line::MainDiagonal => i * GRID_SIZE + i,
                Line::AntiDiagonal => i * GRID_SIZE + (GRID_SIZE - 1 - i),
            };
        }
        out
    }

    #[must_use]
    pub fn is_complete(self, card: &LotteryCard, drawn: &DrawnSet) -> bool {
        self.cells()
            .iter()
            .all(|&idx| card.cells()[idx].is_matched(drawn))
    }
}

/// The complete lines, in check order.
#[must_use]
pub fn completed_lines(card: &LotteryCard, drawn: &DrawnSet) -> SmallVec<[Line; 12]> {
    Line::ALL
        .into_iter()
        .filter(|line| line.is_complete(card, drawn))
        .collect()
}

/// Number of complete lines (0 to 12).
#[must_use]
pub fn count_complete_lines(card: &LotteryCard, drawn: &DrawnSet) -> u32 {
    Line::ALL
        .iter()
        .filter(|line| line.is_complete(card, drawn))
        .count() as u32
}

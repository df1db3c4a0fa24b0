//! Win detection and game outcome.
//!
//! Lines are scanned from every cell in four directions: right, down,
//! down-right and down-left. Scan order is row-major, then direction order,
//! and the first qualifying run decides the winner.

use serde::{Deserialize, Serialize};

use super::board::{Board, Mark, Position};

/// Line direction from a starting cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDown,
    DiagonalUp,
}

impl Direction {
    /// Scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// (row, col) step. `DiagonalUp` walks down and to the left.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }

    /// The cell `steps` away from `start`, or `None` off a `size` board.
    #[inline]
    #[must_use]
    pub fn offset(self, start: Position, steps: usize, size: usize) -> Option<Position> {
        let (dr, dc) = self.delta();
        let row = start.row as isize + dr * steps as isize;
        let col = start.col as isize + dc * steps as isize;
        if row < 0 || col < 0 || row >= size as isize || col >= size as isize {
            None
        } else {
            Some(Position::new(row as usize, col as usize))
        }
    }
}

/// Every (start, direction) whose `len`-cell window fits on a `size` board,
/// in scan order.
pub fn line_windows(size: usize, len: usize) -> impl Iterator<Item = (Position, Direction)> {
    let last = len.saturating_sub(1);
    (0..size)
        .flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
        .flat_map(|start| Direction::ALL.into_iter().map(move |dir| (start, dir)))
        .filter(move |&(start, dir)| len > 0 && dir.offset(start, last, size).is_some())
}

/// The mark with an unbroken run of at least `win_length`, if any.
#[must_use]
pub fn detect_winner(board: &Board, win_length: usize) -> Option<Mark> {
    debug_assert!(win_length > 0, "win length must be positive");
    let size = board.size();

    for row in 0..size {
        for col in 0..size {
            let Some(mark) = board.get(row, col) else {
                continue;
            };
            let start = Position::new(row, col);

            for dir in Direction::ALL {
                let run = 1 + (1..win_length)
                    .map_while(|i| dir.offset(start, i, size))
                    .take_while(|&pos| board.at(pos) == Some(mark))
                    .count();
                if run >= win_length {
                    return Some(mark);
                }
            }
        }
    }

    None
}

/// Outcome of a match from the designated player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Ongoing,
    Win,
    Lose,
    Tie,
}

impl GameOutcome {
    /// True once no further moves are accepted.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GameOutcome::Ongoing => "ongoing",
            GameOutcome::Win => "win",
            GameOutcome::Lose => "lose",
            GameOutcome::Tie => "tie",
        };
        f.write_str(s)
    }
}

/// Evaluate the board for `player`.
#[must_use]
pub fn game_result(board: &Board, win_length: usize, player: Mark) -> GameOutcome {
    match detect_winner(board, win_length) {
        Some(mark) if mark == player => GameOutcome::Win,
        Some(_) => GameOutcome::Lose,
        None if board.is_full() => GameOutcome::Tie,
        None => GameOutcome::Ongoing,
    }
}

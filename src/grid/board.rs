//! Square board of marks.
//!
//! Boards are values: `apply_move` returns a new board and leaves the
//! source untouched. The search keeps a private scratch board and uses the
//! crate-internal `place`/`clear` pair instead, so it never allocates per
//! node.

use serde::{Deserialize, Serialize};

/// A side's mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other side's mark.
    #[must_use]
    pub const fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Display character.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A board cell: empty or holding one mark.
pub type Cell = Option<Mark>;

/// Board coordinate, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square grid of cells laid out row-major (`row * size + col`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size` x `size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size == 0`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Parse a board from one string per row: `X`, `O`, anything else empty.
    ///
    /// ```
    /// use arcade_core::grid::{Board, Mark};
    ///
    /// let board = Board::from_rows(&["XO.", "...", "..X"]);
    /// assert_eq!(board.get(0, 1), Some(Mark::O));
    /// assert_eq!(board.get(1, 1), None);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the rows do not form a non-empty square.
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len();
        let mut board = Self::new(size);
        for (r, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            assert_eq!(chars.len(), size, "row {} is not {} cells wide", r, size);
            for (c, ch) in chars.into_iter().enumerate() {
                board.cells[r * size + c] = match ch {
                    'X' | 'x' => Some(Mark::X),
                    'O' | 'o' => Some(Mark::O),
                    _ => None,
                };
            }
        }
        board
    }

    /// Side length.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    #[must_use]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(self.in_bounds(row, col), "({}, {}) off a {}x{} board", row, col, self.size, self.size);
        row * self.size + col
    }

    /// Cell at (`row`, `col`).
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    #[inline]
    #[must_use]
    pub fn at(&self, pos: Position) -> Cell {
        self.get(pos.row, pos.col)
    }

    /// Return a new board with `mark` placed at (`row`, `col`).
    ///
    /// The caller guarantees the target is in bounds and empty; debug builds
    /// assert it.
    #[must_use]
    pub fn apply_move(&self, row: usize, col: usize, mark: Mark) -> Board {
        let mut next = self.clone();
        next.place(Position::new(row, col), mark);
        next
    }

    /// All empty cells in row-major order.
    #[must_use]
    pub fn available_moves(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| Position::new(i / self.size, i % self.size))
            .collect()
    }

    /// True iff no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of cells holding `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == Some(mark)).count()
    }

    /// Set a cell in place. Search scratch boards only.
    #[inline]
    pub(crate) fn place(&mut self, pos: Position, mark: Mark) {
        let idx = self.index(pos.row, pos.col);
        debug_assert!(self.cells[idx].is_none(), "cell {} already occupied", pos);
        self.cells[idx] = Some(mark);
    }

    /// Empty a cell in place, undoing `place`.
    #[inline]
    pub(crate) fn clear(&mut self, pos: Position) {
        let idx = self.index(pos.row, pos.col);
        self.cells[idx] = None;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = self.get(row, col).map_or('.', Mark::symbol);
                write!(f, "{}", ch)?;
            }
            if row + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

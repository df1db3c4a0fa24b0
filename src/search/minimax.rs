//! Depth-limited minimax with alpha-beta pruning.
//!
//! Scores are from the agent's side:
//! - agent has a winning line: `WIN_SCORE + remaining depth` (faster wins
//!   rank higher)
//! - opponent has a winning line: `-WIN_SCORE - remaining depth` (slower
//!   losses rank higher)
//! - full board or depth exhausted: the static evaluator
//!
//! Children are visited in row-major order with no move ordering. The search
//! works on one scratch board, placing and clearing marks as it descends.

use crate::grid::{detect_winner, Board, Mark};

use super::evaluator::evaluate;
use super::stats::SearchStats;

/// Base score of a decided position.
pub const WIN_SCORE: i64 = 1000;

/// Alpha-beta searcher for one side of a grid game.
#[derive(Debug)]
pub struct AlphaBeta {
    win_length: usize,
    agent: Mark,
    opponent: Mark,
    stats: SearchStats,
}

impl AlphaBeta {
    /// Create a searcher maximizing for `agent`.
    pub fn new(win_length: usize, agent: Mark, opponent: Mark) -> Self {
        debug_assert_ne!(agent, opponent, "agent and opponent need distinct marks");
        Self {
            win_length,
            agent,
            opponent,
            stats: SearchStats::default(),
        }
    }

    /// Counters accumulated since construction.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Minimax value of `board` with a fresh window.
    ///
    /// `maximizing` is true when the agent is to move. `board` is restored
    /// before returning.
    pub fn search(&mut self, board: &mut Board, depth: u32, maximizing: bool) -> i64 {
        self.minimax(board, depth, maximizing, i64::MIN, i64::MAX)
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u32,
        maximizing: bool,
        mut alpha: i64,
        mut beta: i64,
    ) -> i64 {
        self.stats.nodes += 1;

        match detect_winner(board, self.win_length) {
            Some(mark) if mark == self.agent => return WIN_SCORE + i64::from(depth),
            Some(_) => return -WIN_SCORE - i64::from(depth),
            None => {}
        }

        if depth == 0 || board.is_full() {
            self.stats.evaluations += 1;
            return evaluate(board, self.win_length, self.agent, self.opponent);
        }

        let (mover, mut best) = if maximizing {
            (self.agent, i64::MIN)
        } else {
            (self.opponent, i64::MAX)
        };

        for pos in board.available_moves() {
            board.place(pos, mover);
            let score = self.minimax(board, depth - 1, !maximizing, alpha, beta);
            board.clear(pos);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

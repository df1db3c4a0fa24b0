//! The computer opponent.
//!
//! One decision:
//! 1. Enumerate empty cells; none means no move.
//! 2. Score each candidate with alpha-beta from a fresh window.
//! 3. Rank by score, descending; equal scores keep row-major order.
//! 4. Draw one uniform value. Above `noise_threshold`, with two or more
//!    candidates, play the second-ranked move. Otherwise play the best.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::GameRng;
use crate::grid::{Board, Mark, Position};

use super::config::SearchConfig;
use super::minimax::AlphaBeta;
use super::stats::SearchStats;

/// A root candidate and its minimax score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    pub position: Position,
    pub score: i64,
}

/// Minimax agent with alpha-beta pruning and occasional second-best play.
#[derive(Clone, Debug, Default)]
pub struct MinimaxAgent {
    config: SearchConfig,
    stats: SearchStats,
}

impl MinimaxAgent {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics from the most recent decision.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Score every available move for `agent` and rank them best first.
    pub fn rank_moves(
        &mut self,
        board: &Board,
        win_length: usize,
        agent: Mark,
        opponent: Mark,
    ) -> Vec<ScoredMove> {
        self.stats.reset();
        self.rank(board, win_length, agent, opponent)
    }

    fn rank(&mut self, board: &Board, win_length: usize, agent: Mark, opponent: Mark) -> Vec<ScoredMove> {
        let depth = self.config.depth_for(board.size());
        let mut searcher = AlphaBeta::new(win_length, agent, opponent);
        let mut scratch = board.clone();
        let mut ranked = Vec::new();

        for position in board.available_moves() {
            scratch.place(position, agent);
            let score = searcher.search(&mut scratch, depth - 1, false);
            scratch.clear(position);

            trace!(%position, score, "root candidate");
            ranked.push(ScoredMove { position, score });
        }

        // Stable sort keeps row-major order among equal scores.
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        let counted = searcher.stats();
        self.stats.nodes += counted.nodes;
        self.stats.cutoffs += counted.cutoffs;
        self.stats.evaluations += counted.evaluations;
        self.stats.candidates = ranked.len() as u32;
        self.stats.depth = depth;

        ranked
    }

    /// Pick a cell for `agent`, or `None` when the board has no empty cell.
    ///
    /// Deterministic for a fixed `rng` state. Always returns an empty,
    /// in-bounds cell.
    pub fn choose_move(
        &mut self,
        board: &Board,
        win_length: usize,
        agent: Mark,
        opponent: Mark,
        rng: &mut GameRng,
    ) -> Option<Position> {
        let start = Instant::now();
        self.stats.reset();

        if board.is_full() {
            debug!("no move available");
            return None;
        }

        let roll = rng.gen_unit();
        let ranked = self.rank(board, win_length, agent, opponent);

        let use_second = roll > self.config.noise_threshold && ranked.len() >= 2;
        let chosen = if use_second { ranked[1] } else { ranked[0] };

        self.stats.noise_applied = use_second;
        self.stats.time_us = start.elapsed().as_micros() as u64;

        debug!(
            mark = %agent,
            position = %chosen.position,
            score = chosen.score,
            second_best = use_second,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            time_us = self.stats.time_us,
            "agent move chosen"
        );

        Some(chosen.position)
    }
}

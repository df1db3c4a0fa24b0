//! Move selection policies.
//!
//! A `MovePolicy` is anything that can pick a cell for one side of a grid
//! game. The match driver takes any policy, so the minimax agent can be
//! swapped for a weaker or scripted opponent.

use crate::core::GameRng;
use crate::grid::{Board, Mark, Position};

use super::agent::MinimaxAgent;

/// Picks a move for `me` on `board`.
pub trait MovePolicy {
    /// Returns an empty in-bounds cell, or `None` when the board is full.
    fn choose_move(
        &mut self,
        board: &Board,
        win_length: usize,
        me: Mark,
        opponent: Mark,
        rng: &mut GameRng,
    ) -> Option<Position>;
}

impl MovePolicy for MinimaxAgent {
    fn choose_move(
        &mut self,
        board: &Board,
        win_length: usize,
        me: Mark,
        opponent: Mark,
        rng: &mut GameRng,
    ) -> Option<Position> {
        MinimaxAgent::choose_move(self, board, win_length, me, opponent, rng)
    }
}

/// Uniformly random empty cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomMover;

impl MovePolicy for RandomMover {
    fn choose_move(
        &mut self,
        board: &Board,
        _win_length: usize,
        _me: Mark,
        _opponent: Mark,
        rng: &mut GameRng,
    ) -> Option<Position> {
        rng.choose(&board.available_moves()).copied()
    }
}

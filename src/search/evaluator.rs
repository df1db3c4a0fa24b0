//! Static position evaluator.
//!
//! Every `win_length` window that fits on the board is scored for the side
//! that owns it alone: a window holding `k` of one side's marks and none of
//! the other's is worth `10^k` to that side. Mixed and empty windows are
//! worth nothing. The result is agent minus opponent.

use crate::grid::{line_windows, Board, Mark};

/// Heuristic value of `board` for `agent`.
#[must_use]
pub fn evaluate(board: &Board, win_length: usize, agent: Mark, opponent: Mark) -> i64 {
    let size = board.size();
    let mut agent_score = 0i64;
    let mut opponent_score = 0i64;

    for (start, dir) in line_windows(size, win_length) {
        let mut agent_count = 0u32;
        let mut opponent_count = 0u32;

        for pos in (0..win_length).filter_map(|i| dir.offset(start, i, size)) {
            match board.at(pos) {
                Some(m) if m == agent => agent_count += 1,
                Some(m) if m == opponent => opponent_count += 1,
                _ => {}
            }
        }

        if agent_count > 0 && opponent_count == 0 {
            agent_score += 10i64.pow(agent_count);
        }
        if opponent_count > 0 && agent_count == 0 {
            opponent_score += 10i64.pow(opponent_count);
        }
    }

    agent_score - opponent_score
}

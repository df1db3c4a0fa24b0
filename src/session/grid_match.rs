//! A single grid match between the player and a move policy.
//!
//! The pure engine trusts its caller; this is the caller. Every move is
//! checked for bounds, occupancy, turn order and a finished match before it
//! reaches the board.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{Amount, ArcadeError, BoardSize, GameRng, MatchConfig, Result};
use crate::grid::{game_result, Board, GameOutcome, Mark, Position};
use crate::search::MovePolicy;

/// One applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub mark: Mark,
    pub position: Position,
}

/// Turn-taking match state. The player always moves first.
///
/// Cloning is cheap: history is a persistent vector, so snapshots for undo
/// or display share structure.
#[derive(Clone, Debug)]
pub struct GridMatch {
    config: MatchConfig,
    board: Board,
    player: Mark,
    to_move: Mark,
    outcome: GameOutcome,
    history: Vector<MoveRecord>,
}

impl GridMatch {
    /// Start a match with the player as `X`.
    pub fn new(size: BoardSize) -> Self {
        Self::with_player_mark(size, Mark::X)
    }

    /// Start a match with the player holding `player`.
    pub fn with_player_mark(size: BoardSize, player: Mark) -> Self {
        let config = size.config();
        info!(
            size = %size,
            win_length = config.win_length,
            entry_cost = %config.entry_cost,
            player = %player,
            "grid match started"
        );
        Self {
            config,
            board: Board::new(size.side()),
            player,
            to_move: player,
            outcome: GameOutcome::Ongoing,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player_mark(&self) -> Mark {
        self.player
    }

    #[must_use]
    pub fn agent_mark(&self) -> Mark {
        self.player.opponent()
    }

    /// Side to move next.
    #[must_use]
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Outcome from the player's point of view.
    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Moves applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Apply the player's move.
    pub fn play(&mut self, row: usize, col: usize) -> Result<GameOutcome> {
        let mark = self.player;
        self.check_move(mark, row, col)?;
        self.apply(mark, Position::new(row, col));
        Ok(self.outcome)
    }

    /// Let `policy` move for the agent side.
    ///
    /// Returns the cell played, or `None` when the policy had no move.
    pub fn respond<P: MovePolicy + ?Sized>(
        &mut self,
        policy: &mut P,
        rng: &mut GameRng,
    ) -> Result<Option<Position>> {
        let mark = self.agent_mark();
        if self.is_finished() {
            return Err(ArcadeError::MatchFinished);
        }
        if self.to_move != mark {
            return Err(ArcadeError::NotYourTurn);
        }

        let Some(pos) = policy.choose_move(&self.board, self.config.win_length, mark, self.player, rng)
        else {
            return Ok(None);
        };

        self.check_move(mark, pos.row, pos.col)?;
        self.apply(mark, pos);
        Ok(Some(pos))
    }

    /// Concede an unfinished match.
    pub fn forfeit(&mut self) -> Result<()> {
        if self.is_finished() {
            return Err(ArcadeError::MatchFinished);
        }
        self.outcome = GameOutcome::Lose;
        info!(moves = self.history.len(), "grid match forfeited");
        Ok(())
    }

    /// Settlement owed to the player for the current outcome.
    #[must_use]
    pub fn payout(&self) -> Amount {
        match self.outcome {
            GameOutcome::Win => self.config.win_payout,
            GameOutcome::Tie => self.config.tie_payout,
            GameOutcome::Lose | GameOutcome::Ongoing => Amount::ZERO,
        }
    }

    fn check_move(&self, mark: Mark, row: usize, col: usize) -> Result<()> {
        let rejection = if self.is_finished() {
            Some(ArcadeError::MatchFinished)
        } else if self.to_move != mark {
            Some(ArcadeError::NotYourTurn)
        } else if !self.board.in_bounds(row, col) {
            Some(ArcadeError::OutOfBounds {
                row,
                col,
                size: self.board.size(),
            })
        } else if self.board.get(row, col).is_some() {
            Some(ArcadeError::CellOccupied { row, col })
        } else {
            None
        };

        match rejection {
            Some(err) => {
                warn!(mark = %mark, row, col, error = %err, "move rejected");
                Err(err)
            }
            None => Ok(()),
        }
    }

    fn apply(&mut self, mark: Mark, position: Position) {
        self.board = self.board.apply_move(position.row, position.col, mark);
        self.history.push_back(MoveRecord { mark, position });
        self.to_move = mark.opponent();
        self.outcome = game_result(&self.board, self.config.win_length, self.player);

        debug!(mark = %mark, %position, outcome = %self.outcome, "move applied");

        if self.outcome.is_terminal() {
            info!(
                outcome = %self.outcome,
                moves = self.history.len(),
                payout = %self.payout(),
                "grid match finished"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{MinimaxAgent, SearchConfig};

    /// Replays a fixed list of cells for the agent.
    struct Scripted(Vec<Position>);

    impl MovePolicy for Scripted {
        fn choose_move(
            &mut self,
            _board: &Board,
            _win_length: usize,
            _me: Mark,
            _opponent: Mark,
            _rng: &mut GameRng,
        ) -> Option<Position> {
            if self.0.is_empty() {
                None
            } else {
                Some(self.0.remove(0))
            }
        }
    }

    #[test]
    fn test_new_match() {
        let game = GridMatch::new(BoardSize::Six);
        assert_eq!(game.board().size(), 6);
        assert_eq!(game.config().win_length, 4);
        assert_eq!(game.to_move(), Mark::X);
        assert_eq!(game.agent_mark(), Mark::O);
        assert_eq!(game.outcome(), GameOutcome::Ongoing);
        assert_eq!(game.payout(), Amount::ZERO);
    }

    #[test]
    fn test_player_win_pays_out() {
        let mut game = GridMatch::new(BoardSize::Three);
        let mut rng = GameRng::new(1);
        let mut agent = Scripted(vec![Position::new(1, 1), Position::new(2, 2)]);

        game.play(0, 0).unwrap();
        game.respond(&mut agent, &mut rng).unwrap();
        game.play(0, 1).unwrap();
        game.respond(&mut agent, &mut rng).unwrap();
        let outcome = game.play(0, 2).unwrap();

        assert_eq!(outcome, GameOutcome::Win);
        assert_eq!(game.payout(), Amount::from_coins(0.2));
        assert_eq!(game.history().len(), 5);
    }

    #[test]
    fn test_rejects_out_of_turn() {
        let mut game = GridMatch::new(BoardSize::Three);
        game.play(0, 0).unwrap();
        assert!(matches!(game.play(1, 1), Err(ArcadeError::NotYourTurn)));
    }

    #[test]
    fn test_rejects_bad_cells() {
        let mut game = GridMatch::new(BoardSize::Three);
        assert!(matches!(
            game.play(3, 0),
            Err(ArcadeError::OutOfBounds { row: 3, col: 0, size: 3 })
        ));

        let mut rng = GameRng::new(1);
        game.play(0, 0).unwrap();
        let mut cheat = Scripted(vec![Position::new(0, 0)]);
        assert!(matches!(
            game.respond(&mut cheat, &mut rng),
            Err(ArcadeError::CellOccupied { row: 0, col: 0 })
        ));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_no_moves_after_finish() {
        let mut game = GridMatch::new(BoardSize::Three);
        game.forfeit().unwrap();
        assert_eq!(game.outcome(), GameOutcome::Lose);
        assert!(matches!(game.play(0, 0), Err(ArcadeError::MatchFinished)));
        assert!(matches!(game.forfeit(), Err(ArcadeError::MatchFinished)));
    }

    #[test]
    fn test_agent_responds_with_legal_move() {
        let mut game = GridMatch::new(BoardSize::Three);
        let mut rng = GameRng::new(99);
        let mut agent = MinimaxAgent::new(SearchConfig::default());

        game.play(1, 1).unwrap();
        let reply = game.respond(&mut agent, &mut rng).unwrap().unwrap();

        assert_ne!(reply, Position::new(1, 1));
        assert_eq!(game.board().at(reply), Some(Mark::O));
        assert_eq!(game.to_move(), Mark::X);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut game = GridMatch::new(BoardSize::Three);
        game.play(0, 0).unwrap();
        let snapshot = game.clone();

        let mut rng = GameRng::new(1);
        game.respond(&mut Scripted(vec![Position::new(2, 2)]), &mut rng).unwrap();

        assert_eq!(snapshot.history().len(), 1);
        assert_eq!(snapshot.board().at(Position::new(2, 2)), None);
        assert_eq!(game.history().len(), 2);
    }
}

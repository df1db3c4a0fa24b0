//! Session layer integration tests: full matches, lottery rounds, chests.

use arcade_core::chests::{open_chest, ChestTier};
use arcade_core::core::{Amount, ArcadeConfig, ArcadeError, BoardSize, GameRng, LotteryConfig};
use arcade_core::grid::{GameOutcome, Mark};
use arcade_core::lottery::{quick_pick, DrawSequence, Line};
use arcade_core::search::{MinimaxAgent, MovePolicy, RandomMover, SearchConfig};
use arcade_core::session::{GridMatch, LotteryRound};

/// Drive a match with `player` choosing the player's cells.
fn run_match(game: &mut GridMatch, player: &mut dyn MovePolicy, agent: &mut dyn MovePolicy, rng: &mut GameRng) {
    while !game.is_finished() {
        if game.to_move() == game.player_mark() {
            let pos = player
                .choose_move(
                    game.board(),
                    game.config().win_length,
                    game.player_mark(),
                    game.agent_mark(),
                    rng,
                )
                .expect("board not full while ongoing");
            game.play(pos.row, pos.col).expect("legal player move");
        } else {
            game.respond(agent, rng)
                .expect("legal agent move")
                .expect("agent had a move");
        }
    }
}

// =============================================================================
// Grid Matches
// =============================================================================

#[test]
fn test_random_player_never_beats_agent() {
    let mut agent = MinimaxAgent::new(SearchConfig::default().without_noise());

    for seed in 0..10 {
        let mut rng = GameRng::new(seed);
        let mut game = GridMatch::new(BoardSize::Three);
        run_match(&mut game, &mut RandomMover, &mut agent, &mut rng);

        assert_ne!(game.outcome(), GameOutcome::Win, "seed {}", seed);
        assert_ne!(game.outcome(), GameOutcome::Ongoing);
        assert_eq!(game.history().len(), game.board().occupied_count());
    }
}

#[test]
fn test_perfect_play_ties_and_pays_tie_stake() {
    let mut player = MinimaxAgent::new(SearchConfig::default().without_noise());
    let mut agent = MinimaxAgent::new(SearchConfig::default().without_noise());
    let mut rng = GameRng::new(5);

    let mut game = GridMatch::new(BoardSize::Three);
    run_match(&mut game, &mut player, &mut agent, &mut rng);

    assert_eq!(game.outcome(), GameOutcome::Tie);
    assert!(game.board().is_full());
    assert_eq!(game.payout(), Amount::from_coins(0.05));
}

#[test]
fn test_agent_can_play_x() {
    let mut rng = GameRng::new(8);
    let mut game = GridMatch::with_player_mark(BoardSize::Three, Mark::O);
    assert_eq!(game.agent_mark(), Mark::X);

    // Player moves first regardless of mark.
    assert!(matches!(
        game.respond(&mut RandomMover, &mut rng),
        Err(ArcadeError::NotYourTurn)
    ));

    game.play(1, 1).unwrap();
    let reply = game.respond(&mut RandomMover, &mut rng).unwrap();
    assert!(reply.is_some());
    assert_eq!(game.board().count(Mark::O), 1);
    assert_eq!(game.board().count(Mark::X), 1);
}

#[test]
fn test_larger_boards_use_their_stakes() {
    let mut rng = GameRng::new(21);
    let mut agent = MinimaxAgent::new(SearchConfig::default().with_fixed_depth(1));

    let mut game = GridMatch::new(BoardSize::Nine);
    assert_eq!(game.config().entry_cost, Amount::from_coins(1.0));

    game.play(4, 4).unwrap();
    game.respond(&mut agent, &mut rng).unwrap();
    assert_eq!(game.history().len(), 2);

    game.forfeit().unwrap();
    assert_eq!(game.outcome(), GameOutcome::Lose);
    assert_eq!(game.payout(), Amount::ZERO);
}

// =============================================================================
// Lottery Rounds
// =============================================================================

#[test]
fn test_round_reproducible_from_seed() {
    let config = LotteryConfig::default();
    let play = |seed: u64| {
        let mut rng = GameRng::new(seed);
        let picks = quick_pick(&mut rng);
        let round = LotteryRound::new(&picks, Amount::from_coins(1.0), &config).unwrap();
        round.play(&mut rng)
    };

    assert_eq!(play(31), play(31));
}

#[test]
fn test_round_payout_matches_lines() {
    let config = LotteryConfig::default();
    let mut rng = GameRng::new(4);

    for _ in 0..20 {
        let picks = quick_pick(&mut rng);
        let round = LotteryRound::new(&picks, Amount::from_coins(0.1), &config).unwrap();
        let outcome = round.play(&mut rng);

        assert_eq!(outcome.lines.len() as u32, outcome.lines_won);
        assert_eq!(outcome.payout, config.reward(Amount::from_coins(0.1), outcome.lines_won));
    }
}

#[test]
fn test_round_settles_external_draw() {
    let picks: Vec<u8> = (50..74).collect();
    let round = LotteryRound::new(&picks, Amount::from_coins(5.0), &LotteryConfig::default()).unwrap();

    // Column 0 holds picks 0, 5, 10, 14 and 19.
    let column: Vec<u8> = [0usize, 5, 10, 14, 19].iter().map(|&i| picks[i]).collect();
    let outcome = round.settle(DrawSequence::from_numbers(column));

    assert_eq!(outcome.lines.as_slice(), &[Line::Column(0)]);
    assert_eq!(outcome.payout, Amount::from_coins(25.0));
}

#[test]
fn test_custom_bet_tiers() {
    let config = LotteryConfig::default().with_bet_tiers(vec![Amount::from_coins(2.0)]);
    let picks: Vec<u8> = (0..24).collect();

    assert!(LotteryRound::new(&picks, Amount::from_coins(2.0), &config).is_ok());
    assert!(matches!(
        LotteryRound::new(&picks, Amount::from_coins(1.0), &config),
        Err(ArcadeError::UnsupportedBet(_))
    ));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_from_partial_json() {
    let config = ArcadeConfig::from_json(r#"{ "search": { "small_depth": 6 } }"#).unwrap();

    assert_eq!(config.search.small_depth, 6);
    assert_eq!(config.search.medium_depth, SearchConfig::default().medium_depth);
    assert_eq!(config.lottery, LotteryConfig::default());
}

#[test]
fn test_config_round_trip() {
    let config = ArcadeConfig {
        lottery: LotteryConfig::default().with_multiplier(3),
        search: SearchConfig::default().without_noise(),
    };
    let parsed = ArcadeConfig::from_json(&config.to_json().unwrap()).unwrap();

    assert_eq!(parsed.lottery.multiplier, 3);
    assert_eq!(parsed.search, config.search);
}

#[test]
fn test_config_rejects_bad_json() {
    assert!(matches!(ArcadeConfig::from_json("{ nope"), Err(ArcadeError::Config(_))));
}

// =============================================================================
// Chests
// =============================================================================

#[test]
fn test_chest_ids_and_outcomes() {
    let mut rng = GameRng::new(13);

    for id in 1..=3 {
        let tier = ChestTier::from_id(id).unwrap();
        let outcome = open_chest(tier, &mut rng);

        assert_eq!(outcome.tier.id(), id);
        assert!(outcome.amount == tier.win_payout() || outcome.amount == tier.lose_payout());
    }
    assert!(matches!(ChestTier::from_id(9), Err(ArcadeError::UnknownChest(9))));
}

#[test]
fn test_chest_sequence_reproducible() {
    let open_all = |seed: u64| {
        let mut rng = GameRng::new(seed);
        (0..30)
            .map(|_| open_chest(ChestTier::Diamond, &mut rng).win)
            .collect::<Vec<_>>()
    };
    assert_eq!(open_all(99), open_all(99));
}

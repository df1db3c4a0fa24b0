//! Bingo-style lottery engine.
//!
//! A round:
//! 1. The player picks 24 distinct numbers from `0..100`; `LotteryCard::build`
//!    lays them out around a free center.
//! 2. `generate_draw_sequence` draws 40 distinct numbers.
//! 3. `count_complete_lines` counts rows, columns and diagonals whose five
//!    cells are all matched.
//! 4. `compute_reward` pays `bet * 5` per line.
//!
//! ```
//! use arcade_core::core::{Amount, GameRng};
//! use arcade_core::lottery::{
//!     compute_reward, count_complete_lines, generate_draw_sequence, quick_pick, LotteryCard,
//! };
//!
//! let mut rng = GameRng::new(42);
//! let card = LotteryCard::build(&quick_pick(&mut rng)).unwrap();
//! let draws = generate_draw_sequence(&mut rng);
//!
//! let lines = count_complete_lines(&card, &draws.drawn_set());
//! let reward = compute_reward(Amount::from_coins(1.0), lines);
//! assert_eq!(reward, Amount::from_coins(5.0 * lines as f64));
//! ```

pub mod card;
pub mod draw;
pub mod lines;
pub mod reward;

pub use card::{CardCell, LotteryCard, CARD_CELLS, CENTER_INDEX, GRID_SIZE, PICK_COUNT};
pub use draw::{
    generate_draw_sequence, quick_pick, DrawReveal, DrawSequence, DrawnSet, RevealStep, DRAW_COUNT,
    NUMBER_POOL,
};
pub use lines::{completed_lines, count_complete_lines, Line};
pub use reward::{compute_reward, WIN_MULTIPLIER};

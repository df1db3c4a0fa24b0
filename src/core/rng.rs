//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Serializable**: O(1) state capture and restore
//! - **Bounded sampling**: Distinct numbers via partial Fisher-Yates, never
//!   rejection sampling
//!
//! Every random decision in the crate (agent noise, lottery draws, quick
//! picks, chest openings) goes through a `GameRng`, so a round can be
//! replayed exactly from its seed.
//!
//! ```
//! use arcade_core::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let drawn = rng.sample_distinct(100, 40);
//! assert_eq!(drawn.len(), 40);
//!
//! let mut again = GameRng::new(42);
//! assert_eq!(again.sample_distinct(100, 40), drawn);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG shared by all game cores.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a uniform float in `[0, 1)`.
    pub fn gen_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Draw `count` distinct values from `0..pool`, in draw order.
    ///
    /// Runs a partial Fisher-Yates shuffle: exactly `count` swaps, uniform
    /// over all ordered selections.
    ///
    /// # Panics
    ///
    /// Panics if `count > pool`.
    pub fn sample_distinct(&mut self, pool: usize, count: usize) -> Vec<usize> {
        assert!(count <= pool, "cannot draw {} distinct values from {}", count, pool);

        let mut values: Vec<usize> = (0..pool).collect();
        for i in 0..count {
            let j = self.inner.gen_range(i..pool);
            values.swap(i, j);
        }
        values.truncate(count);
        values
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

//! Deterministic random number generation for row injection.
//!
//! ## Usage
//!
//! ```
//! use clear_cell::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut replay = GameRng::new(42);
//!
//! // Same seed, same sequence
//! assert_eq!(rng.gen_range_usize(0..100), replay.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded random source owned by a board engine.
///
/// Uses ChaCha8 so a given seed produces the same rows on every platform.
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

    /// Create an RNG seeded from the operating system, for real play.
    ///
    /// The chosen seed is still recorded so a session can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this generator was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

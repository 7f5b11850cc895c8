//! Deterministic random number generation for puzzle setup.
//!
//! A session owns one `GameRng` and forks a fresh stream for every game, so a
//! seeded session replays the same sequence of puzzles.
//!
//! ```
//! use counterfeit_coin::core::GameRng;
//!
//! let mut session = GameRng::new(42);
//! let mut first = session.fork();
//! let mut second = session.fork();
//!
//! let mut replay = GameRng::new(42);
//! assert_eq!(first.gen_below(100), replay.fork().gen_below(100));
//! assert_eq!(second.gen_below(100), replay.fork().gen_below(100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG with forking.
///
/// Uses ChaCha8 so the same seed yields the same puzzles on every platform.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Uniform value in `0..bound`. `bound` must be non-zero.
    pub fn gen_below(&mut self, bound: u32) -> u32 {
        self.inner.gen_range(0..bound)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}

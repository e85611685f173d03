//! Deterministic random number generation for baseline agents.
//!
//! Search itself never draws random numbers. The RNG only drives agents
//! used as opponents and sparring partners, so that every match replays
//! identically from its seed.
//!
//! ```
//! use rust_adversarial::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut fork = rng.fork();
//!
//! // Forks are deterministic too
//! let mut rng2 = GameRng::new(42);
//! let mut fork2 = rng2.fork();
//! let moves = [0, 1, 2, 3, 4, 5, 6, 7, 8];
//! assert_eq!(fork.choose(&moves), fork2.choose(&moves));
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking.
///
/// Uses ChaCha8 for speed while keeping sequences reproducible across
/// platforms.
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

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

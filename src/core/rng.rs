//! Deterministic random number generation for deck shuffles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Forkable**: Each reset draws from an independent branch
//!
//! ```
//! use train_your_memory::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut next_deal = rng.fork();
//!
//! let mut a: Vec<u32> = (0..16).collect();
//! let mut b = a.clone();
//! rng.shuffle(&mut a);
//! next_deal.shuffle(&mut b);
//!
//! // Independent branches, same elements
//! assert_ne!(a, b);
//! a.sort();
//! b.sort();
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Golden-ratio increment used to spread fork seeds.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic RNG with forking.
///
/// Uses ChaCha8 for speed while keeping shuffles statistically uniform.
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

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(FORK_STRIDE));
        Self::new(fork_seed)
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

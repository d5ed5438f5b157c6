//! Injectable randomness for collectible placement and ghost wandering.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The randomness the simulation consumes.
///
/// The game never reaches for a global RNG; everything random flows through this
/// trait so tests can replay an exact sequence of decisions.
pub trait RandomSource {
    /// Returns `true` with probability `p` (`0.0..=1.0`).
    fn chance(&mut self, p: f64) -> bool;

    /// Picks an index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;
}

/// The default source, backed by a small fast non-cryptographic RNG.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: SmallRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Seeds from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Uses `seed` when given, OS entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map(Self::new).unwrap_or_else(Self::from_entropy)
    }
}

impl RandomSource for SeededRandom {
    fn chance(&mut self, p: f64) -> bool {
        self.rng.random_bool(p.clamp(0.0, 1.0))
    }

    fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

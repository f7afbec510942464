//! Injected random source.

use crate::cli::types::Seed;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Seeded random number generator for reproducible matchmaking and outcomes.
///
/// When a seed is provided the same seed always produces the same opponent
/// and winner. Without a seed, uses system entropy.
pub struct GameRng {
    rng: StdRng,
    /// The seed used to initialize this RNG (if deterministic)
    pub seed: Option<u64>,
}

impl GameRng {
    /// Create a new GameRng with a specific seed for deterministic behavior
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create a new GameRng with random entropy (non-deterministic)
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    pub fn from_option(seed: Option<Seed>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed.as_u64()),
            None => Self::from_entropy(),
        }
    }

    /// Uniform draw in [0.0, 1.0)
    pub fn roll(&mut self) -> f64 {
        self.rng.gen()
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

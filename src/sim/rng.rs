//! Seeded randomness for generation and spawning

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::lerp_range;

/// Session RNG. Same seed, same platforms and bricks.
#[derive(Debug, Clone)]
pub struct SimRng {
    seed: u64,
    rng: Pcg32,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform sample in [0, 1)
    pub fn unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Uniform sample between `min` and `max`. A degenerate range yields `min`.
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        lerp_range(min, max, self.unit())
    }

    /// Fair coin
    pub fn coin(&mut self) -> bool {
        self.unit() < 0.5
    }
}

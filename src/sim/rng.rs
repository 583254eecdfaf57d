//! Seeded random source shared by every game
//!
//! One stream per session keeps a whole run reproducible from its seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Deterministic RNG wrapper (serializable so a session snapshot resumes the stream)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRng {
    seed: u64,
    rng: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this stream was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Random integer between `min` and `max`, both included.
    ///
    /// Reversed bounds are swapped rather than rejected.
    pub fn value(&mut self, min: i32, max: i32) -> i32 {
        let (lo, hi) = if min > max { (max, min) } else { (min, max) };
        self.rng.random_range(lo..=hi)
    }

    /// `value` converted to f32 for position/velocity sampling
    #[inline]
    pub fn value_f32(&mut self, min: i32, max: i32) -> f32 {
        self.value(min, max) as f32
    }

    /// Uniform index in `0..len`
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.rng.random_range(0..len)
    }
}

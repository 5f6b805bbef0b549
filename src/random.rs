/// Random source used by the spawn scheduler.
///
/// The game only ever needs uniform integers from an inclusive range, so the
/// capability is kept that narrow; tests substitute a scripted source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomRange {
    /// Uniform draw from `min..=max`.
    fn range_i32(&mut self, min: i32, max: i32) -> i32;

    /// Uniform draw from `min..=max`.
    fn range_u64(&mut self, min: u64, max: u64) -> u64;
}

/// Production source: one generator, seeded once at start-up.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomRange for SeededRandom {
    fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }

    fn range_u64(&mut self, min: u64, max: u64) -> u64 {
        self.rng.gen_range(min..=max)
    }
}

//! `rand`-backed random sources for production use.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::ports::RandomSource;

/// Reproducible source seeded once; the same seed replays the same draws.
#[derive(Debug, Clone)]
pub struct SeededRandomSource {
    rng: StdRng,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn uniform_inclusive(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..=high)
    }
}

/// Source backed by the thread-local generator.
#[derive(Debug, Clone, Default)]
pub struct ThreadRandomSource {
    rng: ThreadRng,
}

impl ThreadRandomSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RandomSource for ThreadRandomSource {
    fn uniform_inclusive(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..=high)
    }
}

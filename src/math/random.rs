//! Uniform random sources driving sampling and split decisions

use rand::{Rng, SeedableRng, rngs::StdRng};

/// A source of uniform draws in `[0, 1)`
///
/// Every stochastic decision in the generator goes through this trait so a
/// scripted source can replace the seeded generator in tests.
pub trait RandomSource {
    /// Draw the next uniform value in `[0, 1)`
    fn uniform(&mut self) -> f64;
}

/// Seeded random selector for reproducible stochastic choices
///
/// A single selector is created per process and shared by every run, so
/// consecutive runs continue one evolving random stream.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for RandomSelector {
    fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

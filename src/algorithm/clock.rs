//! Wall clock abstraction used to time the pause between runs

use std::time::Instant;

/// Source of the current instant
pub trait Clock {
    /// The current instant
    fn now(&self) -> Instant;
}

/// Monotonic system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

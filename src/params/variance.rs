//! Per-parameter variance dials

use crate::io::configuration::{DEFAULT_VARIANCE, VARIANCE_MAX};
use serde::{Deserialize, Serialize};

/// How strongly each randomizable parameter is perturbed per run
///
/// Each dial runs from 0 (use the base value unchanged) to 10 (the sampling
/// width equals the base value itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variance {
    /// Dial for the initial split interval
    pub split_dt_start: i32,
    /// Dial for the split interval multiplier
    pub split_dt_factor: i32,
    /// Dial for the split interval lower bound
    pub split_dt_min: i32,
    /// Dial for the split interval upper bound
    pub split_dt_max: i32,
    /// Dial for the initial split rate
    pub split_rate_start: i32,
    /// Dial for the split rate multiplier
    pub split_rate_factor: i32,
}

impl Default for Variance {
    fn default() -> Self {
        Self::uniform(DEFAULT_VARIANCE)
    }
}

impl Variance {
    /// Every dial set to the same value
    pub const fn uniform(dial: i32) -> Self {
        Self {
            split_dt_start: dial,
            split_dt_factor: dial,
            split_dt_min: dial,
            split_dt_max: dial,
            split_rate_start: dial,
            split_rate_factor: dial,
        }
    }

    /// Clamp each dial into `[0, 10]`
    pub fn validate(&mut self) {
        for dial in [
            &mut self.split_dt_start,
            &mut self.split_dt_factor,
            &mut self.split_dt_min,
            &mut self.split_dt_max,
            &mut self.split_rate_start,
            &mut self.split_rate_factor,
        ] {
            *dial = (*dial).clamp(0, VARIANCE_MAX);
        }
    }

    /// Consume and return the validated dials
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.validate();
        self
    }
}

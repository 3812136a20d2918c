//! Per-run parameter randomization

use crate::math::probability::sample_triangular;
use crate::math::random::RandomSource;
use crate::params::settings::BaseSettings;
use crate::params::variance::Variance;
use std::f64::consts::TAU;

/// Scale from a variance dial to a fraction of the base value
const DIAL_SCALE: f64 = 0.1;

/// Randomized parameters for a single run
///
/// Built once per run and shared read-only by every ant of that run.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingSettings {
    /// Base settings with the six variable fields replaced by samples
    pub params: BaseSettings,
    /// Phase offset applied to every trail color in this run
    pub color_start: f64,
}

impl WorkingSettings {
    /// Use base settings unchanged with no color offset
    pub fn fixed(base: &BaseSettings) -> Self {
        Self {
            params: base.clone().validated(),
            color_start: 0.0,
        }
    }
}

/// Derive the working settings for the next run
///
/// Draws seven uniforms in a fixed order: the six variable fields followed by
/// the color phase. The maximum split interval is sampled as an offset above
/// the sampled minimum, so `split_dt_max >= split_dt_min` holds before
/// validation even runs.
pub fn sample(
    base: &BaseSettings,
    variance: &Variance,
    random: &mut impl RandomSource,
) -> WorkingSettings {
    let mut params = base.clone();

    params.split_dt_start = sample_scaled(base.split_dt_start, variance.split_dt_start, random);
    params.split_dt_factor = sample_factor(base.split_dt_factor, variance.split_dt_factor, random);
    params.split_dt_min = sample_scaled(base.split_dt_min, variance.split_dt_min, random);

    let span = (base.split_dt_max - base.split_dt_min).max(0.0);
    params.split_dt_max = params.split_dt_min + sample_scaled(span, variance.split_dt_max, random);

    params.split_rate_start =
        sample_scaled(base.split_rate_start, variance.split_rate_start, random);
    params.split_rate_factor =
        sample_factor(base.split_rate_factor, variance.split_rate_factor, random);

    params.validate();
    let color_start = random.uniform() * TAU / params.color_freq;

    WorkingSettings {
        params,
        color_start,
    }
}

// Width proportional to the value itself
fn sample_scaled(center: f64, dial: i32, random: &mut impl RandomSource) -> f64 {
    let width = center * f64::from(dial) * DIAL_SCALE;
    sample_triangular(center, width, random)
}

// Factors oscillate around 1.0, so the width follows their distance from 1.0
fn sample_factor(center: f64, dial: i32, random: &mut impl RandomSource) -> f64 {
    let width = 2.0 * (center - 1.0).abs() * f64::from(dial) * DIAL_SCALE;
    sample_triangular(center, width, random)
}

//! Sampling laws used for parameter variance and split decisions

use crate::math::random::RandomSource;
use std::f64::consts::FRAC_2_PI;

/// Map a uniform draw onto `[center - width, center + width]`
///
/// Draws below one half fall on the left of `center`, the rest on the right.
/// The law is symmetric, so samples average out at `center`.
pub fn triangular(center: f64, width: f64, u: f64) -> f64 {
    if u < 0.5 {
        width.mul_add(-(2.0 * u).sqrt(), center)
    } else {
        width.mul_add(2.0f64.mul_add(-u, 2.0).sqrt(), center)
    }
}

/// Draw a triangular sample from the given random source
pub fn sample_triangular(center: f64, width: f64, random: &mut impl RandomSource) -> f64 {
    triangular(center, width, random.uniform())
}

/// Probability that an ant splits spontaneously on a given tick
///
/// The arctangent saturates large rates towards certainty while keeping
/// small rates roughly linear.
pub fn split_probability(split_rate: f64) -> f64 {
    (split_rate * 0.25).atan() * FRAC_2_PI
}

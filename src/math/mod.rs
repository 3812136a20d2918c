//! Mathematical utilities for the generator

/// Trail color cycling
pub mod color;
/// Triangular sampling and split probabilities
pub mod probability;
/// Uniform random sources
pub mod random;

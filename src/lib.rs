//! Mondrian-style rectilinear art grown by a colony of grid-walking ants
//!
//! Ants walk straight lines across a canvas, split into pairs at randomized
//! intervals and halt when they run into earlier trails. Each settled colony
//! leaves a block-partitioned image; parameters are then re-randomized around
//! a base configuration and a new run begins.

#![forbid(unsafe_code)]

/// Ant state machine, colony tick and run lifecycle
pub mod algorithm;
/// Input/output surfaces, error handling and configuration constants
pub mod io;
/// Sampling laws, trail colors and random sources
pub mod math;
/// Base settings, variance dials and per-run parameter randomization
pub mod params;
/// Canvas storage and grid headings
pub mod spatial;

pub use io::error::{MondriantError, Result};

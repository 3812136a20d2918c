//! Parameter model
//!
//! Base settings and variance dials are owned by whoever configures the
//! generator; each run derives a fresh [`WorkingSettings`] from them.

/// Per-run randomization
pub mod sampling;
/// Base settings and validation
pub mod settings;
/// Variance dials
pub mod variance;

pub use sampling::{WorkingSettings, sample};
pub use settings::BaseSettings;
pub use variance::Variance;

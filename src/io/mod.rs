//! Input/output surfaces around the simulation core

/// Command-line driver
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Finished-image sinks and PNG export
pub mod image;
/// Versioned settings files
pub mod persistence;
/// Terminal progress display
pub mod progress;
/// Render sinks and animation capture
pub mod visualization;

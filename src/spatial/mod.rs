//! Spatial data structures
//!
//! This module contains the canvas the colony paints onto and the unit
//! headings ants travel along.

/// Pixel grid with background tracking
pub mod canvas;
/// Axis-aligned unit directions
pub mod heading;

pub use canvas::{Canvas, PixelColor};
pub use heading::Heading;

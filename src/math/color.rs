//! Hue cycling for ant trails

use std::f64::consts::PI;

/// Phase offsets of the red, green and blue channels
const CHANNEL_OFFSETS: [f64; 3] = [0.0, 0.67 * PI, 1.33 * PI];

/// Opaque trail color for a given phase
///
/// Each channel follows a sine wave shifted by roughly a third of a turn,
/// so advancing the phase walks smoothly around the hue circle.
pub fn trail_color(phase: f64) -> [u8; 4] {
    let [r, g, b] =
        CHANNEL_OFFSETS.map(|offset| (phase + offset).sin().mul_add(127.0, 128.0) as u8);
    [r, g, b, u8::MAX]
}

/// Phase along the hue cycle after `steps` steps
pub fn trail_phase(color_freq: f64, steps: f64, color_start: f64) -> f64 {
    color_freq * (steps + color_start)
}

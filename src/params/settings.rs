//! User-configured base parameters and their validation

use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_COLOR_FREQ, DEFAULT_END_PAUSE_TIME, DEFAULT_PADDING,
    DEFAULT_SPEED, DEFAULT_SPLIT_DT_FACTOR, DEFAULT_SPLIT_DT_MAX, DEFAULT_SPLIT_DT_MIN,
    DEFAULT_SPLIT_DT_START, DEFAULT_SPLIT_RATE_FACTOR, DEFAULT_SPLIT_RATE_START, PADDING_MAX,
    PARAMETER_EPSILON, SPEED_MAX, SPEED_MIN,
};
use crate::spatial::PixelColor;
use serde::{Deserialize, Serialize};

/// Canonical parameters a run is randomized around
///
/// Grid dimensions belong to whoever drives the generator and are never
/// persisted. Everything else round-trips through the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseSettings {
    /// Canvas width in cells
    #[serde(skip)]
    pub width: usize,
    /// Canvas height in cells
    #[serde(skip)]
    pub height: usize,
    /// Color of unpainted cells
    pub background: PixelColor,
    /// Simulation ticks per advance call
    pub speed: u32,
    /// How many cells ahead an ant checks for obstacles
    pub padding: u32,
    /// Initial interval between forced splits
    pub split_dt_start: f64,
    /// Multiplier applied to the split interval after each split
    pub split_dt_factor: f64,
    /// Lower bound of the range in which the split interval keeps drifting
    pub split_dt_min: f64,
    /// Upper bound of the range in which the split interval keeps drifting
    pub split_dt_max: f64,
    /// Initial rate of spontaneous splits
    pub split_rate_start: f64,
    /// Multiplier applied to the split rate after each split
    pub split_rate_factor: f64,
    /// Seconds to hold a finished image before starting the next run
    pub end_pause_time: f64,
    /// Hue cycling speed per step travelled
    pub color_freq: f64,
    /// Whether trails are hue-cycled (otherwise white)
    pub colored_trails: bool,
}

impl Default for BaseSettings {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            background: PixelColor::from_array(DEFAULT_BACKGROUND),
            speed: DEFAULT_SPEED,
            padding: DEFAULT_PADDING,
            split_dt_start: DEFAULT_SPLIT_DT_START,
            split_dt_factor: DEFAULT_SPLIT_DT_FACTOR,
            split_dt_min: DEFAULT_SPLIT_DT_MIN,
            split_dt_max: DEFAULT_SPLIT_DT_MAX,
            split_rate_start: DEFAULT_SPLIT_RATE_START,
            split_rate_factor: DEFAULT_SPLIT_RATE_FACTOR,
            end_pause_time: DEFAULT_END_PAUSE_TIME,
            color_freq: DEFAULT_COLOR_FREQ,
            colored_trails: true,
        }
    }
}

impl BaseSettings {
    /// Defaults for a canvas of the given size
    pub fn with_dimensions(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Clamp every numeric field into its domain
    ///
    /// This is the single place where parameter invariants are enforced. It
    /// never rejects input: out-of-range values are pulled to the nearest
    /// permitted value and NaN collapses onto the lower bound. Applying it
    /// twice changes nothing.
    pub fn validate(&mut self) {
        self.speed = self.speed.clamp(SPEED_MIN, SPEED_MAX);
        self.padding = self.padding.min(PADDING_MAX);
        self.split_dt_start = self.split_dt_start.max(PARAMETER_EPSILON);
        self.split_dt_factor = self.split_dt_factor.max(PARAMETER_EPSILON);
        self.split_dt_min = self.split_dt_min.max(PARAMETER_EPSILON);
        self.split_dt_max = self.split_dt_max.max(self.split_dt_min);
        self.split_dt_start = self
            .split_dt_start
            .max(self.split_dt_min)
            .min(self.split_dt_max);
        self.split_rate_start = self.split_rate_start.max(PARAMETER_EPSILON);
        self.split_rate_factor = self.split_rate_factor.max(PARAMETER_EPSILON);
        self.end_pause_time = self.end_pause_time.max(0.0);
        self.color_freq = self.color_freq.max(PARAMETER_EPSILON);
    }

    /// Consume and return the validated settings
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.validate();
        self
    }
}

//! Generator constants and runtime configuration defaults

use std::time::Duration;

// Parameter domains enforced by validation
/// Smallest permitted number of ticks per advance
pub const SPEED_MIN: u32 = 1;
/// Largest permitted number of ticks per advance
pub const SPEED_MAX: u32 = 11;
/// Largest permitted lookahead distance in cells
pub const PADDING_MAX: u32 = 10;
/// Floor applied to rates, factors and interval bounds
pub const PARAMETER_EPSILON: f64 = 0.001;
/// Largest variance dial setting
pub const VARIANCE_MAX: i32 = 10;

// Base settings defaults
/// Default ticks per advance
pub const DEFAULT_SPEED: u32 = 6;
/// Default lookahead distance in cells
pub const DEFAULT_PADDING: u32 = 1;
/// Default initial interval between forced splits
pub const DEFAULT_SPLIT_DT_START: f64 = 8.0;
/// Default multiplier applied to the split interval after each split
pub const DEFAULT_SPLIT_DT_FACTOR: f64 = 1.03;
/// Default lower bound of the drifting split interval
pub const DEFAULT_SPLIT_DT_MIN: f64 = 2.0;
/// Default upper bound of the drifting split interval
pub const DEFAULT_SPLIT_DT_MAX: f64 = 64.0;
/// Default initial random split rate
pub const DEFAULT_SPLIT_RATE_START: f64 = 1.0;
/// Default multiplier applied to the split rate after each split
pub const DEFAULT_SPLIT_RATE_FACTOR: f64 = 0.96;
/// Default pause after a run settles, in seconds
pub const DEFAULT_END_PAUSE_TIME: f64 = 5.0;
/// Default hue cycling speed per step travelled
pub const DEFAULT_COLOR_FREQ: f64 = 0.005;
/// Default background (opaque black)
pub const DEFAULT_BACKGROUND: [u8; 4] = [0, 0, 0, 255];
/// Default variance dial setting
pub const DEFAULT_VARIANCE: i32 = 10;

// Canvas defaults for the command line
/// Default canvas width in pixels
pub const DEFAULT_WIDTH: usize = 640;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: usize = 640;
// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Default number of runs the command line generates
pub const DEFAULT_RUNS: usize = 1;
/// Output images are named by run index modulo this cycle
pub const IMAGE_INDEX_CYCLE: usize = 10;
/// Interval between advance calls while a run is paused
pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);

// Persistence
/// Version tag written into settings files
pub const SETTINGS_VERSION: u32 = 1;

// Animation capture
/// Default number of advance calls between captured frames
pub const DEFAULT_FRAME_STRIDE: usize = 10;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// How many frame delays the final frame of an animation is held for
pub const FINAL_FRAME_HOLD: u32 = 25;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Advance calls between refreshes of the per-run status line
pub const PROGRESS_REFRESH_FRAMES: usize = 30;

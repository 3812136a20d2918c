//! Command-line driver that runs the generator headless and writes each
//! finished run as a PNG

use crate::algorithm::clock::SystemClock;
use crate::algorithm::executor::{RunController, RunPhase};
use crate::io::configuration::{
    DEFAULT_FRAME_STRIDE, DEFAULT_HEIGHT, DEFAULT_RUNS, DEFAULT_WIDTH, FRAME_INTERVAL,
    IMAGE_INDEX_CYCLE, MAX_GRID_DIMENSION, PROGRESS_REFRESH_FRAMES,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::PngSink;
use crate::io::persistence::SettingsStore;
use crate::io::progress::ProgressManager;
use crate::io::visualization::FrameCapture;
use crate::math::random::RandomSelector;
use crate::params::{BaseSettings, Variance};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "mondriant")]
#[command(
    author,
    version,
    about = "Grow Mondrian-style rectilinear art with a colony of splitting ants"
)]
/// Command-line arguments for the generator
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory finished images are written to
    #[arg(value_name = "OUTPUT_DIR", default_value = "mondriant")]
    pub output: PathBuf,

    /// Canvas width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Number of runs to generate
    ///
    /// Images are named by run index modulo 10 (0.png to 9.png), so past ten
    /// runs older files are overwritten.
    #[arg(short, long, default_value_t = DEFAULT_RUNS)]
    pub runs: usize,

    /// Random seed (drawn at startup when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Settings file holding base settings and variance dials
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the effective settings back to the settings file
    #[arg(long, requires = "config")]
    pub save_config: bool,

    /// Override the pause between runs, in seconds
    #[arg(short, long)]
    pub pause: Option<f64>,

    /// Paint white trails instead of hue-cycled ones
    #[arg(long)]
    pub white: bool,

    /// Also record each run as an animated GIF
    #[arg(short, long)]
    pub animate: bool,

    /// Advance calls between captured animation frames
    #[arg(long, default_value_t = DEFAULT_FRAME_STRIDE)]
    pub frame_stride: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check the canvas dimensions and run count
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or above the safety limit, or
    /// if no runs were requested
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        if self.runs == 0 {
            return Err(invalid_parameter("runs", &self.runs, &"must be at least 1"));
        }
        Ok(())
    }

    /// Load settings from the configured file (or defaults) and apply overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file exists but cannot be loaded
    pub fn resolve_settings(&self) -> Result<(BaseSettings, Variance)> {
        let (mut base, variance) = match &self.config {
            Some(path) => SettingsStore::new(path).load()?,
            None => (BaseSettings::default(), Variance::default()),
        };

        if let Some(pause) = self.pause {
            base.end_pause_time = pause;
        }
        if self.white {
            base.colored_trails = false;
        }

        Ok((base.validated(), variance))
    }
}

/// Drives consecutive runs and writes their images
pub struct Generator {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl Generator {
    /// Create a generator for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let runs = cli.runs;
        let progress_manager = cli
            .should_show_progress()
            .then(|| ProgressManager::new(runs));

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate the requested number of runs
    ///
    /// Returns as soon as the last run has settled and been written; the pause
    /// only separates runs.
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, settings handling or
    /// animation export fails
    pub fn process(&mut self) -> Result<()> {
        self.cli.validate()?;
        let (base, variance) = self.cli.resolve_settings()?;

        if self.cli.save_config
            && let Some(path) = &self.cli.config
        {
            SettingsStore::new(path).save(&base, &variance)?;
        }

        if self.cli.runs > IMAGE_INDEX_CYCLE {
            warn!(
                runs = self.cli.runs,
                kept = IMAGE_INDEX_CYCLE,
                "Image names wrap around; earlier runs will be overwritten"
            );
        }

        let seed = self.cli.seed.unwrap_or_else(rand::random);
        info!(
            seed,
            width = self.cli.width,
            height = self.cli.height,
            runs = self.cli.runs,
            "Starting generator"
        );

        let mut controller = RunController::new(
            self.cli.width,
            self.cli.height,
            base,
            variance,
            RandomSelector::new(seed),
            SystemClock,
        );
        let mut png_sink = PngSink::new(&self.cli.output);
        let mut capture = self
            .cli
            .animate
            .then(|| FrameCapture::new(self.cli.frame_stride));

        if let Some(ref pm) = self.progress_manager {
            pm.start_run(0);
        }
        let mut run_start = Instant::now();
        let mut frames_since_refresh = 0;

        while controller.runs_completed() < self.cli.runs {
            let report = controller.advance(&mut png_sink, &mut capture);

            if let Some(ref mut frames) = capture {
                frames.track_run(&report, &self.cli.output)?;
            }

            if let Some(index) = report.emitted {
                if let Some(ref pm) = self.progress_manager {
                    pm.complete_run(index, run_start.elapsed());
                }
            }

            if report.reseeded {
                run_start = Instant::now();
                frames_since_refresh = 0;
                if let Some(ref pm) = self.progress_manager {
                    pm.start_run(controller.runs_completed());
                }
            }

            match report.phase {
                RunPhase::Running => {
                    frames_since_refresh += 1;
                    if frames_since_refresh >= PROGRESS_REFRESH_FRAMES
                        && let Some(ref pm) = self.progress_manager
                    {
                        frames_since_refresh = 0;
                        let canvas = controller.canvas();
                        pm.update_run(
                            controller.time(),
                            controller.colony().len(),
                            canvas.painted_cells(),
                            canvas.cell_count(),
                        );
                    }
                }
                RunPhase::Settled | RunPhase::Paused => std::thread::sleep(FRAME_INTERVAL),
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        info!(
            emitted = png_sink.written().len(),
            files = png_sink.written().len().min(IMAGE_INDEX_CYCLE),
            output = %self.cli.output.display(),
            "Generation finished"
        );

        Ok(())
    }
}

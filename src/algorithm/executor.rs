//! Run lifecycle: seed a colony, tick it until it settles, hold the finished
//! image for a pause, then re-randomize and start over

use crate::algorithm::ant::Ant;
use crate::algorithm::clock::Clock;
use crate::algorithm::colony::Colony;
use crate::io::configuration::IMAGE_INDEX_CYCLE;
use crate::io::image::ImageSink;
use crate::io::visualization::RenderSink;
use crate::math::random::RandomSource;
use crate::params::{BaseSettings, Variance, WorkingSettings, sample};
use crate::spatial::{Canvas, Heading};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Lifecycle phase observed after an advance call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Ants are still walking
    Running,
    /// The colony emptied during the last advance call and the image was emitted
    Settled,
    /// The finished image is being held until the pause elapses
    Paused,
}

/// What happened during one advance call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceReport {
    /// Phase after the call
    pub phase: RunPhase,
    /// Simulation ticks executed
    pub ticks: u32,
    /// Cyclic index of the image emitted during this call, if any
    pub emitted: Option<usize>,
    /// Whether a new run was seeded during this call
    pub reseeded: bool,
}

/// Orchestrates consecutive generation runs on a fixed-size canvas
///
/// The controller exclusively owns the canvas, the colony and the working
/// settings of the current run. It is driven by calling [`advance`] once per
/// external frame; each call executes up to `speed` ticks in strict sequence.
///
/// [`advance`]: RunController::advance
pub struct RunController<R: RandomSource, C: Clock> {
    base: BaseSettings,
    variance: Variance,
    working: Arc<WorkingSettings>,
    canvas: Canvas,
    colony: Colony,
    time: f64,
    runs_completed: usize,
    settled_at: Option<Instant>,
    random: R,
    clock: C,
}

impl<R: RandomSource, C: Clock> RunController<R, C> {
    /// Create a controller and seed its first run
    ///
    /// Grid dimensions come from `width` and `height`, overriding whatever
    /// the supplied settings carry. Both parameter records are validated.
    pub fn new(
        width: usize,
        height: usize,
        base: BaseSettings,
        variance: Variance,
        random: R,
        clock: C,
    ) -> Self {
        let base = BaseSettings {
            width,
            height,
            ..base
        }
        .validated();
        let working = Arc::new(WorkingSettings::fixed(&base));
        let canvas = Canvas::new(width, height, base.background);

        let mut controller = Self {
            base,
            variance: variance.validated(),
            working,
            canvas,
            colony: Colony::new(),
            time: 0.0,
            runs_completed: 0,
            settled_at: None,
            random,
            clock,
        };
        controller.seed();
        controller
    }

    /// Replace the base settings and variance dials
    ///
    /// Both are validated and the controller's grid dimensions are kept. The
    /// change takes effect when the next run is seeded.
    pub fn update_settings(&mut self, base: BaseSettings, variance: Variance) {
        self.base = BaseSettings {
            width: self.base.width,
            height: self.base.height,
            ..base
        }
        .validated();
        self.variance = variance.validated();
    }

    /// Run up to `speed` ticks, then hand the canvas to the render sink
    ///
    /// When the colony empties, the canvas is emitted to the image sink
    /// exactly once and the call ends, so the render sink receives the
    /// finished image. Once the pause after settlement has elapsed a new run
    /// is seeded and the remaining ticks of this call are skipped; settling
    /// and reseeding never happen in the same call. Image sink failures are
    /// logged and otherwise ignored.
    pub fn advance(
        &mut self,
        image_sink: &mut impl ImageSink,
        render_sink: &mut impl RenderSink,
    ) -> AdvanceReport {
        let mut report = AdvanceReport {
            phase: self.phase(),
            ticks: 0,
            emitted: None,
            reseeded: false,
        };

        for _ in 0..self.working.params.speed {
            if self.settled_at.is_none() {
                self.tick();
                report.ticks += 1;
                if self.colony.is_empty() {
                    // The render sink must see the finished image before any reseed
                    report.emitted = Some(self.settle(image_sink));
                    break;
                }
            }

            if self.pause_elapsed() {
                self.seed();
                report.reseeded = true;
                break;
            }
        }

        report.phase = if report.emitted.is_some() {
            RunPhase::Settled
        } else {
            self.phase()
        };

        render_sink.present(
            self.canvas.as_bytes(),
            self.canvas.width(),
            self.canvas.height(),
        );
        report
    }

    /// Current phase, ignoring whether settlement just happened
    pub const fn phase(&self) -> RunPhase {
        if self.settled_at.is_some() {
            RunPhase::Paused
        } else {
            RunPhase::Running
        }
    }

    /// Canvas of the current run
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Live ants of the current run
    pub const fn colony(&self) -> &Colony {
        &self.colony
    }

    /// Ticks elapsed in the current run
    pub const fn time(&self) -> f64 {
        self.time
    }

    /// Randomized parameters of the current run
    pub fn working_settings(&self) -> &WorkingSettings {
        &self.working
    }

    /// Base settings new runs are randomized around
    pub const fn base_settings(&self) -> &BaseSettings {
        &self.base
    }

    /// Variance dials new runs are randomized with
    pub const fn variance(&self) -> &Variance {
        &self.variance
    }

    /// Number of runs that have settled so far
    pub const fn runs_completed(&self) -> usize {
        self.runs_completed
    }

    fn tick(&mut self) {
        let report = self
            .colony
            .tick(self.time, &mut self.canvas, &mut self.random);
        self.time += 1.0;
        if report.overflowed {
            warn!(
                time = self.time,
                cells = self.canvas.cell_count(),
                "Ant count exceeded canvas size; clearing colony"
            );
        }
    }

    fn seed(&mut self) {
        self.working = Arc::new(sample(&self.base, &self.variance, &mut self.random));
        self.canvas.reset(self.working.params.background);
        self.time = 0.0;
        self.settled_at = None;

        let params = &self.working.params;
        debug!(
            split_dt_start = params.split_dt_start,
            split_dt_factor = params.split_dt_factor,
            split_dt_min = params.split_dt_min,
            split_dt_max = params.split_dt_max,
            split_rate_start = params.split_rate_start,
            split_rate_factor = params.split_rate_factor,
            color_start = self.working.color_start,
            "Seeding run"
        );

        let x = (self.canvas.width() / 2) as i32;
        let y = (self.canvas.height() / 2) as i32;
        self.colony = Colony::seeded(Ant::new(
            x,
            y,
            Heading::UP,
            self.time,
            Arc::clone(&self.working),
        ));
    }

    fn settle(&mut self, image_sink: &mut impl ImageSink) -> usize {
        let index = self.runs_completed % IMAGE_INDEX_CYCLE;
        info!(
            run = self.runs_completed,
            index,
            ticks = self.time,
            painted = self.canvas.painted_cells(),
            "Colony settled"
        );

        self.settled_at = Some(self.clock.now());
        self.time = 0.0;
        if let Err(error) = image_sink.emit(
            self.canvas.as_bytes(),
            self.canvas.width(),
            self.canvas.height(),
            index,
        ) {
            warn!(%error, index, "Failed to emit finished image");
        }
        self.runs_completed += 1;
        index
    }

    fn pause_elapsed(&self) -> bool {
        self.settled_at.is_some_and(|settled_at| {
            let elapsed = self.clock.now().saturating_duration_since(settled_at);
            elapsed.as_secs_f64() > self.working.params.end_pause_time
        })
    }
}

//! Single ant state machine
//!
//! An ant walks in a straight line, painting one cell per tick. Once it has
//! taken a couple of steps it may try to split: it turns a quarter and checks
//! both sides. When both sides are open it forks into two ants heading in
//! opposite directions; when only one side is open it simply turns; when
//! neither is, it halts. Movement halts as soon as the next cell, either of
//! its flanking cells or the lookahead path is already painted.

use crate::math::color::{trail_color, trail_phase};
use crate::math::probability::split_probability;
use crate::math::random::RandomSource;
use crate::params::WorkingSettings;
use crate::spatial::{Canvas, Heading, PixelColor};
use std::sync::Arc;

/// Steps an ant must take after creation before it may split
const SPLIT_WARMUP_STEPS: u32 = 1;

/// Result of one ant step
#[derive(Debug, Clone)]
pub enum StepOutcome {
    /// The ant can no longer move and must be removed
    Halt,
    /// The ant advanced one cell and should paint it
    Move,
    /// The ant forked; the payload heads the opposite way from the parent
    Split(Ant),
}

// Where the turn attempt of a split landed
enum SplitAttempt {
    Halt,
    Turned,
    Split(Ant),
}

/// A grid walker with heading, timing and rate state
#[derive(Debug, Clone)]
pub struct Ant {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
    /// Direction of travel
    pub heading: Heading,
    /// Simulation time after which a split is forced
    pub split_t: f64,
    /// Current interval between forced splits
    pub split_dt: f64,
    /// Current rate of spontaneous splits
    pub split_rate: f64,
    /// Steps taken since this ant was created
    pub new_steps: u32,
    /// Steps taken along this lineage since the run started
    pub num_steps: u64,
    /// Splits along this lineage since the run started
    pub num_splits: u64,
    settings: Arc<WorkingSettings>,
}

impl Ant {
    /// Create an ant whose first forced split is due at `time`
    pub fn new(
        x: i32,
        y: i32,
        heading: Heading,
        time: f64,
        settings: Arc<WorkingSettings>,
    ) -> Self {
        Self {
            x,
            y,
            heading,
            split_t: time,
            split_dt: settings.params.split_dt_start,
            split_rate: settings.params.split_rate_start,
            new_steps: 0,
            num_steps: 0,
            num_splits: 0,
            settings,
        }
    }

    /// Working settings shared by the ant's run
    pub fn settings(&self) -> &WorkingSettings {
        &self.settings
    }

    /// Advance the ant by one tick
    ///
    /// Draws at most one uniform value, and only when a split is not already
    /// forced by the deadline. On [`StepOutcome::Split`] the parent stays in
    /// place this tick; the offspring starts at the same cell.
    pub fn step(
        &mut self,
        time: f64,
        canvas: &Canvas,
        random: &mut impl RandomSource,
    ) -> StepOutcome {
        if self.new_steps > SPLIT_WARMUP_STEPS
            && (time > self.split_t || split_probability(self.split_rate) > random.uniform())
        {
            match self.try_split(time, canvas) {
                SplitAttempt::Halt => return StepOutcome::Halt,
                SplitAttempt::Split(offspring) => return StepOutcome::Split(offspring),
                SplitAttempt::Turned => {}
            }
        }
        self.advance(canvas)
    }

    /// Paint the ant's current cell with its trail color
    pub fn draw(&self, canvas: &mut Canvas) {
        let params = &self.settings.params;
        let color = if params.colored_trails {
            let phase = trail_phase(
                params.color_freq,
                self.num_steps as f64,
                self.settings.color_start,
            );
            PixelColor::from_array(trail_color(phase))
        } else {
            PixelColor::WHITE
        };
        canvas.write(self.x, self.y, color);
    }

    /// Check the next `padding` cells along the current heading
    ///
    /// Any painted or off-canvas cell blocks the path.
    pub fn path_blocked(&self, canvas: &Canvas) -> bool {
        let (mut x, mut y) = (self.x, self.y);
        for _ in 0..self.settings.params.padding {
            (x, y) = self.heading.step_from(x, y);
            if !canvas.is_background(x, y) {
                return true;
            }
        }
        false
    }

    fn try_split(&mut self, time: f64, canvas: &Canvas) -> SplitAttempt {
        self.heading = self.heading.rotated();
        if self.path_blocked(canvas) {
            self.heading = self.heading.reversed();
            if self.path_blocked(canvas) {
                return SplitAttempt::Halt;
            }
            return SplitAttempt::Turned;
        }

        self.heading = self.heading.reversed();
        if self.path_blocked(canvas) {
            self.heading = self.heading.reversed();
            return SplitAttempt::Turned;
        }

        let params = &self.settings.params;
        // Short intervals get a bonus of up to two ticks
        self.split_t = time + self.split_dt + 2.0 * (-0.1 * self.split_dt * self.split_dt).exp();
        if (params.split_dt_min..=params.split_dt_max).contains(&self.split_dt) {
            self.split_dt *= params.split_dt_factor;
        }
        self.split_rate *= params.split_rate_factor;
        self.num_splits += 1;
        SplitAttempt::Split(self.offspring())
    }

    // Same cell and timing state, opposite heading, fresh warm-up
    fn offspring(&self) -> Self {
        Self {
            heading: self.heading.reversed(),
            new_steps: 0,
            ..self.clone()
        }
    }

    fn advance(&mut self, canvas: &Canvas) -> StepOutcome {
        self.new_steps += 1;
        self.num_steps += 1;
        (self.x, self.y) = self.heading.step_from(self.x, self.y);

        let [left, right] = self.heading.flanks(self.x, self.y);
        if canvas.is_background(self.x, self.y)
            && canvas.is_background(left.0, left.1)
            && canvas.is_background(right.0, right.1)
            && !self.path_blocked(canvas)
        {
            StepOutcome::Move
        } else {
            StepOutcome::Halt
        }
    }
}

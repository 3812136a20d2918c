//! Terminal progress display for consecutive runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static RUNS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Runs: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

static RUN_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.green} {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Coordinates a bar over all runs and a spinner for the current one
pub struct ProgressManager {
    multi_progress: MultiProgress,
    runs_bar: ProgressBar,
    run_spinner: ProgressBar,
}

impl ProgressManager {
    /// Create progress displays for `total_runs` runs
    pub fn new(total_runs: usize) -> Self {
        let multi_progress = MultiProgress::new();

        let runs_bar = multi_progress.add(ProgressBar::new(total_runs as u64));
        runs_bar.set_style(RUNS_STYLE.clone());

        let run_spinner = multi_progress.add(ProgressBar::new_spinner());
        run_spinner.set_style(RUN_STYLE.clone());
        run_spinner.enable_steady_tick(Duration::from_millis(100));

        Self {
            multi_progress,
            runs_bar,
            run_spinner,
        }
    }

    /// Label the spinner for a newly seeded run
    pub fn start_run(&self, run: usize) {
        self.run_spinner.set_prefix(format!("run {}", run + 1));
        self.run_spinner.set_message("seeding");
    }

    /// Report the state of the running colony
    pub fn update_run(&self, ticks: f64, ants: usize, painted: usize, cells: usize) {
        let coverage = if cells == 0 {
            0.0
        } else {
            painted as f64 * 100.0 / cells as f64
        };
        self.run_spinner.set_message(format!(
            "{ticks:>8} ticks  {ants:>6} ants  {coverage:>5.1}% painted"
        ));
    }

    /// Mark a run as settled and its image written
    pub fn complete_run(&self, image_index: usize, elapsed: Duration) {
        self.runs_bar.inc(1);
        self.run_spinner.set_message(format!(
            "settled in {:.1}s -> image {image_index}",
            elapsed.as_secs_f64()
        ));
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        self.run_spinner.finish_and_clear();
        self.runs_bar.finish_with_message("All runs complete");
        let _ = self.multi_progress.clear();
    }
}

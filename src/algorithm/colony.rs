//! The live set of ants and one synchronized simulation tick

use crate::algorithm::ant::{Ant, StepOutcome};
use crate::math::random::RandomSource;
use crate::spatial::Canvas;

/// Counts gathered during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Ants that moved and painted a cell
    pub moved: usize,
    /// Ants removed after halting
    pub halted: usize,
    /// Ants created by splits
    pub spawned: usize,
    /// Whether the runaway guard cleared the colony
    pub overflowed: bool,
}

/// Ordered sequence of live ants
///
/// The colony is empty exactly when its run has settled.
#[derive(Debug, Clone, Default)]
pub struct Colony {
    ants: Vec<Ant>,
}

impl Colony {
    /// Create an empty colony
    pub const fn new() -> Self {
        Self { ants: Vec::new() }
    }

    /// Create a colony holding a single seed ant
    pub fn seeded(seed: Ant) -> Self {
        Self { ants: vec![seed] }
    }

    /// Number of live ants
    pub fn len(&self) -> usize {
        self.ants.len()
    }

    /// Whether no ants remain
    pub fn is_empty(&self) -> bool {
        self.ants.is_empty()
    }

    /// Live ants in processing order
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// Append an ant to the end of the processing order
    pub fn push(&mut self, ant: Ant) {
        self.ants.push(ant);
    }

    /// Remove every ant
    pub fn clear(&mut self) {
        self.ants.clear();
    }

    /// Step every live ant once, in order
    ///
    /// Elements appended during this pass are visited before the pass ends;
    /// removed elements are not revisited. Survivors are compacted towards the
    /// front as the pass goes, so relative order is preserved. If the pass
    /// leaves more ants than the canvas has cells, the colony is cleared.
    pub fn tick(
        &mut self,
        time: f64,
        canvas: &mut Canvas,
        random: &mut impl RandomSource,
    ) -> TickReport {
        let mut report = TickReport::default();
        let mut read = 0;
        let mut write = 0;

        while let Some(ant) = self.ants.get_mut(read) {
            match ant.step(time, canvas, random) {
                StepOutcome::Halt => report.halted += 1,
                StepOutcome::Move => {
                    ant.draw(canvas);
                    report.moved += 1;
                    self.ants.swap(write, read);
                    write += 1;
                }
                StepOutcome::Split(offspring) => {
                    report.spawned += 1;
                    self.ants.swap(write, read);
                    write += 1;
                    self.ants.push(offspring);
                }
            }
            read += 1;
        }
        self.ants.truncate(write);

        if self.ants.len() > canvas.cell_count() {
            self.ants.clear();
            report.overflowed = true;
        }

        report
    }
}

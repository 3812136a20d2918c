//! Tests for the run lifecycle: seeding, settlement, pausing and reseeding

#[cfg(test)]
mod tests {
    use crate::common::{FrameCounter, ManualClock, RecordingSink, ScriptedSource};
    use mondriant::algorithm::clock::SystemClock;
    use mondriant::algorithm::executor::{RunController, RunPhase};
    use mondriant::io::configuration::IMAGE_INDEX_CYCLE;
    use mondriant::math::random::RandomSelector;
    use mondriant::params::{BaseSettings, Variance};
    use mondriant::spatial::{Heading, PixelColor};
    use std::time::Duration;

    const PAUSE: Duration = Duration::from_secs(6);

    // Tests the first run is seeded with one ant in the centre heading up
    // Verified by seeding at the origin
    #[test]
    fn test_new_seeds_center_ant() {
        let clock = ManualClock::new();
        let controller = RunController::new(
            9,
            7,
            BaseSettings::default(),
            Variance::default(),
            RandomSelector::new(1),
            &clock,
        );

        let ants = controller.colony().ants();
        assert_eq!(ants.len(), 1);
        assert_eq!((ants[0].x, ants[0].y), (4, 3));
        assert_eq!(ants[0].heading, Heading::UP);
        assert_eq!(controller.phase(), RunPhase::Running);
        assert_eq!(controller.runs_completed(), 0);
        assert_eq!(controller.canvas().painted_cells(), 0);
        assert!(controller.time().abs() < f64::EPSILON);
    }

    // Tests grid dimensions come from the controller, not the settings
    // Verified by sizing the canvas from the base settings
    #[test]
    fn test_dimensions_override_settings() {
        let clock = ManualClock::new();
        let controller = RunController::new(
            12,
            8,
            BaseSettings::with_dimensions(100, 100),
            Variance::default(),
            RandomSelector::new(1),
            &clock,
        );

        assert_eq!(controller.canvas().width(), 12);
        assert_eq!(controller.canvas().height(), 8);
        assert_eq!(controller.base_settings().width, 12);
        assert_eq!(controller.working_settings().params.height, 8);
    }

    // Tests settlement emits once, pauses, then reseeds exactly once
    // Verified by re-emitting on every paused advance
    #[test]
    fn test_settle_pause_reseed() {
        let clock = ManualClock::new();
        let mut controller = RunController::new(
            1,
            1,
            BaseSettings::default(),
            Variance::default(),
            RandomSelector::new(3),
            &clock,
        );
        let mut sink = RecordingSink::default();

        let settled = controller.advance(&mut sink, &mut ());
        assert_eq!(settled.phase, RunPhase::Settled);
        assert_eq!(settled.ticks, 1);
        assert_eq!(settled.emitted, Some(0));
        assert!(!settled.reseeded);
        assert_eq!(sink.emitted.len(), 1);
        assert_eq!(controller.runs_completed(), 1);
        assert!(controller.colony().is_empty());

        let paused = controller.advance(&mut sink, &mut ());
        assert_eq!(paused.phase, RunPhase::Paused);
        assert_eq!(paused.ticks, 0);
        assert_eq!(paused.emitted, None);
        assert_eq!(sink.emitted.len(), 1);

        clock.advance(PAUSE);
        let reseeded = controller.advance(&mut sink, &mut ());
        assert!(reseeded.reseeded);
        assert_eq!(reseeded.phase, RunPhase::Running);
        assert_eq!(reseeded.ticks, 0);
        assert_eq!(controller.colony().len(), 1);

        let next = controller.advance(&mut sink, &mut ());
        assert!(!next.reseeded);
        assert_eq!(next.emitted, Some(1));
        assert_eq!(sink.emitted.len(), 2);
    }

    // Tests the settling call ends before any reseed, even with no pause
    // Verified by checking the pause in the same iteration that settles
    #[test]
    fn test_settling_call_never_reseeds() {
        let base = BaseSettings {
            end_pause_time: 0.0,
            ..BaseSettings::default()
        };
        let mut controller = RunController::new(
            1,
            1,
            base,
            Variance::default(),
            RandomSelector::new(3),
            SystemClock,
        );
        let mut sink = RecordingSink::default();

        let settled = controller.advance(&mut sink, &mut ());

        assert_eq!(settled.emitted, Some(0));
        assert!(!settled.reseeded);
        assert_eq!(settled.phase, RunPhase::Settled);
        assert!(controller.colony().is_empty());

        std::thread::sleep(Duration::from_millis(2));
        let next = controller.advance(&mut sink, &mut ());
        assert!(next.reseeded);
        assert_eq!(next.emitted, None);
        assert_eq!(controller.colony().len(), 1);
    }

    // Tests the pause must be strictly exceeded
    // Verified by using >= in the pause comparison
    #[test]
    fn test_pause_not_elapsed_at_boundary() {
        let clock = ManualClock::new();
        let base = BaseSettings {
            end_pause_time: 2.0,
            ..BaseSettings::default()
        };
        let mut controller =
            RunController::new(1, 1, base, Variance::default(), RandomSelector::new(3), &clock);

        controller.advance(&mut (), &mut ());
        clock.advance(Duration::from_secs(2));
        assert_eq!(controller.advance(&mut (), &mut ()).phase, RunPhase::Paused);

        clock.advance(Duration::from_millis(1));
        assert!(controller.advance(&mut (), &mut ()).reseeded);
    }

    // Tests emitted images carry the canvas and a cycling index
    // Verified by indexing images by the total run count
    #[test]
    fn test_image_index_cycles() {
        let clock = ManualClock::new();
        let mut controller = RunController::new(
            1,
            1,
            BaseSettings::default(),
            Variance::default(),
            RandomSelector::new(11),
            &clock,
        );
        let mut sink = RecordingSink::default();

        while controller.runs_completed() < IMAGE_INDEX_CYCLE + 2 {
            controller.advance(&mut sink, &mut ());
            clock.advance(PAUSE);
        }

        let indices: Vec<usize> = sink.emitted.iter().map(|(index, ..)| *index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1]);
        for (_, width, height, pixels) in &sink.emitted {
            assert_eq!((*width, *height), (1, 1));
            assert_eq!(pixels, &PixelColor::BLACK.to_array().to_vec());
        }
    }

    // Tests the render sink sees every advance call
    // Verified by presenting only while running
    #[test]
    fn test_render_sink_every_advance() {
        let clock = ManualClock::new();
        let mut controller = RunController::new(
            1,
            1,
            BaseSettings::default(),
            Variance::default(),
            RandomSelector::new(3),
            &clock,
        );
        let mut frames = FrameCounter::default();

        for _ in 0..5 {
            controller.advance(&mut (), &mut frames);
        }

        assert_eq!(frames.frames, 5);
    }

    // Tests each advance runs `speed` ticks while the colony lives
    // Verified by running a single tick per advance
    #[test]
    fn test_advance_runs_speed_ticks() {
        let clock = ManualClock::new();
        let base = BaseSettings {
            speed: 3,
            ..BaseSettings::default()
        };
        let mut controller = RunController::new(
            64,
            64,
            base,
            Variance::uniform(0),
            ScriptedSource::constant(0.99),
            &clock,
        );

        let report = controller.advance(&mut (), &mut ());

        assert_eq!(report.ticks, 3);
        assert_eq!(report.phase, RunPhase::Running);
        assert!((controller.time() - 3.0).abs() < f64::EPSILON);
        assert!(controller.canvas().painted_cells() > 0);
    }

    // Tests a full run settles on a small grid
    // Verified by never removing halted ants
    #[test]
    fn test_run_settles() {
        let clock = ManualClock::new();
        let mut controller = RunController::new(
            32,
            32,
            BaseSettings::default(),
            Variance::default(),
            RandomSelector::new(7),
            &clock,
        );
        let mut sink = RecordingSink::default();

        for _ in 0..10_000 {
            if controller.advance(&mut sink, &mut ()).emitted.is_some() {
                break;
            }
        }

        assert_eq!(sink.emitted.len(), 1);
        assert_eq!(controller.phase(), RunPhase::Paused);
        let (_, _, _, pixels) = &sink.emitted[0];
        assert!(pixels.chunks(4).any(|pixel| *pixel != [0, 0, 0, 255]));
    }

    // Tests settings updates are validated and wait for the next run
    // Verified by applying updates to the running run
    #[test]
    fn test_update_settings_applies_on_reseed() {
        let clock = ManualClock::new();
        let mut controller = RunController::new(
            1,
            1,
            BaseSettings::default(),
            Variance::default(),
            RandomSelector::new(3),
            &clock,
        );

        controller.update_settings(
            BaseSettings {
                speed: 40,
                background: PixelColor::WHITE,
                ..BaseSettings::with_dimensions(50, 50)
            },
            Variance::uniform(20),
        );

        assert_eq!(controller.base_settings().speed, 11);
        assert_eq!(controller.base_settings().width, 1);
        assert_eq!(*controller.variance(), Variance::uniform(10));
        assert_eq!(controller.working_settings().params.speed, 6);

        controller.advance(&mut (), &mut ());
        clock.advance(PAUSE);
        controller.advance(&mut (), &mut ());

        assert_eq!(controller.working_settings().params.speed, 11);
        assert_eq!(controller.canvas().background(), PixelColor::WHITE);
        assert_eq!(controller.canvas().width(), 1);
    }

    // Tests identical seeds produce identical canvases
    // Verified by seeding the second controller differently
    #[test]
    fn test_same_seed_same_canvas() {
        let clock = ManualClock::new();
        let mut first = RunController::new(
            48,
            48,
            BaseSettings::default(),
            Variance::default(),
            RandomSelector::new(2024),
            &clock,
        );
        let mut second = RunController::new(
            48,
            48,
            BaseSettings::default(),
            Variance::default(),
            RandomSelector::new(2024),
            &clock,
        );

        for _ in 0..40 {
            first.advance(&mut (), &mut ());
            second.advance(&mut (), &mut ());
            assert_eq!(first.canvas().as_bytes(), second.canvas().as_bytes());
            assert_eq!(first.colony().len(), second.colony().len());
        }
    }
}

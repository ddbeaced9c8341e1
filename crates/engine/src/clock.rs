//! Fixed-timestep accumulator.

use std::time::Duration;

use log::warn;

/// Converts variable frame times into whole simulation steps.
///
/// Leftover time smaller than one step carries over to the next frame. When
/// a frame would need more than `max_steps` steps (e.g. after the process was
/// suspended) the excess is dropped instead of fast-forwarding the run.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: Duration,
    max_steps: u32,
    accumulator: Duration,
}

impl FixedTimestep {
    pub fn new(step: Duration, max_steps: u32) -> Self {
        debug_assert!(!step.is_zero(), "zero timestep");
        debug_assert!(max_steps > 0);
        Self {
            step,
            max_steps,
            accumulator: Duration::ZERO,
        }
    }

    pub fn from_millis(step_ms: u32, max_steps: u32) -> Self {
        Self::new(Duration::from_millis(step_ms as u64), max_steps)
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Step length in seconds, as fed to `GameState::update`.
    pub fn step_secs(&self) -> f32 {
        self.step.as_secs_f32()
    }

    pub fn accumulated(&self) -> Duration {
        self.accumulator
    }

    /// Add `elapsed` and return how many steps to simulate now.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut steps = 0u32;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }

        if self.accumulator >= self.step {
            warn!(
                "frame fell {:?} behind; dropping time beyond {} steps",
                self.accumulator, self.max_steps
            );
            self.accumulator = Duration::ZERO;
        }

        steps
    }

    /// Forget any partial step (e.g. after a restart or a pause).
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

//! Frame driver: clock → simulation steps → audio → presentation.

use std::time::Duration;

use crate::audio::AudioSink;
use crate::clock::FixedTimestep;
use crate::core::{GameSnapshot, GameState, RandomSource, SeededRng};
use crate::types::GameAction;

/// Anything that can show a frame (terminal, test recorder, ...).
pub trait FrameSink {
    type Error;

    fn present(&mut self, snapshot: &GameSnapshot) -> Result<(), Self::Error>;
}

/// What one call to [`GameLoop::advance`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Simulation steps that actually advanced the run.
    pub steps: u32,
    /// Sound events forwarded to the audio sink.
    pub sounds: u32,
    /// The run ended during this frame.
    pub crashed: bool,
}

pub struct GameLoop<A: AudioSink, R: RandomSource = SeededRng> {
    state: GameState<R>,
    clock: FixedTimestep,
    audio: A,
    /// Reused between frames so presenting does not reallocate.
    snapshot: GameSnapshot,
}

impl<A: AudioSink, R: RandomSource> GameLoop<A, R> {
    pub fn new(state: GameState<R>, clock: FixedTimestep, audio: A) -> Self {
        let snapshot = state.snapshot();
        Self {
            state,
            clock,
            audio,
            snapshot,
        }
    }

    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState<R> {
        &mut self.state
    }

    pub fn clock(&self) -> &FixedTimestep {
        &self.clock
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Snapshot handed to the last `present` call.
    pub fn last_snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// Forward an input command to the simulation.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let changed = self.state.apply_action(action);
        if changed && action == GameAction::Restart {
            self.clock.reset();
        }
        changed
    }

    /// Run as many fixed steps as `elapsed` allows and dispatch their sounds.
    pub fn advance(&mut self, elapsed: Duration) -> FrameReport {
        let mut report = FrameReport::default();
        let steps = self.clock.advance(elapsed);
        let dt = self.clock.step_secs();

        for _ in 0..steps {
            let was_over = self.state.game_over();
            if !self.state.update(dt) {
                break;
            }
            report.steps += 1;

            for event in self.state.drain_events() {
                self.audio.play(event);
                report.sounds += 1;
            }

            if !was_over && self.state.game_over() {
                report.crashed = true;
                break;
            }
        }

        report
    }

    /// Refresh the snapshot and hand it to `sink`.
    pub fn present<S: FrameSink>(&mut self, sink: &mut S) -> Result<(), S::Error> {
        self.state.snapshot_into(&mut self.snapshot);
        sink.present(&self.snapshot)
    }

    /// One rendered frame: advance the simulation, then present it.
    pub fn frame<S: FrameSink>(
        &mut self,
        elapsed: Duration,
        sink: &mut S,
    ) -> Result<FrameReport, S::Error> {
        let report = self.advance(elapsed);
        self.present(sink)?;
        Ok(report)
    }
}

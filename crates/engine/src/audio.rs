//! Audio boundary.
//!
//! Sinks receive sound notifications fire-and-forget: `play` returns nothing
//! and a failing back end must swallow its own errors.

use crate::types::SoundEvent;

pub trait AudioSink {
    fn play(&mut self, event: SoundEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _event: SoundEvent) {}
}

/// Keeps every event in order; handy for tests and replays.
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    pub events: Vec<SoundEvent>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, event: SoundEvent) {
        self.events.push(event);
    }
}

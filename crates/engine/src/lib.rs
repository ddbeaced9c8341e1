//! Game loop module - drives the simulation from a wall clock.
//!
//! The core only knows "advance by one frame of `dt` seconds". This crate
//! turns real elapsed time into fixed simulation steps, forwards the sound
//! notifications each step produces to an [`AudioSink`], and hands the
//! resulting [`GameSnapshot`](lane_runner_core::GameSnapshot) to a
//! [`FrameSink`] for drawing.
//!
//! Nothing here blocks or sleeps; pacing belongs to whoever calls
//! [`GameLoop::frame`].

pub mod audio;
pub mod clock;
pub mod game_loop;

pub use lane_runner_core as core;
pub use lane_runner_types as types;

pub use audio::{AudioSink, NullAudio, RecordingAudio};
pub use clock::FixedTimestep;
pub use game_loop::{FrameReport, FrameSink, GameLoop};

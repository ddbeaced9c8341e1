//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Lane changes are
//! discrete, so there is no auto-repeat handling: terminal key repeats are
//! filtered out by [`is_press`].

pub mod map;

pub use lane_runner_types as types;

pub use map::{handle_key_event, is_press, should_quit};

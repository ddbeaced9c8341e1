//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget toolkits and instead renders into a simple framebuffer
//! that is diffed and flushed to the terminal through crossterm.
//!
//! - [`GameView`] is pure: snapshot in, framebuffer out
//! - [`TerminalRenderer`] owns the terminal and only re-sends changed cells
//! - [`TerminalFrontend`] glues both to the game loop as a `FrameSink`
//! - [`TerminalBell`] is the audio sink

pub mod audio;
pub mod fb;
pub mod frontend;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use lane_runner_core as core;
pub use lane_runner_engine as engine;
pub use lane_runner_types as types;

pub use audio::TerminalBell;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use frontend::TerminalFrontend;
pub use game_view::{GameView, Viewport, LANE_GLYPH, OBSTACLE_GLYPH, PLAYER_GLYPH, STRIPE_GLYPH};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

//! Lane Runner (workspace facade crate).
//!
//! Re-exports the workspace crates as `lane_runner::{core,engine,input,term,types}`
//! and hosts the command-line parsing shared by the binary and its tests.

pub mod cli;

pub use lane_runner_core as core;
pub use lane_runner_engine as engine;
pub use lane_runner_input as input;
pub use lane_runner_term as term;
pub use lane_runner_types as types;

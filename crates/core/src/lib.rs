//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the whole endless-runner rule set: lane motion,
//! procedural spawning, culling, collisions, scoring and the run lifecycle.
//! It has **no dependencies** on terminals, windows, audio devices or clocks:
//!
//! - **Deterministic**: same seed and same inputs produce the same run
//! - **Testable**: randomness is injected through [`RandomSource`]
//! - **Portable**: any front end can drive it with a frame time and read a [`GameSnapshot`]
//!
//! # Module Structure
//!
//! - [`config`]: immutable tuning, loadable from TOML
//! - [`entity`]: the player and the falling obstacles/coins
//! - [`spawner`]: per-frame random spawn events
//! - [`collision`]: strict AABB overlap checks
//! - [`game_state`]: the per-frame update cycle and restart
//! - [`rng`]: injectable random sources (seeded ChaCha, scripted stub)
//! - [`snapshot`]: read-only frame view for renderers
//!
//! # Frame Order
//!
//! While running, every [`GameState::update`](game_state::GameState::update) call:
//!
//! 1. eases the player towards its lane
//! 2. accumulates distance and survival score
//! 3. ramps the speed multiplier
//! 4. recomputes the world speed and hands it to every live entity
//! 5. scrolls the road, wrapping it into `(-screen_height, 0]`
//! 6. moves and culls obstacles and coins
//! 7. rolls new spawns
//! 8. checks collisions (an obstacle ends the run, coins add score)
//!
//! After a crash, `update` is a no-op until a restart.
//!
//! # Example
//!
//! ```
//! use lane_runner_core::GameState;
//! use lane_runner_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveLeft);
//! for _ in 0..30 {
//!     game.update(1.0 / 60.0);
//! }
//!
//! assert_eq!(game.player().lane(), 0);
//! assert!(game.distance() > 0.0);
//! ```

pub mod collision;
pub mod config;
pub mod entity;
pub mod game_state;
pub mod rng;
pub mod snapshot;
pub mod spawner;

pub use lane_runner_types as types;

// Re-export commonly used types for convenience
pub use collision::{Aabb, CollisionDetector};
pub use config::{ConfigError, GameConfig, HalfExtents, HitboxConfig, SpawnBand, SpawnConfig};
pub use entity::{advance_entities, Entity, Player};
pub use game_state::{wrap_road_offset, GameState};
pub use rng::{shuffle, RandomSource, ScriptedRng, SeededRng};
pub use snapshot::{EntitySnapshot, GameSnapshot, PlayerSnapshot};
pub use spawner::{SpawnReport, Spawner};

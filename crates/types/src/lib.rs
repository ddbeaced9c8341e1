//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, game loop, terminal rendering).
//!
//! # World Coordinates
//!
//! The playfield is described in world units, independent of any output device:
//!
//! - **Origin**: bottom-left corner, `y` grows upwards
//! - **Width**: 800 units
//! - **Height**: 600 units
//! - **Lanes**: three vertical tracks centered at x = 200, 400, 600
//!
//! Front ends scale these coordinates to whatever surface they draw on.
//!
//! # Default Tuning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_WORLD_SPEED` | 8.0 | Fall distance per frame at speed multiplier 1.0 |
//! | `LANE_EASING` | 0.2 | Fraction of the remaining lane gap closed per frame |
//! | `LANE_SNAP_TOLERANCE` | 2.0 | Gap below which easing stops |
//! | `OBSTACLE_SPAWN_CHANCE` | 0.03 | Per-frame obstacle spawn probability |
//! | `COIN_SPAWN_CHANCE` | 0.02 | Per-frame coin spawn probability |
//! | `COIN_BONUS` | 100.0 | Coin score, multiplied by the speed multiplier |
//! | `CULL_Y` | -50.0 | Entities below this height are removed |
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use lane_runner_types::{GameAction, SoundEvent, DEFAULT_LANES, SCREEN_HEIGHT};
//!
//! // Parse an action from a command name (case-insensitive)
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! // Sound events have stable names for audio back ends
//! assert_eq!(SoundEvent::CoinCollected.as_str(), "coin");
//!
//! assert_eq!(DEFAULT_LANES.len(), 3);
//! assert_eq!(SCREEN_HEIGHT, 600.0);
//! ```

/// Playfield width in world units
pub const SCREEN_WIDTH: f32 = 800.0;

/// Playfield height in world units
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Lane center x-coordinates, left to right
pub const DEFAULT_LANES: [f32; 3] = [200.0, 400.0, 600.0];

/// Lane the player starts in (middle lane)
pub const START_LANE: usize = 1;

/// Upper bound on configurable lanes (spawner scratch space is stack-only)
pub const MAX_LANES: usize = 8;

/// Fixed player height above the bottom edge
pub const PLAYER_GROUND_Y: f32 = 150.0;

/// Fall distance per frame at speed multiplier 1.0
pub const BASE_WORLD_SPEED: f32 = 8.0;

/// Fraction of the remaining lane gap closed per update
pub const LANE_EASING: f32 = 0.2;

/// Easing stops once the player is this close to the lane center
pub const LANE_SNAP_TOLERANCE: f32 = 2.0;

/// Per-frame probability of an obstacle spawn event
pub const OBSTACLE_SPAWN_CHANCE: f32 = 0.03;

/// Per-frame probability of a coin spawn event
pub const COIN_SPAWN_CHANCE: f32 = 0.02;

/// Most obstacles a single spawn event may create
pub const MAX_OBSTACLES_PER_SPAWN: usize = 2;

/// Obstacle spawn band above the top edge, inclusive
pub const OBSTACLE_SPAWN_BAND: (i32, i32) = (50, 200);

/// Coin spawn band above the top edge, inclusive
pub const COIN_SPAWN_BAND: (i32, i32) = (50, 400);

/// Entities falling below this height are culled
pub const CULL_Y: f32 = -50.0;

/// Coin spin per frame, in degrees
pub const COIN_SPIN_DEG: f32 = 5.0;

/// Score for one coin at speed multiplier 1.0
pub const COIN_BONUS: f32 = 100.0;

/// Survival score per second at speed multiplier 1.0
pub const SCORE_PER_SECOND: f32 = 10.0;

/// Distance per second per unit of world speed
pub const DISTANCE_PER_SPEED: f32 = 2.0;

/// Speed multiplier growth per second
pub const SPEED_RAMP_PER_SECOND: f32 = 0.001;

/// Background scroll relative to world speed
pub const ROAD_SCROLL_FACTOR: f32 = 0.7;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Most fixed steps the loop runs for one rendered frame before dropping time
pub const MAX_STEPS_PER_FRAME: u32 = 5;


/// Commands accepted from the input boundary
///
/// These actions are used by keyboard input and by tests driving the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Shift one lane to the left
    MoveLeft,
    /// Shift one lane to the right
    MoveRight,
    /// Start a new run (only honoured after a crash)
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use lane_runner_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveRight"), Some(GameAction::MoveRight));
    /// assert_eq!(GameAction::from_str("RESTART"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Restart => "restart",
        }
    }
}

/// Fire-and-forget notifications for the audio boundary
///
/// The simulation queues these; nothing waits on them and they never feed
/// back into game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    /// Player ran into an obstacle
    Crash,
    /// Player picked up a coin
    CoinCollected,
    /// Reserved for a jump action; never emitted
    Jump,
}

impl SoundEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEvent::Crash => "crash",
            SoundEvent::CoinCollected => "coin",
            SoundEvent::Jump => "jump",
        }
    }
}

/// Kind of a scrolling entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Barricade; touching one ends the run
    Obstacle,
    /// Collectible worth a speed-scaled bonus
    Coin,
}

/// Run lifecycle
///
/// `Running -> GameOver` happens on an obstacle hit, `GameOver -> Running`
/// only on an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunPhase {
    #[default]
    Running,
    GameOver,
}

impl RunPhase {
    pub fn is_over(&self) -> bool {
        matches!(self, RunPhase::GameOver)
    }
}

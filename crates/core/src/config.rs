//! Game tuning.
//!
//! Every constant the simulation depends on lives in [`GameConfig`], which is
//! handed to [`GameState`](crate::GameState) at construction and never
//! mutated afterwards. `Default` reproduces the arcade tuning from
//! [`crate::types`]; a TOML file can override any subset of fields.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::*;

/// Errors produced while loading or validating a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Half-width and half-height of an axis-aligned hit box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HalfExtents {
    pub x: f32,
    pub y: f32,
}

impl HalfExtents {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Inclusive height band above the top edge where new entities appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnBand {
    pub min: i32,
    pub max: i32,
}

impl SpawnBand {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Per-frame probability of an obstacle spawn event.
    pub obstacle_chance: f32,
    /// Per-frame probability of a coin spawn event.
    pub coin_chance: f32,
    /// Upper bound of the uniformly chosen obstacle count per event.
    pub max_obstacles_per_spawn: usize,
    pub obstacle_band: SpawnBand,
    pub coin_band: SpawnBand,
    /// Entities whose y drops below this are culled.
    pub cull_y: f32,
    /// Coin spin per frame, in degrees.
    pub coin_spin_deg: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            obstacle_chance: OBSTACLE_SPAWN_CHANCE,
            coin_chance: COIN_SPAWN_CHANCE,
            max_obstacles_per_spawn: MAX_OBSTACLES_PER_SPAWN,
            obstacle_band: SpawnBand::new(OBSTACLE_SPAWN_BAND.0, OBSTACLE_SPAWN_BAND.1),
            coin_band: SpawnBand::new(COIN_SPAWN_BAND.0, COIN_SPAWN_BAND.1),
            cull_y: CULL_Y,
            coin_spin_deg: COIN_SPIN_DEG,
        }
    }
}

/// Hit boxes derived from the sprite sizes at their draw scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitboxConfig {
    pub player: HalfExtents,
    pub obstacle: HalfExtents,
    pub coin: HalfExtents,
}

impl Default for HitboxConfig {
    fn default() -> Self {
        Self {
            player: HalfExtents::new(28.0, 42.0),
            obstacle: HalfExtents::new(40.0, 24.0),
            coin: HalfExtents::new(20.0, 20.0),
        }
    }
}

/// Immutable simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Lane center x-coordinates, left to right.
    pub lanes: Vec<f32>,
    pub start_lane: usize,
    pub player_y: f32,
    pub lane_easing: f32,
    pub lane_snap_tolerance: f32,
    pub base_world_speed: f32,
    pub speed_ramp_per_second: f32,
    pub score_per_second: f32,
    pub distance_per_speed: f32,
    pub coin_bonus: f32,
    pub road_scroll_factor: f32,
    pub spawn: SpawnConfig,
    pub hitboxes: HitboxConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            lanes: DEFAULT_LANES.to_vec(),
            start_lane: START_LANE,
            player_y: PLAYER_GROUND_Y,
            lane_easing: LANE_EASING,
            lane_snap_tolerance: LANE_SNAP_TOLERANCE,
            base_world_speed: BASE_WORLD_SPEED,
            speed_ramp_per_second: SPEED_RAMP_PER_SECOND,
            score_per_second: SCORE_PER_SECOND,
            distance_per_speed: DISTANCE_PER_SPEED,
            coin_bonus: COIN_BONUS,
            road_scroll_factor: ROAD_SCROLL_FACTOR,
            spawn: SpawnConfig::default(),
            hitboxes: HitboxConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document. Missing fields keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Serialize to TOML (useful as a starting point for a custom file).
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    pub fn lane_x(&self, lane: usize) -> f32 {
        debug_assert!(lane < self.lanes.len(), "lane {} out of range", lane);
        self.lanes[lane]
    }

    /// Check the invariants the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(msg: String) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid(msg))
        }

        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return invalid(format!(
                "screen size must be positive, got {}x{}",
                self.screen_width, self.screen_height
            ));
        }
        if self.lanes.is_empty() || self.lanes.len() > MAX_LANES {
            return invalid(format!(
                "lane count must be within 1..={}, got {}",
                MAX_LANES,
                self.lanes.len()
            ));
        }
        if self.lanes.iter().any(|x| !x.is_finite()) {
            return invalid("lane positions must be finite".to_string());
        }
        if self.start_lane >= self.lanes.len() {
            return invalid(format!(
                "start_lane {} is not one of the {} lanes",
                self.start_lane,
                self.lanes.len()
            ));
        }
        if !(self.lane_easing > 0.0 && self.lane_easing <= 1.0) {
            return invalid(format!(
                "lane_easing must be within (0, 1], got {}",
                self.lane_easing
            ));
        }
        if !(self.lane_snap_tolerance >= 0.0) {
            return invalid("lane_snap_tolerance must not be negative".to_string());
        }
        if !(self.base_world_speed > 0.0 && self.base_world_speed.is_finite()) {
            return invalid(format!(
                "base_world_speed must be positive and finite, got {}",
                self.base_world_speed
            ));
        }
        for (name, value) in [
            ("speed_ramp_per_second", self.speed_ramp_per_second),
            ("score_per_second", self.score_per_second),
            ("distance_per_speed", self.distance_per_speed),
            ("coin_bonus", self.coin_bonus),
            ("road_scroll_factor", self.road_scroll_factor),
        ] {
            if !(value >= 0.0) {
                return invalid(format!("{} must not be negative, got {}", name, value));
            }
        }

        let spawn = &self.spawn;
        for (name, p) in [
            ("obstacle_chance", spawn.obstacle_chance),
            ("coin_chance", spawn.coin_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return invalid(format!("{} must be within [0, 1], got {}", name, p));
            }
        }
        if spawn.max_obstacles_per_spawn == 0 {
            return invalid("max_obstacles_per_spawn must be at least 1".to_string());
        }
        for (name, band) in [
            ("obstacle_band", spawn.obstacle_band),
            ("coin_band", spawn.coin_band),
        ] {
            if band.min > band.max {
                return invalid(format!(
                    "{} is inverted: min {} > max {}",
                    name, band.min, band.max
                ));
            }
        }
        if !(spawn.cull_y < self.screen_height) {
            return invalid(format!(
                "cull_y {} must lie below the top edge {}",
                spawn.cull_y, self.screen_height
            ));
        }

        for (name, half) in [
            ("player", self.hitboxes.player),
            ("obstacle", self.hitboxes.obstacle),
            ("coin", self.hitboxes.coin),
        ] {
            if !(half.x > 0.0 && half.y > 0.0) {
                return invalid(format!("{} hit box must have positive extents", name));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.lane_count(), 3);
        assert_eq!(config.lane_x(1), 400.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str(
            r#"
            base_world_speed = 12.0

            [spawn]
            coin_chance = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.base_world_speed, 12.0);
        assert_eq!(config.spawn.coin_chance, 0.5);
        assert_eq!(config.spawn.obstacle_chance, OBSTACLE_SPAWN_CHANCE);
        assert_eq!(config.lanes, DEFAULT_LANES.to_vec());
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let text = GameConfig::default().to_toml_string().unwrap();
        let parsed = GameConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, GameConfig::default());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = GameConfig::from_toml_str("lanes = \"wide\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_empty_lanes() {
        let config = GameConfig {
            lanes: Vec::new(),
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_start_lane_out_of_range() {
        let config = GameConfig {
            start_lane: 3,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_probability_out_of_range() {
        let mut config = GameConfig::default();
        config.spawn.obstacle_chance = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_band() {
        let mut config = GameConfig::default();
        config.spawn.coin_band = SpawnBand::new(400, 50);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        let config = GameConfig {
            base_world_speed: 0.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = GameConfig::load("/definitely/not/here/lane-runner.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}

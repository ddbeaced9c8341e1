use std::fs;
use std::path::PathBuf;

use lane_runner::cli::parse_args;
use lane_runner::core::{ConfigError, GameConfig, GameState};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("lane-runner-{}-{}", std::process::id(), name))
}

#[test]
fn config_file_overrides_only_given_fields() {
    let path = temp_path("partial.toml");
    fs::write(
        &path,
        "lanes = [100.0, 250.0, 400.0, 550.0, 700.0]\nstart_lane = 2\n\n[spawn]\nobstacle_chance = 0.1\n",
    )
    .unwrap();

    let config = GameConfig::load(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(config.lane_count(), 5);
    assert_eq!(config.spawn.obstacle_chance, 0.1);
    assert_eq!(config.spawn.coin_chance, GameConfig::default().spawn.coin_chance);
    assert_eq!(config.base_world_speed, 8.0);

    let state = GameState::with_config(config, 1);
    assert_eq!(state.player().lane(), 2);
    assert_eq!(state.player().x(), 400.0);
}

#[test]
fn config_missing_file_is_an_io_error() {
    let err = GameConfig::load(temp_path("does-not-exist.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn config_rejects_invalid_tuning() {
    let err = GameConfig::from_toml_str("lanes = []").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = GameConfig::from_toml_str("[spawn]\ncoin_chance = 1.5").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = GameConfig::from_toml_str("lanes = \"wide\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn cli_config_flag_points_at_file() {
    let args: Vec<String> = ["--config", "tuning.toml", "--seed", "9"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let parsed = parse_args(&args).unwrap();
    assert_eq!(parsed.config, Some(PathBuf::from("tuning.toml")));
    assert_eq!(parsed.seed, Some(9));
}

//! Integration tests for the run lifecycle

use lane_runner::core::{GameConfig, GameState, ScriptedRng};
use lane_runner::types::{GameAction, RunPhase, SoundEvent};

const DT: f32 = 1.0 / 60.0;

fn quiet_game() -> GameState<ScriptedRng> {
    // An empty script never rolls below a spawn chance.
    GameState::with_rng(GameConfig::default(), ScriptedRng::new())
}

#[test]
fn test_fresh_run() {
    let state = GameState::new(12345);
    assert_eq!(state.phase(), RunPhase::Running);
    assert_eq!(state.player().lane(), 1);
    assert_eq!(state.player().x(), 400.0);
    assert_eq!(state.score(), 0.0);
    assert_eq!(state.distance(), 0.0);
    assert_eq!(state.game_speed(), 1.0);
    assert!(state.obstacles().is_empty());
    assert!(state.coins().is_empty());
}

#[test]
fn test_lane_change_eases_to_target() {
    let mut state = quiet_game();
    assert!(state.apply_action(GameAction::MoveRight));
    assert_eq!(state.player().lane(), 2);

    state.update(DT);
    // One easing step closes 20% of the 200-unit gap.
    assert!((state.player().x() - 440.0).abs() < 1e-3);

    for _ in 0..60 {
        state.update(DT);
    }
    assert!((state.player().x() - 600.0).abs() <= 2.0);
}

#[test]
fn test_moves_clamp_at_edges() {
    let mut state = quiet_game();
    assert!(state.apply_action(GameAction::MoveLeft));
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert_eq!(state.player().lane(), 0);

    assert!(state.apply_action(GameAction::MoveRight));
    assert!(state.apply_action(GameAction::MoveRight));
    assert!(!state.apply_action(GameAction::MoveRight));
    assert_eq!(state.player().lane(), 2);
}

#[test]
fn test_counters_follow_frame_formulas() {
    let mut state = quiet_game();
    state.update(DT);

    // Distance and score use the pre-ramp speed.
    assert!((state.distance() - 8.0 * DT * 2.0).abs() < 1e-5);
    assert!((state.score() - DT * 10.0).abs() < 1e-5);
    assert!((state.game_speed() - (1.0 + DT * 0.001)).abs() < 1e-7);
    assert!((state.world_speed() - 8.0 * state.game_speed()).abs() < 1e-5);
    assert!((state.road_offset() + state.world_speed() * 0.7).abs() < 1e-4);
}

#[test]
fn test_crash_then_restart() {
    let mut state = quiet_game();
    let y = state.player().y();
    state.spawn_obstacle_at(1, y + 30.0);

    assert!(state.update(DT));
    assert!(state.game_over());
    assert_eq!(state.drain_events().collect::<Vec<_>>(), vec![SoundEvent::Crash]);

    // Frozen until restart; moves are ignored.
    let score = state.score();
    assert!(!state.update(DT));
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert_eq!(state.score(), score);
    assert_eq!(state.player().lane(), 1);

    assert!(state.apply_action(GameAction::Restart));
    assert_eq!(state.phase(), RunPhase::Running);
    assert_eq!(state.score(), 0.0);
    assert_eq!(state.distance(), 0.0);
    assert_eq!(state.game_speed(), 1.0);
    assert_eq!(state.road_offset(), 0.0);
    assert!(state.obstacles().is_empty());
    assert_eq!(state.episode_id(), 1);
}

#[test]
fn test_restart_ignored_while_running() {
    let mut state = quiet_game();
    state.update(DT);
    let score = state.score();

    assert!(!state.apply_action(GameAction::Restart));
    assert_eq!(state.score(), score);
    assert_eq!(state.episode_id(), 0);
}

#[test]
fn test_coin_in_other_lane_is_not_collected() {
    let mut state = quiet_game();
    let y = state.player().y();
    state.spawn_coin_at(0, y);

    state.update(DT);
    assert_eq!(state.coins().len(), 1);
    assert!(state.pending_events().is_empty());
}

#[test]
fn test_coin_bonus_scales_with_speed() {
    let mut state = quiet_game();
    let y = state.player().y();
    state.spawn_coin_at(1, y + 8.0);

    state.update(DT);

    let expected = DT * 10.0 + 100.0 * state.game_speed();
    assert!((state.score() - expected).abs() < 1e-3);
    assert!(state.coins().is_empty());
    assert_eq!(state.pending_events(), &[SoundEvent::CoinCollected]);
}

#[test]
fn test_random_spawns_from_scripted_rolls() {
    // Obstacle roll hits with a single obstacle; the coin roll lands in lane 2.
    let rng = ScriptedRng::new()
        .with_uniforms([0.0, 0.0])
        .with_choices([0, 0, 0, 0, 2, 10]);
    let mut state = GameState::with_rng(GameConfig::default(), rng);

    state.update(DT);

    assert_eq!(state.obstacles().len(), 1);
    assert_eq!(state.coins().len(), 1);
    assert_eq!(state.coins()[0].lane, 2);
    assert!(state.obstacles()[0].y >= 650.0 && state.obstacles()[0].y <= 800.0);
    assert!(state.coins()[0].y >= 650.0 && state.coins()[0].y <= 1000.0);
}

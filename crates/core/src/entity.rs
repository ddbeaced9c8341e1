//! Entities: the player and the scrolling obstacles/coins.
//!
//! Obstacles and coins share one plain data struct; the few behavioural
//! differences (coins spin) are selected by [`EntityKind`].

use crate::collision::Aabb;
use crate::config::GameConfig;
use crate::types::EntityKind;

/// The lane-switching runner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    lane: usize,
    x: f32,
    y: f32,
    /// Vertical velocity for a jump arc. Never changes: there is no jump.
    change_y: f32,
}

impl Player {
    /// Place the player on the start lane.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            lane: config.start_lane,
            x: config.lane_x(config.start_lane),
            y: config.player_y,
            change_y: 0.0,
        }
    }

    pub fn lane(&self) -> usize {
        self.lane
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn change_y(&self) -> f32 {
        self.change_y
    }

    /// Lane center the player is easing towards.
    pub fn target_x(&self, config: &GameConfig) -> f32 {
        config.lane_x(self.lane)
    }

    /// Shift one lane left. Returns `false` (no-op) in the leftmost lane.
    pub fn move_left(&mut self) -> bool {
        if self.lane > 0 {
            self.lane -= 1;
            true
        } else {
            false
        }
    }

    /// Shift one lane right. Returns `false` (no-op) in the rightmost lane.
    pub fn move_right(&mut self, lane_count: usize) -> bool {
        if self.lane + 1 < lane_count {
            self.lane += 1;
            true
        } else {
            false
        }
    }

    /// Ease x towards the target lane.
    ///
    /// Closes `lane_easing` of the remaining gap, but only while the gap is
    /// wider than `lane_snap_tolerance`.
    pub fn update(&mut self, config: &GameConfig) {
        debug_assert!(self.lane < config.lane_count());
        let target = self.target_x(config);
        if (self.x - target).abs() > config.lane_snap_tolerance {
            self.x += (target - self.x) * config.lane_easing;
        }
    }

    pub fn hitbox(&self, config: &GameConfig) -> Aabb {
        Aabb::from_center(self.x, self.y, config.hitboxes.player)
    }
}

/// A falling obstacle or coin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub kind: EntityKind,
    pub lane: usize,
    pub x: f32,
    pub y: f32,
    /// Fall per frame; refreshed from the world speed before every move.
    pub speed: f32,
    /// Cosmetic spin in degrees, `[0, 360)`. Always zero for obstacles.
    pub angle: f32,
    pub active: bool,
}

impl Entity {
    pub fn new(kind: EntityKind, lane: usize, x: f32, y: f32, speed: f32) -> Self {
        Self {
            kind,
            lane,
            x,
            y,
            speed,
            angle: 0.0,
            active: true,
        }
    }

    pub fn obstacle(lane: usize, x: f32, y: f32, speed: f32) -> Self {
        Self::new(EntityKind::Obstacle, lane, x, y, speed)
    }

    pub fn coin(lane: usize, x: f32, y: f32, speed: f32) -> Self {
        Self::new(EntityKind::Coin, lane, x, y, speed)
    }

    /// Move down by `speed`, spin coins, and deactivate below `cull_y`.
    pub fn fall(&mut self, cull_y: f32, spin_deg: f32) {
        debug_assert!(self.speed >= 0.0, "negative fall speed {}", self.speed);
        self.y -= self.speed;
        if self.kind == EntityKind::Coin {
            self.angle = (self.angle + spin_deg).rem_euclid(360.0);
        }
        if self.y < cull_y {
            self.active = false;
        }
    }

    pub fn hitbox(&self, config: &GameConfig) -> Aabb {
        let half = match self.kind {
            EntityKind::Obstacle => config.hitboxes.obstacle,
            EntityKind::Coin => config.hitboxes.coin,
        };
        Aabb::from_center(self.x, self.y, half)
    }
}

/// Propagate the world speed, move every entity, then drop the culled ones.
///
/// Returns how many entities were removed.
pub fn advance_entities(entities: &mut Vec<Entity>, world_speed: f32, config: &GameConfig) -> usize {
    let before = entities.len();
    for entity in entities.iter_mut() {
        entity.speed = world_speed;
        entity.fall(config.spawn.cull_y, config.spawn.coin_spin_deg);
    }
    entities.retain(|e| e.active);
    before - entities.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_starts_in_middle_lane() {
        let config = GameConfig::default();
        let player = Player::new(&config);
        assert_eq!(player.lane(), 1);
        assert_eq!(player.x(), 400.0);
        assert_eq!(player.y(), 150.0);
        assert_eq!(player.change_y(), 0.0);
    }

    #[test]
    fn test_move_left_clamps_at_leftmost_lane() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        assert!(player.move_left());
        assert_eq!(player.lane(), 0);
        assert!(!player.move_left());
        assert_eq!(player.lane(), 0);
    }

    #[test]
    fn test_move_right_clamps_at_rightmost_lane() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        assert!(player.move_right(3));
        assert_eq!(player.lane(), 2);
        assert!(!player.move_right(3));
        assert_eq!(player.lane(), 2);
    }

    #[test]
    fn test_moves_never_leave_lane_range() {
        let config = GameConfig::default();
        for start in 0..3 {
            for pattern in 0u32..64 {
                let mut player = Player::new(&config);
                player.lane = start;
                for bit in 0..6 {
                    if pattern & (1 << bit) != 0 {
                        player.move_left();
                    } else {
                        player.move_right(3);
                    }
                    assert!(player.lane() <= 2);
                }
            }
        }
    }

    #[test]
    fn test_easing_first_step() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.move_right(3);
        player.update(&config);
        // 400 + (600 - 400) * 0.2
        assert!((player.x() - 440.0).abs() < 1e-3);
    }

    #[test]
    fn test_easing_converges_monotonically_without_overshoot() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.move_left();
        let target = player.target_x(&config);

        let mut prev_gap = (player.x() - target).abs();
        for _ in 0..100 {
            player.update(&config);
            let gap = (player.x() - target).abs();
            assert!(gap <= prev_gap);
            // Still on the starting side of the target.
            assert!(player.x() >= target);
            prev_gap = gap;
        }
        assert!(prev_gap <= config.lane_snap_tolerance);
    }

    #[test]
    fn test_easing_stops_inside_tolerance() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.x = 401.5;
        player.update(&config);
        assert_eq!(player.x(), 401.5);
    }

    #[test]
    fn test_obstacle_falls_by_speed() {
        let mut e = Entity::obstacle(0, 200.0, 700.0, 8.0);
        e.fall(-50.0, 5.0);
        assert_eq!(e.y, 692.0);
        assert_eq!(e.angle, 0.0);
        assert!(e.active);
    }

    #[test]
    fn test_coin_spins_and_wraps() {
        let mut e = Entity::coin(0, 200.0, 700.0, 8.0);
        e.angle = 357.0;
        e.fall(-50.0, 5.0);
        assert!((e.angle - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_fall_below_threshold_deactivates() {
        let mut e = Entity::obstacle(0, 200.0, -45.0, 8.0);
        e.fall(-50.0, 5.0);
        assert!(!e.active);
    }

    #[test]
    fn test_advance_entities_propagates_speed_and_culls() {
        let config = GameConfig::default();
        let mut entities = vec![
            Entity::obstacle(0, 200.0, 500.0, 1.0),
            Entity::coin(1, 400.0, -49.0, 1.0),
        ];

        let culled = advance_entities(&mut entities, 10.0, &config);

        assert_eq!(culled, 1);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].speed, 10.0);
        assert_eq!(entities[0].y, 490.0);
    }
}

//! Axis-aligned bounding-box collision between the player and entities.
//!
//! Overlap is strict: two boxes sharing only an edge (or a corner) do not
//! collide. A hit needs a region of positive area in common.

use crate::config::{GameConfig, HalfExtents};
use crate::entity::{Entity, Player};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Aabb {
    pub fn from_center(cx: f32, cy: f32, half: HalfExtents) -> Self {
        Self {
            min_x: cx - half.x,
            min_y: cy - half.y,
            max_x: cx + half.x,
            max_y: cy + half.y,
        }
    }

    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }
}

/// Player-vs-entity checks run at the end of every frame.
#[derive(Debug, Clone, Copy)]
pub struct CollisionDetector<'a> {
    config: &'a GameConfig,
}

impl<'a> CollisionDetector<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    /// Whether the player overlaps any live obstacle.
    pub fn hits_obstacle(&self, player: &Player, obstacles: &[Entity]) -> bool {
        let player_box = player.hitbox(self.config);
        obstacles
            .iter()
            .filter(|o| o.active)
            .any(|o| player_box.overlaps(&o.hitbox(self.config)))
    }

    /// Remove every coin overlapping the player; returns how many were taken.
    pub fn collect_coins(&self, player: &Player, coins: &mut Vec<Entity>) -> usize {
        let player_box = player.hitbox(self.config);
        let before = coins.len();
        coins.retain(|c| !(c.active && player_box.overlaps(&c.hitbox(self.config))));
        before - coins.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box(cx: f32, cy: f32) -> Aabb {
        Aabb::from_center(cx, cy, HalfExtents::new(1.0, 1.0))
    }

    #[test]
    fn test_overlapping_boxes_hit() {
        let a = unit_box(0.0, 0.0);
        assert!(a.overlaps(&unit_box(1.5, 0.0)));
        assert!(a.overlaps(&unit_box(0.0, -1.9)));
        assert!(a.overlaps(&unit_box(0.0, 0.0)));
    }

    #[test]
    fn test_disjoint_boxes_miss() {
        let a = unit_box(0.0, 0.0);
        assert!(!a.overlaps(&unit_box(3.0, 0.0)));
        assert!(!a.overlaps(&unit_box(0.0, 2.5)));
        assert!(!a.overlaps(&unit_box(5.0, 5.0)));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = unit_box(0.0, 0.0);
        assert!(!a.overlaps(&unit_box(2.0, 0.0)));
        assert!(!a.overlaps(&unit_box(0.0, 2.0)));
        // Corner contact.
        assert!(!a.overlaps(&unit_box(2.0, 2.0)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = unit_box(0.0, 0.0);
        let b = unit_box(1.0, 1.0);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn test_hits_obstacle_in_same_lane() {
        let config = GameConfig::default();
        let player = Player::new(&config);
        let detector = CollisionDetector::new(&config);

        let same_lane = Entity::obstacle(1, 400.0, player.y() + 10.0, 8.0);
        let other_lane = Entity::obstacle(0, 200.0, player.y(), 8.0);

        assert!(detector.hits_obstacle(&player, &[same_lane]));
        assert!(!detector.hits_obstacle(&player, &[other_lane]));
    }

    #[test]
    fn test_obstacle_touching_player_edge_is_not_a_hit() {
        let config = GameConfig::default();
        let player = Player::new(&config);
        let detector = CollisionDetector::new(&config);

        let gap = config.hitboxes.player.y + config.hitboxes.obstacle.y;
        let touching = Entity::obstacle(1, 400.0, player.y() + gap, 8.0);
        assert!(!detector.hits_obstacle(&player, &[touching]));
    }

    #[test]
    fn test_collect_coins_takes_every_overlapping_coin() {
        let config = GameConfig::default();
        let player = Player::new(&config);
        let detector = CollisionDetector::new(&config);

        let mut coins = vec![
            Entity::coin(1, 400.0, player.y(), 8.0),
            Entity::coin(1, 400.0, player.y() + 20.0, 8.0),
            Entity::coin(2, 600.0, player.y(), 8.0),
        ];

        assert_eq!(detector.collect_coins(&player, &mut coins), 2);
        assert_eq!(coins.len(), 1);
        assert_eq!(coins[0].lane, 2);

        // Nothing left to collect.
        assert_eq!(detector.collect_coins(&player, &mut coins), 0);
    }
}

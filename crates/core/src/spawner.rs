//! Procedural spawning of obstacles and coins.
//!
//! Once per frame the spawner makes two independent draws:
//!
//! - **Obstacles**: with probability `obstacle_chance`, pick a count in
//!   `1..=max_obstacles_per_spawn`, shuffle the lane indices and take the first
//!   `count`. Lanes chosen by one event are therefore always distinct.
//! - **Coins**: with probability `coin_chance`, one coin in a random lane.
//!
//! New entities start above the visible area at a random height inside the
//! kind's spawn band. There is no global cap; culling bounds the population.

use arrayvec::ArrayVec;

use crate::config::{GameConfig, SpawnBand};
use crate::entity::Entity;
use crate::rng::{shuffle, RandomSource};
use crate::types::MAX_LANES;

/// What one `maybe_spawn` call created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnReport {
    pub obstacles: usize,
    pub coins: usize,
}

impl SpawnReport {
    pub fn is_empty(&self) -> bool {
        self.obstacles == 0 && self.coins == 0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Spawner<'a> {
    config: &'a GameConfig,
}

impl<'a> Spawner<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    /// Run both spawn draws for one frame.
    pub fn maybe_spawn<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        world_speed: f32,
        obstacles: &mut Vec<Entity>,
        coins: &mut Vec<Entity>,
    ) -> SpawnReport {
        let spawn = &self.config.spawn;
        let mut report = SpawnReport::default();

        if rng.uniform() < spawn.obstacle_chance {
            for lane in self.pick_obstacle_lanes(rng) {
                let y = self.spawn_height(rng, spawn.obstacle_band);
                obstacles.push(Entity::obstacle(
                    lane,
                    self.config.lane_x(lane),
                    y,
                    world_speed,
                ));
                report.obstacles += 1;
            }
        }

        if rng.uniform() < spawn.coin_chance {
            let lane = rng.choose(self.config.lane_count());
            let y = self.spawn_height(rng, spawn.coin_band);
            coins.push(Entity::coin(lane, self.config.lane_x(lane), y, world_speed));
            report.coins += 1;
        }

        report
    }

    /// Distinct lanes for one obstacle spawn event.
    pub fn pick_obstacle_lanes<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> ArrayVec<usize, MAX_LANES> {
        let lane_count = self.config.lane_count();
        debug_assert!(lane_count > 0 && lane_count <= MAX_LANES);

        let count = 1 + rng.choose(self.config.spawn.max_obstacles_per_spawn);
        let count = count.min(lane_count);

        let mut lanes: ArrayVec<usize, MAX_LANES> = (0..lane_count).collect();
        shuffle(rng, &mut lanes);
        lanes.truncate(count);
        lanes
    }

    fn spawn_height<R: RandomSource + ?Sized>(&self, rng: &mut R, band: SpawnBand) -> f32 {
        self.config.screen_height + rng.range_inclusive(band.min, band.max) as f32
    }
}

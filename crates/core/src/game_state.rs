//! Game state module - manages the complete run state
//!
//! This module ties together all core components: player, entities, spawner,
//! collision detection and scoring. It owns every piece of mutable state and
//! advances it in one synchronous `update` per frame.

use log::{debug, info};

use crate::collision::CollisionDetector;
use crate::config::GameConfig;
use crate::entity::{advance_entities, Entity, Player};
use crate::rng::{RandomSource, SeededRng};
use crate::snapshot::{EntitySnapshot, GameSnapshot, PlayerSnapshot};
use crate::spawner::Spawner;
use crate::types::*;

/// Complete run state
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SeededRng> {
    config: GameConfig,
    rng: R,
    player: Player,
    obstacles: Vec<Entity>,
    coins: Vec<Entity>,
    score: f32,
    distance: f32,
    /// Difficulty multiplier, starts at 1.0 and only grows.
    game_speed: f32,
    /// `base_world_speed * game_speed`, recomputed every frame.
    world_speed: f32,
    /// Background scroll phase in `(-screen_height, 0]`.
    road_offset: f32,
    phase: RunPhase,
    /// Monotonic run id (increments on restart).
    episode_id: u32,
    /// Simulated frames in the current run.
    frame: u64,
    /// Sound notifications not yet drained by the loop.
    events: Vec<SoundEvent>,
}

impl GameState<SeededRng> {
    /// Create a run with the default tuning and the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameConfig::default(), SeededRng::new(seed))
    }

    pub fn with_config(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, SeededRng::new(seed))
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a run with an explicit configuration and random source.
    ///
    /// The configuration must already have passed [`GameConfig::validate`].
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid game config");
        let player = Player::new(&config);
        let world_speed = config.base_world_speed;

        Self {
            config,
            rng,
            player,
            obstacles: Vec::new(),
            coins: Vec::new(),
            score: 0.0,
            distance: 0.0,
            game_speed: 1.0,
            world_speed,
            road_offset: 0.0,
            phase: RunPhase::Running,
            episode_id: 0,
            frame: 0,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Entity] {
        &self.obstacles
    }

    pub fn coins(&self) -> &[Entity] {
        &self.coins
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn game_speed(&self) -> f32 {
        self.game_speed
    }

    pub fn world_speed(&self) -> f32 {
        self.world_speed
    }

    pub fn road_offset(&self) -> f32 {
        self.road_offset
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase.is_over()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Place an obstacle in `lane` at height `y`, moving at the current world speed.
    pub fn spawn_obstacle_at(&mut self, lane: usize, y: f32) {
        let x = self.config.lane_x(lane);
        self.obstacles
            .push(Entity::obstacle(lane, x, y, self.world_speed));
    }

    /// Place a coin in `lane` at height `y`, moving at the current world speed.
    pub fn spawn_coin_at(&mut self, lane: usize, y: f32) {
        let x = self.config.lane_x(lane);
        self.coins.push(Entity::coin(lane, x, y, self.world_speed));
    }

    /// Drain queued sound notifications in emission order.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, SoundEvent> {
        self.events.drain(..)
    }

    pub fn pending_events(&self) -> &[SoundEvent] {
        &self.events
    }

    /// Advance the run by one frame of `dt` seconds.
    ///
    /// Returns `false` without touching anything once the run is over.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.phase.is_over() {
            return false;
        }
        debug_assert!(dt >= 0.0, "negative frame time {}", dt);

        self.frame = self.frame.wrapping_add(1);

        // Lane easing.
        self.player.update(&self.config);

        // Distance and survival score use the speed of the previous frame.
        self.distance += self.world_speed * dt * self.config.distance_per_speed;
        self.score += dt * self.config.score_per_second * self.game_speed;

        // Difficulty ramp (uncapped).
        self.game_speed += dt * self.config.speed_ramp_per_second;
        self.world_speed = self.config.base_world_speed * self.game_speed;

        self.road_offset = wrap_road_offset(
            self.road_offset - self.world_speed * self.config.road_scroll_factor,
            self.config.screen_height,
        );

        // Entities already on screen follow the new speed.
        advance_entities(&mut self.obstacles, self.world_speed, &self.config);
        advance_entities(&mut self.coins, self.world_speed, &self.config);

        let report = Spawner::new(&self.config).maybe_spawn(
            &mut self.rng,
            self.world_speed,
            &mut self.obstacles,
            &mut self.coins,
        );
        if !report.is_empty() {
            debug!(
                "frame {}: spawned {} obstacle(s), {} coin(s)",
                self.frame, report.obstacles, report.coins
            );
        }

        self.check_collisions();
        true
    }

    fn check_collisions(&mut self) {
        let detector = CollisionDetector::new(&self.config);

        if detector.hits_obstacle(&self.player, &self.obstacles) {
            self.phase = RunPhase::GameOver;
            self.events.push(SoundEvent::Crash);
            info!(
                "run {} crashed at frame {}: score {}, distance {}m, speed x{:.3}",
                self.episode_id,
                self.frame,
                self.score as u64,
                self.distance as u64,
                self.game_speed
            );
        }

        // Coins touched in the crash frame still count.
        let collected = detector.collect_coins(&self.player, &mut self.coins);
        for _ in 0..collected {
            self.score += self.config.coin_bonus * self.game_speed;
            self.events.push(SoundEvent::CoinCollected);
        }
        if collected > 0 {
            debug!("frame {}: collected {} coin(s)", self.frame, collected);
        }
    }

    /// Apply an input command.
    ///
    /// Moves are ignored after a crash; restart is ignored while running.
    /// Returns whether the command changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => !self.phase.is_over() && self.player.move_left(),
            GameAction::MoveRight => {
                !self.phase.is_over() && self.player.move_right(self.config.lane_count())
            }
            GameAction::Restart => {
                if self.phase.is_over() {
                    self.reset();
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Start a fresh run: counters zeroed, speed back to 1.0, entities cleared.
    pub fn reset(&mut self) {
        self.player = Player::new(&self.config);
        self.obstacles.clear();
        self.coins.clear();
        self.score = 0.0;
        self.distance = 0.0;
        self.game_speed = 1.0;
        self.world_speed = self.config.base_world_speed;
        self.road_offset = 0.0;
        self.phase = RunPhase::Running;
        self.frame = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!("run {} started", self.episode_id);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.screen_width = self.config.screen_width;
        out.screen_height = self.config.screen_height;
        out.lanes.clear();
        out.lanes.extend(self.config.lanes.iter().copied());
        out.player = PlayerSnapshot::from(&self.player);
        out.obstacles.clear();
        out.obstacles
            .extend(self.obstacles.iter().map(EntitySnapshot::from));
        out.coins.clear();
        out.coins.extend(self.coins.iter().map(EntitySnapshot::from));
        out.score = self.score;
        out.distance = self.distance;
        out.game_speed = self.game_speed;
        out.world_speed = self.world_speed;
        out.road_offset = self.road_offset;
        out.game_over = self.phase.is_over();
        out.episode_id = self.episode_id;
        out.frame = self.frame;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Keep the scroll phase inside `(-screen_height, 0]`.
pub fn wrap_road_offset(offset: f32, screen_height: f32) -> f32 {
    if offset > -screen_height {
        return offset;
    }
    // Closed form: repeated addition stalls once `offset` dwarfs the height.
    let r = offset.rem_euclid(screen_height);
    if r == 0.0 || r >= screen_height {
        0.0
    } else {
        r - screen_height
    }
}

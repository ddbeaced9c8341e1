use arrayvec::ArrayVec;

use crate::entity::{Entity, Player};
use crate::types::MAX_LANES;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerSnapshot {
    pub lane: usize,
    pub x: f32,
    pub y: f32,
}

impl From<&Player> for PlayerSnapshot {
    fn from(value: &Player) -> Self {
        Self {
            lane: value.lane(),
            x: value.x(),
            y: value.y(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntitySnapshot {
    pub lane: usize,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
}

impl From<&Entity> for EntitySnapshot {
    fn from(value: &Entity) -> Self {
        Self {
            lane: value.lane,
            x: value.x,
            y: value.y,
            angle: value.angle,
        }
    }
}

/// Read-only view of one frame, handed to renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub screen_width: f32,
    pub screen_height: f32,
    pub lanes: ArrayVec<f32, MAX_LANES>,
    pub player: PlayerSnapshot,
    pub obstacles: Vec<EntitySnapshot>,
    pub coins: Vec<EntitySnapshot>,
    pub score: f32,
    pub distance: f32,
    pub game_speed: f32,
    pub world_speed: f32,
    pub road_offset: f32,
    pub game_over: bool,
    pub episode_id: u32,
    pub frame: u64,
}

impl GameSnapshot {
    /// Reset every field, keeping the entity buffers' capacity.
    pub fn clear(&mut self) {
        self.screen_width = 0.0;
        self.screen_height = 0.0;
        self.lanes.clear();
        self.player = PlayerSnapshot::default();
        self.obstacles.clear();
        self.coins.clear();
        self.score = 0.0;
        self.distance = 0.0;
        self.game_speed = 1.0;
        self.world_speed = 0.0;
        self.road_offset = 0.0;
        self.game_over = false;
        self.episode_id = 0;
        self.frame = 0;
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Cheap change detector for redraw throttling.
    pub fn fingerprint(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325;
        let mut mix = |v: u64| {
            h ^= v;
            h = h.wrapping_mul(0x0100_0000_01b3);
        };
        mix(self.episode_id as u64);
        mix(self.frame);
        mix(self.game_over as u64);
        mix(self.player.lane as u64);
        mix(self.player.x.to_bits() as u64);
        mix(self.score.to_bits() as u64);
        mix(self.obstacles.len() as u64);
        mix(self.coins.len() as u64);
        h
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            screen_width: 0.0,
            screen_height: 0.0,
            lanes: ArrayVec::new(),
            player: PlayerSnapshot::default(),
            obstacles: Vec::new(),
            coins: Vec::new(),
            score: 0.0,
            distance: 0.0,
            game_speed: 1.0,
            world_speed: 0.0,
            road_offset: 0.0,
            game_over: false,
            episode_id: 0,
            frame: 0,
        }
    }
}

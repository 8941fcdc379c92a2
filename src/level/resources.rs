//! Level domain: per-level resources.

use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::content::LevelDef;

/// The level currently being played.
#[derive(Resource, Debug)]
pub struct ActiveLevel {
    pub index: usize,
    pub def: LevelDef,
}

/// Spawn-position rolls, seeded from the run seed and level index.
#[derive(Resource, Debug)]
pub struct LevelRng(pub ChaCha8Rng);

impl LevelRng {
    pub fn point_in(&mut self, area: Rect) -> Vec2 {
        Vec2::new(
            self.0.random_range(area.min.x..area.max.x),
            self.0.random_range(area.min.y..area.max.y),
        )
    }
}

#[derive(Debug, Clone)]
pub struct MinimapRoom {
    pub id: String,
    pub rect: Rect,
}

/// Static map outline, set once per level.
#[derive(Resource, Debug, Default, Clone)]
pub struct MinimapData {
    pub rooms: Vec<MinimapRoom>,
    pub corridors: Vec<Rect>,
    pub world: Rect,
}

//! Rooms domain: entrance walls following their room's clearance.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::layout::{
    ENTRANCE_GUARD_COLOR, ENTRANCE_OPEN_COLOR, ENTRANCE_SEALED_COLOR, EntranceWall, rects_overlap,
};
use crate::movement::{GameLayer, Player, PlayerTuning};
use crate::rooms::progress::RoomProgress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceWallMode {
    /// Player is inside an uncleared room; nothing gets through
    Sealed,
    /// Room uncleared, player outside; walk in, but nothing comes out
    ProjectilesOnly,
    Open,
}

impl EntranceWallMode {
    pub fn layers(self) -> CollisionLayers {
        match self {
            EntranceWallMode::Sealed => CollisionLayers::new(
                GameLayer::EntranceWall,
                [GameLayer::Player, GameLayer::Enemy, GameLayer::Bullet],
            ),
            EntranceWallMode::ProjectilesOnly => CollisionLayers::new(
                GameLayer::EntranceWall,
                [GameLayer::Enemy, GameLayer::Bullet],
            ),
            EntranceWallMode::Open => {
                CollisionLayers::new(GameLayer::EntranceWall, [] as [GameLayer; 0])
            }
        }
    }

    pub fn color(self) -> Color {
        match self {
            EntranceWallMode::Sealed => ENTRANCE_SEALED_COLOR,
            EntranceWallMode::ProjectilesOnly => ENTRANCE_GUARD_COLOR,
            EntranceWallMode::Open => ENTRANCE_OPEN_COLOR,
        }
    }
}

pub fn entrance_wall_mode(room_cleared: bool, player_inside: bool) -> EntranceWallMode {
    match (room_cleared, player_inside) {
        (true, _) => EntranceWallMode::Open,
        (false, true) => EntranceWallMode::Sealed,
        (false, false) => EntranceWallMode::ProjectilesOnly,
    }
}

/// Re-evaluate every entrance wall each tick against the player's box.
pub(crate) fn update_entrance_walls(
    progress: Res<RoomProgress>,
    tuning: Res<PlayerTuning>,
    q_player: Query<&Transform, With<Player>>,
    mut q_walls: Query<(&EntranceWall, &mut CollisionLayers, &mut Sprite)>,
) {
    let Ok(player) = q_player.single() else {
        return;
    };
    let player_rect =
        Rect::from_center_size(player.translation.truncate(), Vec2::splat(tuning.size));

    for (wall, mut layers, mut sprite) in &mut q_walls {
        let Some(room) = progress.get(&wall.room_id) else {
            continue;
        };
        let mode = entrance_wall_mode(room.is_cleared, rects_overlap(player_rect, room.bounds));
        let wanted = mode.layers();
        if layers.filters == wanted.filters {
            continue;
        }
        debug!("[ROOM] Entrance wall of '{}' now {:?}", wall.room_id, mode);
        *layers = wanted;
        sprite.color = mode.color();
    }
}

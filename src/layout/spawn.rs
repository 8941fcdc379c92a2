//! Layout domain: turning computed layouts into static bodies.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{DoorTile, EntranceWall, FogOverlay, Floor, Wall};
use super::geometry::{EntranceWallLayout, door_tiles};
use crate::content::DoorDef;
use crate::core::LevelEntity;
use crate::movement::GameLayer;

const FLOOR_Z: f32 = 0.0;
const WALL_Z: f32 = 1.0;
const FOG_Z: f32 = 10.0;

const FLOOR_COLOR: Color = Color::srgb(0.16, 0.17, 0.2);
const WALL_COLOR: Color = Color::srgb(0.42, 0.44, 0.5);
const DOOR_COLOR: Color = Color::srgb(0.85, 0.12, 0.12);
pub const ENTRANCE_SEALED_COLOR: Color = Color::srgba(0.95, 0.55, 0.1, 0.85);
pub const ENTRANCE_GUARD_COLOR: Color = Color::srgba(0.95, 0.55, 0.1, 0.25);
pub const ENTRANCE_OPEN_COLOR: Color = Color::srgba(0.95, 0.55, 0.1, 0.0);

fn obstacle_layers(layer: GameLayer) -> CollisionLayers {
    CollisionLayers::new(layer, [GameLayer::Player, GameLayer::Enemy, GameLayer::Bullet])
}

fn rect_transform(rect: Rect, z: f32) -> Transform {
    Transform::from_translation(rect.center().extend(z))
}

pub fn spawn_floor(commands: &mut Commands, rect: Rect) {
    commands.spawn((
        Name::new("Floor"),
        Floor,
        LevelEntity,
        Sprite {
            color: FLOOR_COLOR,
            custom_size: Some(rect.size()),
            ..default()
        },
        rect_transform(rect, FLOOR_Z),
    ));
}

pub fn spawn_wall(commands: &mut Commands, rect: Rect) {
    commands.spawn((
        Name::new("Wall"),
        Wall,
        LevelEntity,
        Sprite {
            color: WALL_COLOR,
            custom_size: Some(rect.size()),
            ..default()
        },
        rect_transform(rect, WALL_Z),
        RigidBody::Static,
        Collider::rectangle(rect.width(), rect.height()),
        obstacle_layers(GameLayer::Wall),
    ));
}

/// Spawn both tiles of a door.
pub fn spawn_door(commands: &mut Commands, door: &DoorDef) {
    for tile in door_tiles(door.center(), door.orientation) {
        commands.spawn((
            Name::new(format!("Door({})", door.id)),
            DoorTile {
                door_id: door.id.clone(),
            },
            LevelEntity,
            Sprite {
                color: DOOR_COLOR,
                custom_size: Some(tile.size()),
                ..default()
            },
            rect_transform(tile, WALL_Z),
            RigidBody::Static,
            Collider::rectangle(tile.width(), tile.height()),
            obstacle_layers(GameLayer::Door),
        ));
    }
}

pub fn spawn_entrance_wall(
    commands: &mut Commands,
    wall: &EntranceWallLayout,
    layers: CollisionLayers,
    color: Color,
) {
    commands.spawn((
        Name::new(format!("EntranceWall({})", wall.room_id)),
        EntranceWall {
            room_id: wall.room_id.clone(),
        },
        LevelEntity,
        Sprite {
            color,
            custom_size: Some(wall.rect.size()),
            ..default()
        },
        rect_transform(wall.rect, WALL_Z),
        RigidBody::Static,
        Collider::rectangle(wall.rect.width(), wall.rect.height()),
        layers,
    ));
}

pub fn spawn_fog(commands: &mut Commands, room_id: &str, bounds: Rect) {
    commands
        .spawn((
            Name::new(format!("Fog({})", room_id)),
            FogOverlay {
                room_id: room_id.to_string(),
            },
            LevelEntity,
            Sprite {
                color: Color::srgba(0.0, 0.0, 0.0, 0.9),
                custom_size: Some(bounds.size()),
                ..default()
            },
            rect_transform(bounds, FOG_Z),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text2d::new("?"),
                TextFont {
                    font_size: 128.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Transform::from_xyz(0.0, 0.0, 0.1),
            ));
        });
}

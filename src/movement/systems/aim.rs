//! Movement domain: cursor aim and enemy lock-on.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::combat::Enemy;
use crate::movement::{AimTarget, Crosshair};

const LOCKED_COLOR: Color = Color::srgb(1.0, 0.2, 0.2);
const FREE_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.8);

/// Resolve the aim point for a cursor position. The first target whose
/// rect contains the cursor captures the aim at its centre.
pub fn aim_point(
    cursor: Vec2,
    targets: impl IntoIterator<Item = (Entity, Rect)>,
) -> (Vec2, Option<Entity>) {
    for (entity, rect) in targets {
        if rect.contains(cursor) {
            return (rect.center(), Some(entity));
        }
    }
    (cursor, None)
}

pub(crate) fn update_aim_target(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    enemies: Query<(Entity, &Transform, &Sprite), With<Enemy>>,
    mut aim: ResMut<AimTarget>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(world_cursor) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };

    let targets = enemies.iter().map(|(entity, transform, sprite)| {
        let size = sprite.custom_size.unwrap_or(Vec2::splat(32.0));
        (
            entity,
            Rect::from_center_size(transform.translation.truncate(), size),
        )
    });
    let (position, locked_on) = aim_point(world_cursor, targets);
    aim.position = position;
    aim.locked_on = locked_on;
}

pub(crate) fn update_crosshair(
    aim: Res<AimTarget>,
    mut query: Query<(&mut Transform, &mut Sprite), With<Crosshair>>,
) {
    for (mut transform, mut sprite) in &mut query {
        transform.translation.x = aim.position.x;
        transform.translation.y = aim.position.y;
        sprite.color = if aim.locked_on.is_some() {
            LOCKED_COLOR
        } else {
            FREE_COLOR
        };
    }
}

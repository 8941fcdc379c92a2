//! Movement domain: velocity from intent and camera follow.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{Player, PlayerInput, PlayerTuning};

const CAMERA_LERP: f32 = 0.08;

/// 8-way velocity with diagonals normalised; no acceleration.
pub fn intent_velocity(axis: Vec2, speed: f32) -> Vec2 {
    axis.normalize_or_zero() * speed
}

pub(crate) fn apply_player_movement(
    input: Res<PlayerInput>,
    tuning: Res<PlayerTuning>,
    mut query: Query<&mut LinearVelocity, With<Player>>,
) {
    for mut velocity in &mut query {
        velocity.0 = intent_velocity(input.axis, tuning.speed);
    }
}

pub(crate) fn camera_follow(
    player: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(player_transform) = player.single() else {
        return;
    };
    let Ok(mut camera_transform) = camera.single_mut() else {
        return;
    };
    let target = player_transform.translation.truncate();
    let current = camera_transform.translation.truncate();
    let next = current.lerp(target, CAMERA_LERP);
    camera_transform.translation.x = next.x;
    camera_transform.translation.y = next.y;
}

/// Jump the camera straight to the player when a level starts.
pub(crate) fn snap_camera_to_player(
    player: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(player_transform) = player.single() else {
        return;
    };
    let Ok(mut camera_transform) = camera.single_mut() else {
        return;
    };
    camera_transform.translation.x = player_transform.translation.x;
    camera_transform.translation.y = player_transform.translation.y;
}

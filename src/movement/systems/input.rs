//! Movement domain: input sampling for movement and firing.

use bevy::prelude::*;

use crate::core::GameplayPaused;
use crate::movement::PlayerInput;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut input: ResMut<PlayerInput>,
) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);

    let held = mouse.pressed(MouseButton::Left) || keyboard.pressed(KeyCode::Space);
    if !held {
        input.fire_latched = false;
    }
    input.fire = held && !input.fire_latched;
}

/// The click or key that dismisses a modal is still held when gameplay
/// resumes. Latch fire so it does not turn into a shot.
pub(crate) fn latch_fire_while_paused(
    paused: Res<GameplayPaused>,
    mut input: ResMut<PlayerInput>,
) {
    if paused.is_paused() {
        input.fire = false;
        input.fire_latched = true;
    }
}

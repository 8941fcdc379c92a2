//! Movement domain: player spawning, 8-way movement, aim and camera.

mod bootstrap;
mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use bootstrap::{player_layers, spawn_crosshair, spawn_player};
pub use components::{Crosshair, GameLayer, Player};
pub use resources::{AimTarget, PlayerInput, PlayerTuning};
pub(crate) use systems::snap_camera_to_player;

use bevy::prelude::*;

use crate::core::GameState;
use crate::level::LevelSet;
use crate::movement::bootstrap::apply_player_defaults;
use crate::movement::systems::{
    apply_player_movement, camera_follow, latch_fire_while_paused, read_input,
    update_aim_target, update_crosshair,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerTuning>()
            .init_resource::<PlayerInput>()
            .init_resource::<AimTarget>()
            .add_systems(OnExit(GameState::Boot), apply_player_defaults)
            .add_systems(
                Update,
                latch_fire_while_paused
                    .before(LevelSet::Input)
                    .run_if(in_state(GameState::Level)),
            )
            .add_systems(
                Update,
                (read_input, update_aim_target).in_set(LevelSet::Input),
            )
            .add_systems(Update, apply_player_movement.in_set(LevelSet::Player))
            .add_systems(
                Update,
                (update_crosshair, camera_follow)
                    .after(LevelSet::Actions)
                    .run_if(in_state(GameState::Level)),
            );
    }
}

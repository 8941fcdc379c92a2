//! Core domain: game state, pausing and level-to-level flow.

mod events;
mod resources;
mod state;
mod systems;


pub use events::{HudUpdateEvent, LevelOutcome, LevelOutcomeEvent};
pub use resources::{GameplayPaused, RunConfig, RunOutcome, gameplay_active};
pub use state::{GameState, LevelEntity};

use bevy::prelude::*;

use crate::core::systems::{
    finish_boot, handle_level_outcome, leave_intermission, release_pause, restart_run,
    setup_camera, sync_virtual_time,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<RunConfig>()
            .init_resource::<RunOutcome>()
            .init_resource::<GameplayPaused>()
            .add_message::<LevelOutcomeEvent>()
            .add_message::<HudUpdateEvent>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, finish_boot.run_if(in_state(GameState::Boot)))
            .add_systems(
                Update,
                handle_level_outcome.run_if(in_state(GameState::Level)),
            )
            .add_systems(OnEnter(GameState::Intermission), leave_intermission)
            .add_systems(OnExit(GameState::Level), release_pause)
            .add_systems(Update, restart_run.run_if(in_state(GameState::GameOver)))
            .add_systems(PostUpdate, sync_virtual_time);
    }
}

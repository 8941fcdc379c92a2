//! Debug domain: developer hotkeys for fast iteration and testing.
//!
//! - F1: toggle invincibility
//! - F2: kill every enemy in the player's room
//! - F3: log a JSON snapshot of level progress

mod state;
mod systems;


pub use state::DebugState;

use bevy::prelude::*;

use crate::core::GameState;
use crate::debug::systems::{apply_invincibility, handle_debug_hotkeys};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (handle_debug_hotkeys, apply_invincibility)
                .chain()
                .run_if(in_state(GameState::Level)),
        );
    }
}

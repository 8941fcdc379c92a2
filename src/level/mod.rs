//! Level domain: builds a level from data, runs its scripted actions and
//! orders the per-tick gameplay systems.

mod actions;
mod events;
mod interact;
mod interface;
mod resources;
mod setup;


pub use events::{FireBulletRequest, LevelActionEvent, ProjectDeployedEvent};
pub use interact::{Friend, Interactable, OpenPrompt, TerminalPrompt};
pub use resources::{ActiveLevel, LevelRng, MinimapData, MinimapRoom};

use bevy::prelude::*;

use crate::combat::{fire_held_weapons, init_bullet_pool};
use crate::core::{GameState, gameplay_active};
use crate::level::actions::execute_level_actions;
use crate::level::interact::{close_prompt, handle_prompt_input, open_prompt_on_contact};
use crate::level::interface::handle_fire_requests;
use crate::level::setup::{build_level, teardown_level};
use crate::movement::snap_camera_to_player;

/// Per-tick gameplay order. Every set runs only in `GameState::Level`
/// while gameplay is not paused.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelSet {
    Input,
    Player,
    Enemies,
    Combat,
    Progress,
    Triggers,
    Actions,
}

impl LevelSet {
    const ORDER: [LevelSet; 7] = [
        LevelSet::Input,
        LevelSet::Player,
        LevelSet::Enemies,
        LevelSet::Combat,
        LevelSet::Progress,
        LevelSet::Triggers,
        LevelSet::Actions,
    ];
}

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                LevelSet::Input,
                LevelSet::Player,
                LevelSet::Enemies,
                LevelSet::Combat,
                LevelSet::Progress,
                LevelSet::Triggers,
                LevelSet::Actions,
            )
                .chain(),
        );
        for set in LevelSet::ORDER {
            app.configure_sets(
                Update,
                set.run_if(in_state(GameState::Level))
                    .run_if(gameplay_active),
            );
        }

        app.init_resource::<TerminalPrompt>()
            .add_message::<LevelActionEvent>()
            .add_message::<ProjectDeployedEvent>()
            .add_message::<FireBulletRequest>()
            .add_systems(
                OnEnter(GameState::Level),
                (build_level, init_bullet_pool, snap_camera_to_player).chain(),
            )
            .add_systems(
                OnExit(GameState::Level),
                (teardown_level, close_prompt),
            )
            .add_systems(
                Update,
                handle_fire_requests
                    .after(fire_held_weapons)
                    .in_set(LevelSet::Player),
            )
            .add_systems(Update, open_prompt_on_contact.in_set(LevelSet::Triggers))
            .add_systems(Update, execute_level_actions.in_set(LevelSet::Actions))
            .add_systems(
                Update,
                handle_prompt_input.run_if(in_state(GameState::Level)),
            );
    }
}

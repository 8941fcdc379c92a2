//! UI domain: HUD, modal overlays, minimap and the end screen.

mod dialogue;
mod game_over;
mod hud_enemy;
mod hud_player;
mod hud_wallet;
mod minimap;
mod notifications;
mod prompt;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::core::GameState;
use crate::level::MinimapData;
use crate::ui::dialogue::{spawn_dialogue_panel, update_dialogue_panel};
use crate::ui::game_over::{despawn_game_over_screen, spawn_game_over_screen};
use crate::ui::hud_enemy::{attach_enemy_healthbars, update_enemy_healthbars};
use crate::ui::hud_player::{spawn_player_healthbar_ui, update_player_healthbar};
use crate::ui::hud_wallet::{spawn_coin_display_ui, update_coin_display};
use crate::ui::minimap::{rebuild_minimap, update_minimap_player};
use crate::ui::notifications::{spawn_notification_panel, update_notification_panel};
use crate::ui::prompt::{spawn_prompt_overlay, update_prompt_overlay};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                spawn_player_healthbar_ui,
                spawn_coin_display_ui,
                spawn_dialogue_panel,
                spawn_prompt_overlay,
                spawn_notification_panel,
            ),
        )
        .add_systems(
            Update,
            (
                update_player_healthbar,
                update_coin_display,
                attach_enemy_healthbars,
                update_enemy_healthbars,
                update_dialogue_panel,
                update_prompt_overlay,
                update_notification_panel,
                rebuild_minimap.run_if(resource_exists_and_changed::<MinimapData>),
                update_minimap_player.run_if(resource_exists::<MinimapData>),
            ),
        )
        .add_systems(OnEnter(GameState::GameOver), spawn_game_over_screen)
        .add_systems(OnExit(GameState::GameOver), despawn_game_over_screen);
    }
}

//! Core domain: level flow systems and setup.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::core::events::{LevelOutcome, LevelOutcomeEvent};
use crate::core::resources::{GameplayPaused, RunConfig, RunOutcome};
use crate::core::state::GameState;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Leave Boot once content is available. Content errors keep us here.
pub(crate) fn finish_boot(
    registry: Option<Res<ContentRegistry>>,
    run_config: Res<RunConfig>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if registry.is_none() {
        return;
    }
    info!("[LEVEL] Starting run with seed {}", run_config.seed);
    next_state.set(GameState::Level);
}

/// Advance to the next level on a win; end the run on a loss or after the
/// last level. Only the first outcome of a frame counts.
pub(crate) fn handle_level_outcome(
    mut events: MessageReader<LevelOutcomeEvent>,
    registry: Option<Res<ContentRegistry>>,
    mut run_config: ResMut<RunConfig>,
    mut run_outcome: ResMut<RunOutcome>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let mut outcome = None;
    for event in events.read() {
        outcome.get_or_insert(event.outcome);
    }
    let Some(outcome) = outcome else {
        return;
    };

    let level_count = registry.map(|r| r.level_count()).unwrap_or(0);
    match outcome {
        LevelOutcome::Won => {
            run_outcome.levels_completed += 1;
            run_config.level_index += 1;
            if run_config.level_index < level_count {
                info!(
                    "[LEVEL] Level complete, advancing to level {}",
                    run_config.level_index + 1
                );
                next_state.set(GameState::Intermission);
            } else {
                info!("[LEVEL] Final level complete");
                run_outcome.outcome = Some(LevelOutcome::Won);
                next_state.set(GameState::GameOver);
            }
        }
        LevelOutcome::Lost => {
            info!("[LEVEL] Player died on level {}", run_config.level_index + 1);
            run_outcome.outcome = Some(LevelOutcome::Lost);
            next_state.set(GameState::GameOver);
        }
    }
}

pub(crate) fn leave_intermission(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::Level);
}

/// Start over from the first level.
pub(crate) fn restart_run(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut run_config: ResMut<RunConfig>,
    mut run_outcome: ResMut<RunOutcome>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !keyboard.just_pressed(KeyCode::Enter) {
        return;
    }
    run_config.restart();
    *run_outcome = RunOutcome::default();
    info!("[LEVEL] Restarting run with seed {}", run_config.seed);
    next_state.set(GameState::Level);
}

/// Virtual time follows the pause so physics and deadlines freeze with it.
pub(crate) fn sync_virtual_time(paused: Res<GameplayPaused>, mut time: ResMut<Time<Virtual>>) {
    if !paused.is_changed() {
        return;
    }
    if paused.is_paused() {
        time.pause();
    } else {
        time.unpause();
    }
}

pub(crate) fn release_pause(mut paused: ResMut<GameplayPaused>) {
    if let Some(holder) = paused.holder() {
        debug!("Releasing pause held by '{}' on level exit", holder);
    }
    paused.clear();
}

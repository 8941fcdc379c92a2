//! Core domain: game state definitions for the level flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    Level,
    /// One-frame hop between levels so `OnExit`/`OnEnter(Level)` both run.
    Intermission,
    GameOver,
}

/// Marks everything built for the current level; despawned when leaving it.
#[derive(Component, Debug)]
pub struct LevelEntity;

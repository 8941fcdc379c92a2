//! Core domain: shared resources for run configuration and pausing.

use bevy::prelude::*;
use rand::Rng;

use crate::core::events::LevelOutcome;

/// Resource tracking if gameplay should be paused.
/// At most one source holds the pause; others are refused until it lets go.
#[derive(Resource, Debug, Default)]
pub struct GameplayPaused {
    source: Option<String>,
}

impl GameplayPaused {
    pub fn is_paused(&self) -> bool {
        self.source.is_some()
    }

    pub fn holder(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Returns false if a different source already holds the pause.
    pub fn pause(&mut self, source: impl Into<String>) -> bool {
        let source = source.into();
        match &self.source {
            Some(held) => *held == source,
            None => {
                self.source = Some(source);
                true
            }
        }
    }

    /// Only the holder can release the pause.
    pub fn unpause(&mut self, source: &str) -> bool {
        if self.source.as_deref() == Some(source) {
            self.source = None;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.source = None;
    }
}

/// Run condition: returns true only when gameplay is not paused
pub fn gameplay_active(paused: Res<GameplayPaused>) -> bool {
    !paused.is_paused()
}

#[derive(Resource, Debug)]
pub struct RunConfig {
    pub seed: u64,
    pub level_index: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
            level_index: 0,
        }
    }
}

impl RunConfig {
    /// Seed for the current level's spawn rolls.
    pub fn level_seed(&self) -> u64 {
        self.seed.wrapping_add(self.level_index as u64)
    }

    pub fn restart(&mut self) {
        self.seed = rand::rng().random();
        self.level_index = 0;
    }
}

/// How the run ended, read by the game-over screen.
#[derive(Resource, Debug, Default)]
pub struct RunOutcome {
    pub outcome: Option<LevelOutcome>,
    pub levels_completed: usize,
}

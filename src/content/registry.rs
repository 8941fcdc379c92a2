//! ContentRegistry resource providing lookups for all loaded content.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::*;

/// Central registry for all loaded game content.
/// Levels keep their authored order; archetypes are keyed by id.
#[derive(Resource, Default, Debug)]
pub struct ContentRegistry {
    pub levels: Vec<LevelDef>,
    pub archetypes: HashMap<String, ArchetypeDef>,
}

impl ContentRegistry {
    pub fn level(&self, index: usize) -> Option<&LevelDef> {
        self.levels.get(index)
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn archetype(&self, id: &str) -> Option<&ArchetypeDef> {
        self.archetypes.get(id)
    }

    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        let rooms: usize = self.levels.iter().map(|level| level.rooms.len()).sum();
        format!(
            "ContentRegistry loaded:\n\
             - Levels: {}\n\
             - Rooms: {}\n\
             - Archetypes: {}",
            self.levels.len(),
            rooms,
            self.archetypes.len(),
        )
    }
}

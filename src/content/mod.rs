//! Content domain: compiled-in level definitions and gameplay defaults.

mod data;
mod loader;
mod registry;
mod validation;

#[cfg(test)]
mod tests;

pub use data::*;
pub use loader::{ContentLoadError, load_all_content};
pub use registry::ContentRegistry;
pub use validation::{ValidationError, validate_content, validate_door_drops};

use bevy::prelude::*;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_content);
    }
}

/// Parse and validate the embedded content. On failure nothing is inserted
/// and the game stays in `GameState::Boot`.
fn load_content(mut commands: Commands) {
    let (registry, defaults) = match load_all_content() {
        Ok(loaded) => loaded,
        Err(errors) => {
            for e in &errors {
                error!("[CONTENT] {}", e);
            }
            return;
        }
    };

    let mut errors = validate_content(&registry);
    errors.extend(validate_door_drops(&registry, defaults.player.size));
    if !errors.is_empty() {
        for e in &errors {
            error!("[CONTENT] {}", e);
        }
        error!("[CONTENT] {} validation error(s); refusing to start", errors.len());
        return;
    }

    info!("[CONTENT] {}", registry.summary());
    commands.insert_resource(registry);
    commands.insert_resource(defaults);
}

//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::content::PlayerDefaults;

#[derive(Resource, Debug, Clone)]
pub struct PlayerTuning {
    pub speed: f32,
    pub size: f32,
    pub max_health: f32,
    /// Seconds of damage immunity after a hit
    pub invulnerability_secs: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 200.0,
            size: 32.0,
            max_health: 100.0,
            invulnerability_secs: 1.0,
        }
    }
}

impl From<&PlayerDefaults> for PlayerTuning {
    fn from(defaults: &PlayerDefaults) -> Self {
        Self {
            speed: defaults.speed,
            size: defaults.size,
            max_health: defaults.max_health,
            invulnerability_secs: defaults.invulnerability_secs,
        }
    }
}

/// Logical input for the current frame.
#[derive(Resource, Debug, Default)]
pub struct PlayerInput {
    pub axis: Vec2,
    pub fire: bool,
    /// Set while gameplay is paused; fire stays off until the button is let go
    pub fire_latched: bool,
}

/// Where the weapon points. Snaps to an enemy's centre while the cursor is
/// over it.
#[derive(Resource, Debug, Default)]
pub struct AimTarget {
    pub position: Vec2,
    pub locked_on: Option<Entity>,
}

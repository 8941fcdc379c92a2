//! Movement domain: player spawning and data-driven tuning setup.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{EquippedWeapon, Health, Invulnerable};
use crate::content::GameplayDefaults;
use crate::core::LevelEntity;
use crate::movement::{Crosshair, GameLayer, Player, PlayerTuning};

const PLAYER_Z: f32 = 5.0;
const CROSSHAIR_Z: f32 = 20.0;

/// Copy the player section of the gameplay defaults into `PlayerTuning`.
pub(crate) fn apply_player_defaults(
    defaults: Option<Res<GameplayDefaults>>,
    mut tuning: ResMut<PlayerTuning>,
) {
    let Some(defaults) = defaults else {
        warn!("GameplayDefaults not available, using built-in player tuning");
        return;
    };
    *tuning = PlayerTuning::from(&defaults.player);
}

pub fn player_layers() -> CollisionLayers {
    CollisionLayers::new(
        GameLayer::Player,
        [
            GameLayer::Wall,
            GameLayer::Door,
            GameLayer::EntranceWall,
            GameLayer::Enemy,
            GameLayer::Pickup,
            GameLayer::Sensor,
        ],
    )
}

/// Spawn the player at `position` with full health and no weapon.
pub fn spawn_player(commands: &mut Commands, position: Vec2, tuning: &PlayerTuning) -> Entity {
    info!(
        "Spawning player at ({:.0}, {:.0}), health={}, speed={}",
        position.x, position.y, tuning.max_health, tuning.speed
    );

    commands
        .spawn((
            Name::new("Player"),
            Player,
            LevelEntity,
            // Combat
            (
                Health::new(tuning.max_health),
                Invulnerable::default(),
                EquippedWeapon::default(),
            ),
            // Rendering
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(Vec2::splat(tuning.size)),
                ..default()
            },
            Transform::from_translation(position.extend(PLAYER_Z)),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(tuning.size, tuning.size),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollidingEntities::default(),
                player_layers(),
            ),
        ))
        .id()
}

pub fn spawn_crosshair(commands: &mut Commands, position: Vec2) {
    commands.spawn((
        Name::new("Crosshair"),
        Crosshair,
        LevelEntity,
        Sprite {
            color: Color::srgba(1.0, 1.0, 1.0, 0.8),
            custom_size: Some(Vec2::splat(10.0)),
            ..default()
        },
        Transform::from_translation(position.extend(CROSSHAIR_Z)),
    ));
}

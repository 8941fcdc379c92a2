//! Combat domain: enemy, boss and pickup spawning helpers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::components::{Enemy, EnemyAi, EnemyKind, Health, Pickup, Weapon};
use crate::combat::resources::CombatTuning;
use crate::content::{ArchetypeDef, CoinKind};
use crate::core::LevelEntity;
use crate::movement::GameLayer;

const ENEMY_Z: f32 = 3.0;
const PICKUP_Z: f32 = 2.0;
const WEAPON_SIZE: Vec2 = Vec2::new(28.0, 10.0);

pub fn enemy_layers() -> CollisionLayers {
    CollisionLayers::new(
        GameLayer::Enemy,
        [
            GameLayer::Wall,
            GameLayer::Door,
            GameLayer::EntranceWall,
            GameLayer::Player,
            GameLayer::Bullet,
        ],
    )
}

pub fn pickup_layers() -> CollisionLayers {
    CollisionLayers::new(GameLayer::Pickup, [GameLayer::Player])
}

/// Bundle for spawning enemies; bosses differ only in kind, tag and health.
#[derive(Bundle)]
pub struct EnemyBundle {
    pub name: Name,
    pub enemy: Enemy,
    pub health: Health,
    pub ai: EnemyAi,
    pub level_entity: LevelEntity,
    pub sprite: Sprite,
    pub transform: Transform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub collision_events: CollisionEventsEnabled,
    pub collision_layers: CollisionLayers,
    pub velocity: LinearVelocity,
    pub locked_axes: LockedAxes,
}

impl EnemyBundle {
    pub fn new(position: Vec2, archetype: &ArchetypeDef, enemy: Enemy, health: f32) -> Self {
        let (r, g, b) = archetype.color;
        let name = match &enemy.boss_tag {
            Some(tag) => format!("Boss({})", tag),
            None => format!("Enemy({})", archetype.id),
        };

        Self {
            name: Name::new(name),
            enemy,
            health: Health::new(health),
            ai: EnemyAi {
                speed: archetype.speed,
                size: archetype.size,
                ..default()
            },
            level_entity: LevelEntity,
            sprite: Sprite {
                color: Color::srgb(r, g, b),
                custom_size: Some(Vec2::splat(archetype.size)),
                ..default()
            },
            transform: Transform::from_translation(position.extend(ENEMY_Z)),
            rigid_body: RigidBody::Dynamic,
            collider: Collider::rectangle(archetype.size, archetype.size),
            collision_events: CollisionEventsEnabled,
            collision_layers: enemy_layers(),
            velocity: LinearVelocity::default(),
            locked_axes: LockedAxes::ROTATION_LOCKED,
        }
    }
}

/// Spawn an enemy counted toward `room_id`. `health` overrides the
/// archetype's value when given.
pub fn spawn_enemy(
    commands: &mut Commands,
    position: Vec2,
    archetype: &ArchetypeDef,
    room_id: &str,
    kind: EnemyKind,
    boss_tag: Option<String>,
    health: Option<f32>,
) -> Entity {
    let enemy = Enemy {
        room_id: room_id.to_string(),
        kind,
        boss_tag,
    };
    commands
        .spawn(EnemyBundle::new(
            position,
            archetype,
            enemy,
            health.unwrap_or(archetype.health),
        ))
        .id()
}

pub fn coin_color(kind: CoinKind) -> Color {
    match kind {
        CoinKind::Twitter => Color::srgb(0.11, 0.63, 0.95),
        CoinKind::Threads => Color::srgb(0.9, 0.9, 0.9),
        CoinKind::TikTok => Color::srgb(0.93, 0.2, 0.45),
        CoinKind::Instagram => Color::srgb(0.84, 0.16, 0.72),
        CoinKind::LinkedIn => Color::srgb(0.0, 0.47, 0.71),
    }
}

fn spawn_pickup(
    commands: &mut Commands,
    name: String,
    pickup: Pickup,
    position: Vec2,
    size: Vec2,
    color: Color,
) -> Entity {
    commands
        .spawn((
            Name::new(name),
            pickup,
            LevelEntity,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(position.extend(PICKUP_Z)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Sensor,
            CollisionEventsEnabled,
            pickup_layers(),
        ))
        .id()
}

pub fn spawn_coin(
    commands: &mut Commands,
    position: Vec2,
    kind: CoinKind,
    tuning: &CombatTuning,
) -> Entity {
    spawn_pickup(
        commands,
        format!("Coin({:?})", kind),
        Pickup::Coin(kind),
        position,
        Vec2::splat(tuning.coin_size),
        coin_color(kind),
    )
}

pub fn spawn_power_up(commands: &mut Commands, position: Vec2, tuning: &CombatTuning) -> Entity {
    spawn_pickup(
        commands,
        "PowerUp".to_string(),
        Pickup::PowerUp {
            heal: tuning.heal_amount,
        },
        position,
        Vec2::splat(tuning.power_up_size),
        Color::srgb(0.3, 0.9, 0.4),
    )
}

/// A weapon lying on the floor, waiting for the player to walk over it.
pub fn spawn_ground_weapon(
    commands: &mut Commands,
    position: Vec2,
    tuning: &CombatTuning,
) -> Entity {
    let e = spawn_pickup(
        commands,
        "Weapon".to_string(),
        Pickup::Weapon,
        position,
        WEAPON_SIZE,
        Color::srgb(0.75, 0.75, 0.8),
    );
    commands
        .entity(e)
        .insert(Weapon::new(tuning.fire_rate_secs, tuning.muzzle_length));
    e
}

//! Combat domain: health, enemies, weapons, bullets and collision outcomes.

mod ai;
mod components;
mod events;
mod projectiles;
mod resolution;
mod resources;
mod spawn;
mod weapon;


pub use ai::{AiDirective, PlayerSighting, step_ai};
pub use components::{
    AiState, Bullet, BulletState, DamageOutcome, Enemy, EnemyAi, EnemyKind, EquippedWeapon,
    Health, HeldBy, Invulnerable, Pickup, PooledBullet, Weapon, apply_player_damage,
};
pub use events::{
    BossDefeatedEvent, CoinCollectedEvent, DeathReports, EnemyDiedEvent, PlayerHitEvent,
};
pub use projectiles::{
    BulletPool, acquire_bullet, bullet_in_world, bullet_velocity, init_bullet_pool,
};
pub use resources::{CombatTuning, EnemyTuning};
pub use spawn::{enemy_layers, spawn_coin, spawn_enemy, spawn_ground_weapon, spawn_power_up};
pub(crate) use weapon::fire_held_weapons;

use bevy::prelude::*;

use crate::combat::ai::update_enemy_ai;
use crate::combat::projectiles::{reclaim_out_of_bounds, return_to_pool_commit};
pub(crate) use crate::combat::resolution::{
    apply_contact_damage, apply_player_hits, despawn_defeated_enemies, flicker_invulnerable,
    resolve_bullet_collisions, resolve_pickups,
};
use crate::combat::resources::apply_combat_defaults;
use crate::combat::weapon::attach_held_weapons;
use crate::core::GameState;
use crate::level::LevelSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatTuning>()
            .init_resource::<EnemyTuning>()
            .init_resource::<BulletPool>()
            .add_message::<EnemyDiedEvent>()
            .add_message::<BossDefeatedEvent>()
            .add_message::<PlayerHitEvent>()
            .add_message::<CoinCollectedEvent>()
            .add_systems(OnExit(GameState::Boot), apply_combat_defaults)
            .add_systems(Update, update_enemy_ai.in_set(LevelSet::Enemies))
            .add_systems(
                Update,
                (attach_held_weapons, fire_held_weapons)
                    .chain()
                    .in_set(LevelSet::Player),
            )
            .add_systems(
                Update,
                (
                    resolve_bullet_collisions,
                    resolve_pickups,
                    apply_contact_damage,
                    apply_player_hits,
                    despawn_defeated_enemies,
                    reclaim_out_of_bounds,
                    return_to_pool_commit,
                )
                    .chain()
                    .in_set(LevelSet::Combat),
            )
            .add_systems(
                Update,
                flicker_invulnerable.run_if(in_state(GameState::Level)),
            );
    }
}

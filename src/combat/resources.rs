//! Combat domain: tuning resources.

use bevy::prelude::*;

use crate::content::GameplayDefaults;

#[derive(Resource, Debug, Clone)]
pub struct CombatTuning {
    pub fire_rate_secs: f32,
    pub muzzle_length: f32,
    pub bullet_speed: f32,
    pub bullet_damage: f32,
    pub bullet_size: f32,
    pub pool_capacity: usize,
    /// Damage per physics frame of player/enemy contact, gated by invulnerability
    pub contact_damage: f32,
    pub heal_amount: f32,
    pub coin_size: f32,
    pub power_up_size: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            fire_rate_secs: 0.5,
            muzzle_length: 24.0,
            bullet_speed: 400.0,
            bullet_damage: 50.0,
            bullet_size: 8.0,
            pool_capacity: 64,
            contact_damage: 10.0,
            heal_amount: 25.0,
            coin_size: 20.0,
            power_up_size: 24.0,
        }
    }
}

impl From<&GameplayDefaults> for CombatTuning {
    fn from(defaults: &GameplayDefaults) -> Self {
        Self {
            fire_rate_secs: defaults.weapon.fire_rate_secs,
            muzzle_length: defaults.weapon.muzzle_length,
            bullet_speed: defaults.weapon.bullet_speed,
            bullet_damage: defaults.weapon.bullet_damage,
            bullet_size: defaults.weapon.bullet_size,
            pool_capacity: defaults.weapon.pool_capacity,
            contact_damage: defaults.enemy.contact_damage,
            heal_amount: defaults.pickups.heal_amount,
            coin_size: defaults.pickups.coin_size,
            power_up_size: defaults.pickups.power_up_size,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct EnemyTuning {
    pub detection_range: f32,
    pub attack_range: f32,
    /// Extra reach allowed when a wound-up strike lands
    pub attack_tolerance: f32,
    pub windup_secs: f32,
    pub attack_damage: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            detection_range: 400.0,
            attack_range: 50.0,
            attack_tolerance: 20.0,
            windup_secs: 0.5,
            attack_damage: 10.0,
        }
    }
}

impl From<&GameplayDefaults> for EnemyTuning {
    fn from(defaults: &GameplayDefaults) -> Self {
        Self {
            detection_range: defaults.enemy.detection_range,
            attack_range: defaults.enemy.attack_range,
            attack_tolerance: defaults.enemy.attack_tolerance,
            windup_secs: defaults.enemy.windup_secs,
            attack_damage: defaults.enemy.attack_damage,
        }
    }
}

/// Copy weapon, enemy and pickup defaults into the combat tuning resources.
pub(crate) fn apply_combat_defaults(
    defaults: Option<Res<GameplayDefaults>>,
    mut combat: ResMut<CombatTuning>,
    mut enemy: ResMut<EnemyTuning>,
) {
    let Some(defaults) = defaults else {
        warn!("GameplayDefaults not available, using built-in combat tuning");
        return;
    };
    *combat = CombatTuning::from(defaults.as_ref());
    *enemy = EnemyTuning::from(defaults.as_ref());
}

//! Combat domain: combat-related events.

use bevy::ecs::message::{Message, MessageWriter};
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::combat::components::Enemy;
use crate::content::CoinKind;

#[derive(Debug)]
pub struct EnemyDiedEvent {
    pub entity: Entity,
    pub room_id: String,
}

impl Message for EnemyDiedEvent {}

#[derive(Debug)]
pub struct BossDefeatedEvent {
    pub tag: String,
    pub room_id: String,
}

impl Message for BossDefeatedEvent {}

/// Damage aimed at the player; invulnerability is applied on receipt.
#[derive(Debug)]
pub struct PlayerHitEvent {
    pub amount: f32,
}

impl Message for PlayerHitEvent {}

#[derive(Debug)]
pub struct CoinCollectedEvent {
    pub kind: CoinKind,
    pub total: u32,
}

impl Message for CoinCollectedEvent {}

/// Writers for everything an enemy's death announces.
#[derive(SystemParam)]
pub struct DeathReports<'w> {
    died: MessageWriter<'w, EnemyDiedEvent>,
    boss_defeated: MessageWriter<'w, BossDefeatedEvent>,
}

impl DeathReports<'_> {
    /// Every death reaches the room tracker; tagged bosses also reach the
    /// gates.
    pub fn report(&mut self, entity: Entity, enemy: &Enemy) {
        info!("[COMBAT] {:?} enemy died in room '{}'", enemy.kind, enemy.room_id);
        self.died.write(EnemyDiedEvent {
            entity,
            room_id: enemy.room_id.clone(),
        });
        if let (true, Some(tag)) = (enemy.kind.is_boss(), &enemy.boss_tag) {
            self.boss_defeated.write(BossDefeatedEvent {
                tag: tag.clone(),
                room_id: enemy.room_id.clone(),
            });
        }
    }
}

//! Rooms domain: sensor zones that nag the player until enough coins are
//! collected.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::WarningZoneDef;
use crate::core::LevelEntity;
use crate::movement::{GameLayer, Player};
use crate::narrative::NotificationEvent;
use crate::rooms::progress::PlayerWallet;

#[derive(Component, Debug, Clone)]
pub struct WarningZone {
    pub id: String,
    pub min_coins: u32,
    pub message: String,
    pub rearm_secs: f32,
    /// Disarmed until this time after showing its message
    pub armed_at: f32,
}

impl WarningZone {
    pub fn from_def(def: &WarningZoneDef) -> Self {
        Self {
            id: def.id.clone(),
            min_coins: def.min_coins,
            message: def.message.clone(),
            rearm_secs: def.rearm_secs,
            armed_at: 0.0,
        }
    }

    /// Returns the message to show when the player is inside, short on
    /// coins, and the zone is armed; disarms the zone when it does.
    pub fn poll(&mut self, now: f32, coins: u32, player_inside: bool) -> Option<&str> {
        if !player_inside || coins >= self.min_coins || now < self.armed_at {
            return None;
        }
        self.armed_at = now + self.rearm_secs;
        Some(&self.message)
    }
}

pub fn spawn_warning_zone(commands: &mut Commands, def: &WarningZoneDef) -> Entity {
    let size = Vec2::new(def.size.0, def.size.1);
    commands
        .spawn((
            Name::new(format!("WarningZone({})", def.id)),
            WarningZone::from_def(def),
            LevelEntity,
            Transform::from_xyz(def.center.0, def.center.1, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Sensor,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        ))
        .id()
}

pub(crate) fn check_warning_zones(
    time: Res<Time>,
    wallet: Res<PlayerWallet>,
    q_player: Query<&CollidingEntities, With<Player>>,
    mut q_zones: Query<(Entity, &mut WarningZone)>,
    mut notifications: MessageWriter<NotificationEvent>,
) {
    let Ok(colliding) = q_player.single() else {
        return;
    };
    let now = time.elapsed_secs();

    for (entity, mut zone) in &mut q_zones {
        let inside = colliding.contains(&entity);
        let Some(text) = zone.poll(now, wallet.coins, inside).map(str::to_string) else {
            continue;
        };
        info!("[TRIGGER] Warning zone '{}' shown", zone.id);
        notifications.write(NotificationEvent { text });
    }
}

//! Level domain: the services the level offers to its entities.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::{BulletPool, CombatTuning, acquire_bullet};
use crate::level::events::FireBulletRequest;

/// Serve weapon fire requests from the bullet pool. An empty pool drops
/// the shot.
pub(crate) fn handle_fire_requests(
    mut commands: Commands,
    mut requests: MessageReader<FireBulletRequest>,
    mut pool: ResMut<BulletPool>,
    tuning: Res<CombatTuning>,
) {
    for request in requests.read() {
        if acquire_bullet(&mut commands, &mut pool, request.origin, request.angle, &tuning)
            .is_none()
        {
            debug!("[COMBAT] Bullet pool exhausted");
        }
    }
}

//! Combat domain: held weapons tracking their owner and firing.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::components::{HeldBy, Weapon};
use crate::level::FireBulletRequest;
use crate::movement::{AimTarget, Player, PlayerInput};

const WEAPON_Z: f32 = 6.0;

/// Keep each held weapon on its owner and rotated toward the aim target.
/// Flips the sprite while aiming left so it never renders upside down.
pub(crate) fn attach_held_weapons(
    aim: Res<AimTarget>,
    owners: Query<&Transform, (With<Player>, Without<HeldBy>)>,
    mut weapons: Query<(&HeldBy, &mut Weapon, &mut Transform, &mut Sprite), Without<Player>>,
) {
    for (held_by, mut weapon, mut transform, mut sprite) in &mut weapons {
        let Ok(owner) = owners.get(held_by.0) else {
            continue;
        };
        let origin = owner.translation.truncate();
        let to_aim = aim.position - origin;
        if to_aim != Vec2::ZERO {
            weapon.rotation = to_aim.to_angle();
        }

        transform.translation = origin.extend(WEAPON_Z);
        transform.rotation = Quat::from_rotation_z(weapon.rotation);
        sprite.flip_y = weapon.rotation.cos() < 0.0;
    }
}

/// Ask the level for a bullet whenever fire is held and the cooldown allows.
pub(crate) fn fire_held_weapons(
    time: Res<Time>,
    input: Res<PlayerInput>,
    owners: Query<&Transform, With<Player>>,
    mut weapons: Query<(&HeldBy, &mut Weapon)>,
    mut requests: MessageWriter<FireBulletRequest>,
) {
    if !input.fire {
        return;
    }
    let now = time.elapsed_secs();

    for (held_by, mut weapon) in &mut weapons {
        let Ok(owner) = owners.get(held_by.0) else {
            continue;
        };
        if let Some((origin, angle)) = weapon.try_fire(now, owner.translation.truncate()) {
            requests.write(FireBulletRequest { origin, angle });
        }
    }
}

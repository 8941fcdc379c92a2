//! Combat domain: collision outcomes for bullets, pickups and contact.
//!
//! Every handler re-validates the entities it touches; a collision against
//! something despawned earlier in the frame is skipped, not an error.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::ecs::system::SystemParam;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::combat::components::{
    Bullet, BulletState, DamageOutcome, Enemy, EquippedWeapon, HeldBy, Health, Invulnerable,
    Pickup, PooledBullet, apply_player_damage,
};
use crate::combat::events::{CoinCollectedEvent, DeathReports, PlayerHitEvent};
use crate::combat::resources::CombatTuning;
use crate::core::{HudUpdateEvent, LevelOutcome, LevelOutcomeEvent};
use crate::layout::EntranceWall;
use crate::movement::{GameLayer, Player, PlayerTuning};
use crate::rooms::{PlayerWallet, RoomProgress};

#[derive(Clone, Copy, Debug)]
struct CollisionTarget {
    collider: Entity,
    body: Option<Entity>,
}

impl CollisionTarget {
    #[inline]
    fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
fn targets(ev: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget {
            collider: ev.collider1,
            body: ev.body1,
        },
        CollisionTarget {
            collider: ev.collider2,
            body: ev.body2,
        },
    )
}

#[inline]
fn is_in_layer(layers: &CollisionLayers, layer: GameLayer) -> bool {
    layers.memberships.has_all(layer)
}

/// What a bullet can run into besides enemies.
#[derive(SystemParam)]
pub(crate) struct BulletObstacles<'w, 's> {
    progress: Res<'w, RoomProgress>,
    layers: Query<'w, 's, &'static CollisionLayers>,
    entrances: Query<'w, 's, &'static EntranceWall>,
}

/// Reclaim bullets on their first blocking contact and damage enemies.
pub(crate) fn resolve_bullet_collisions(
    mut started: MessageReader<CollisionStart>,
    mut q_bullets: Query<(&Bullet, &mut BulletState), With<PooledBullet>>,
    obstacles: BulletObstacles,
    mut q_enemies: Query<(&Enemy, &mut Health)>,
    mut reports: DeathReports,
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let (t1, t2) = targets(ev);

        let b1 = q_bullets.contains(t1.collider);
        let b2 = q_bullets.contains(t2.collider);
        if !(b1 ^ b2) {
            continue;
        }
        let (bullet_side, other_side) = if b1 { (t1, t2) } else { (t2, t1) };

        // One outcome per bullet per frame
        if !seen.insert(bullet_side.collider) {
            continue;
        }

        let Ok(other_layers) = obstacles.layers.get(other_side.collider) else {
            continue;
        };
        let Ok((bullet, mut state)) = q_bullets.get_mut(bullet_side.collider) else {
            continue;
        };
        if *state != BulletState::Active {
            continue;
        }

        if is_in_layer(other_layers, GameLayer::Wall)
            || is_in_layer(other_layers, GameLayer::Door)
        {
            *state = BulletState::PendingReturn;
            continue;
        }

        if is_in_layer(other_layers, GameLayer::EntranceWall) {
            let Ok(wall) = obstacles.entrances.get(other_side.collider) else {
                continue;
            };
            if !obstacles.progress.is_cleared(&wall.room_id) {
                *state = BulletState::PendingReturn;
            }
            continue;
        }

        if is_in_layer(other_layers, GameLayer::Enemy) {
            *state = BulletState::PendingReturn;

            let enemy_entity = other_side.gameplay_owner();
            let Ok((enemy, mut health)) = q_enemies.get_mut(enemy_entity) else {
                continue;
            };
            if health.is_dead() {
                continue;
            }
            if health.take_hit(bullet.damage) {
                reports.report(enemy_entity, enemy);
            }
        }
    }
}

/// Wallet and HUD side of a pickup.
#[derive(SystemParam)]
pub(crate) struct PickupEffects<'w> {
    wallet: ResMut<'w, PlayerWallet>,
    coins: MessageWriter<'w, CoinCollectedEvent>,
    hud: MessageWriter<'w, HudUpdateEvent>,
}

/// Coins, power-ups and ground weapons the player walks into.
pub(crate) fn resolve_pickups(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    q_pickups: Query<&Pickup>,
    mut q_player: Query<(&mut Health, &mut EquippedWeapon), With<Player>>,
    mut effects: PickupEffects,
    mut taken: Local<HashSet<Entity>>,
) {
    taken.clear();

    for ev in started.read() {
        let (t1, t2) = targets(ev);

        let (player, pickup_entity) = if q_player.contains(t1.gameplay_owner()) {
            (t1.gameplay_owner(), t2.collider)
        } else if q_player.contains(t2.gameplay_owner()) {
            (t2.gameplay_owner(), t1.collider)
        } else {
            continue;
        };

        let Ok(pickup) = q_pickups.get(pickup_entity) else {
            continue;
        };
        if !taken.insert(pickup_entity) {
            continue;
        }
        let Ok((mut health, mut equipped)) = q_player.get_mut(player) else {
            continue;
        };

        match *pickup {
            Pickup::Coin(kind) => {
                commands.entity(pickup_entity).despawn();
                effects.wallet.coins += 1;
                let total = effects.wallet.coins;
                debug!("[COMBAT] Collected {:?} coin ({} total)", kind, total);
                effects.coins.write(CoinCollectedEvent { kind, total });
                effects.hud.write(HudUpdateEvent::Coins(total));
            }
            Pickup::PowerUp { heal } => {
                commands.entity(pickup_entity).despawn();
                health.heal(heal);
                effects.hud.write(HudUpdateEvent::Health {
                    current: health.current,
                    max: health.max,
                });
            }
            Pickup::Weapon => {
                if equipped.0.is_some() {
                    // Already armed; leave it on the floor
                    taken.remove(&pickup_entity);
                    continue;
                }
                commands
                    .entity(pickup_entity)
                    .remove::<(
                        Pickup,
                        Collider,
                        RigidBody,
                        Sensor,
                        CollisionLayers,
                        CollisionEventsEnabled,
                    )>()
                    .insert(HeldBy(player));
                equipped.0 = Some(pickup_entity);
                info!("[COMBAT] Player picked up a weapon");
            }
        }
    }
}

/// One contact hit per frame while the player touches a live enemy.
pub(crate) fn apply_contact_damage(
    tuning: Res<CombatTuning>,
    q_player: Query<&CollidingEntities, With<Player>>,
    q_enemies: Query<&Health, With<Enemy>>,
    mut hits: MessageWriter<PlayerHitEvent>,
) {
    let Ok(colliding) = q_player.single() else {
        return;
    };

    let touching = colliding
        .iter()
        .any(|e| q_enemies.get(*e).is_ok_and(|health| !health.is_dead()));
    if touching {
        hits.write(PlayerHitEvent {
            amount: tuning.contact_damage,
        });
    }
}

/// Apply queued hits to the player through the invulnerability window.
pub(crate) fn apply_player_hits(
    time: Res<Time>,
    tuning: Res<PlayerTuning>,
    mut hits: MessageReader<PlayerHitEvent>,
    mut q_player: Query<(&mut Health, &mut Invulnerable), With<Player>>,
    mut hud: MessageWriter<HudUpdateEvent>,
    mut outcomes: MessageWriter<LevelOutcomeEvent>,
) {
    let Ok((mut health, mut invulnerable)) = q_player.single_mut() else {
        hits.clear();
        return;
    };
    let now = time.elapsed_secs();

    for hit in hits.read() {
        let outcome = apply_player_damage(
            &mut health,
            &mut invulnerable,
            hit.amount,
            now,
            tuning.invulnerability_secs,
        );
        match outcome {
            DamageOutcome::Ignored => {}
            DamageOutcome::Applied => {
                hud.write(HudUpdateEvent::Health {
                    current: health.current,
                    max: health.max,
                });
            }
            DamageOutcome::Killed => {
                hud.write(HudUpdateEvent::Health {
                    current: health.current,
                    max: health.max,
                });
                info!("[COMBAT] Player died");
                outcomes.write(LevelOutcomeEvent {
                    outcome: LevelOutcome::Lost,
                });
            }
        }
    }
}

pub(crate) fn despawn_defeated_enemies(
    mut commands: Commands,
    q_enemies: Query<(Entity, &Health), With<Enemy>>,
) {
    for (entity, health) in &q_enemies {
        if health.is_dead() {
            commands.entity(entity).despawn();
        }
    }
}

/// Blink the player's sprite while invulnerable.
pub(crate) fn flicker_invulnerable(
    time: Res<Time>,
    mut q_player: Query<(&Invulnerable, &mut Sprite), With<Player>>,
) {
    let now = time.elapsed_secs();
    for (invulnerable, mut sprite) in &mut q_player {
        let alpha = if invulnerable.is_active(now) && invulnerable.until.is_finite() {
            if (now * 10.0) as u32 % 2 == 0 { 0.3 } else { 1.0 }
        } else {
            1.0
        };
        sprite.color.set_alpha(alpha);
    }
}

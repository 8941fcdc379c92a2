//! Combat domain: pooled bullets.
//!
//! Bullets are spawned once per level and recycled. Inactive bullets keep
//! their physics components but collide with nothing (empty filters), so
//! activation and return never move entities between archetypes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::components::{Bullet, BulletState, PooledBullet};
use crate::combat::resources::CombatTuning;
use crate::core::LevelEntity;
use crate::layout::{rects_overlap, world_bounds};
use crate::movement::GameLayer;

const BULLET_Z: f32 = 4.0;

#[derive(Resource, Debug)]
pub struct BulletPool {
    pub free: Vec<Entity>,
    pub capacity: usize,
}

impl BulletPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            free: Vec::with_capacity(capacity),
            capacity,
        }
    }
}

impl Default for BulletPool {
    fn default() -> Self {
        Self::new(CombatTuning::default().pool_capacity)
    }
}

#[inline]
fn active_bullet_layers() -> CollisionLayers {
    CollisionLayers::new(
        GameLayer::Bullet,
        [
            GameLayer::Wall,
            GameLayer::Door,
            GameLayer::EntranceWall,
            GameLayer::Enemy,
        ],
    )
}

#[inline]
fn inactive_bullet_layers() -> CollisionLayers {
    CollisionLayers::new(GameLayer::Bullet, [] as [GameLayer; 0])
}

pub fn bullet_velocity(angle: f32, speed: f32) -> Vec2 {
    Vec2::from_angle(angle) * speed
}

/// True while any part of the bullet's box is inside the world.
pub fn bullet_in_world(position: Vec2, size: f32) -> bool {
    rects_overlap(
        Rect::from_center_size(position, Vec2::splat(size)),
        world_bounds(),
    )
}

/// Pre-spawn the level's bullets, all inactive.
pub fn init_bullet_pool(
    mut commands: Commands,
    mut pool: ResMut<BulletPool>,
    tuning: Res<CombatTuning>,
) {
    pool.capacity = tuning.pool_capacity;
    pool.free.clear();
    let cap = pool.capacity;
    pool.free.reserve(cap);

    for _ in 0..cap {
        let e = commands
            .spawn((
                Name::new("Bullet(Pooled)"),
                PooledBullet,
                LevelEntity,
                BulletState::Inactive,
                Bullet {
                    damage: tuning.bullet_damage,
                },
                Sprite {
                    color: Color::srgb(1.0, 0.85, 0.3),
                    custom_size: Some(Vec2::splat(tuning.bullet_size)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, BULLET_Z),
                Visibility::Hidden,
                RigidBody::Dynamic,
                Collider::rectangle(tuning.bullet_size, tuning.bullet_size),
                Sensor,
                inactive_bullet_layers(),
                LinearVelocity(Vec2::ZERO),
                CollisionEventsEnabled,
            ))
            .id();

        pool.free.push(e);
    }
}

/// Fire a bullet from the pool. Returns `None` when every bullet is in
/// flight.
pub fn acquire_bullet(
    commands: &mut Commands,
    pool: &mut BulletPool,
    origin: Vec2,
    angle: f32,
    tuning: &CombatTuning,
) -> Option<Entity> {
    let e = pool.free.pop()?;

    commands
        .entity(e)
        .insert(Visibility::Visible)
        .insert(
            Transform::from_translation(origin.extend(BULLET_Z))
                .with_rotation(Quat::from_rotation_z(angle)),
        )
        .insert(LinearVelocity(bullet_velocity(angle, tuning.bullet_speed)))
        .insert(Bullet {
            damage: tuning.bullet_damage,
        })
        .insert(BulletState::Active)
        .insert(active_bullet_layers());

    Some(e)
}

pub(crate) fn reclaim_out_of_bounds(
    tuning: Res<CombatTuning>,
    mut q: Query<(&Transform, &mut BulletState), With<PooledBullet>>,
) {
    for (transform, mut state) in &mut q {
        if *state == BulletState::Active
            && !bullet_in_world(transform.translation.truncate(), tuning.bullet_size)
        {
            *state = BulletState::PendingReturn;
        }
    }
}

/// Commit return-to-pool by mutating components in place.
pub(crate) fn return_to_pool_commit(
    mut pool: ResMut<BulletPool>,
    mut q: Query<
        (
            Entity,
            &mut BulletState,
            &mut CollisionLayers,
            &mut LinearVelocity,
            &mut Visibility,
        ),
        With<PooledBullet>,
    >,
) {
    for (e, mut state, mut layers, mut vel, mut vis) in &mut q {
        if *state != BulletState::PendingReturn {
            continue;
        }

        *state = BulletState::Inactive;
        *layers = inactive_bullet_layers();
        *vel = LinearVelocity(Vec2::ZERO);
        *vis = Visibility::Hidden;

        pool.free.push(e);
    }
}

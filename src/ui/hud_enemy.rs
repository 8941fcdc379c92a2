//! UI domain: world-space enemy health bars.

use bevy::prelude::*;

use crate::combat::{Enemy, Health};

const ENEMY_HEALTHBAR_WIDTH: f32 = 40.0;
const BOSS_HEALTHBAR_WIDTH: f32 = 72.0;
const ENEMY_HEALTHBAR_HEIGHT: f32 = 6.0;
const ENEMY_HEALTHBAR_GAP: f32 = 8.0;

/// Fill sprite of a bar parented to its enemy.
#[derive(Component)]
pub struct EnemyHealthBarFill {
    pub width: f32,
}

/// Attach a bar above each newly spawned enemy. Bars are children, so they
/// follow the enemy and despawn with it.
pub(crate) fn attach_enemy_healthbars(
    mut commands: Commands,
    enemy_query: Query<(Entity, &Enemy, &Sprite), Added<Enemy>>,
) {
    for (entity, enemy, sprite) in &enemy_query {
        let width = if enemy.kind.is_boss() {
            BOSS_HEALTHBAR_WIDTH
        } else {
            ENEMY_HEALTHBAR_WIDTH
        };
        let height = sprite.custom_size.map(|s| s.y).unwrap_or(32.0);
        let y = height / 2.0 + ENEMY_HEALTHBAR_GAP;

        commands.entity(entity).with_children(|parent| {
            parent.spawn((
                Sprite {
                    color: Color::srgba(0.1, 0.1, 0.1, 0.8),
                    custom_size: Some(Vec2::new(width + 2.0, ENEMY_HEALTHBAR_HEIGHT + 2.0)),
                    ..default()
                },
                Transform::from_xyz(0.0, y, 0.5),
            ));
            parent.spawn((
                EnemyHealthBarFill { width },
                Sprite {
                    color: Color::srgb(0.8, 0.2, 0.2),
                    custom_size: Some(Vec2::new(width, ENEMY_HEALTHBAR_HEIGHT)),
                    ..default()
                },
                Transform::from_xyz(0.0, y, 0.6),
            ));
        });
    }
}

pub(crate) fn update_enemy_healthbars(
    enemy_query: Query<&Health, (With<Enemy>, Changed<Health>)>,
    mut fill_query: Query<(&ChildOf, &EnemyHealthBarFill, &mut Transform, &mut Sprite)>,
) {
    for (child_of, fill, mut transform, mut sprite) in &mut fill_query {
        let Ok(health) = enemy_query.get(child_of.parent()) else {
            continue;
        };
        let fill_width = (fill.width * health.percent()).max(0.0);

        // Left-aligned within the background
        transform.translation.x = -(fill.width - fill_width) / 2.0;
        sprite.custom_size = Some(Vec2::new(fill_width, ENEMY_HEALTHBAR_HEIGHT));
    }
}

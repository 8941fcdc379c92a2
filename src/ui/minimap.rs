//! UI domain: corner minimap of the level outline with a player marker.

use bevy::prelude::*;

use crate::core::LevelEntity;
use crate::level::MinimapData;
use crate::movement::Player;

pub(crate) const MINIMAP_SIZE: f32 = 160.0;
const MINIMAP_PADDING: f32 = 16.0;
const PLAYER_DOT: f32 = 5.0;

#[derive(Component)]
pub struct MinimapPanel;

#[derive(Component)]
pub struct MinimapPlayerDot;

/// Map a world rect into panel pixels as `(left, top, width, height)`.
/// World y grows upward, UI y grows downward.
pub(crate) fn project_rect(world: Rect, rect: Rect, panel: f32) -> (f32, f32, f32, f32) {
    let scale = panel / world.width().max(world.height()).max(1.0);
    (
        (rect.min.x - world.min.x) * scale,
        (world.max.y - rect.max.y) * scale,
        rect.width() * scale,
        rect.height() * scale,
    )
}

fn outline_node(world: Rect, rect: Rect, color: Color) -> (Node, BackgroundColor) {
    let (left, top, width, height) = project_rect(world, rect, MINIMAP_SIZE);
    (
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(left),
            top: Val::Px(top),
            width: Val::Px(width.max(1.0)),
            height: Val::Px(height.max(1.0)),
            ..default()
        },
        BackgroundColor(color),
    )
}

/// Rebuild the panel whenever a new level publishes its outline.
pub(crate) fn rebuild_minimap(
    mut commands: Commands,
    minimap: Res<MinimapData>,
    existing: Query<Entity, With<MinimapPanel>>,
) {
    for entity in &existing {
        commands.entity(entity).despawn();
    }
    if minimap.rooms.is_empty() {
        return;
    }
    let world = minimap.world;

    commands
        .spawn((
            MinimapPanel,
            LevelEntity,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(MINIMAP_PADDING),
                top: Val::Px(MINIMAP_PADDING),
                width: Val::Px(MINIMAP_SIZE),
                height: Val::Px(MINIMAP_SIZE),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.55)),
            BorderColor::all(Color::srgb(0.4, 0.4, 0.4)),
            ZIndex(30),
        ))
        .with_children(|parent| {
            for corridor in &minimap.corridors {
                parent.spawn(outline_node(world, *corridor, Color::srgb(0.35, 0.35, 0.4)));
            }
            for room in &minimap.rooms {
                parent.spawn((
                    Name::new(format!("MinimapRoom({})", room.id)),
                    outline_node(world, room.rect, Color::srgb(0.55, 0.58, 0.65)),
                ));
            }
            parent.spawn((
                MinimapPlayerDot,
                Node {
                    position_type: PositionType::Absolute,
                    width: Val::Px(PLAYER_DOT),
                    height: Val::Px(PLAYER_DOT),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.2, 0.9, 0.3)),
                ZIndex(1),
            ));
        });
}

pub(crate) fn update_minimap_player(
    minimap: Res<MinimapData>,
    player: Query<&Transform, With<Player>>,
    mut dots: Query<&mut Node, With<MinimapPlayerDot>>,
) {
    let Ok(transform) = player.single() else {
        return;
    };
    let at = transform.translation.truncate();
    let (left, top, _, _) = project_rect(
        minimap.world,
        Rect::from_center_size(at, Vec2::ZERO),
        MINIMAP_SIZE,
    );
    for mut node in &mut dots {
        node.left = Val::Px(left - PLAYER_DOT / 2.0);
        node.top = Val::Px(top - PLAYER_DOT / 2.0);
    }
}

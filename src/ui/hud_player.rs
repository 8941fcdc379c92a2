//! UI domain: player health bar, fed by HUD update messages.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::HudUpdateEvent;

pub(crate) const PLAYER_HEALTHBAR_WIDTH: f32 = 200.0;
pub(crate) const PLAYER_HEALTHBAR_HEIGHT: f32 = 20.0;
pub(crate) const PLAYER_HEALTHBAR_PADDING: f32 = 16.0;

/// Marker for the player's health bar fill element
#[derive(Component)]
pub struct PlayerHealthBarFill;

#[derive(Component)]
pub struct PlayerHealthText;

pub(crate) fn spawn_player_healthbar_ui(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(PLAYER_HEALTHBAR_PADDING),
                top: Val::Px(PLAYER_HEALTHBAR_PADDING),
                width: Val::Px(PLAYER_HEALTHBAR_WIDTH),
                height: Val::Px(PLAYER_HEALTHBAR_HEIGHT),
                border: UiRect::all(Val::Px(2.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
        ))
        .with_children(|parent| {
            parent.spawn((
                PlayerHealthBarFill,
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(0.0),
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(health_color(1.0)),
            ));
            parent.spawn((
                PlayerHealthText,
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

/// Green at full health, through yellow, to red.
pub(crate) fn health_color(percent: f32) -> Color {
    let percent = percent.clamp(0.0, 1.0);
    if percent > 0.5 {
        let t = (percent - 0.5) * 2.0;
        Color::srgb(0.9 - t * 0.7, 0.8, 0.2 + t * 0.1)
    } else {
        let t = percent * 2.0;
        Color::srgb(0.9, 0.2 + t * 0.6, 0.2)
    }
}

pub(crate) fn update_player_healthbar(
    mut updates: MessageReader<HudUpdateEvent>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<PlayerHealthBarFill>>,
    mut text_query: Query<&mut Text, With<PlayerHealthText>>,
) {
    let latest = updates
        .read()
        .filter_map(|update| match update {
            HudUpdateEvent::Health { current, max } => Some((*current, *max)),
            HudUpdateEvent::Coins(_) => None,
        })
        .last();
    let Some((current, max)) = latest else {
        return;
    };

    let percent = if max > 0.0 { current / max } else { 0.0 };
    for (mut node, mut bg_color) in &mut fill_query {
        node.width = Val::Percent(percent * 100.0);
        bg_color.0 = health_color(percent);
    }
    for mut text in &mut text_query {
        **text = format!("{:.0} / {:.0}", current, max);
    }
}

//! UI domain: promotion coin counter.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::HudUpdateEvent;
use crate::ui::hud_player::{PLAYER_HEALTHBAR_HEIGHT, PLAYER_HEALTHBAR_PADDING};

/// Marker for the coin amount text
#[derive(Component)]
pub struct CoinAmountText;

pub(crate) fn spawn_coin_display_ui(mut commands: Commands) {
    // Position below the health bar
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(PLAYER_HEALTHBAR_PADDING),
            top: Val::Px(PLAYER_HEALTHBAR_PADDING + PLAYER_HEALTHBAR_HEIGHT + 8.0),
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            column_gap: Val::Px(8.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Node {
                    width: Val::Px(16.0),
                    height: Val::Px(16.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.0, 0.47, 0.71)),
            ));
            parent.spawn((
                CoinAmountText,
                Text::new("Promotions: 0"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.9, 1.0)),
            ));
        });
}

pub(crate) fn update_coin_display(
    mut updates: MessageReader<HudUpdateEvent>,
    mut query: Query<&mut Text, With<CoinAmountText>>,
) {
    let latest = updates
        .read()
        .filter_map(|update| match update {
            HudUpdateEvent::Coins(total) => Some(*total),
            HudUpdateEvent::Health { .. } => None,
        })
        .last();
    let Some(total) = latest else {
        return;
    };
    for mut text in &mut query {
        **text = format!("Promotions: {}", total);
    }
}

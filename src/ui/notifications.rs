//! UI domain: the modal notification panel.

use bevy::prelude::*;

use crate::narrative::ActiveNotification;

#[derive(Component)]
pub struct NotificationPanel;

#[derive(Component)]
pub struct NotificationText;

pub(crate) fn spawn_notification_panel(mut commands: Commands) {
    commands
        .spawn((
            NotificationPanel,
            Node {
                display: Display::None,
                position_type: PositionType::Absolute,
                top: Val::Px(96.0),
                left: Val::Percent(25.0),
                right: Val::Percent(25.0),
                padding: UiRect::all(Val::Px(14.0)),
                border: UiRect::all(Val::Px(2.0)),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(8.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.92)),
            BorderColor::all(Color::srgb(1.0, 0.9, 0.6)),
            ZIndex(45),
        ))
        .with_children(|parent| {
            parent.spawn((
                NotificationText,
                Text::new(""),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.9, 0.6)),
            ));
            parent.spawn((
                Text::new("[Enter] dismiss"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
            ));
        });
}

pub(crate) fn update_notification_panel(
    active: Res<ActiveNotification>,
    mut panel: Query<&mut Node, With<NotificationPanel>>,
    mut texts: Query<&mut Text, With<NotificationText>>,
) {
    if !active.is_changed() {
        return;
    }
    for mut node in &mut panel {
        node.display = if active.0.is_some() {
            Display::Flex
        } else {
            Display::None
        };
    }
    if let Some(message) = &active.0 {
        for mut text in &mut texts {
            **text = message.clone();
        }
    }
}

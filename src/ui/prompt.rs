//! UI domain: terminal confirm overlay.

use bevy::prelude::*;

use crate::level::TerminalPrompt;

#[derive(Component)]
pub struct PromptOverlay;

#[derive(Component)]
pub struct PromptText;

#[derive(Component)]
pub struct PromptHintText;

pub(crate) fn spawn_prompt_overlay(mut commands: Commands) {
    commands
        .spawn((
            PromptOverlay,
            Node {
                display: Display::None,
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            ZIndex(60),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(24.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        row_gap: Val::Px(12.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.08, 0.1, 0.14)),
                    BorderColor::all(Color::srgb(0.2, 0.8, 0.4)),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        PromptText,
                        Text::new(""),
                        TextFont {
                            font_size: 24.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                    panel.spawn((
                        PromptHintText,
                        Text::new(""),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.7, 0.7, 0.7)),
                    ));
                    panel.spawn((
                        Text::new("[Enter] confirm    [Esc] cancel"),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.2, 0.8, 0.4)),
                    ));
                });
        });
}

pub(crate) fn update_prompt_overlay(
    prompt: Res<TerminalPrompt>,
    mut overlay: Query<&mut Node, With<PromptOverlay>>,
    mut text: Query<&mut Text, (With<PromptText>, Without<PromptHintText>)>,
    mut hint: Query<&mut Text, (With<PromptHintText>, Without<PromptText>)>,
) {
    if !prompt.is_changed() {
        return;
    }
    for mut node in &mut overlay {
        node.display = if prompt.0.is_some() {
            Display::Flex
        } else {
            Display::None
        };
    }
    let Some(open) = prompt.0.as_ref() else {
        return;
    };
    for mut t in &mut text {
        **t = open.prompt.clone();
    }
    for mut t in &mut hint {
        **t = open.hint.clone();
    }
}

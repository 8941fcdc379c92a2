//! UI domain: the modal dialogue panel.

use bevy::prelude::*;

use crate::content::DialogueLineDef;
use crate::narrative::ActiveDialogue;

const PORTRAIT_SIZE: f32 = 72.0;

#[derive(Component)]
pub struct DialoguePanel;

#[derive(Component)]
pub struct DialoguePortrait;

#[derive(Component)]
pub struct DialogueSpeakerText;

#[derive(Component)]
pub struct DialogueBodyText;

/// Swatch colour for a line, if it has a portrait.
pub(crate) fn portrait_color(line: &DialogueLineDef) -> Option<Color> {
    line.portrait.map(|(r, g, b)| Color::srgb(r, g, b))
}

pub(crate) fn spawn_dialogue_panel(mut commands: Commands) {
    commands
        .spawn((
            DialoguePanel,
            Node {
                display: Display::None,
                position_type: PositionType::Absolute,
                left: Val::Percent(15.0),
                right: Val::Percent(15.0),
                bottom: Val::Px(32.0),
                padding: UiRect::all(Val::Px(16.0)),
                border: UiRect::all(Val::Px(2.0)),
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(16.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.05, 0.05, 0.1, 0.92)),
            BorderColor::all(Color::srgb(0.0, 0.47, 0.71)),
            ZIndex(50),
        ))
        .with_children(|panel| {
            panel.spawn((
                DialoguePortrait,
                Node {
                    width: Val::Px(PORTRAIT_SIZE),
                    height: Val::Px(PORTRAIT_SIZE),
                    flex_shrink: 0.0,
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(Color::NONE),
                BorderColor::all(Color::srgb(0.8, 0.8, 0.8)),
            ));
            panel
                .spawn(Node {
                    flex_direction: FlexDirection::Column,
                    flex_grow: 1.0,
                    row_gap: Val::Px(8.0),
                    ..default()
                })
                .with_children(|text_area| {
                    text_area.spawn((
                        DialogueSpeakerText,
                        Text::new(""),
                        TextFont {
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(Color::srgb(1.0, 0.85, 0.3)),
                    ));
                    text_area.spawn((
                        DialogueBodyText,
                        Text::new(""),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                    text_area.spawn((
                        Text::new("[Enter] continue"),
                        TextFont {
                            font_size: 12.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.6, 0.6, 0.6)),
                    ));
                });
        });
}

pub(crate) fn update_dialogue_panel(
    active: Res<ActiveDialogue>,
    mut panel: Query<&mut Node, (With<DialoguePanel>, Without<DialoguePortrait>)>,
    mut portrait: Query<(&mut Node, &mut BackgroundColor), With<DialoguePortrait>>,
    mut speaker: Query<&mut Text, (With<DialogueSpeakerText>, Without<DialogueBodyText>)>,
    mut body: Query<&mut Text, (With<DialogueBodyText>, Without<DialogueSpeakerText>)>,
) {
    if !active.is_changed() {
        return;
    }
    let line = active.0.as_ref().and_then(|c| c.current());

    for mut node in &mut panel {
        node.display = if line.is_some() {
            Display::Flex
        } else {
            Display::None
        };
    }
    let Some(line) = line else {
        return;
    };
    for (mut node, mut background) in &mut portrait {
        match portrait_color(line) {
            Some(color) => {
                node.display = Display::Flex;
                background.0 = color;
            }
            None => node.display = Display::None,
        }
    }
    for mut text in &mut speaker {
        **text = line.speaker.clone();
    }
    for mut text in &mut body {
        **text = line.text.clone();
    }
}

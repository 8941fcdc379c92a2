//! UI domain: end-of-run screen.

use bevy::prelude::*;

use crate::core::{LevelOutcome, RunOutcome};

#[derive(Component)]
pub struct GameOverScreen;

pub(crate) fn outcome_title(outcome: &RunOutcome) -> &'static str {
    match outcome.outcome {
        Some(LevelOutcome::Won) => "PROMOTED",
        Some(LevelOutcome::Lost) | None => "YOU DIED",
    }
}

pub(crate) fn spawn_game_over_screen(mut commands: Commands, outcome: Res<RunOutcome>) {
    let won = outcome.outcome == Some(LevelOutcome::Won);
    let title_color = if won {
        Color::srgb(0.3, 0.9, 0.4)
    } else {
        Color::srgb(0.8, 0.1, 0.1)
    };

    commands
        .spawn((
            GameOverScreen,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(24.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(outcome_title(&outcome)),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(title_color),
            ));
            parent.spawn((
                Text::new(format!("Levels completed: {}", outcome.levels_completed)),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.85)),
            ));
            parent.spawn((
                Text::new("Press Enter to restart"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub(crate) fn despawn_game_over_screen(
    mut commands: Commands,
    screens: Query<Entity, With<GameOverScreen>>,
) {
    for entity in &screens {
        commands.entity(entity).despawn();
    }
}

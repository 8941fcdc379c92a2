//! Level domain: terminals the player confirms, and friendly NPCs.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::{InteractableDef, LevelAction};
use crate::core::{GameplayPaused, LevelEntity};
use crate::level::events::LevelActionEvent;
use crate::movement::{GameLayer, Player};

pub(crate) const TERMINAL_PAUSE: &str = "terminal";
const INTERACTABLE_Z: f32 = 2.5;
const TERMINAL_SIZE: Vec2 = Vec2::new(48.0, 40.0);
const FRIEND_SIZE: f32 = 32.0;

#[derive(Component, Debug, Clone)]
pub struct Interactable {
    pub prompt: String,
    pub hint: String,
    pub on_confirm: Vec<LevelAction>,
}

#[derive(Component, Debug)]
pub struct Friend {
    pub room_id: String,
}

#[derive(Debug, Clone)]
pub struct OpenPrompt {
    pub entity: Entity,
    pub prompt: String,
    pub hint: String,
}

/// The confirm overlay currently holding the pause, if any.
#[derive(Resource, Debug, Default)]
pub struct TerminalPrompt(pub Option<OpenPrompt>);

pub fn spawn_interactable(
    commands: &mut Commands,
    position: Vec2,
    def: &InteractableDef,
) -> Entity {
    commands
        .spawn((
            Name::new(format!("Terminal({})", def.prompt)),
            Interactable {
                prompt: def.prompt.clone(),
                hint: def.hint.clone(),
                on_confirm: def.on_confirm.clone(),
            },
            LevelEntity,
            Sprite {
                color: Color::srgb(0.2, 0.8, 0.9),
                custom_size: Some(TERMINAL_SIZE),
                ..default()
            },
            Transform::from_translation(position.extend(INTERACTABLE_Z)),
            RigidBody::Static,
            Collider::rectangle(TERMINAL_SIZE.x, TERMINAL_SIZE.y),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        ))
        .id()
}

pub fn spawn_friend(commands: &mut Commands, position: Vec2, room_id: &str) -> Entity {
    commands
        .spawn((
            Name::new(format!("Friend({})", room_id)),
            Friend {
                room_id: room_id.to_string(),
            },
            LevelEntity,
            Sprite {
                color: Color::srgb(0.95, 0.85, 0.4),
                custom_size: Some(Vec2::splat(FRIEND_SIZE)),
                ..default()
            },
            Transform::from_translation(position.extend(INTERACTABLE_Z)),
        ))
        .id()
}

/// Walking into a terminal opens its prompt and pauses gameplay.
pub(crate) fn open_prompt_on_contact(
    mut started: MessageReader<CollisionStart>,
    q_player: Query<(), With<Player>>,
    q_interactables: Query<&Interactable>,
    mut prompt: ResMut<TerminalPrompt>,
    mut paused: ResMut<GameplayPaused>,
) {
    let is_player = |collider: Entity, body: Option<Entity>| {
        q_player.contains(body.unwrap_or(collider))
    };

    for ev in started.read() {
        let player1 = is_player(ev.collider1, ev.body1);
        let player2 = is_player(ev.collider2, ev.body2);
        let other = match (player1, player2) {
            (true, false) => ev.collider2,
            (false, true) => ev.collider1,
            _ => continue,
        };
        let Ok(interactable) = q_interactables.get(other) else {
            continue;
        };
        if prompt.0.is_some() || !paused.pause(TERMINAL_PAUSE) {
            continue;
        }
        debug!("[LEVEL] Prompt opened: {}", interactable.prompt);
        prompt.0 = Some(OpenPrompt {
            entity: other,
            prompt: interactable.prompt.clone(),
            hint: interactable.hint.clone(),
        });
    }
}

/// Confirm runs the terminal's actions and removes it; cancel leaves it in
/// place for another visit.
pub(crate) fn handle_prompt_input(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    mut prompt: ResMut<TerminalPrompt>,
    mut paused: ResMut<GameplayPaused>,
    q_interactables: Query<&Interactable>,
    mut actions: MessageWriter<LevelActionEvent>,
) {
    let Some(open) = prompt.0.as_ref() else {
        return;
    };
    let confirm = keys.just_pressed(KeyCode::Enter) || keys.just_pressed(KeyCode::Space);
    let cancel = keys.just_pressed(KeyCode::Escape);
    if !confirm && !cancel {
        return;
    }

    let entity = open.entity;
    prompt.0 = None;
    paused.unpause(TERMINAL_PAUSE);

    if cancel {
        debug!("[LEVEL] Prompt cancelled");
        return;
    }
    let Ok(interactable) = q_interactables.get(entity) else {
        return;
    };
    info!("[LEVEL] Confirmed: {}", interactable.prompt);
    for action in interactable.on_confirm.iter().cloned() {
        actions.write(LevelActionEvent { action });
    }
    commands.entity(entity).despawn();
}

pub(crate) fn close_prompt(mut prompt: ResMut<TerminalPrompt>) {
    prompt.0 = None;
}

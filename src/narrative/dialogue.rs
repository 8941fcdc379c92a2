//! Narrative domain: dialogue library, queue and the active conversation.

use std::collections::VecDeque;

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use crate::content::{DialogueLineDef, LevelDef};
use crate::core::GameplayPaused;
use crate::level::LevelActionEvent;
use crate::narrative::events::DialogueRequest;

pub(crate) const DIALOGUE_PAUSE: &str = "dialogue";

/// Dialogues of the active level, keyed by id.
#[derive(Resource, Debug, Default)]
pub struct DialogueLibrary {
    dialogues: HashMap<String, Vec<DialogueLineDef>>,
}

impl DialogueLibrary {
    pub fn from_level(level: &LevelDef) -> Self {
        let dialogues = level
            .dialogues
            .iter()
            .map(|d| (d.id.clone(), d.lines.clone()))
            .collect();
        Self { dialogues }
    }

    pub fn lines(&self, id: &str) -> Option<&[DialogueLineDef]> {
        self.dialogues.get(id).map(Vec::as_slice)
    }
}

/// Requests waiting for the pause to become free.
#[derive(Resource, Debug, Default)]
pub struct DialogueQueue {
    pub pending: VecDeque<DialogueRequest>,
}

#[derive(Debug, Clone)]
pub struct Conversation {
    pub request: DialogueRequest,
    pub index: usize,
}

impl Conversation {
    pub fn current(&self) -> Option<&DialogueLineDef> {
        self.request.lines.get(self.index)
    }

    /// Move to the next line; true once every line has been dismissed.
    pub fn advance(&mut self) -> bool {
        self.index += 1;
        self.index >= self.request.lines.len()
    }
}

#[derive(Resource, Debug, Default)]
pub struct ActiveDialogue(pub Option<Conversation>);

pub(crate) fn queue_dialogue_requests(
    mut requests: MessageReader<DialogueRequest>,
    mut queue: ResMut<DialogueQueue>,
) {
    for request in requests.read() {
        queue.pending.push_back(request.clone());
    }
}

/// Open the next queued conversation once the game can be paused for it.
pub(crate) fn start_next_dialogue(
    mut queue: ResMut<DialogueQueue>,
    mut active: ResMut<ActiveDialogue>,
    mut paused: ResMut<GameplayPaused>,
    mut actions: MessageWriter<LevelActionEvent>,
) {
    if active.0.is_some() {
        return;
    }
    let Some(request) = queue.pending.front() else {
        return;
    };
    if request.lines.is_empty() {
        if let Some(request) = queue.pending.pop_front() {
            for action in request.on_complete {
                actions.write(LevelActionEvent { action });
            }
        }
        return;
    }
    if !paused.pause(DIALOGUE_PAUSE) {
        return;
    }
    if let Some(request) = queue.pending.pop_front() {
        debug!("[LEVEL] Dialogue started ({} lines)", request.lines.len());
        active.0 = Some(Conversation { request, index: 0 });
    }
}

/// Enter, Space or a left click.
pub(crate) fn dismiss_pressed(
    keys: &ButtonInput<KeyCode>,
    mouse: &ButtonInput<MouseButton>,
) -> bool {
    keys.just_pressed(KeyCode::Enter)
        || keys.just_pressed(KeyCode::Space)
        || mouse.just_pressed(MouseButton::Left)
}

pub(crate) fn advance_dialogue(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut active: ResMut<ActiveDialogue>,
    mut paused: ResMut<GameplayPaused>,
    mut actions: MessageWriter<LevelActionEvent>,
) {
    let Some(conversation) = active.0.as_mut() else {
        return;
    };
    if !dismiss_pressed(&keys, &mouse) || !conversation.advance() {
        return;
    }

    let Some(finished) = active.0.take() else {
        return;
    };
    paused.unpause(DIALOGUE_PAUSE);
    debug!("[LEVEL] Dialogue finished");
    for action in finished.request.on_complete {
        actions.write(LevelActionEvent { action });
    }
}

pub(crate) fn reset_dialogue(mut queue: ResMut<DialogueQueue>, mut active: ResMut<ActiveDialogue>) {
    queue.pending.clear();
    active.0 = None;
}

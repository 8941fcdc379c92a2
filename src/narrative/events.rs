//! Narrative domain: dialogue and notification messages.

use bevy::ecs::message::Message;

use crate::content::{DialogueLineDef, LevelAction};

/// Show `lines` modally; `on_complete` runs after the last line is
/// dismissed.
#[derive(Debug, Clone)]
pub struct DialogueRequest {
    pub lines: Vec<DialogueLineDef>,
    pub on_complete: Vec<LevelAction>,
}

impl Message for DialogueRequest {}

/// Modal text shown after any queued dialogue; dismissed like a dialogue
/// line.
#[derive(Debug)]
pub struct NotificationEvent {
    pub text: String,
}

impl Message for NotificationEvent {}

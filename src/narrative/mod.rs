//! Narrative domain: modal dialogue and notifications.

mod dialogue;
mod events;
mod notification;


pub use dialogue::{ActiveDialogue, Conversation, DialogueLibrary, DialogueQueue};
pub use events::{DialogueRequest, NotificationEvent};
pub use notification::{ActiveNotification, NotificationQueue};

use bevy::prelude::*;

use crate::core::GameState;
use crate::level::LevelSet;
use crate::narrative::dialogue::{
    advance_dialogue, queue_dialogue_requests, reset_dialogue, start_next_dialogue,
};
use crate::narrative::notification::{
    dismiss_notification, queue_notifications, reset_notifications, start_next_notification,
};

pub struct NarrativePlugin;

impl Plugin for NarrativePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogueLibrary>()
            .init_resource::<DialogueQueue>()
            .init_resource::<ActiveDialogue>()
            .init_resource::<NotificationQueue>()
            .init_resource::<ActiveNotification>()
            .add_message::<DialogueRequest>()
            .add_message::<NotificationEvent>()
            .add_systems(
                Update,
                (
                    queue_dialogue_requests,
                    queue_notifications,
                    advance_dialogue,
                    dismiss_notification,
                    // Dialogue claims the pause first
                    start_next_dialogue,
                    start_next_notification,
                )
                    .chain()
                    .before(LevelSet::Input)
                    .run_if(in_state(GameState::Level)),
            )
            .add_systems(
                OnExit(GameState::Level),
                (reset_dialogue, reset_notifications),
            );
    }
}

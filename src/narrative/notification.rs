//! Narrative domain: modal notifications, one at a time.

use std::collections::VecDeque;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::GameplayPaused;
use crate::narrative::dialogue::dismiss_pressed;
use crate::narrative::events::NotificationEvent;

pub(crate) const NOTIFICATION_PAUSE: &str = "notification";

/// Notifications waiting for the pause to become free.
#[derive(Resource, Debug, Default)]
pub struct NotificationQueue {
    pub pending: VecDeque<String>,
}

/// The notification on screen, holding the pause until dismissed.
#[derive(Resource, Debug, Default)]
pub struct ActiveNotification(pub Option<String>);

pub(crate) fn queue_notifications(
    mut notifications: MessageReader<NotificationEvent>,
    mut queue: ResMut<NotificationQueue>,
) {
    for notification in notifications.read() {
        queue.pending.push_back(notification.text.clone());
    }
}

pub(crate) fn start_next_notification(
    mut queue: ResMut<NotificationQueue>,
    mut active: ResMut<ActiveNotification>,
    mut paused: ResMut<GameplayPaused>,
) {
    if active.0.is_some() || queue.pending.is_empty() {
        return;
    }
    if !paused.pause(NOTIFICATION_PAUSE) {
        return;
    }
    active.0 = queue.pending.pop_front();
    debug!("[LEVEL] Notification shown: {:?}", active.0);
}

pub(crate) fn dismiss_notification(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut active: ResMut<ActiveNotification>,
    mut paused: ResMut<GameplayPaused>,
) {
    if active.0.is_none() || !dismiss_pressed(&keys, &mouse) {
        return;
    }
    active.0 = None;
    paused.unpause(NOTIFICATION_PAUSE);
    debug!("[LEVEL] Notification dismissed");
}

pub(crate) fn reset_notifications(
    mut queue: ResMut<NotificationQueue>,
    mut active: ResMut<ActiveNotification>,
) {
    queue.pending.clear();
    active.0 = None;
}

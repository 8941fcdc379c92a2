//! Rooms domain: events for room clears.

use bevy::ecs::message::Message;

/// Emitted exactly once per room, when its last live enemy dies.
#[derive(Debug)]
pub struct RoomClearedEvent {
    pub room_id: String,
}

impl Message for RoomClearedEvent {}

//! Rooms domain: per-room clearance and one-shot trigger flags.

use bevy::prelude::*;

use crate::content::{LevelDef, TriggerFlag};
use crate::layout::room_bounds;

#[derive(Debug, Clone)]
pub struct RoomState {
    pub id: String,
    pub bounds: Rect,
    pub is_cleared: bool,
    pub boss_triggered: bool,
    pub friend_triggered: bool,
}

/// Clearance and trigger state for every room of the active level.
/// Rooms only ever move from locked to cleared.
#[derive(Resource, Debug, Default)]
pub struct RoomProgress {
    rooms: Vec<RoomState>,
}

impl RoomProgress {
    pub fn from_level(level: &LevelDef) -> Self {
        let rooms = level
            .rooms
            .iter()
            .map(|room| RoomState {
                id: room.id.clone(),
                bounds: room_bounds(room.center()),
                is_cleared: room.initially_cleared,
                boss_triggered: false,
                friend_triggered: false,
            })
            .collect();
        Self { rooms }
    }

    pub fn rooms(&self) -> impl Iterator<Item = &RoomState> {
        self.rooms.iter()
    }

    pub fn get(&self, id: &str) -> Option<&RoomState> {
        self.rooms.iter().find(|room| room.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut RoomState> {
        self.rooms.iter_mut().find(|room| room.id == id)
    }

    /// Unknown rooms count as locked.
    pub fn is_cleared(&self, id: &str) -> bool {
        self.get(id).is_some_and(|room| room.is_cleared)
    }

    /// Mark the room cleared when no live enemies remain. Returns true only
    /// on the transition, so callers fire clear effects exactly once.
    pub fn check_room_completion(&mut self, id: &str, remaining: usize) -> bool {
        if remaining > 0 {
            return false;
        }
        let Some(room) = self.get_mut(id) else {
            warn!("[ROOM] Completion check for unknown room '{}'", id);
            return false;
        };
        if room.is_cleared {
            return false;
        }
        room.is_cleared = true;
        true
    }

    /// Room whose bounds strictly contain `point`.
    pub fn room_at(&self, point: Vec2) -> Option<&RoomState> {
        self.rooms.iter().find(|room| {
            point.x > room.bounds.min.x
                && point.x < room.bounds.max.x
                && point.y > room.bounds.min.y
                && point.y < room.bounds.max.y
        })
    }

    /// Set a one-shot flag. Returns false if it was already set or the room
    /// is unknown.
    pub fn try_mark(&mut self, id: &str, flag: TriggerFlag) -> bool {
        let Some(room) = self.get_mut(id) else {
            return false;
        };
        let slot = match flag {
            TriggerFlag::Boss => &mut room.boss_triggered,
            TriggerFlag::Friend => &mut room.friend_triggered,
        };
        if *slot {
            return false;
        }
        *slot = true;
        true
    }
}

/// Promotion coins collected this level.
#[derive(Resource, Debug, Default)]
pub struct PlayerWallet {
    pub coins: u32,
}

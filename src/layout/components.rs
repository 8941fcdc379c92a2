//! Layout domain: markers for static level geometry.

use bevy::prelude::*;

/// Marker for wall tile colliders
#[derive(Component, Debug)]
pub struct Wall;

#[derive(Component, Debug)]
pub struct Floor;

/// One tile of a door; both tiles of a door share the id.
#[derive(Component, Debug)]
pub struct DoorTile {
    pub door_id: String,
}

/// Sentinel at a corridor mouth whose collision follows the owning
/// room's clearance.
#[derive(Component, Debug)]
pub struct EntranceWall {
    pub room_id: String,
}

/// Overlay hiding a room until a script reveals it.
#[derive(Component, Debug)]
pub struct FogOverlay {
    pub room_id: String,
}

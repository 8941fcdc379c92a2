//! Layout domain: room/corridor geometry and the static bodies built from it.

mod components;
mod geometry;
mod spawn;

#[cfg(test)]
mod tests;

pub use components::{DoorTile, EntranceWall, FogOverlay, Wall};
pub use geometry::*;
pub use spawn::{
    ENTRANCE_GUARD_COLOR, ENTRANCE_OPEN_COLOR, ENTRANCE_SEALED_COLOR, spawn_door,
    spawn_entrance_wall, spawn_floor, spawn_fog, spawn_wall,
};

//! Rooms domain: clearance tracking, doors, gates and one-shot triggers.

mod entrance;
mod events;
mod gates;
mod progress;
mod systems;
mod triggers;
mod warning;

#[cfg(test)]
mod tests;

pub use entrance::{EntranceWallMode, entrance_wall_mode};
pub use events::RoomClearedEvent;
pub use gates::{DoorLedger, GateBook, GateFact};
pub use progress::{PlayerWallet, RoomProgress, RoomState};
pub use triggers::{TriggerBook, evaluate_trigger, region_contains};
pub use warning::{WarningZone, spawn_warning_zone};

use bevy::prelude::*;

use crate::level::LevelSet;
use crate::rooms::entrance::update_entrance_walls;
pub(crate) use crate::rooms::systems::{
    check_spatial_triggers, evaluate_gates, handle_enemy_deaths, handle_room_clears,
};
use crate::rooms::warning::check_warning_zones;

pub struct RoomsPlugin;

impl Plugin for RoomsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RoomProgress>()
            .init_resource::<PlayerWallet>()
            .init_resource::<DoorLedger>()
            .init_resource::<GateBook>()
            .init_resource::<TriggerBook>()
            .add_message::<RoomClearedEvent>()
            .add_systems(
                Update,
                (
                    handle_enemy_deaths,
                    handle_room_clears,
                    evaluate_gates,
                    update_entrance_walls,
                )
                    .chain()
                    .in_set(LevelSet::Progress),
            )
            .add_systems(
                Update,
                (check_spatial_triggers, check_warning_zones).in_set(LevelSet::Triggers),
            );
    }
}

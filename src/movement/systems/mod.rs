//! Movement domain: system modules for input, locomotion and aim.

pub(crate) mod aim;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use aim::{aim_point, update_aim_target, update_crosshair};
pub(crate) use input::{latch_fire_while_paused, read_input};
pub(crate) use movement::{apply_player_movement, camera_follow, intent_velocity, snap_camera_to_player};

//! Debug domain: hotkeys for invincibility, room clearing and progress dumps.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use serde_json::{Value, json};

use crate::combat::{DeathReports, Enemy, Health, Invulnerable};
use crate::debug::state::DebugState;
use crate::movement::Player;
use crate::rooms::{DoorLedger, GateBook, PlayerWallet, RoomProgress};

/// Everything the tracker knows, as one JSON document. Sets are sorted so
/// dumps diff cleanly.
pub(crate) fn progress_snapshot(
    progress: &RoomProgress,
    gates: &GateBook,
    doors: &DoorLedger,
    wallet: &PlayerWallet,
) -> Value {
    let rooms: Vec<Value> = progress
        .rooms()
        .map(|room| {
            json!({
                "id": room.id,
                "cleared": room.is_cleared,
                "boss_triggered": room.boss_triggered,
                "friend_triggered": room.friend_triggered,
            })
        })
        .collect();
    let mut fired: Vec<&String> = gates.fired().collect();
    fired.sort();
    let mut opened: Vec<&String> = doors.opened().collect();
    opened.sort();

    json!({
        "coins": wallet.coins,
        "rooms": rooms,
        "gates_fired": fired,
        "doors_opened": opened,
    })
}

/// Read-only view of the level's progress.
#[derive(SystemParam)]
pub(crate) struct TrackerView<'w> {
    progress: Res<'w, RoomProgress>,
    gates: Res<'w, GateBook>,
    doors: Res<'w, DoorLedger>,
    wallet: Res<'w, PlayerWallet>,
}

pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    tracker: TrackerView,
    mut player_query: Query<(&Transform, &mut Invulnerable), With<Player>>,
    mut enemy_query: Query<(Entity, &Enemy, &mut Health)>,
    mut reports: DeathReports,
) {
    // F1: Toggle invincibility
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.invincible = !debug_state.invincible;
        if !debug_state.invincible {
            for (_, mut invuln) in &mut player_query {
                invuln.until = 0.0;
            }
        }
        info!(
            "[DEBUG] Invincibility {}",
            if debug_state.invincible { "ON" } else { "OFF" }
        );
    }

    // F2: Kill everything in the player's room
    if keyboard.just_pressed(KeyCode::F2) {
        let room = player_query.single().ok().and_then(|(transform, _)| {
            tracker
                .progress
                .room_at(transform.translation.truncate())
        });
        match room {
            Some(room) => {
                let killed = kill_room_enemies(&room.id, &mut enemy_query, &mut reports);
                info!("[DEBUG] Killed {} enemies in {}", killed, room.id);
            }
            None => info!("[DEBUG] Player is not inside a room"),
        }
    }

    // F3: Dump progress
    if keyboard.just_pressed(KeyCode::F3) {
        let snapshot = progress_snapshot(
            &tracker.progress,
            &tracker.gates,
            &tracker.doors,
            &tracker.wallet,
        );
        info!("[DEBUG] Progress: {}", snapshot);
    }
}

/// Zero the health of every live enemy in `room_id` and report each death,
/// so clearance and boss gates go through the normal tracker path.
pub(crate) fn kill_room_enemies(
    room_id: &str,
    enemy_query: &mut Query<(Entity, &Enemy, &mut Health)>,
    reports: &mut DeathReports,
) -> usize {
    let mut killed = 0;
    for (entity, enemy, mut health) in enemy_query.iter_mut() {
        if enemy.room_id != room_id || health.is_dead() {
            continue;
        }
        health.current = 0.0;
        reports.report(entity, enemy);
        killed += 1;
    }
    killed
}

/// Hold the invulnerability window open while invincible.
pub(crate) fn apply_invincibility(
    debug_state: Res<DebugState>,
    mut player_query: Query<&mut Invulnerable, With<Player>>,
) {
    if !debug_state.invincible {
        return;
    }
    for mut invuln in &mut player_query {
        invuln.until = f32::INFINITY;
    }
}

//! Rooms domain: clearance, gate and trigger systems.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{BossDefeatedEvent, CoinCollectedEvent, Enemy, EnemyDiedEvent, Health};
use crate::content::LevelAction;
use crate::level::{LevelActionEvent, ProjectDeployedEvent};
use crate::movement::Player;
use crate::narrative::{DialogueLibrary, DialogueRequest};
use crate::rooms::events::RoomClearedEvent;
use crate::rooms::gates::{GateBook, GateFact};
use crate::rooms::progress::RoomProgress;
use crate::rooms::triggers::{TriggerBook, evaluate_trigger};

fn emit_all(writer: &mut MessageWriter<LevelActionEvent>, actions: Vec<LevelAction>) {
    for action in actions {
        writer.write(LevelActionEvent { action });
    }
}

/// Re-count the dead enemy's room; clear it when nobody is left standing.
pub(crate) fn handle_enemy_deaths(
    mut deaths: MessageReader<EnemyDiedEvent>,
    mut progress: ResMut<RoomProgress>,
    q_enemies: Query<(Entity, &Enemy, &Health)>,
    mut cleared: MessageWriter<RoomClearedEvent>,
) {
    for death in deaths.read() {
        // The dying enemy may not have had its health zeroed yet
        let remaining = q_enemies
            .iter()
            .filter(|(entity, enemy, health)| {
                *entity != death.entity && enemy.room_id == death.room_id && !health.is_dead()
            })
            .count();

        if progress.check_room_completion(&death.room_id, remaining) {
            info!("[ROOM] '{}' cleared", death.room_id);
            cleared.write(RoomClearedEvent {
                room_id: death.room_id.clone(),
            });
        } else if remaining > 0 {
            debug!("[ROOM] '{}' has {} enemies left", death.room_id, remaining);
        }
    }
}

pub(crate) fn handle_room_clears(
    mut cleared: MessageReader<RoomClearedEvent>,
    mut actions: MessageWriter<LevelActionEvent>,
) {
    for event in cleared.read() {
        actions.write(LevelActionEvent {
            action: LevelAction::SpawnRoomRewards(event.room_id.clone()),
        });
    }
}

/// Feed this frame's coin, clearance, boss and deploy facts to the gates.
pub(crate) fn evaluate_gates(
    mut gates: ResMut<GateBook>,
    mut coins: MessageReader<CoinCollectedEvent>,
    mut cleared: MessageReader<RoomClearedEvent>,
    mut bosses: MessageReader<BossDefeatedEvent>,
    mut deployed: MessageReader<ProjectDeployedEvent>,
    mut actions: MessageWriter<LevelActionEvent>,
) {
    for coin in coins.read() {
        let fired = gates.fire_matching(GateFact::Coins(coin.total));
        emit_all(&mut actions, fired);
    }
    for event in cleared.read() {
        let fired = gates.fire_matching(GateFact::RoomCleared(&event.room_id));
        emit_all(&mut actions, fired);
    }
    for boss in bosses.read() {
        info!("[GATE] Boss '{}' defeated in '{}'", boss.tag, boss.room_id);
        let fired = gates.fire_matching(GateFact::BossDefeated(&boss.tag));
        emit_all(&mut actions, fired);
    }
    if deployed.read().count() > 0 {
        let fired = gates.fire_matching(GateFact::ProjectDeployed);
        emit_all(&mut actions, fired);
    }
}

/// Evaluate triggers in order. Stops after one that opens a dialogue so at
/// most one pause is requested per tick.
pub(crate) fn check_spatial_triggers(
    book: Res<TriggerBook>,
    library: Res<DialogueLibrary>,
    mut progress: ResMut<RoomProgress>,
    q_player: Query<&Transform, With<Player>>,
    mut actions: MessageWriter<LevelActionEvent>,
    mut dialogues: MessageWriter<DialogueRequest>,
) {
    let Ok(player) = q_player.single() else {
        return;
    };
    let position = player.translation.truncate();

    for trigger in &book.triggers {
        if !evaluate_trigger(trigger, &mut progress, position) {
            continue;
        }
        info!("[TRIGGER] '{}' fired in '{}'", trigger.id, trigger.room);

        let Some(dialogue_id) = &trigger.dialogue else {
            emit_all(&mut actions, trigger.actions.clone());
            continue;
        };
        let Some(lines) = library.lines(dialogue_id) else {
            warn!("[TRIGGER] Dialogue '{}' not found, running actions", dialogue_id);
            emit_all(&mut actions, trigger.actions.clone());
            continue;
        };
        dialogues.write(DialogueRequest {
            lines: lines.to_vec(),
            on_complete: trigger.actions.clone(),
        });
        break;
    }
}

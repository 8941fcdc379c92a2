//! Level domain: executor for scripted level actions.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::combat::{CombatTuning, EnemyKind, spawn_coin, spawn_enemy};
use crate::content::{BossSpawnDef, ContentRegistry, DoorDef, LevelAction};
use crate::core::{LevelOutcome, LevelOutcomeEvent};
use crate::layout::{DoorTile, FogOverlay, central_spawn_area, spawn_door};
use crate::level::events::{LevelActionEvent, ProjectDeployedEvent};
use crate::level::interact::{spawn_friend, spawn_interactable};
use crate::level::resources::{ActiveLevel, LevelRng};
use crate::narrative::{DialogueLibrary, DialogueRequest, NotificationEvent};
use crate::rooms::DoorLedger;

fn offset(v: (f32, f32)) -> Vec2 {
    Vec2::new(v.0, v.1)
}

fn open_door(
    commands: &mut Commands,
    ledger: &mut DoorLedger,
    q_doors: &Query<(Entity, &DoorTile)>,
    id: &str,
) {
    if !ledger.open(id) {
        debug!("[DOOR] '{}' already open", id);
        return;
    }
    let mut tiles = 0;
    for (entity, tile) in q_doors {
        if tile.door_id == id {
            commands.entity(entity).despawn();
            tiles += 1;
        }
    }
    info!("[DOOR] Opened '{}' ({} tiles)", id, tiles);
}

fn place_door(
    commands: &mut Commands,
    ledger: &DoorLedger,
    q_doors: &Query<(Entity, &DoorTile)>,
    door: &DoorDef,
) {
    if !ledger.can_place(&door.id) {
        warn!("[DOOR] Refusing to place '{}': it was already opened", door.id);
        return;
    }
    if q_doors.iter().any(|(_, tile)| tile.door_id == door.id) {
        debug!("[DOOR] '{}' already placed", door.id);
        return;
    }
    spawn_door(commands, door);
    info!("[DOOR] Placed '{}'", door.id);
}

fn spawn_boss(
    commands: &mut Commands,
    level: &ActiveLevel,
    registry: &ContentRegistry,
    def: &BossSpawnDef,
) {
    let Some(room) = level.def.room(&def.room) else {
        warn!("[LEVEL] Boss '{}' targets missing room '{}'", def.tag, def.room);
        return;
    };
    let Some(archetype) = registry.archetype(&def.archetype) else {
        warn!("[LEVEL] Boss '{}' has unknown archetype '{}'", def.tag, def.archetype);
        return;
    };
    spawn_enemy(
        commands,
        room.center() + offset(def.offset),
        archetype,
        &room.id,
        EnemyKind::from(def.kind),
        Some(def.tag.clone()),
        Some(def.health),
    );
    info!("[LEVEL] {:?} '{}' spawned in '{}'", def.kind, def.tag, room.id);
}

/// Data the executor reads. The level and registry exist only while a
/// level is loaded.
#[derive(SystemParam)]
pub(crate) struct ActionContext<'w> {
    level: Option<Res<'w, ActiveLevel>>,
    registry: Option<Res<'w, ContentRegistry>>,
    tuning: Res<'w, CombatTuning>,
    library: Res<'w, DialogueLibrary>,
}

#[derive(SystemParam)]
pub(crate) struct DoorWorld<'w, 's> {
    ledger: ResMut<'w, DoorLedger>,
    tiles: Query<'w, 's, (Entity, &'static DoorTile)>,
}

/// Messages the executor forwards to other domains.
#[derive(SystemParam)]
pub(crate) struct ActionOutbox<'w> {
    notifications: MessageWriter<'w, NotificationEvent>,
    dialogues: MessageWriter<'w, DialogueRequest>,
    deployed: MessageWriter<'w, ProjectDeployedEvent>,
    outcomes: MessageWriter<'w, LevelOutcomeEvent>,
}

/// Apply every queued action in order. Unknown ids are logged and skipped.
pub(crate) fn execute_level_actions(
    mut commands: Commands,
    mut events: MessageReader<LevelActionEvent>,
    context: ActionContext,
    mut doors: DoorWorld,
    mut rng: Option<ResMut<LevelRng>>,
    q_fog: Query<(Entity, &FogOverlay)>,
    mut outbox: ActionOutbox,
) {
    let (Some(level), Some(registry)) = (context.level.as_deref(), context.registry.as_deref())
    else {
        events.clear();
        return;
    };

    for event in events.read() {
        match &event.action {
            LevelAction::OpenDoor(id) => {
                open_door(&mut commands, &mut doors.ledger, &doors.tiles, id)
            }
            LevelAction::PlaceDoor(door) => {
                place_door(&mut commands, &doors.ledger, &doors.tiles, door)
            }
            LevelAction::SpawnBoss(def) => spawn_boss(&mut commands, level, registry, def),
            LevelAction::SpawnInteractable(def) => {
                let Some(room) = level.def.room(&def.room) else {
                    warn!("[LEVEL] Interactable targets missing room '{}'", def.room);
                    continue;
                };
                spawn_interactable(&mut commands, room.center() + offset(def.offset), def);
            }
            LevelAction::SpawnFriend { room, offset: at } => {
                let Some(room) = level.def.room(room) else {
                    warn!("[LEVEL] Friend targets missing room");
                    continue;
                };
                spawn_friend(&mut commands, room.center() + offset(*at), &room.id);
            }
            LevelAction::SpawnRoomRewards(room_id) => {
                let (Some(room), Some(rng)) = (level.def.room(room_id), rng.as_mut()) else {
                    warn!("[LEVEL] Cannot spawn rewards for '{}'", room_id);
                    continue;
                };
                let area = central_spawn_area(room.center());
                let mut spawned = 0;
                for entry in &room.coins {
                    for _ in 0..entry.count {
                        let at = rng.point_in(area);
                        spawn_coin(&mut commands, at, entry.kind, &context.tuning);
                        spawned += 1;
                    }
                }
                info!("[ROOM] '{}' rewards: {} coins", room_id, spawned);
            }
            LevelAction::RevealRoom(room_id) => {
                for (entity, fog) in &q_fog {
                    if &fog.room_id == room_id {
                        commands.entity(entity).despawn();
                    }
                }
            }
            LevelAction::Notify(text) => {
                outbox.notifications.write(NotificationEvent { text: text.clone() });
            }
            LevelAction::ShowDialogue(id) => {
                let Some(lines) = context.library.lines(id) else {
                    warn!("[LEVEL] Dialogue '{}' not found", id);
                    continue;
                };
                outbox.dialogues.write(DialogueRequest {
                    lines: lines.to_vec(),
                    on_complete: Vec::new(),
                });
            }
            LevelAction::DeployProject => {
                info!("[LEVEL] Project deployed");
                outbox.deployed.write(ProjectDeployedEvent);
            }
            LevelAction::CompleteLevel => {
                info!("[LEVEL] Level '{}' complete", level.def.name);
                outbox.outcomes.write(LevelOutcomeEvent {
                    outcome: LevelOutcome::Won,
                });
            }
        }
    }
}

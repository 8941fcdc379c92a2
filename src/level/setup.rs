//! Level domain: building a level from its definition and tearing it down.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::combat::{
    CombatTuning, EnemyKind, spawn_coin, spawn_enemy, spawn_ground_weapon, spawn_power_up,
};
use crate::content::{ContentRegistry, LevelDef, RoomDef};
use crate::core::{HudUpdateEvent, LevelEntity, RunConfig};
use crate::layout::{
    CorridorEnd, build_corridor, build_room, central_spawn_area, corridor_orientation,
    spawn_door, spawn_entrance_wall, spawn_floor, spawn_fog, spawn_wall, world_bounds,
};
use crate::level::resources::{ActiveLevel, LevelRng, MinimapData, MinimapRoom};
use crate::movement::{PlayerTuning, spawn_crosshair, spawn_player};
use crate::narrative::DialogueLibrary;
use crate::rooms::{
    DoorLedger, EntranceWallMode, GateBook, PlayerWallet, RoomProgress, TriggerBook,
    spawn_warning_zone,
};

/// Where the starting weapon lies, relative to the start room center.
const WEAPON_OFFSET: Vec2 = Vec2::new(96.0, 0.0);

/// Rooms that start cleared never get an entrance wall.
fn corridor_end(room: &RoomDef, entrance_walls: bool) -> CorridorEnd<'_> {
    CorridorEnd {
        room_id: &room.id,
        center: room.center(),
        entrance_wall: entrance_walls && !room.initially_cleared,
    }
}

/// Static geometry: floors, wall rings, corridors, entrance walls, doors and
/// fog. Returns the minimap outline.
fn build_geometry(commands: &mut Commands, level: &LevelDef) -> MinimapData {
    let mut minimap = MinimapData {
        world: world_bounds(),
        ..default()
    };

    for room in &level.rooms {
        let layout = build_room(room.center(), &room.openings);
        spawn_floor(commands, layout.bounds);
        for tile in &layout.wall_tiles {
            spawn_wall(commands, *tile);
        }
        if room.fogged {
            spawn_fog(commands, &room.id, layout.bounds);
        }
        minimap.rooms.push(MinimapRoom {
            id: room.id.clone(),
            rect: layout.bounds,
        });
    }

    let initial_walls = EntranceWallMode::ProjectilesOnly;
    for corridor in &level.corridors {
        let (Some(a), Some(b)) = (level.room(&corridor.from), level.room(&corridor.to)) else {
            warn!(
                "[LEVEL] Corridor {} -> {} references a missing room",
                corridor.from, corridor.to
            );
            continue;
        };
        let Some(orientation) = corridor_orientation(a.center(), b.center()) else {
            warn!("[LEVEL] Corridor {} -> {} is not aligned", a.id, b.id);
            continue;
        };

        let layout = build_corridor(
            corridor_end(a, corridor.entrance_walls),
            corridor_end(b, corridor.entrance_walls),
            orientation,
        );

        spawn_floor(commands, layout.floor);
        for tile in &layout.wall_tiles {
            spawn_wall(commands, *tile);
        }
        for wall in &layout.entrance_walls {
            spawn_entrance_wall(commands, wall, initial_walls.layers(), initial_walls.color());
        }
        minimap.corridors.push(layout.floor);
    }

    for door in &level.doors {
        spawn_door(commands, door);
    }

    minimap
}

/// Build the level selected by `RunConfig`. Without content this logs and
/// leaves the world empty.
pub(crate) fn build_level(
    mut commands: Commands,
    registry: Option<Res<ContentRegistry>>,
    run_config: Res<RunConfig>,
    player_tuning: Res<PlayerTuning>,
    combat_tuning: Res<CombatTuning>,
    mut hud: MessageWriter<HudUpdateEvent>,
) {
    let Some(registry) = registry else {
        error!("[LEVEL] No content loaded, cannot build a level");
        return;
    };
    let index = run_config.level_index;
    let Some(level) = registry.level(index) else {
        error!("[LEVEL] Level index {} out of range", index);
        return;
    };
    let Some(start) = level.room(&level.start_room) else {
        error!("[LEVEL] Start room '{}' missing", level.start_room);
        return;
    };

    let minimap = build_geometry(&mut commands, level);

    for zone in &level.warning_zones {
        spawn_warning_zone(&mut commands, zone);
    }

    let start_center = start.center();
    spawn_player(&mut commands, start_center, &player_tuning);
    spawn_crosshair(&mut commands, start_center);
    spawn_ground_weapon(&mut commands, start_center + WEAPON_OFFSET, &combat_tuning);

    let mut rng = LevelRng(ChaCha8Rng::seed_from_u64(run_config.level_seed()));
    let mut enemy_count = 0;
    for room in &level.rooms {
        let area = central_spawn_area(room.center());

        for entry in &room.starting_coins {
            for _ in 0..entry.count {
                spawn_coin(&mut commands, rng.point_in(area), entry.kind, &combat_tuning);
            }
        }
        for _ in 0..room.power_ups {
            spawn_power_up(&mut commands, rng.point_in(area), &combat_tuning);
        }
        for entry in &room.enemies {
            let Some(archetype) = registry.archetype(&entry.archetype) else {
                warn!("[LEVEL] Unknown archetype '{}' in '{}'", entry.archetype, room.id);
                continue;
            };
            for _ in 0..entry.count {
                spawn_enemy(
                    &mut commands,
                    rng.point_in(area),
                    archetype,
                    &room.id,
                    EnemyKind::Normal,
                    None,
                    None,
                );
                enemy_count += 1;
            }
        }
    }

    commands.insert_resource(RoomProgress::from_level(level));
    commands.insert_resource(GateBook::new(level.gates.clone()));
    commands.insert_resource(TriggerBook {
        triggers: level.triggers.clone(),
    });
    commands.insert_resource(DoorLedger::default());
    commands.insert_resource(PlayerWallet::default());
    commands.insert_resource(DialogueLibrary::from_level(level));
    commands.insert_resource(minimap);
    commands.insert_resource(rng);
    commands.insert_resource(ActiveLevel {
        index,
        def: level.clone(),
    });

    hud.write(HudUpdateEvent::Health {
        current: player_tuning.max_health,
        max: player_tuning.max_health,
    });
    hud.write(HudUpdateEvent::Coins(0));

    info!(
        "[LEVEL] Built level {} '{}': {} rooms, {} corridors, {} enemies",
        index + 1,
        level.name,
        level.rooms.len(),
        level.corridors.len(),
        enemy_count
    );
}

pub(crate) fn teardown_level(mut commands: Commands, q_level: Query<Entity, With<LevelEntity>>) {
    let mut count = 0;
    for entity in &q_level {
        commands.entity(entity).despawn();
        count += 1;
    }
    commands.remove_resource::<ActiveLevel>();
    debug!("[LEVEL] Despawned {} level entities", count);
}

//! Validation for level layouts and cross-references between definitions.
//!
//! Layout mistakes (misaligned corridors, missing openings) are caught here
//! so the runtime layout builder never has to guard against them.

use std::collections::HashSet;

use bevy::math::Rect;

use super::data::*;
use super::registry::ContentRegistry;
use crate::layout::{
    ROOM_HEIGHT, ROOM_WIDTH, corridor_orientation, door_tiles, rects_overlap, room_bounds,
};

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub level_id: String,
    pub source_type: &'static str,
    pub source_id: String,
    pub problem: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Level '{}': {} '{}' {}",
            self.level_id, self.source_type, self.source_id, self.problem
        )
    }
}

impl std::error::Error for ValidationError {}

/// Helper macro for checking a reference exists
macro_rules! check_ref {
    ($errors:expr, $level:expr, $known:expr, $source_type:expr, $source_id:expr, $field:expr, $target_type:expr, $ref_id:expr) => {
        if !$known.contains($ref_id.as_str()) {
            $errors.push(ValidationError {
                level_id: $level.id.clone(),
                source_type: $source_type,
                source_id: $source_id.to_string(),
                problem: format!(
                    "references missing {} '{}' in field '{}'",
                    $target_type, $ref_id, $field
                ),
            });
        }
    };
}

/// Validate every level in the registry.
/// Returns a list of validation errors, empty if all levels are sound.
pub fn validate_content(registry: &ContentRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if registry.levels.is_empty() {
        errors.push(ValidationError {
            level_id: String::new(),
            source_type: "Registry",
            source_id: "levels".to_string(),
            problem: "contains no levels".to_string(),
        });
    }
    for level in &registry.levels {
        validate_level(level, registry, &mut errors);
    }
    errors
}

pub fn validate_level(level: &LevelDef, registry: &ContentRegistry, errors: &mut Vec<ValidationError>) {
    let mut push = |source_type: &'static str, source_id: &str, problem: String| {
        errors.push(ValidationError {
            level_id: level.id.clone(),
            source_type,
            source_id: source_id.to_string(),
            problem,
        });
    };

    // Rooms
    let mut room_ids: HashSet<&str> = HashSet::new();
    for room in &level.rooms {
        if !room_ids.insert(room.id.as_str()) {
            push("Room", &room.id, "is defined more than once".to_string());
        }
        for entry in &room.enemies {
            if registry.archetype(&entry.archetype).is_none() {
                push(
                    "Room",
                    &room.id,
                    format!("spawns unknown archetype '{}'", entry.archetype),
                );
            }
        }
    }

    match level.room(&level.start_room) {
        None => push(
            "Level",
            &level.id,
            format!("start room '{}' does not exist", level.start_room),
        ),
        Some(start) if !start.initially_cleared => push(
            "Room",
            &start.id,
            "is the start room but is not initially cleared".to_string(),
        ),
        Some(_) => {}
    }

    // Corridors
    for corridor in &level.corridors {
        let label = format!("{}->{}", corridor.from, corridor.to);
        let (Some(a), Some(b)) = (level.room(&corridor.from), level.room(&corridor.to)) else {
            push("Corridor", &label, "connects a room that does not exist".to_string());
            continue;
        };
        let Some(orientation) = corridor_orientation(a.center(), b.center()) else {
            push(
                "Corridor",
                &label,
                "connects rooms that share neither a row nor a column".to_string(),
            );
            continue;
        };
        let (near, far, gap, needs) = match orientation {
            Orientation::Horizontal => {
                let (l, r) = if a.center.0 < b.center.0 { (a, b) } else { (b, a) };
                let gap = (r.center.0 - l.center.0) - ROOM_WIDTH;
                (l, r, gap, (Opening::Right, Opening::Left))
            }
            Orientation::Vertical => {
                let (lo, hi) = if a.center.1 < b.center.1 { (a, b) } else { (b, a) };
                let gap = (hi.center.1 - lo.center.1) - ROOM_HEIGHT;
                (lo, hi, gap, (Opening::Top, Opening::Bottom))
            }
        };
        if gap <= 0.0 {
            push(
                "Corridor",
                &label,
                "joins rooms whose footprints touch or overlap".to_string(),
            );
        }
        if !near.has_opening(needs.0) {
            push("Room", &near.id, format!("lacks a {:?} opening for corridor {}", needs.0, label));
        }
        if !far.has_opening(needs.1) {
            push("Room", &far.id, format!("lacks a {:?} opening for corridor {}", needs.1, label));
        }
    }

    // Doors: initial ids are unique, opened ids exist somewhere
    let mut door_ids: HashSet<&str> = HashSet::new();
    for door in &level.doors {
        if !door_ids.insert(door.id.as_str()) {
            push("Door", &door.id, "is placed more than once at level start".to_string());
        }
    }

    let actions = level.all_actions();
    for action in &actions {
        if let LevelAction::PlaceDoor(door) = action {
            door_ids.insert(door.id.as_str());
        }
    }
    let boss_tags: HashSet<&str> = actions
        .iter()
        .filter_map(|action| match action {
            LevelAction::SpawnBoss(spawn) => Some(spawn.tag.as_str()),
            _ => None,
        })
        .collect();
    let boss_rooms: HashSet<&str> = actions
        .iter()
        .filter_map(|action| match action {
            LevelAction::SpawnBoss(spawn) => Some(spawn.room.as_str()),
            _ => None,
        })
        .collect();
    let dialogue_ids: HashSet<&str> = level.dialogues.iter().map(|d| d.id.as_str()).collect();

    // A room that starts locked with nobody to defeat would never clear
    for room in &level.rooms {
        if !room.initially_cleared && room.enemies.is_empty() && !boss_rooms.contains(room.id.as_str()) {
            push(
                "Room",
                &room.id,
                "starts uncleared but has no enemies and no boss spawn".to_string(),
            );
        }
    }

    for gate in &level.gates {
        match &gate.when {
            GateCondition::RoomCleared(room) => {
                check_ref!(errors, level, room_ids, "Gate", gate.id, "when", "Room", room);
            }
            GateCondition::BossDefeated(tag) => {
                check_ref!(errors, level, boss_tags, "Gate", gate.id, "when", "BossTag", tag);
            }
            GateCondition::CoinsCollected(_) | GateCondition::ProjectDeployed => {}
        }
    }

    for trigger in &level.triggers {
        check_ref!(errors, level, room_ids, "Trigger", trigger.id, "room", "Room", trigger.room);
        if let Some(required) = &trigger.requires_cleared {
            check_ref!(
                errors,
                level,
                room_ids,
                "Trigger",
                trigger.id,
                "requires_cleared",
                "Room",
                required
            );
        }
        if let Some(dialogue) = &trigger.dialogue {
            check_ref!(
                errors,
                level,
                dialogue_ids,
                "Trigger",
                trigger.id,
                "dialogue",
                "Dialogue",
                dialogue
            );
        }
    }

    for action in &actions {
        let source = "Action";
        match action {
            LevelAction::OpenDoor(id) => {
                check_ref!(errors, level, door_ids, source, "OpenDoor", "door", "Door", id);
            }
            LevelAction::SpawnBoss(spawn) => {
                check_ref!(errors, level, room_ids, source, spawn.tag, "room", "Room", spawn.room);
                if registry.archetype(&spawn.archetype).is_none() {
                    errors.push(ValidationError {
                        level_id: level.id.clone(),
                        source_type: source,
                        source_id: spawn.tag.clone(),
                        problem: format!("spawns unknown archetype '{}'", spawn.archetype),
                    });
                }
            }
            LevelAction::SpawnInteractable(def) => {
                check_ref!(errors, level, room_ids, source, def.prompt, "room", "Room", def.room);
            }
            LevelAction::SpawnFriend { room, .. } => {
                check_ref!(errors, level, room_ids, source, "SpawnFriend", "room", "Room", room);
            }
            LevelAction::SpawnRoomRewards(room) => {
                check_ref!(errors, level, room_ids, source, "SpawnRoomRewards", "room", "Room", room);
            }
            LevelAction::RevealRoom(room) => {
                check_ref!(errors, level, room_ids, source, "RevealRoom", "room", "Room", room);
            }
            LevelAction::ShowDialogue(id) => {
                check_ref!(errors, level, dialogue_ids, source, "ShowDialogue", "id", "Dialogue", id);
            }
            LevelAction::PlaceDoor(_)
            | LevelAction::Notify(_)
            | LevelAction::DeployProject
            | LevelAction::CompleteLevel => {}
        }
    }
}

/// The area a trigger can fire in, clipped to its room.
fn trigger_area(region: TriggerRegion, bounds: Rect) -> Rect {
    match region {
        TriggerRegion::InsideRoom { margin } => bounds.inflate(margin),
        TriggerRegion::Quadrant(quadrant) => {
            let c = bounds.center();
            match quadrant {
                Quadrant::UpperLeft => Rect::new(bounds.min.x, c.y, c.x, bounds.max.y),
                Quadrant::UpperRight => Rect::new(c.x, c.y, bounds.max.x, bounds.max.y),
                Quadrant::LowerLeft => Rect::new(bounds.min.x, bounds.min.y, c.x, c.y),
                Quadrant::LowerRight => Rect::new(c.x, bounds.min.y, bounds.max.x, c.y),
            }
        }
    }
}

/// Doors a trigger places must not land on a player of `player_size` who is
/// standing anywhere the trigger can fire; the player would be wedged in the
/// door or shut out of the room.
pub fn validate_door_drops(
    registry: &ContentRegistry,
    player_size: f32,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for level in &registry.levels {
        for trigger in &level.triggers {
            let Some(room) = level.room(&trigger.room) else {
                continue;
            };
            let reach = trigger_area(trigger.region, room_bounds(room.center()))
                .inflate(player_size / 2.0);
            for action in &trigger.actions {
                let LevelAction::PlaceDoor(door) = action else {
                    continue;
                };
                let blocked = door_tiles(door.center(), door.orientation)
                    .into_iter()
                    .any(|tile| rects_overlap(tile, reach));
                if blocked {
                    errors.push(ValidationError {
                        level_id: level.id.clone(),
                        source_type: "Trigger",
                        source_id: trigger.id.clone(),
                        problem: format!(
                            "places door '{}' where the player may be standing",
                            door.id
                        ),
                    });
                }
            }
        }
    }
    errors
}

//! Content domain: tests for parsing and validating level data.

use super::loader::{DEFAULTS_FILE, LEVELS_FILE, load_from_sources, parse_data_file};
use super::validation::{validate_door_drops, validate_level};
use super::*;

fn archetype(id: &str) -> ArchetypeDef {
    ArchetypeDef {
        id: id.to_string(),
        health: 100.0,
        speed: 100.0,
        size: 32.0,
        color: (1.0, 1.0, 1.0),
    }
}

fn registry_with(level: LevelDef) -> ContentRegistry {
    let mut registry = ContentRegistry::default();
    for id in ["spirit", "boss"] {
        registry.archetypes.insert(id.to_string(), archetype(id));
    }
    registry.levels.push(level);
    registry
}

fn room(id: &str, x: f32, y: f32, openings: &[Opening]) -> RoomDef {
    RoomDef {
        id: id.to_string(),
        center: (x, y),
        openings: openings.to_vec(),
        initially_cleared: false,
        enemies: vec![SpawnEntry {
            archetype: "spirit".to_string(),
            count: 1,
        }],
        coins: Vec::new(),
        starting_coins: Vec::new(),
        power_ups: 0,
        fogged: false,
    }
}

fn corridor(from: &str, to: &str) -> CorridorDef {
    CorridorDef {
        from: from.to_string(),
        to: to.to_string(),
        entrance_walls: true,
    }
}

/// Two rooms joined by a horizontal corridor; valid as built.
fn two_room_level() -> LevelDef {
    let mut start = room("start", 2500.0, 2500.0, &[Opening::Right]);
    start.initially_cleared = true;
    start.enemies.clear();
    LevelDef {
        id: "test".to_string(),
        name: "Test".to_string(),
        start_room: "start".to_string(),
        rooms: vec![start, room("east", 3524.0, 2500.0, &[Opening::Left])],
        corridors: vec![corridor("start", "east")],
        doors: Vec::new(),
        gates: Vec::new(),
        triggers: Vec::new(),
        warning_zones: Vec::new(),
        dialogues: Vec::new(),
    }
}

fn problems(level: LevelDef) -> Vec<String> {
    let registry = registry_with(level);
    validate_content(&registry)
        .iter()
        .map(|e| e.to_string())
        .collect()
}

// -----------------------------------------------------------------------------
// Embedded content tests
// -----------------------------------------------------------------------------

#[test]
fn test_embedded_content_loads() {
    let (registry, defaults) = load_all_content().expect("embedded content should parse");
    assert_eq!(registry.level_count(), 3);
    assert_eq!(defaults.schema_version, 1);
    assert!(registry.archetype("spirit").is_some());
    assert!(registry.archetype("boss").is_some());
}

#[test]
fn test_embedded_content_validates() {
    let (registry, _) = load_all_content().expect("embedded content should parse");
    let errors = validate_content(&registry);
    assert!(
        errors.is_empty(),
        "unexpected validation errors: {:?}",
        errors.iter().map(|e| e.to_string()).collect::<Vec<_>>()
    );
}

#[test]
fn test_levels_keep_authored_order() {
    let (registry, _) = load_all_content().unwrap();
    let ids: Vec<&str> = registry.levels.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["level_1", "level_2", "level_3"]);
}

#[test]
fn test_first_level_gates_miniboss_behind_five_coins() {
    let (registry, _) = load_all_content().unwrap();
    let level = registry.level(0).unwrap();
    let gate = level
        .gates
        .iter()
        .find(|g| g.when == GateCondition::CoinsCollected(5))
        .expect("coin gate");
    assert!(gate.actions.contains(&LevelAction::OpenDoor("miniboss_door".to_string())));
}

#[test]
fn test_embedded_defaults_match_tuning() {
    let (_, defaults) = load_all_content().unwrap();
    assert_eq!(defaults.player.max_health, 100.0);
    assert_eq!(defaults.player.invulnerability_secs, 1.0);
    assert_eq!(defaults.weapon.bullet_damage, 50.0);
    assert_eq!(defaults.enemy.contact_damage, 10.0);
}

// -----------------------------------------------------------------------------
// Parse error tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_error_names_file() {
    let result = parse_data_file::<LevelDef>(LEVELS_FILE, "(schema_version: 1, items: [ (id: ");
    let err = result.unwrap_err();
    assert_eq!(err.file, LEVELS_FILE);
    assert!(err.to_string().starts_with("Failed to load levels.ron"));
}

#[test]
fn test_broken_defaults_abort_loading() {
    let errors = load_from_sources("(schema_version: 1, items: [])", "(").unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].file, DEFAULTS_FILE);
}

#[test]
fn test_empty_registry_is_rejected() {
    let errors = validate_content(&ContentRegistry::default());
    assert_eq!(errors.len(), 1);
    assert!(errors[0].problem.contains("no levels"));
}

// -----------------------------------------------------------------------------
// Layout validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_valid_level_has_no_errors() {
    assert!(problems(two_room_level()).is_empty());
}

#[test]
fn test_misaligned_corridor_is_reported() {
    let mut level = two_room_level();
    level.rooms[1].center = (3524.0, 3396.0);
    let found = problems(level);
    assert_eq!(found.len(), 1);
    assert!(found[0].contains("share neither a row nor a column"));
}

#[test]
fn test_overlapping_rooms_are_reported() {
    let mut level = two_room_level();
    level.rooms[1].center = (3000.0, 2500.0);
    let found = problems(level);
    assert!(found.iter().any(|p| p.contains("touch or overlap")));
}

#[test]
fn test_missing_facing_opening_is_reported() {
    let mut level = two_room_level();
    level.rooms[1].openings = vec![Opening::Top];
    let found = problems(level);
    assert_eq!(found.len(), 1);
    assert!(found[0].contains("Room 'east' lacks a Left opening"));
}

#[test]
fn test_unknown_corridor_room_is_reported() {
    let mut level = two_room_level();
    level.corridors.push(corridor("start", "nowhere"));
    let found = problems(level);
    assert!(found.iter().any(|p| p.contains("does not exist")));
}

#[test]
fn test_uncleared_start_room_is_reported() {
    let mut level = two_room_level();
    level.rooms[0].initially_cleared = false;
    level.rooms[0].enemies = vec![SpawnEntry {
        archetype: "spirit".to_string(),
        count: 1,
    }];
    let found = problems(level);
    assert_eq!(found.len(), 1);
    assert!(found[0].contains("not initially cleared"));
}

#[test]
fn test_empty_locked_room_is_reported() {
    let mut level = two_room_level();
    level.rooms[1].enemies.clear();
    let found = problems(level);
    assert_eq!(found.len(), 1);
    assert!(found[0].contains("no enemies and no boss spawn"));
}

#[test]
fn test_boss_spawn_satisfies_empty_room() {
    let mut level = two_room_level();
    level.rooms[1].enemies.clear();
    level.triggers.push(TriggerDef {
        id: "boss_appears".to_string(),
        room: "east".to_string(),
        flag: TriggerFlag::Boss,
        region: TriggerRegion::InsideRoom { margin: 0.0 },
        requires_cleared: None,
        dialogue: None,
        actions: vec![LevelAction::SpawnBoss(BossSpawnDef {
            room: "east".to_string(),
            tag: "big".to_string(),
            kind: BossKind::Boss,
            archetype: "boss".to_string(),
            health: 750.0,
            offset: (0.0, 0.0),
        })],
    });
    assert!(problems(level).is_empty());
}

#[test]
fn test_unknown_archetype_is_reported() {
    let mut level = two_room_level();
    level.rooms[1].enemies[0].archetype = "dragon".to_string();
    let found = problems(level);
    assert!(found.iter().any(|p| p.contains("unknown archetype 'dragon'")));
}

// -----------------------------------------------------------------------------
// Reference validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_gate_references_are_checked() {
    let mut level = two_room_level();
    level.gates.push(GateDef {
        id: "g".to_string(),
        when: GateCondition::RoomCleared("ghost".to_string()),
        actions: vec![LevelAction::OpenDoor("nope".to_string())],
    });
    level.gates.push(GateDef {
        id: "b".to_string(),
        when: GateCondition::BossDefeated("nobody".to_string()),
        actions: Vec::new(),
    });
    let found = problems(level);
    assert_eq!(found.len(), 3);
    assert!(found.iter().any(|p| p.contains("missing Room 'ghost'")));
    assert!(found.iter().any(|p| p.contains("missing Door 'nope'")));
    assert!(found.iter().any(|p| p.contains("missing BossTag 'nobody'")));
}

#[test]
fn test_placed_doors_can_be_opened() {
    let mut level = two_room_level();
    level.gates.push(GateDef {
        id: "place".to_string(),
        when: GateCondition::CoinsCollected(1),
        actions: vec![LevelAction::PlaceDoor(DoorDef {
            id: "late".to_string(),
            center: (3012.0, 2500.0),
            orientation: Orientation::Vertical,
        })],
    });
    level.gates.push(GateDef {
        id: "open".to_string(),
        when: GateCondition::RoomCleared("east".to_string()),
        actions: vec![LevelAction::OpenDoor("late".to_string())],
    });
    assert!(problems(level).is_empty());
}

#[test]
fn test_nested_confirm_actions_are_checked() {
    let mut level = two_room_level();
    level.gates.push(GateDef {
        id: "terminal".to_string(),
        when: GateCondition::RoomCleared("east".to_string()),
        actions: vec![LevelAction::SpawnInteractable(InteractableDef {
            room: "east".to_string(),
            offset: (0.0, 0.0),
            prompt: "Deploy?".to_string(),
            hint: String::new(),
            on_confirm: vec![LevelAction::ShowDialogue("missing".to_string())],
        })],
    });
    assert_eq!(level.all_actions().len(), 2);
    let found = problems(level);
    assert_eq!(found.len(), 1);
    assert!(found[0].contains("missing Dialogue 'missing'"));
}

#[test]
fn test_trigger_references_are_checked() {
    let level = {
        let mut level = two_room_level();
        level.triggers.push(TriggerDef {
            id: "t".to_string(),
            room: "east".to_string(),
            flag: TriggerFlag::Friend,
            region: TriggerRegion::Quadrant(Quadrant::UpperRight),
            requires_cleared: Some("attic".to_string()),
            dialogue: Some("chat".to_string()),
            actions: Vec::new(),
        });
        level
    };
    let registry = registry_with(level.clone());
    let mut errors = Vec::new();
    validate_level(&level, &registry, &mut errors);
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.source_type == "Trigger" && e.source_id == "t"));
}

// -----------------------------------------------------------------------------
// Door drop tests
// -----------------------------------------------------------------------------

#[test]
fn test_embedded_door_drops_clear_the_player() {
    let (registry, defaults) = load_all_content().unwrap();
    let errors = validate_door_drops(&registry, defaults.player.size);
    assert!(
        errors.is_empty(),
        "unexpected door drop errors: {:?}",
        errors.iter().map(|e| e.to_string()).collect::<Vec<_>>()
    );
}

#[test]
fn test_door_dropped_in_entry_doorway_is_reported() {
    let (mut registry, defaults) = load_all_content().unwrap();
    let trigger = registry.levels[2]
        .triggers
        .iter_mut()
        .find(|t| t.id == "bernar_appears")
        .expect("miniboss trigger");
    // Firing on the room edge leaves the player standing in the doorway
    trigger.region = TriggerRegion::InsideRoom { margin: 0.0 };

    let errors = validate_door_drops(&registry, defaults.player.size);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].source_id, "bernar_appears");
    assert!(errors[0].problem.contains("miniboss_exit_door"));
}

#[test]
fn test_quadrant_trigger_door_drop_is_checked() {
    let mut level = two_room_level();
    level.triggers.push(TriggerDef {
        id: "corner".to_string(),
        room: "east".to_string(),
        flag: TriggerFlag::Friend,
        region: TriggerRegion::Quadrant(Quadrant::UpperRight),
        requires_cleared: None,
        dialogue: None,
        actions: vec![LevelAction::PlaceDoor(DoorDef {
            id: "far_corner".to_string(),
            center: (3780.0, 2700.0),
            orientation: Orientation::Horizontal,
        })],
    });
    let registry = registry_with(level);
    let errors = validate_door_drops(&registry, 32.0);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].source_type, "Trigger");
}

//! Rooms domain: tests for clearance, gates, triggers and entrance walls.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::entrance::{entrance_wall_mode, update_entrance_walls};
use super::systems::{
    check_spatial_triggers, evaluate_gates, handle_enemy_deaths, handle_room_clears,
};
use super::*;
use crate::combat::{
    BossDefeatedEvent, CoinCollectedEvent, Enemy, EnemyDiedEvent, EnemyKind, Health,
};
use crate::content::{
    CoinKind, LevelAction, LevelDef, Quadrant, TriggerFlag, TriggerRegion, WarningZoneDef,
    load_all_content,
};
use crate::layout::{EntranceWall, room_bounds};
use crate::level::{LevelActionEvent, ProjectDeployedEvent};
use crate::movement::{GameLayer, Player, PlayerTuning};
use crate::narrative::{DialogueLibrary, DialogueRequest};

fn level(index: usize) -> LevelDef {
    let (registry, _) = load_all_content().expect("embedded content should parse");
    registry.level(index).cloned().expect("level exists")
}

#[derive(Resource, Default)]
struct ActionLog(Vec<LevelAction>);

fn record_actions(mut reader: MessageReader<LevelActionEvent>, mut log: ResMut<ActionLog>) {
    log.0.extend(reader.read().map(|e| e.action.clone()));
}

fn tracker_app(level: &LevelDef) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(RoomProgress::from_level(level))
        .insert_resource(GateBook::new(level.gates.clone()))
        .insert_resource(TriggerBook {
            triggers: level.triggers.clone(),
        })
        .insert_resource(DialogueLibrary::from_level(level))
        .init_resource::<ActionLog>()
        .add_message::<EnemyDiedEvent>()
        .add_message::<RoomClearedEvent>()
        .add_message::<CoinCollectedEvent>()
        .add_message::<BossDefeatedEvent>()
        .add_message::<ProjectDeployedEvent>()
        .add_message::<LevelActionEvent>()
        .add_message::<DialogueRequest>()
        .add_systems(
            Update,
            (
                handle_enemy_deaths,
                handle_room_clears,
                evaluate_gates,
                check_spatial_triggers,
                record_actions,
            )
                .chain(),
        );
    app
}

fn spawn_boss(app: &mut App, room: &str, tag: &str, health: f32) -> Entity {
    app.world_mut()
        .spawn((
            Enemy {
                room_id: room.to_string(),
                kind: EnemyKind::MiniBoss,
                boss_tag: Some(tag.to_string()),
            },
            Health::new(health),
        ))
        .id()
}

/// Apply one bullet's damage; report the death like combat resolution does.
fn hit(app: &mut App, enemy: Entity, amount: f32) -> bool {
    let world = app.world_mut();
    let killed = world.get_mut::<Health>(enemy).unwrap().take_hit(amount);
    if killed {
        let room_id = world.get::<Enemy>(enemy).unwrap().room_id.clone();
        world.write_message(EnemyDiedEvent {
            entity: enemy,
            room_id,
        });
    }
    killed
}

fn actions(app: &App) -> &[LevelAction] {
    &app.world().resource::<ActionLog>().0
}

// -----------------------------------------------------------------------------
// Clearance tests
// -----------------------------------------------------------------------------

#[test]
fn test_clearance_is_one_way() {
    let mut progress = RoomProgress::from_level(&level(0));

    assert!(!progress.check_room_completion("def_room", 1));
    assert!(!progress.is_cleared("def_room"));
    assert!(progress.check_room_completion("def_room", 0));
    assert!(progress.is_cleared("def_room"));
    // Already cleared rooms never fire again
    assert!(!progress.check_room_completion("def_room", 0));
    assert!(!progress.check_room_completion("def_room", 3));
    assert!(progress.is_cleared("def_room"));
}

#[test]
fn test_start_room_begins_cleared() {
    let progress = RoomProgress::from_level(&level(0));
    assert!(progress.is_cleared("start_room"));
    assert!(progress.is_cleared("right_room"));
    assert!(!progress.is_cleared("boss_room"));
    assert!(!progress.is_cleared("no_such_room"));
}

#[test]
fn test_room_at_uses_strict_bounds() {
    let progress = RoomProgress::from_level(&level(0));
    assert_eq!(
        progress.room_at(Vec2::new(2500.0, 2500.0)).map(|r| r.id.as_str()),
        Some("start_room")
    );
    // Corridor between start and right room
    assert!(progress.room_at(Vec2::new(3012.0, 2500.0)).is_none());
}

#[test]
fn test_miniboss_falls_after_ten_hits() {
    let level = level(0);
    let mut app = tracker_app(&level);
    let boss = spawn_boss(&mut app, "miniboss_room", "tech_lead", 500.0);

    for i in 0..10 {
        let killed = hit(&mut app, boss, 50.0);
        assert_eq!(killed, i == 9);
        app.update();
        let cleared = app.world().resource::<RoomProgress>().is_cleared("miniboss_room");
        assert_eq!(cleared, i == 9);
    }

    let log = actions(&app);
    assert!(log.contains(&LevelAction::SpawnRoomRewards("miniboss_room".to_string())));
    assert!(log.contains(&LevelAction::OpenDoor("boss_door".to_string())));
}

#[test]
fn test_room_waits_for_last_enemy() {
    let level = level(0);
    let mut app = tracker_app(&level);
    let first = spawn_boss(&mut app, "boss_room", "a", 50.0);
    let second = spawn_boss(&mut app, "boss_room", "b", 50.0);

    hit(&mut app, first, 50.0);
    app.update();
    assert!(!app.world().resource::<RoomProgress>().is_cleared("boss_room"));

    hit(&mut app, second, 50.0);
    app.update();
    assert!(app.world().resource::<RoomProgress>().is_cleared("boss_room"));
    let rewards = actions(&app)
        .iter()
        .filter(|a| matches!(a, LevelAction::SpawnRoomRewards(_)))
        .count();
    assert_eq!(rewards, 1);
}

#[test]
fn test_dying_enemy_does_not_count_as_remaining() {
    let level = level(0);
    let mut app = tracker_app(&level);
    let boss = spawn_boss(&mut app, "boss_room", "cto", 50.0);

    // Reported before its health reaches zero
    app.world_mut().write_message(EnemyDiedEvent {
        entity: boss,
        room_id: "boss_room".to_string(),
    });
    app.update();
    assert!(app.world().resource::<RoomProgress>().is_cleared("boss_room"));
}

// -----------------------------------------------------------------------------
// Gate and door tests
// -----------------------------------------------------------------------------

#[test]
fn test_coin_gate_fires_once() {
    let level = level(0);
    let mut app = tracker_app(&level);

    for total in 1..=6 {
        app.world_mut().write_message(CoinCollectedEvent {
            kind: CoinKind::Twitter,
            total,
        });
        app.update();
        let opens = actions(&app)
            .iter()
            .filter(|a| **a == LevelAction::OpenDoor("miniboss_door".to_string()))
            .count();
        assert_eq!(opens, usize::from(total >= 5));
    }
    assert!(app.world().resource::<GateBook>().has_fired("five_coins"));
}

#[test]
fn test_boss_defeated_gate_matches_tag() {
    let mut gates = GateBook::new(level(2).gates);
    assert!(gates.fire_matching(GateFact::BossDefeated("arman")).is_empty());
    let fired = gates.fire_matching(GateFact::BossDefeated("bernar"));
    assert_eq!(fired.len(), 1);
    assert!(gates.fire_matching(GateFact::BossDefeated("bernar")).is_empty());
}

#[test]
fn test_project_deployed_opens_boss_door() {
    let mut gates = GateBook::new(level(2).gates);
    let fired = gates.fire_matching(GateFact::ProjectDeployed);
    assert!(fired.contains(&LevelAction::OpenDoor("boss_door_1".to_string())));
}

#[test]
fn test_door_ledger_is_permanent() {
    let mut ledger = DoorLedger::default();
    assert!(ledger.can_place("exit"));
    assert!(ledger.open("exit"));
    assert!(!ledger.open("exit"));
    assert!(!ledger.can_place("exit"));
}

// -----------------------------------------------------------------------------
// Trigger tests
// -----------------------------------------------------------------------------

#[test]
fn test_inside_room_region_is_strict() {
    let bounds = room_bounds(Vec2::new(2500.0, 2500.0));
    let region = TriggerRegion::InsideRoom { margin: 0.0 };
    assert!(region_contains(region, bounds, Vec2::new(2500.0, 2500.0)));
    assert!(!region_contains(region, bounds, Vec2::new(bounds.min.x, 2500.0)));
    let grown = TriggerRegion::InsideRoom { margin: 10.0 };
    assert!(region_contains(grown, bounds, Vec2::new(bounds.min.x, 2500.0)));
}

#[test]
fn test_quadrant_region_is_unbounded_outward() {
    let bounds = room_bounds(Vec2::new(2500.0, 2500.0));
    let region = TriggerRegion::Quadrant(Quadrant::UpperRight);
    assert!(region_contains(region, bounds, Vec2::new(2600.0, 2600.0)));
    assert!(region_contains(region, bounds, Vec2::new(4000.0, 4000.0)));
    assert!(!region_contains(region, bounds, Vec2::new(2400.0, 2600.0)));
    assert!(!region_contains(region, bounds, Vec2::new(2500.0, 2600.0)));
}

#[test]
fn test_trigger_fires_once() {
    let level = level(0);
    let mut progress = RoomProgress::from_level(&level);
    let trigger = &level.triggers[0];
    let inside = level.room("miniboss_room").unwrap().center();

    assert!(evaluate_trigger(trigger, &mut progress, inside));
    assert!(!evaluate_trigger(trigger, &mut progress, inside));
    assert!(progress.get("miniboss_room").unwrap().boss_triggered);
}

#[test]
fn test_trigger_waits_for_prerequisite_room() {
    let level = level(0);
    let mut progress = RoomProgress::from_level(&level);
    let cto = level.triggers.iter().find(|t| t.id == "cto_appears").unwrap();
    let inside = level.room("boss_room").unwrap().center();

    assert!(!evaluate_trigger(cto, &mut progress, inside));
    assert!(!progress.get("boss_room").unwrap().boss_triggered);

    progress.check_room_completion("miniboss_room", 0);
    assert!(evaluate_trigger(cto, &mut progress, inside));
}

#[test]
fn test_flags_are_independent() {
    let mut progress = RoomProgress::from_level(&level(0));
    assert!(progress.try_mark("boss_room", TriggerFlag::Boss));
    assert!(progress.try_mark("boss_room", TriggerFlag::Friend));
    assert!(!progress.try_mark("boss_room", TriggerFlag::Boss));
    assert!(!progress.try_mark("attic", TriggerFlag::Boss));
}

#[test]
fn test_spatial_trigger_spawns_boss_once() {
    let level = level(0);
    let mut app = tracker_app(&level);
    let center = level.room("miniboss_room").unwrap().center();
    app.world_mut()
        .spawn((Player, Transform::from_translation(center.extend(0.0))));

    app.update();
    app.update();

    let spawns = actions(&app)
        .iter()
        .filter(|a| matches!(a, LevelAction::SpawnBoss(_)))
        .count();
    assert_eq!(spawns, 1);
}

#[test]
fn test_dialogue_trigger_defers_actions() {
    let level = level(2);
    let mut app = tracker_app(&level);
    let center = level.room("miniboss").unwrap().center();
    app.world_mut()
        .spawn((Player, Transform::from_translation(center.extend(0.0))));

    app.update();

    assert!(actions(&app).is_empty());
    let requests = app
        .world_mut()
        .run_system_once(|mut reader: MessageReader<DialogueRequest>| {
            reader
                .read()
                .map(|r| r.on_complete.len())
                .collect::<Vec<_>>()
        })
        .unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0] > 0);
}

#[test]
fn test_door_dropping_trigger_waits_until_player_clears_doorway() {
    let level = level(2);
    let mut app = tracker_app(&level);
    let room = level.room("miniboss").unwrap();
    // Standing in the right-hand doorway, where the exit door lands
    let doorway = Vec2::new(room_bounds(room.center()).max.x - 16.0, room.center().y);
    let player = app
        .world_mut()
        .spawn((Player, Transform::from_translation(doorway.extend(0.0))))
        .id();

    app.update();
    assert!(!app.world().resource::<RoomProgress>().get("miniboss").unwrap().boss_triggered);

    app.world_mut().get_mut::<Transform>(player).unwrap().translation =
        room.center().extend(0.0);
    app.update();
    assert!(app.world().resource::<RoomProgress>().get("miniboss").unwrap().boss_triggered);
}

// -----------------------------------------------------------------------------
// Entrance wall tests
// -----------------------------------------------------------------------------

#[test]
fn test_entrance_wall_modes() {
    assert_eq!(entrance_wall_mode(false, true), EntranceWallMode::Sealed);
    assert_eq!(entrance_wall_mode(false, false), EntranceWallMode::ProjectilesOnly);
    assert_eq!(entrance_wall_mode(true, true), EntranceWallMode::Open);
    assert_eq!(entrance_wall_mode(true, false), EntranceWallMode::Open);
}

#[test]
fn test_entrance_wall_layers() {
    let sealed = EntranceWallMode::Sealed.layers();
    assert!(sealed.filters.has_all(GameLayer::Player));
    assert!(sealed.filters.has_all(GameLayer::Bullet));

    let guard = EntranceWallMode::ProjectilesOnly.layers();
    assert!(!guard.filters.has_all(GameLayer::Player));
    assert!(guard.filters.has_all(GameLayer::Bullet));
    assert!(guard.filters.has_all(GameLayer::Enemy));

    let open = EntranceWallMode::Open.layers();
    assert!(!open.filters.has_all(GameLayer::Bullet));
    assert!(!open.filters.has_all(GameLayer::Player));
}

fn wall_world(level: &LevelDef, player_at: Vec2) -> (World, Entity, Entity) {
    let mut world = World::new();
    world.insert_resource(RoomProgress::from_level(level));
    world.init_resource::<PlayerTuning>();
    let player = world
        .spawn((Player, Transform::from_translation(player_at.extend(0.0))))
        .id();
    let wall = world
        .spawn((
            EntranceWall {
                room_id: "miniboss_room".to_string(),
            },
            EntranceWallMode::ProjectilesOnly.layers(),
            Sprite::default(),
        ))
        .id();
    (world, player, wall)
}

fn wall_filters(world: &World, wall: Entity) -> LayerMask {
    world.get::<CollisionLayers>(wall).unwrap().filters
}

#[test]
fn test_entrance_wall_seals_behind_player() {
    let level = level(0);
    let inside = level.room("miniboss_room").unwrap().center();
    let (mut world, player, wall) = wall_world(&level, inside);

    world.run_system_once(update_entrance_walls).unwrap();
    assert_eq!(wall_filters(&world, wall), EntranceWallMode::Sealed.layers().filters);
    assert_eq!(
        world.get::<Sprite>(wall).unwrap().color,
        EntranceWallMode::Sealed.color()
    );

    let outside = level.room("start_room").unwrap().center();
    world.get_mut::<Transform>(player).unwrap().translation = outside.extend(0.0);
    world.run_system_once(update_entrance_walls).unwrap();
    assert_eq!(
        wall_filters(&world, wall),
        EntranceWallMode::ProjectilesOnly.layers().filters
    );
}

#[test]
fn test_entrance_wall_opens_once_room_is_cleared() {
    let level = level(0);
    let inside = level.room("miniboss_room").unwrap().center();
    let (mut world, _, wall) = wall_world(&level, inside);

    world
        .resource_mut::<RoomProgress>()
        .check_room_completion("miniboss_room", 0);
    world.run_system_once(update_entrance_walls).unwrap();
    assert_eq!(wall_filters(&world, wall), EntranceWallMode::Open.layers().filters);
}

// -----------------------------------------------------------------------------
// Warning zone tests
// -----------------------------------------------------------------------------

#[test]
fn test_warning_zone_rearms_after_delay() {
    let mut zone = WarningZone::from_def(&WarningZoneDef {
        id: "gate".to_string(),
        center: (0.0, 0.0),
        size: (64.0, 128.0),
        min_coins: 5,
        message: "Too early".to_string(),
        rearm_secs: 5.0,
    });

    assert!(zone.poll(1.0, 0, false).is_none());
    assert_eq!(zone.poll(1.0, 0, true), Some("Too early"));
    assert!(zone.poll(3.0, 0, true).is_none());
    assert_eq!(zone.poll(6.0, 2, true), Some("Too early"));
    assert!(zone.poll(20.0, 5, true).is_none());
}

//! Movement domain: tests for movement intent, aim and tuning.

use avian2d::prelude::*;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::systems::{
    aim_point, apply_player_movement, intent_velocity, latch_fire_while_paused, read_input,
};
use crate::core::GameplayPaused;
use super::*;
use crate::content::PlayerDefaults;

// -----------------------------------------------------------------------------
// Movement intent tests
// -----------------------------------------------------------------------------

#[test]
fn test_no_input_means_no_velocity() {
    assert_eq!(intent_velocity(Vec2::ZERO, 200.0), Vec2::ZERO);
}

#[test]
fn test_cardinal_movement_uses_full_speed() {
    assert_eq!(intent_velocity(Vec2::new(0.0, 1.0), 200.0), Vec2::new(0.0, 200.0));
    assert_eq!(intent_velocity(Vec2::new(-1.0, 0.0), 200.0), Vec2::new(-200.0, 0.0));
}

#[test]
fn test_diagonal_movement_is_normalised() {
    let velocity = intent_velocity(Vec2::new(1.0, 1.0), 200.0);
    assert!((velocity.length() - 200.0).abs() < 1e-3);
    assert!((velocity.x - velocity.y).abs() < 1e-6);
}

#[test]
fn test_movement_system_sets_player_velocity() {
    let mut world = World::new();
    world.insert_resource(PlayerInput {
        axis: Vec2::new(1.0, 0.0),
        ..default()
    });
    world.insert_resource(PlayerTuning::default());
    let player = world.spawn((Player, LinearVelocity::default())).id();
    let bystander = world.spawn(LinearVelocity::default()).id();

    world.run_system_once(apply_player_movement).unwrap();

    assert_eq!(
        world.get::<LinearVelocity>(player).unwrap().0,
        Vec2::new(200.0, 0.0)
    );
    assert_eq!(world.get::<LinearVelocity>(bystander).unwrap().0, Vec2::ZERO);
}

// -----------------------------------------------------------------------------
// Aim tests
// -----------------------------------------------------------------------------

#[test]
fn test_free_aim_follows_cursor() {
    let (point, locked) = aim_point(Vec2::new(10.0, 20.0), std::iter::empty());
    assert_eq!(point, Vec2::new(10.0, 20.0));
    assert!(locked.is_none());
}

#[test]
fn test_aim_locks_onto_enemy_under_cursor() {
    let mut world = World::new();
    let enemy = world.spawn_empty().id();
    let rect = Rect::from_center_size(Vec2::new(100.0, 100.0), Vec2::splat(32.0));

    let (point, locked) = aim_point(Vec2::new(110.0, 90.0), [(enemy, rect)]);
    assert_eq!(point, Vec2::new(100.0, 100.0));
    assert_eq!(locked, Some(enemy));
}

#[test]
fn test_aim_ignores_enemies_away_from_cursor() {
    let mut world = World::new();
    let enemy = world.spawn_empty().id();
    let rect = Rect::from_center_size(Vec2::new(100.0, 100.0), Vec2::splat(32.0));

    let (point, locked) = aim_point(Vec2::new(200.0, 100.0), [(enemy, rect)]);
    assert_eq!(point, Vec2::new(200.0, 100.0));
    assert!(locked.is_none());
}

// -----------------------------------------------------------------------------
// Tuning and layer tests
// -----------------------------------------------------------------------------

#[test]
fn test_player_tuning_from_defaults() {
    let tuning = PlayerTuning::from(&PlayerDefaults {
        speed: 250.0,
        size: 30.0,
        max_health: 120.0,
        invulnerability_secs: 0.75,
    });
    assert_eq!(tuning.speed, 250.0);
    assert_eq!(tuning.max_health, 120.0);
    assert_eq!(tuning.invulnerability_secs, 0.75);
}

#[test]
fn test_player_collides_with_gating_layers() {
    let layers = player_layers();
    assert!(layers.memberships.has_all(GameLayer::Player));
    assert!(layers.filters.has_all(GameLayer::Door));
    assert!(layers.filters.has_all(GameLayer::EntranceWall));
    assert!(!layers.filters.has_all(GameLayer::Bullet));
}

// -----------------------------------------------------------------------------
// Fire latch tests
// -----------------------------------------------------------------------------

fn input_world() -> World {
    let mut world = World::new();
    world.init_resource::<PlayerInput>();
    world.init_resource::<GameplayPaused>();
    world.init_resource::<ButtonInput<KeyCode>>();
    world.init_resource::<ButtonInput<MouseButton>>();
    world
}

#[test]
fn test_held_click_fires() {
    let mut world = input_world();
    world
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    world.run_system_once(read_input).unwrap();
    assert!(world.resource::<PlayerInput>().fire);
}

#[test]
fn test_click_held_through_a_pause_does_not_fire() {
    let mut world = input_world();
    world.resource_mut::<GameplayPaused>().pause("dialogue");
    world
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    world.run_system_once(latch_fire_while_paused).unwrap();

    // The click closed the dialogue and is still down on the resume frame
    world.resource_mut::<GameplayPaused>().unpause("dialogue");
    world.run_system_once(latch_fire_while_paused).unwrap();
    world.run_system_once(read_input).unwrap();
    assert!(!world.resource::<PlayerInput>().fire);

    world
        .resource_mut::<ButtonInput<MouseButton>>()
        .release(MouseButton::Left);
    world.run_system_once(read_input).unwrap();
    assert!(!world.resource::<PlayerInput>().fire_latched);

    world
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    world.run_system_once(read_input).unwrap();
    assert!(world.resource::<PlayerInput>().fire);
}

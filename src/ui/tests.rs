//! UI domain: tests for HUD formatting, modal overlays and minimap projection.

use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::dialogue::portrait_color;
use super::game_over::outcome_title;
use super::hud_player::health_color;
use super::hud_wallet::{CoinAmountText, update_coin_display};
use super::minimap::{MINIMAP_SIZE, project_rect};
use super::notifications::{NotificationPanel, NotificationText, update_notification_panel};
use crate::content::DialogueLineDef;
use crate::core::{HudUpdateEvent, LevelOutcome, RunOutcome};
use crate::narrative::ActiveNotification;

// -----------------------------------------------------------------------------
// HUD tests
// -----------------------------------------------------------------------------

#[test]
fn test_health_color_runs_green_to_red() {
    let full = health_color(1.0).to_srgba();
    let empty = health_color(0.0).to_srgba();
    assert!(full.green > full.red);
    assert!(empty.red > empty.green);
}

#[test]
fn test_health_color_clamps_out_of_range() {
    assert_eq!(health_color(1.5), health_color(1.0));
    assert_eq!(health_color(-0.2), health_color(0.0));
}

#[test]
fn test_coin_display_shows_latest_total() {
    let mut world = World::new();
    world.init_resource::<Messages<HudUpdateEvent>>();
    let text = world.spawn((CoinAmountText, Text::new("Promotions: 0"))).id();

    world.write_message(HudUpdateEvent::Coins(2));
    world.write_message(HudUpdateEvent::Health {
        current: 90.0,
        max: 100.0,
    });
    world.write_message(HudUpdateEvent::Coins(3));
    world.run_system_once(update_coin_display).unwrap();

    assert_eq!(world.get::<Text>(text).unwrap().0, "Promotions: 3");
}

// -----------------------------------------------------------------------------
// Minimap tests
// -----------------------------------------------------------------------------

#[test]
fn test_minimap_flips_y_axis() {
    let world = Rect::new(0.0, 0.0, 5000.0, 5000.0);
    let top_left_room = Rect::new(0.0, 4000.0, 1000.0, 5000.0);

    let (left, top, width, height) = project_rect(world, top_left_room, MINIMAP_SIZE);
    assert_eq!((left, top), (0.0, 0.0));
    assert!((width - 32.0).abs() < 1e-4);
    assert!((height - 32.0).abs() < 1e-4);

    let (_, bottom_top, _, _) =
        project_rect(world, Rect::new(0.0, 0.0, 1000.0, 1000.0), MINIMAP_SIZE);
    assert!((bottom_top - 128.0).abs() < 1e-4);
}

// -----------------------------------------------------------------------------
// Modal overlay tests
// -----------------------------------------------------------------------------

#[test]
fn test_portrait_color_comes_from_line() {
    let mut line = DialogueLineDef {
        speaker: "Bernar".to_string(),
        portrait: Some((0.9, 0.25, 0.25)),
        text: "Stop right there.".to_string(),
    };
    assert_eq!(portrait_color(&line), Some(Color::srgb(0.9, 0.25, 0.25)));
    line.portrait = None;
    assert_eq!(portrait_color(&line), None);
}

#[test]
fn test_notification_panel_follows_active_notification() {
    let mut world = World::new();
    world.init_resource::<ActiveNotification>();
    let panel = world
        .spawn((
            NotificationPanel,
            Node {
                display: Display::None,
                ..default()
            },
        ))
        .id();
    let text = world.spawn((NotificationText, Text::new(""))).id();

    world.resource_mut::<ActiveNotification>().0 = Some("Collect more coins".to_string());
    world.run_system_once(update_notification_panel).unwrap();
    assert_eq!(world.get::<Node>(panel).unwrap().display, Display::Flex);
    assert_eq!(world.get::<Text>(text).unwrap().0, "Collect more coins");

    world.resource_mut::<ActiveNotification>().0 = None;
    world.run_system_once(update_notification_panel).unwrap();
    assert_eq!(world.get::<Node>(panel).unwrap().display, Display::None);
}

// -----------------------------------------------------------------------------
// Game over tests
// -----------------------------------------------------------------------------

#[test]
fn test_game_over_title_follows_outcome() {
    let won = RunOutcome {
        outcome: Some(LevelOutcome::Won),
        levels_completed: 3,
    };
    let lost = RunOutcome {
        outcome: Some(LevelOutcome::Lost),
        levels_completed: 1,
    };
    assert_eq!(outcome_title(&won), "PROMOTED");
    assert_eq!(outcome_title(&lost), "YOU DIED");
}

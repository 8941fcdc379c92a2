mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod layout;
mod level;
mod movement;
mod narrative;
mod rooms;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Promo Crawl".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Gravity(Vec2::ZERO))
    .add_plugins((
        content::ContentPlugin,
        core::CorePlugin,
        movement::MovementPlugin,
        combat::CombatPlugin,
        rooms::RoomsPlugin,
        level::LevelPlugin,
        narrative::NarrativePlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}

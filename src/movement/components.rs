//! Movement domain: components and physics layers for the top-down player.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Room and corridor wall tiles
    Wall,
    /// Scripted door tiles
    Door,
    /// Corridor-mouth walls whose filters follow room clearance
    EntranceWall,
    Player,
    Enemy,
    /// Pooled projectiles
    Bullet,
    /// Coins, power-ups and ground weapons
    Pickup,
    /// Interactables and warning zones - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// World-space marker drawn at the current aim point.
#[derive(Component, Debug)]
pub struct Crosshair;

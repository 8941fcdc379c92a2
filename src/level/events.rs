//! Level domain: orchestrator messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::content::LevelAction;

/// A scripted action for the executor to apply.
#[derive(Debug, Clone)]
pub struct LevelActionEvent {
    pub action: LevelAction,
}

impl Message for LevelActionEvent {}

/// Sent when the player confirms the deploy terminal.
#[derive(Debug)]
pub struct ProjectDeployedEvent;

impl Message for ProjectDeployedEvent {}

/// A weapon asking for a bullet at `origin`, travelling along `angle`.
#[derive(Debug, Clone, Copy)]
pub struct FireBulletRequest {
    pub origin: Vec2,
    pub angle: f32,
}

impl Message for FireBulletRequest {}

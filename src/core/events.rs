//! Core domain: events for level flow and HUD updates.

use bevy::ecs::message::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelOutcome {
    Won,
    Lost,
}

/// Event fired when the current level ends
#[derive(Debug)]
pub struct LevelOutcomeEvent {
    pub outcome: LevelOutcome,
}

impl Message for LevelOutcomeEvent {}

/// Fire-and-forget updates for the HUD
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HudUpdateEvent {
    Health { current: f32, max: f32 },
    Coins(u32),
}

impl Message for HudUpdateEvent {}

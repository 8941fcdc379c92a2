//! Combat domain: pure per-tick enemy state transitions.

use bevy::math::Vec2;

use crate::combat::components::{AiState, EnemyKind};
use crate::combat::resources::EnemyTuning;

/// What the enemy does with its body this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiDirective {
    Hold,
    MoveToward,
    /// Windup finished with the player still in reach
    Strike,
}

/// What an enemy knows about the player this tick.
#[derive(Debug, Clone, Copy)]
pub struct PlayerSighting {
    /// Player position minus enemy position
    pub offset: Vec2,
    /// Half the enemy's body size plus half the player's
    pub reach: f32,
}

impl PlayerSighting {
    pub fn distance(&self) -> f32 {
        self.offset.length()
    }

    /// Square bodies touch once both axis gaps close.
    pub fn bodies_touch(&self) -> bool {
        self.offset.x.abs() <= self.reach && self.offset.y.abs() <= self.reach
    }
}

/// Advance one enemy's state given where the player is.
///
/// Normal enemies wind up when they reach attack range and re-check reach
/// (range plus tolerance) when the windup ends. Bosses deal contact damage,
/// so they close in until their body touches the player and then stop.
pub fn step_ai(
    state: AiState,
    kind: EnemyKind,
    sighting: PlayerSighting,
    now: f32,
    tuning: &EnemyTuning,
) -> (AiState, AiDirective) {
    let distance = sighting.distance();

    if let AiState::Attacking { strike_at } = state {
        if now < strike_at {
            return (state, AiDirective::Hold);
        }
        let directive = if distance <= tuning.attack_range + tuning.attack_tolerance {
            AiDirective::Strike
        } else {
            AiDirective::Hold
        };
        let next = if distance <= tuning.detection_range {
            AiState::Pursuing
        } else {
            AiState::Idle
        };
        return (next, directive);
    }

    if distance > tuning.detection_range {
        return (AiState::Idle, AiDirective::Hold);
    }

    match kind {
        EnemyKind::MiniBoss | EnemyKind::Boss => {
            if sighting.bodies_touch() {
                (AiState::Halted, AiDirective::Hold)
            } else {
                (AiState::Pursuing, AiDirective::MoveToward)
            }
        }
        EnemyKind::Normal if distance > tuning.attack_range => {
            (AiState::Pursuing, AiDirective::MoveToward)
        }
        EnemyKind::Normal => (
            AiState::Attacking {
                strike_at: now + tuning.windup_secs,
            },
            AiDirective::Hold,
        ),
    }
}

//! Rooms domain: position-driven one-shot triggers.

use bevy::prelude::*;

use crate::content::{Quadrant, TriggerDef, TriggerRegion};
use crate::rooms::progress::RoomProgress;

/// Triggers of the active level, in evaluation order.
#[derive(Resource, Debug, Default)]
pub struct TriggerBook {
    pub triggers: Vec<TriggerDef>,
}

/// Both predicates are strict: a point on the edge is outside.
pub fn region_contains(region: TriggerRegion, bounds: Rect, point: Vec2) -> bool {
    match region {
        TriggerRegion::InsideRoom { margin } => {
            let grown = bounds.inflate(margin);
            point.x > grown.min.x
                && point.x < grown.max.x
                && point.y > grown.min.y
                && point.y < grown.max.y
        }
        TriggerRegion::Quadrant(quadrant) => {
            let center = bounds.center();
            match quadrant {
                Quadrant::UpperLeft => point.x < center.x && point.y > center.y,
                Quadrant::UpperRight => point.x > center.x && point.y > center.y,
                Quadrant::LowerLeft => point.x < center.x && point.y < center.y,
                Quadrant::LowerRight => point.x > center.x && point.y < center.y,
            }
        }
    }
}

/// Check a trigger against the player position and consume its room flag.
/// Returns true at most once per trigger flag and room.
pub fn evaluate_trigger(trigger: &TriggerDef, progress: &mut RoomProgress, player: Vec2) -> bool {
    let Some(room) = progress.get(&trigger.room) else {
        return false;
    };
    if !region_contains(trigger.region, room.bounds, player) {
        return false;
    }
    if let Some(required) = &trigger.requires_cleared {
        if !progress.is_cleared(required) {
            return false;
        }
    }
    progress.try_mark(&trigger.room, trigger.flag)
}

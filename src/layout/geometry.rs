//! Layout domain: pure wall/floor/door geometry for rooms and corridors.
//!
//! All rects are axis-aligned in world units. Room walls form a ring of
//! tiles around a fixed 12x10 tile footprint; each opening leaves a
//! two-tile gap centred on its edge.

use bevy::prelude::*;

use crate::content::{Opening, Orientation};

pub const TILE_SIZE: f32 = 64.0;
pub const ROOM_TILES_X: u32 = 12;
pub const ROOM_TILES_Y: u32 = 10;
pub const DOOR_GAP_TILES: u32 = 2;

pub const ROOM_WIDTH: f32 = TILE_SIZE * ROOM_TILES_X as f32;
pub const ROOM_HEIGHT: f32 = TILE_SIZE * ROOM_TILES_Y as f32;
pub const CORRIDOR_WIDTH: f32 = TILE_SIZE * DOOR_GAP_TILES as f32;

/// Playable world extent; bullets leaving it are reclaimed.
pub const WORLD_SIZE: f32 = 5000.0;

const ALIGN_EPSILON: f32 = 0.5;

pub fn world_bounds() -> Rect {
    Rect::new(0.0, 0.0, WORLD_SIZE, WORLD_SIZE)
}

pub fn room_bounds(center: Vec2) -> Rect {
    Rect::from_center_size(center, Vec2::new(ROOM_WIDTH, ROOM_HEIGHT))
}

/// The central half of a room, where enemies and pickups are scattered.
pub fn central_spawn_area(center: Vec2) -> Rect {
    Rect::from_center_size(center, Vec2::new(ROOM_WIDTH, ROOM_HEIGHT) / 2.0)
}

fn tile_at(min: Vec2) -> Rect {
    Rect::from_corners(min, min + Vec2::splat(TILE_SIZE))
}

#[derive(Debug, Clone)]
pub struct RoomLayout {
    pub bounds: Rect,
    pub wall_tiles: Vec<Rect>,
    /// The gap left in the wall ring for each opening.
    pub door_slots: Vec<(Opening, Rect)>,
}

pub fn build_room(center: Vec2, openings: &[Opening]) -> RoomLayout {
    let bounds = room_bounds(center);
    let gap_half = CORRIDOR_WIDTH / 2.0;
    let last_x = ROOM_TILES_X - 1;
    let last_y = ROOM_TILES_Y - 1;
    let has = |opening: Opening| openings.contains(&opening);

    let mut wall_tiles = Vec::new();
    for i in 0..ROOM_TILES_X {
        for j in 0..ROOM_TILES_Y {
            let boundary = i == 0 || i == last_x || j == 0 || j == last_y;
            if !boundary {
                continue;
            }

            let min = bounds.min + Vec2::new(i as f32, j as f32) * TILE_SIZE;
            let in_gap_x = min.x >= center.x - gap_half && min.x < center.x + gap_half;
            let in_gap_y = min.y >= center.y - gap_half && min.y < center.y + gap_half;

            let is_gap = (has(Opening::Top) && j == last_y && in_gap_x)
                || (has(Opening::Bottom) && j == 0 && in_gap_x)
                || (has(Opening::Left) && i == 0 && in_gap_y)
                || (has(Opening::Right) && i == last_x && in_gap_y);

            if !is_gap {
                wall_tiles.push(tile_at(min));
            }
        }
    }

    let door_slots = openings
        .iter()
        .map(|&opening| {
            let slot = match opening {
                Opening::Top => Rect::new(
                    center.x - gap_half,
                    bounds.max.y - TILE_SIZE,
                    center.x + gap_half,
                    bounds.max.y,
                ),
                Opening::Bottom => Rect::new(
                    center.x - gap_half,
                    bounds.min.y,
                    center.x + gap_half,
                    bounds.min.y + TILE_SIZE,
                ),
                Opening::Left => Rect::new(
                    bounds.min.x,
                    center.y - gap_half,
                    bounds.min.x + TILE_SIZE,
                    center.y + gap_half,
                ),
                Opening::Right => Rect::new(
                    bounds.max.x - TILE_SIZE,
                    center.y - gap_half,
                    bounds.max.x,
                    center.y + gap_half,
                ),
            };
            (opening, slot)
        })
        .collect();

    RoomLayout {
        bounds,
        wall_tiles,
        door_slots,
    }
}

/// Horizontal when the centers share a row, vertical when they share a
/// column, `None` for anything else.
pub fn corridor_orientation(a: Vec2, b: Vec2) -> Option<Orientation> {
    let same_row = (a.y - b.y).abs() < ALIGN_EPSILON;
    let same_col = (a.x - b.x).abs() < ALIGN_EPSILON;
    match (same_row, same_col) {
        (true, false) => Some(Orientation::Horizontal),
        (false, true) => Some(Orientation::Vertical),
        _ => None,
    }
}

/// One side of a corridor.
#[derive(Debug, Clone, Copy)]
pub struct CorridorEnd<'a> {
    pub room_id: &'a str,
    pub center: Vec2,
    /// Emit an entrance wall at this room's mouth.
    pub entrance_wall: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntranceWallLayout {
    pub room_id: String,
    pub rect: Rect,
}

#[derive(Debug, Clone)]
pub struct CorridorLayout {
    pub orientation: Orientation,
    pub floor: Rect,
    pub wall_tiles: Vec<Rect>,
    pub entrance_walls: Vec<EntranceWallLayout>,
}

pub fn build_corridor(a: CorridorEnd, b: CorridorEnd, orientation: Orientation) -> CorridorLayout {
    let half_gap = CORRIDOR_WIDTH / 2.0;
    let mut wall_tiles = Vec::new();
    let mut entrance_walls = Vec::new();

    let floor = match orientation {
        Orientation::Horizontal => {
            let (left, right) = if a.center.x <= b.center.x { (a, b) } else { (b, a) };
            let y = left.center.y;
            let start = left.center.x + ROOM_WIDTH / 2.0;
            let end = right.center.x - ROOM_WIDTH / 2.0;

            let mut x = start;
            while x < end {
                wall_tiles.push(tile_at(Vec2::new(x, y + half_gap)));
                wall_tiles.push(tile_at(Vec2::new(x, y - half_gap - TILE_SIZE)));
                x += TILE_SIZE;
            }

            if left.entrance_wall {
                entrance_walls.push(EntranceWallLayout {
                    room_id: left.room_id.to_string(),
                    rect: Rect::new(start, y - half_gap, start + TILE_SIZE, y + half_gap),
                });
            }
            if right.entrance_wall {
                entrance_walls.push(EntranceWallLayout {
                    room_id: right.room_id.to_string(),
                    rect: Rect::new(end - TILE_SIZE, y - half_gap, end, y + half_gap),
                });
            }

            Rect::new(start, y - half_gap, end, y + half_gap)
        }
        Orientation::Vertical => {
            let (lower, upper) = if a.center.y <= b.center.y { (a, b) } else { (b, a) };
            let x = lower.center.x;
            let start = lower.center.y + ROOM_HEIGHT / 2.0;
            let end = upper.center.y - ROOM_HEIGHT / 2.0;

            let mut y = start;
            while y < end {
                wall_tiles.push(tile_at(Vec2::new(x - half_gap - TILE_SIZE, y)));
                wall_tiles.push(tile_at(Vec2::new(x + half_gap, y)));
                y += TILE_SIZE;
            }

            if lower.entrance_wall {
                entrance_walls.push(EntranceWallLayout {
                    room_id: lower.room_id.to_string(),
                    rect: Rect::new(x - half_gap, start, x + half_gap, start + TILE_SIZE),
                });
            }
            if upper.entrance_wall {
                entrance_walls.push(EntranceWallLayout {
                    room_id: upper.room_id.to_string(),
                    rect: Rect::new(x - half_gap, end - TILE_SIZE, x + half_gap, end),
                });
            }

            Rect::new(x - half_gap, start, x + half_gap, end)
        }
    };

    CorridorLayout {
        orientation,
        floor,
        wall_tiles,
        entrance_walls,
    }
}

/// The two tiles of a door centred on `center`.
pub fn door_tiles(center: Vec2, orientation: Orientation) -> [Rect; 2] {
    let half = TILE_SIZE / 2.0;
    match orientation {
        Orientation::Horizontal => [
            Rect::new(center.x - TILE_SIZE, center.y - half, center.x, center.y + half),
            Rect::new(center.x, center.y - half, center.x + TILE_SIZE, center.y + half),
        ],
        Orientation::Vertical => [
            Rect::new(center.x - half, center.y - TILE_SIZE, center.x + half, center.y),
            Rect::new(center.x - half, center.y, center.x + half, center.y + TILE_SIZE),
        ],
    }
}

/// Strict overlap test; rects that only share an edge do not intersect.
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    !a.intersect(b).is_empty()
}

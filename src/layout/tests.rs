//! Layout domain: tests for room, corridor and door geometry.

use bevy::prelude::*;

use super::*;
use crate::content::{Opening, Orientation};

fn has_tile_at(tiles: &[Rect], min: Vec2) -> bool {
    tiles.iter().any(|tile| tile.min == min)
}

// -----------------------------------------------------------------------------
// Room tests
// -----------------------------------------------------------------------------

#[test]
fn test_closed_room_is_full_ring() {
    let layout = build_room(Vec2::new(2500.0, 2500.0), &[]);
    // 12 + 12 along x, 8 + 8 remaining along y
    assert_eq!(layout.wall_tiles.len(), 40);
    assert!(layout.door_slots.is_empty());
}

#[test]
fn test_each_opening_removes_two_tiles() {
    let center = Vec2::new(2500.0, 2500.0);
    let one = build_room(center, &[Opening::Left]);
    let all = build_room(
        center,
        &[Opening::Top, Opening::Bottom, Opening::Left, Opening::Right],
    );
    assert_eq!(one.wall_tiles.len(), 38);
    assert_eq!(all.wall_tiles.len(), 32);
}

#[test]
fn test_top_gap_is_centered() {
    let layout = build_room(Vec2::new(2500.0, 2500.0), &[Opening::Top]);
    let top_row_y = 2500.0 + ROOM_HEIGHT / 2.0 - TILE_SIZE;

    assert!(!has_tile_at(&layout.wall_tiles, Vec2::new(2436.0, top_row_y)));
    assert!(!has_tile_at(&layout.wall_tiles, Vec2::new(2500.0, top_row_y)));
    assert!(has_tile_at(&layout.wall_tiles, Vec2::new(2372.0, top_row_y)));
    assert!(has_tile_at(&layout.wall_tiles, Vec2::new(2564.0, top_row_y)));
    // The bottom row is untouched
    assert!(has_tile_at(&layout.wall_tiles, Vec2::new(2436.0, 2180.0)));
}

#[test]
fn test_room_bounds_footprint() {
    let bounds = room_bounds(Vec2::new(452.0, 1604.0));
    assert_eq!(bounds.min, Vec2::new(68.0, 1284.0));
    assert_eq!(bounds.size(), Vec2::new(768.0, 640.0));
}

#[test]
fn test_central_spawn_area_is_half_footprint() {
    let area = central_spawn_area(Vec2::new(2500.0, 2500.0));
    assert_eq!(area.min, Vec2::new(2308.0, 2340.0));
    assert_eq!(area.max, Vec2::new(2692.0, 2660.0));
}

// -----------------------------------------------------------------------------
// Corridor tests
// -----------------------------------------------------------------------------

fn end(room_id: &str, x: f32, y: f32, entrance_wall: bool) -> CorridorEnd<'_> {
    CorridorEnd {
        room_id,
        center: Vec2::new(x, y),
        entrance_wall,
    }
}

#[test]
fn test_corridor_orientation() {
    let a = Vec2::new(2500.0, 2500.0);
    assert_eq!(
        corridor_orientation(a, Vec2::new(1476.0, 2500.0)),
        Some(Orientation::Horizontal)
    );
    assert_eq!(
        corridor_orientation(a, Vec2::new(2500.0, 3396.0)),
        Some(Orientation::Vertical)
    );
    assert_eq!(corridor_orientation(a, Vec2::new(3524.0, 3396.0)), None);
    assert_eq!(corridor_orientation(a, a), None);
}

#[test]
fn test_horizontal_corridor_spans_gap_between_rooms() {
    let layout = build_corridor(
        end("start", 2500.0, 2500.0, false),
        end("left", 1476.0, 2500.0, false),
        Orientation::Horizontal,
    );

    assert_eq!(layout.floor, Rect::new(1860.0, 2436.0, 2116.0, 2564.0));
    // Four steps of 64 with a strip on each side
    assert_eq!(layout.wall_tiles.len(), 8);
    assert!(has_tile_at(&layout.wall_tiles, Vec2::new(1860.0, 2564.0)));
    assert!(has_tile_at(&layout.wall_tiles, Vec2::new(1860.0, 2372.0)));
    assert!(layout.entrance_walls.is_empty());
}

#[test]
fn test_vertical_corridor_spans_gap_between_rooms() {
    let layout = build_corridor(
        end("start", 2500.0, 2500.0, false),
        end("boss", 2500.0, 3396.0, false),
        Orientation::Vertical,
    );

    assert_eq!(layout.floor, Rect::new(2436.0, 2820.0, 2564.0, 3076.0));
    assert_eq!(layout.wall_tiles.len(), 8);
    assert!(has_tile_at(&layout.wall_tiles, Vec2::new(2372.0, 2820.0)));
    assert!(has_tile_at(&layout.wall_tiles, Vec2::new(2564.0, 3012.0)));
}

#[test]
fn test_corridor_floor_lines_up_with_room_gaps() {
    let left = Vec2::new(1476.0, 2500.0);
    let right = Vec2::new(2500.0, 2500.0);
    let corridor = build_corridor(
        end("left", left.x, left.y, false),
        end("right", right.x, right.y, false),
        Orientation::Horizontal,
    );
    let room = build_room(left, &[Opening::Right]);
    let (_, slot) = room
        .door_slots
        .iter()
        .find(|(opening, _)| *opening == Opening::Right)
        .copied()
        .unwrap();

    assert_eq!(slot.min.y, corridor.floor.min.y);
    assert_eq!(slot.max.y, corridor.floor.max.y);
    assert_eq!(slot.max.x, corridor.floor.min.x);
}

#[test]
fn test_entrance_walls_sit_at_each_tagged_mouth() {
    let layout = build_corridor(
        end("start", 2500.0, 2500.0, false),
        end("dead_end", 2500.0, 3396.0, true),
        Orientation::Vertical,
    );

    assert_eq!(
        layout.entrance_walls,
        vec![EntranceWallLayout {
            room_id: "dead_end".to_string(),
            rect: Rect::new(2436.0, 3012.0, 2564.0, 3076.0),
        }]
    );

    let both = build_corridor(
        end("a", 1476.0, 2500.0, true),
        end("b", 2500.0, 2500.0, true),
        Orientation::Horizontal,
    );
    let ids: Vec<&str> = both
        .entrance_walls
        .iter()
        .map(|wall| wall.room_id.as_str())
        .collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(both.entrance_walls[0].rect.min.x, 1860.0);
    assert_eq!(both.entrance_walls[1].rect.max.x, 2116.0);
}

// -----------------------------------------------------------------------------
// Door and overlap tests
// -----------------------------------------------------------------------------

#[test]
fn test_horizontal_door_tiles() {
    let [a, b] = door_tiles(Vec2::new(3524.0, 2948.0), Orientation::Horizontal);
    assert_eq!(a, Rect::new(3460.0, 2916.0, 3524.0, 2980.0));
    assert_eq!(b, Rect::new(3524.0, 2916.0, 3588.0, 2980.0));
}

#[test]
fn test_vertical_door_tiles_fill_corridor_width() {
    let [a, b] = door_tiles(Vec2::new(3012.0, 2500.0), Orientation::Vertical);
    assert_eq!(a.min.y, 2500.0 - TILE_SIZE);
    assert_eq!(b.max.y, 2500.0 + TILE_SIZE);
    assert_eq!(a.width(), TILE_SIZE);
    assert_eq!(b.max.y - a.min.y, CORRIDOR_WIDTH);
}

#[test]
fn test_touching_rects_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!rects_overlap(a, Rect::new(10.0, 0.0, 20.0, 10.0)));
    assert!(rects_overlap(a, Rect::new(9.0, 9.0, 20.0, 20.0)));
}

#[test]
fn test_world_bounds() {
    let world = world_bounds();
    assert_eq!(world.min, Vec2::ZERO);
    assert_eq!(world.max, Vec2::splat(WORLD_SIZE));
}

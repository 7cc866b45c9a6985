//! Axis-aligned collision against solid tiles.
//!
//! World space is y-down in pixels: tile (col, row) covers
//! `[col * ts, (col + 1) * ts) x [row * ts, (row + 1) * ts)`.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::core::GameConfig;

use super::tilemap::TileMap;

/// How cells outside the grid are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Out-of-grid cells block movement.
    #[default]
    Solid,
    /// Out-of-grid cells are ignored.
    Open,
}

/// Strict separation test. Rects that only share an edge do not overlap.
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    !(a.max.x <= b.min.x || a.min.x >= b.max.x || a.max.y <= b.min.y || a.min.y >= b.max.y)
}

/// World rect of tile (col, row).
pub fn cell_rect(col: i32, row: i32, tile_size: f32) -> Rect {
    let min = Vec2::new(col as f32, row as f32) * tile_size;
    Rect::from_corners(min, min + Vec2::splat(tile_size))
}

/// Square actor-sized rect centered on tile (col, row), `margin` pixels
/// smaller than the tile.
pub fn tile_hitbox(col: i32, row: i32, tile_size: f32, margin: f32) -> Rect {
    let half = margin / 2.0;
    let min = Vec2::new(col as f32, row as f32) * tile_size + Vec2::splat(half);
    Rect::from_corners(min, min + Vec2::splat((tile_size - margin).max(1.0)))
}

/// Tile indices covered by the interval `[min, max)`.
///
/// The last index never falls below the first, so a zero-width interval
/// still covers one tile.
pub fn tile_span(min: f32, max: f32, tile_size: f32) -> (i32, i32) {
    let first = (min / tile_size).floor() as i32;
    let last = ((max / tile_size).ceil() as i32 - 1).max(first);
    (first, last)
}

/// Tests rects against the solid tiles of a map.
#[derive(Resource, Debug, Clone)]
pub struct CollisionResolver {
    tile_size: f32,
    solid: HashSet<u32>,
    edge: EdgePolicy,
}

impl CollisionResolver {
    pub fn new(tile_size: f32, solid: impl IntoIterator<Item = u32>, edge: EdgePolicy) -> Self {
        Self {
            tile_size,
            solid: solid.into_iter().collect(),
            edge,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        let edge = if config.out_of_bounds_solid {
            EdgePolicy::Solid
        } else {
            EdgePolicy::Open
        };
        Self::new(config.tile_size, config.solid_tiles.iter().copied(), edge)
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn is_solid_id(&self, id: u32) -> bool {
        self.solid.contains(&id)
    }

    /// Whether cell (col, row) blocks, applying the edge policy off-grid.
    pub fn is_solid_cell(&self, map: &TileMap, col: i32, row: i32) -> bool {
        match map.get(col, row) {
            Some(id) => self.is_solid_id(id),
            None => self.edge == EdgePolicy::Solid,
        }
    }

    /// True if `rect` overlaps at least one blocking cell.
    pub fn collides(&self, map: &TileMap, rect: Rect) -> bool {
        let (first_col, last_col) = tile_span(rect.min.x, rect.max.x, self.tile_size);
        let (first_row, last_row) = tile_span(rect.min.y, rect.max.y, self.tile_size);

        for row in first_row..=last_row {
            for col in first_col..=last_col {
                if self.is_solid_cell(map, col, row)
                    && rects_overlap(rect, cell_rect(col, row, self.tile_size))
                {
                    return true;
                }
            }
        }
        false
    }

    /// Move a `size` box at `position` by `delta`, one axis at a time.
    ///
    /// X is applied and reverted if it collides, then Y likewise. Returns the
    /// new position and which axes were blocked.
    pub fn resolve_move(
        &self,
        map: &TileMap,
        position: Vec2,
        size: Vec2,
        delta: Vec2,
    ) -> (Vec2, BVec2) {
        let mut pos = position;
        let mut blocked = BVec2::FALSE;

        if delta.x != 0.0 {
            pos.x += delta.x;
            if self.collides(map, Rect::from_corners(pos, pos + size)) {
                pos.x = position.x;
                blocked.x = true;
            }
        }
        if delta.y != 0.0 {
            pos.y += delta.y;
            if self.collides(map, Rect::from_corners(pos, pos + size)) {
                pos.y = position.y;
                blocked.y = true;
            }
        }

        (pos, blocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed_room() -> TileMap {
        TileMap::parse("1,1,1\n1,0,1\n1,1,1\n").unwrap()
    }

    fn resolver() -> CollisionResolver {
        CollisionResolver::new(32.0, [1], EdgePolicy::Solid)
    }

    fn actor_rect(x: f32, y: f32) -> Rect {
        Rect::from_corners(Vec2::new(x, y), Vec2::new(x + 26.0, y + 26.0))
    }

    #[test]
    fn open_cell_is_free_and_walls_block() {
        let map = boxed_room();
        let r = resolver();
        assert!(!r.collides(&map, actor_rect(32.0, 32.0)));
        assert!(!r.collides(&map, actor_rect(35.0, 35.0)));
        assert!(!r.collides(&map, actor_rect(38.0, 38.0)));
        assert!(r.collides(&map, actor_rect(31.0, 32.0)));
        assert!(r.collides(&map, actor_rect(32.0, 31.5)));
        assert!(r.collides(&map, actor_rect(38.5, 35.0)));
        assert!(r.collides(&map, actor_rect(35.0, 39.0)));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 32.0, 32.0);
        let b = Rect::new(32.0, 0.0, 64.0, 32.0);
        assert!(!rects_overlap(a, b));
        assert!(rects_overlap(a, Rect::new(31.9, 0.0, 64.0, 32.0)));
    }

    #[test]
    fn edge_policy_controls_out_of_grid_cells() {
        let map = TileMap::parse("0,0\n0,0\n").unwrap();
        let outside = actor_rect(-4.0, 10.0);
        assert!(resolver().collides(&map, outside));
        let open = CollisionResolver::new(32.0, [1], EdgePolicy::Open);
        assert!(!open.collides(&map, outside));
        assert!(!open.collides(&map, actor_rect(200.0, 200.0)));
    }

    #[test]
    fn span_covers_partial_tiles() {
        assert_eq!(tile_span(32.0, 58.0, 32.0), (1, 1));
        assert_eq!(tile_span(31.0, 57.0, 32.0), (0, 1));
        assert_eq!(tile_span(40.0, 64.0, 32.0), (1, 1));
        assert_eq!(tile_span(-4.0, 22.0, 32.0), (-1, 0));
        assert_eq!(tile_span(10.0, 10.0, 32.0), (0, 0));
    }

    #[test]
    fn blocked_x_still_moves_y() {
        // Wall column on the right, open below.
        let map = TileMap::parse("0,0,1\n0,0,1\n0,0,1\n0,0,1\n").unwrap();
        let r = resolver();
        let size = Vec2::splat(26.0);
        let start = Vec2::new(36.0, 35.0);

        let (pos, blocked) = r.resolve_move(&map, start, size, Vec2::new(4.0, 4.0));
        assert!(blocked.x);
        assert!(!blocked.y);
        assert_eq!(pos, Vec2::new(36.0, 39.0));
    }

    #[test]
    fn zero_delta_is_never_blocked() {
        let map = boxed_room();
        let r = resolver();
        let (pos, blocked) =
            r.resolve_move(&map, Vec2::new(35.0, 35.0), Vec2::splat(26.0), Vec2::ZERO);
        assert_eq!(pos, Vec2::new(35.0, 35.0));
        assert_eq!(blocked, BVec2::FALSE);
    }

    #[test]
    fn custom_solid_set() {
        let map = TileMap::parse("0,3\n0,0\n").unwrap();
        let r = CollisionResolver::new(32.0, [3], EdgePolicy::Open);
        assert!(r.collides(&map, actor_rect(40.0, 2.0)));
        assert!(!r.collides(&map, actor_rect(3.0, 35.0)));
    }
}

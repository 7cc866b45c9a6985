//! Field camera: a viewport offset that tracks the player.

use bevy::prelude::*;

use super::collision::rects_overlap;

/// Top-left of the visible window in world pixels.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct FieldCamera {
    pub offset: Vec2,
    pub viewport: Vec2,
    /// Also keep the window inside the map
    pub clamp_to_map: bool,
}

impl FieldCamera {
    pub fn new(viewport: Vec2, clamp_to_map: bool) -> Self {
        Self {
            offset: Vec2::ZERO,
            viewport,
            clamp_to_map,
        }
    }

    /// Center the viewport on `target_center`, never going negative.
    pub fn follow(&mut self, target_center: Vec2, map_size: Vec2) {
        let mut offset = (target_center - self.viewport / 2.0).max(Vec2::ZERO);
        if self.clamp_to_map {
            offset = offset.min((map_size - self.viewport).max(Vec2::ZERO));
        }
        self.offset = offset;
    }

    /// World rect currently on screen.
    pub fn view_rect(&self) -> Rect {
        Rect::from_corners(self.offset, self.offset + self.viewport)
    }

    pub fn is_visible(&self, rect: Rect) -> bool {
        rects_overlap(self.view_rect(), rect)
    }

    /// World position to screen position (both y-down).
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        world - self.offset
    }

    /// Inclusive tile index ranges on screen, limited to the map grid.
    ///
    /// Returns `None` when the view does not touch the map.
    pub fn visible_tiles(&self, tile_size: f32, cols: usize, rows: usize) -> Option<IRect> {
        let view = self.view_rect();
        let first = (view.min / tile_size).floor().as_ivec2().max(IVec2::ZERO);
        let last = ((view.max / tile_size).ceil().as_ivec2() - IVec2::ONE)
            .min(IVec2::new(cols as i32 - 1, rows as i32 - 1));
        if last.x < first.x || last.y < first.y {
            return None;
        }
        Some(IRect::from_corners(first, last))
    }
}

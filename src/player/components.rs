//! Player and field actor components.

use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// A box that moves on the field.
///
/// `position` is the top-left corner in world pixels (y-down). Velocity is in
/// pixels per tick.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Actor {
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
}

impl Actor {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            velocity: Vec2::ZERO,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.position, self.position + self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size / 2.0
    }

    /// Tile under the actor's center.
    pub fn tile(&self, tile_size: f32) -> IVec2 {
        (self.center() / tile_size).floor().as_ivec2()
    }
}

/// A character the player can talk to.
#[derive(Component, Debug, Clone)]
pub struct Npc {
    pub name: String,
    /// What the NPC says when spoken to
    pub line: String,
}

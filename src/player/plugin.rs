//! Player plugin - field movement and camera follow.

use bevy::prelude::*;

use super::movement;

/// Player plugin - handles player movement and the field camera.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        movement::setup_movement_systems(app);
    }
}

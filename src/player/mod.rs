//! Player module - field actors, movement, and camera follow.

mod components;
mod movement;
mod plugin;

pub use components::*;
pub use movement::{apply_inertia, clamp_to_map, target_velocity};
pub use plugin::PlayerPlugin;

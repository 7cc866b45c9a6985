//! World module - tile map, tileset, collision, camera and the field scene.

mod atlas;
mod camera;
mod collision;
mod error;
mod plugin;
mod spawning;
mod tilemap;

pub use atlas::TileAtlas;
pub use camera::FieldCamera;
pub use collision::{cell_rect, rects_overlap, tile_hitbox, tile_span, CollisionResolver, EdgePolicy};
pub use error::{AtlasError, MapError};
pub use plugin::WorldPlugin;
pub use spawning::{actor_origin, FieldEntity, SpawnOrder};
pub use tilemap::TileMap;

//! Rendering module - the per-frame draw list and its sprite presenter.

mod draw;
mod plugin;
mod present;

pub use draw::{DrawCommand, DrawList, DrawSet, DrawSpace};
pub use plugin::RenderingPlugin;
pub use present::{PresentPlugin, TilesetHandle};

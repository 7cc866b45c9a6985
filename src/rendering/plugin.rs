//! Rendering plugin - builds the draw list every frame.
//!
//! The list is rebuilt in `Update`, after the fixed ticks of the frame have
//! run. Presenting it is left to `PresentPlugin`, which only the binary adds,
//! so headless apps still get a complete `DrawList` to inspect.

use bevy::prelude::*;

use super::draw::*;
use crate::core::GameState;
use crate::world::{FieldCamera, TileMap};

/// Rendering plugin - describes each frame as a [`DrawList`].
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DrawList>().add_systems(
            Update,
            (
                clear_draw_list,
                draw_title.run_if(in_state(GameState::Title)),
                (draw_field, draw_hud)
                    .chain()
                    .run_if(in_state(GameState::InGame))
                    .run_if(resource_exists::<TileMap>)
                    .run_if(resource_exists::<FieldCamera>),
            )
                .chain()
                .in_set(DrawSet),
        );
    }
}

//! Steel Field - Entry Point
//!
//! Controls:
//! - Arrows / WASD: Move
//! - Shift: Run
//! - Space / Enter: Start, attack in battle
//! - E: Talk / open chest
//! - 1, 2: Quick-slot items
//! - I: Inventory window
//! - H: Debug overlay
//! - Escape: Back to title / quit

use bevy::prelude::*;

use steel_field::core::GameConfig;
use steel_field::rendering::PresentPlugin;
use steel_field::SteelFieldPlugin;

fn main() {
    let config = GameConfig::load();
    let resolution = config.viewport;

    App::new()
        // Bevy default plugins, pixel-art friendly sampling
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Steel Field".to_string(),
                        resolution: resolution.into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .insert_resource(config)

        // Our game plugin
        .add_plugins(SteelFieldPlugin)

        // Sprites and text on screen
        .add_plugins(PresentPlugin)

        .run();
}

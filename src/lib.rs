//! Steel Field - a tile-map RPG field and battle core in Bevy.
//!
//! The player walks a tile map, bumps into enemy symbols to start simple
//! turn-based battles, opens chests and uses the items inside.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, configuration, the fixed tick
//! - **Input**: Key bindings folded into symbolic actions
//! - **World**: Tile map, tileset slicing, collision, camera, scene spawning
//! - **Player**: Field movement and camera follow
//! - **Enemies**: Enemy symbols and encounter detection
//! - **Combat**: Battle stats and the turn state machine
//! - **Inventory**: Item catalog, chests, item use
//! - **UI**: Toast, debug overlay, inventory window
//! - **Rendering**: The per-frame draw list and its sprite presenter

pub mod combat;
pub mod core;
pub mod enemies;
pub mod input;
pub mod inventory;
pub mod player;
pub mod rendering;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
///
/// Needs `StatesPlugin` (part of `DefaultPlugins`) and a time source. Window,
/// camera and sprites come from [`rendering::PresentPlugin`], which is left
/// out so the game can run headless.
pub struct SteelFieldPlugin;

impl Plugin for SteelFieldPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Input
            .add_plugins(input::ActionsPlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)

            // Combat systems
            .add_plugins(combat::CombatPlugin)

            // Items
            .add_plugins(inventory::InventoryPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin)

            // Draw list
            .add_plugins(rendering::RenderingPlugin);
    }
}

//! Inventory plugin - item catalog, chests, and quick slots.

use bevy::prelude::*;

use super::catalog::{load_item_catalog, ItemCatalog};
use super::items::Inventory;
use super::systems::{interact, reset_inventory, use_quick_slots};
use crate::core::{GameState, PlayState, TickSet};

/// Inventory plugin - handles item pickups and item use on the field.
pub struct InventoryPlugin;

impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Inventory>()
            .add_systems(
                Startup,
                load_item_catalog.run_if(not(resource_exists::<ItemCatalog>)),
            )
            .add_systems(OnEnter(GameState::InGame), reset_inventory)
            .add_systems(
                FixedUpdate,
                (interact, use_quick_slots)
                    .chain()
                    .in_set(TickSet::Interaction)
                    .run_if(in_state(PlayState::Field))
                    .run_if(resource_exists::<ItemCatalog>),
            );
    }
}

//! Inventory module - items, chests, and item use.

mod catalog;
mod chest;
mod items;
mod plugin;
mod systems;

pub use catalog::{ItemCatalog, ItemDef};
pub use chest::{open_adjacent, Chest};
pub use items::{try_use_item, use_item, ActionReport, Inventory, ItemUseError};
pub use plugin::InventoryPlugin;

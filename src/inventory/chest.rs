//! Treasure chests.

use bevy::prelude::*;

use super::catalog::ItemCatalog;
use super::items::{ActionReport, Inventory};

/// A chest on the field holding one item. Opens once.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Chest {
    pub tile: IVec2,
    pub item_id: String,
    pub opened: bool,
}

impl Chest {
    pub fn new(tile: IVec2, item_id: &str) -> Self {
        Self {
            tile,
            item_id: item_id.to_string(),
            opened: false,
        }
    }

    /// Orthogonal neighbours only. Diagonals and the chest's own tile do not
    /// count.
    pub fn is_adjacent(&self, tile: IVec2) -> bool {
        let d = (self.tile - tile).abs();
        d.x + d.y == 1
    }
}

/// Open the first closed chest next to `player_tile` and take its item.
///
/// Reports failure when only open chests, or none, are adjacent.
pub fn open_adjacent<'a>(
    player_tile: IVec2,
    chests: impl IntoIterator<Item = &'a mut Chest>,
    inventory: &mut Inventory,
    catalog: &ItemCatalog,
) -> ActionReport {
    let mut saw_open = false;
    for chest in chests {
        if !chest.is_adjacent(player_tile) {
            continue;
        }
        if chest.opened {
            saw_open = true;
            continue;
        }
        chest.opened = true;
        inventory.add(&chest.item_id, 1);
        return ActionReport::success(format!(
            "Opened the chest! Got {}.",
            catalog.name_of(&chest.item_id)
        ));
    }

    if saw_open {
        ActionReport::failure("The chest is already open.")
    } else {
        ActionReport::failure("No chest nearby.")
    }
}

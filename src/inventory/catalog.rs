//! Item definitions loaded from assets/data/items.ron.

use std::collections::HashMap;
use std::fs;

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::GameConfig;

/// Static description of one item kind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemDef {
    pub name: String,
    /// HP restored on use. 0 means the item has no effect.
    #[serde(default)]
    pub heal: u32,
}

/// Every item kind the game knows, keyed by item id. Read-only after load.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ItemCatalog {
    items: HashMap<String, ItemDef>,
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::from_defs([
            ("potion", "Potion", 20),
            ("hi_potion", "Hi-Potion", 50),
        ])
    }
}

impl ItemCatalog {
    pub fn from_defs<'a>(defs: impl IntoIterator<Item = (&'a str, &'a str, u32)>) -> Self {
        let items = defs
            .into_iter()
            .map(|(id, name, heal)| {
                (
                    id.to_string(),
                    ItemDef {
                        name: name.to_string(),
                        heal,
                    },
                )
            })
            .collect();
        Self { items }
    }

    /// Load the catalog from `path`, falling back to the built-in items.
    pub fn load_from(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match ron::from_str(&contents) {
                Ok(catalog) => {
                    info!("Loaded item catalog from {}", path);
                    catalog
                }
                Err(e) => {
                    error!("Failed to parse {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Could not read {}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&ItemDef> {
        self.items.get(id)
    }

    /// Display name for `id`, or the id itself if undefined.
    pub fn name_of<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map(|def| def.name.as_str()).unwrap_or(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// System to load the item catalog at startup.
pub fn load_item_catalog(mut commands: Commands, config: Res<GameConfig>) {
    commands.insert_resource(ItemCatalog::load_from(&config.items_path));
}

//! Carried items and item use.

use std::collections::BTreeMap;

use bevy::prelude::*;
use thiserror::Error;

use super::catalog::ItemCatalog;
use crate::combat::BattleStatus;

/// Why an item could not be used.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemUseError {
    #[error("not held.")]
    NotHeld,

    #[error("undefined item: {0}")]
    Undefined(String),
}

/// Outcome of a player-facing action, always with a message to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    pub ok: bool,
    pub message: String,
}

impl ActionReport {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

impl From<Result<String, ItemUseError>> for ActionReport {
    fn from(result: Result<String, ItemUseError>) -> Self {
        match result {
            Ok(message) => Self::success(message),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

/// Item counts keyed by item id. A key is present only while its count is
/// above zero. Iteration is sorted by id.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct Inventory {
    items: BTreeMap<String, u32>,
}

impl Inventory {
    pub fn add(&mut self, id: &str, count: u32) {
        if count > 0 {
            *self.items.entry(id.to_string()).or_insert(0) += count;
        }
    }

    pub fn count(&self, id: &str) -> u32 {
        self.items.get(id).copied().unwrap_or(0)
    }

    /// Take one unit away. Returns false if none was held.
    pub fn remove_one(&mut self, id: &str) -> bool {
        let Some(count) = self.items.get_mut(id) else {
            return false;
        };
        *count -= 1;
        if *count == 0 {
            self.items.remove(id);
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(id, &count)| (id.as_str(), count))
    }

    /// One "Name xN" line per item, or "(empty)".
    pub fn lines(&self, catalog: &ItemCatalog) -> Vec<String> {
        if self.is_empty() {
            return vec!["(empty)".to_string()];
        }
        self.iter()
            .map(|(id, count)| format!("{} x{}", catalog.name_of(id), count))
            .collect()
    }
}

/// Use one `id` on `status`.
///
/// Checks happen before anything changes, so a failed use never mutates.
/// Healing is clamped to `max_hp`; items without a heal are used up with no
/// effect.
pub fn try_use_item(
    inventory: &mut Inventory,
    id: &str,
    status: &mut BattleStatus,
    catalog: &ItemCatalog,
) -> Result<String, ItemUseError> {
    if inventory.count(id) == 0 {
        return Err(ItemUseError::NotHeld);
    }
    let def = catalog
        .get(id)
        .ok_or_else(|| ItemUseError::Undefined(id.to_string()))?;

    if def.heal > 0 {
        status.heal(def.heal);
    }
    inventory.remove_one(id);

    if def.heal > 0 {
        Ok(format!("Used {}! HP recovered.", def.name))
    } else {
        Ok(format!("Used {}!", def.name))
    }
}

/// [`try_use_item`] as a report for the HUD.
pub fn use_item(
    inventory: &mut Inventory,
    id: &str,
    status: &mut BattleStatus,
    catalog: &ItemCatalog,
) -> ActionReport {
    try_use_item(inventory, id, status, catalog).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(hp: u32) -> BattleStatus {
        let mut status = BattleStatus::new("Hero", 100, 5);
        status.hp = hp;
        status
    }

    #[test]
    fn heal_consumes_one_unit() {
        let catalog = ItemCatalog::default();
        let mut inventory = Inventory::default();
        inventory.add("potion", 2);
        let mut status = hero(40);

        let report = use_item(&mut inventory, "potion", &mut status, &catalog);
        assert!(report.ok);
        assert_eq!(report.message, "Used Potion! HP recovered.");
        assert_eq!(status.hp, 60);
        assert_eq!(inventory.count("potion"), 1);
    }

    #[test]
    fn heal_is_clamped_and_last_unit_removes_key() {
        let catalog = ItemCatalog::default();
        let mut inventory = Inventory::default();
        inventory.add("hi_potion", 1);
        let mut status = hero(90);

        assert!(use_item(&mut inventory, "hi_potion", &mut status, &catalog).ok);
        assert_eq!(status.hp, 100);
        assert!(inventory.is_empty());
    }

    #[test]
    fn not_held_never_mutates() {
        let catalog = ItemCatalog::default();
        let mut inventory = Inventory::default();
        inventory.add("hi_potion", 1);
        let before = inventory.clone();
        let mut status = hero(10);

        let report = use_item(&mut inventory, "potion", &mut status, &catalog);
        assert_eq!(report, ActionReport::failure("not held."));
        assert_eq!(inventory, before);
        assert_eq!(status.hp, 10);
    }

    #[test]
    fn undefined_item_is_rejected() {
        let catalog = ItemCatalog::default();
        let mut inventory = Inventory::default();
        inventory.add("elixir", 1);
        let mut status = hero(10);

        assert_eq!(
            try_use_item(&mut inventory, "elixir", &mut status, &catalog),
            Err(ItemUseError::Undefined("elixir".to_string()))
        );
        assert_eq!(inventory.count("elixir"), 1);
    }

    #[test]
    fn zero_heal_item_is_still_used() {
        let catalog = ItemCatalog::from_defs([("feather", "Feather", 0)]);
        let mut inventory = Inventory::default();
        inventory.add("feather", 1);
        let mut status = hero(10);

        let report = use_item(&mut inventory, "feather", &mut status, &catalog);
        assert_eq!(report, ActionReport::success("Used Feather!"));
        assert_eq!(status.hp, 10);
        assert_eq!(inventory.count("feather"), 0);
    }

    #[test]
    fn lines_are_sorted_by_id() {
        let catalog = ItemCatalog::default();
        let mut inventory = Inventory::default();
        assert_eq!(inventory.lines(&catalog), vec!["(empty)".to_string()]);
        inventory.add("potion", 2);
        inventory.add("hi_potion", 1);
        inventory.add("potion", 0);
        assert_eq!(
            inventory.lines(&catalog),
            vec!["Hi-Potion x1".to_string(), "Potion x2".to_string()]
        );
    }
}

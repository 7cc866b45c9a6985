//! Combat-related components.

use bevy::prelude::*;

// Re-export from core to avoid duplication
pub use crate::core::BattleOutcome;

/// HP after taking `damage`, floored at 0.
pub fn apply_damage(hp: u32, damage: u32) -> u32 {
    hp.saturating_sub(damage)
}

/// Battle stats of one combatant.
///
/// The player's copy lives on the player entity for the whole session. The
/// enemy's copy is made when a battle starts and dropped when it ends.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct BattleStatus {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
}

impl BattleStatus {
    pub fn new(name: &str, max_hp: u32, attack: u32) -> Self {
        Self {
            name: name.to_string(),
            hp: max_hp,
            max_hp,
            attack,
        }
    }

    /// Returns the damage actually taken.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = apply_damage(self.hp, amount);
        before - self.hp
    }

    /// Returns the HP actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }
}

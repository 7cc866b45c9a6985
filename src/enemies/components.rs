//! Enemy-related components.

use bevy::prelude::*;

use crate::combat::BattleStatus;
use crate::world::tile_hitbox;

/// An enemy standing on the field. Touching it starts a battle.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct EnemySymbol {
    pub name: String,
    /// Tile the symbol stands on
    pub tile: IVec2,
    pub max_hp: u32,
    pub hp: u32,
    pub attack: u32,
    /// Set when the player wins against this enemy. Never reset.
    pub defeated: bool,
}

impl EnemySymbol {
    pub fn new(name: &str, tile: IVec2, max_hp: u32, attack: u32) -> Self {
        Self {
            name: name.to_string(),
            tile,
            max_hp,
            hp: max_hp,
            attack,
            defeated: false,
        }
    }

    /// Fixed-size box centered on the symbol's tile.
    pub fn hitbox(&self, tile_size: f32, margin: f32) -> Rect {
        tile_hitbox(self.tile.x, self.tile.y, tile_size, margin)
    }

    /// Fresh battle stats for a new fight against this enemy.
    pub fn to_status(&self) -> BattleStatus {
        let mut status = BattleStatus::new(&self.name, self.max_hp, self.attack);
        status.hp = self.hp.min(self.max_hp);
        status
    }
}

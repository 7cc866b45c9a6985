//! Combat module - battle stats, the turn state machine, and battle systems.

mod battle;
mod components;
mod plugin;
mod systems;

pub use battle::{ActiveBattle, BattleLog, BattleTurn, TurnResult};
pub use components::*;
pub use plugin::CombatPlugin;

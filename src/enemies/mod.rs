//! Enemies module - enemy symbols and encounter detection.

mod components;
mod encounter;
mod plugin;

pub use components::EnemySymbol;
pub use encounter::{find_touched, EncounterGuard};
pub use plugin::EnemyPlugin;

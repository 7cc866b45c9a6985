//! Combat plugin - turn-based battles against enemy symbols.

use bevy::prelude::*;

use super::systems;

/// Combat plugin - handles all battle systems.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        systems::setup_battle_systems(app);
    }
}

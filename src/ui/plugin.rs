//! UI plugin - HUD state.

use bevy::prelude::*;

use super::hud;

/// UI plugin - handles the toast and overlay toggles.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        hud::setup_hud_systems(app);
    }
}

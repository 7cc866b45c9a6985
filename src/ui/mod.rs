//! UI module - toast, overlay toggles and HUD text.

mod hud;
mod plugin;

pub use hud::{battle_lines, debug_lines, inventory_lines, HudToggles, Toast};
pub use plugin::UiPlugin;

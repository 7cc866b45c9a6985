//! In-game HUD - toast message, overlay toggles and overlay text.

use bevy::prelude::*;

use crate::combat::{BattleLog, BattleStatus};
use crate::core::{GameConfig, GameState, HudMessage, TickSet};
use crate::input::{Action, ActionState};
use crate::inventory::{Inventory, ItemCatalog};
use crate::player::Actor;

/// One-line message shown for a fixed number of ticks.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    /// Ticks left before the message disappears
    pub remaining: u32,
}

impl Toast {
    pub fn show(&mut self, text: impl Into<String>, ticks: u32) {
        self.text = text.into();
        self.remaining = ticks;
    }

    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// The message while it is still showing.
    pub fn visible(&self) -> Option<&str> {
        (self.remaining > 0 && !self.text.is_empty()).then_some(self.text.as_str())
    }
}

/// Which optional overlays are on.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HudToggles {
    pub debug: bool,
    pub inventory: bool,
}

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.init_resource::<Toast>()
        .init_resource::<HudToggles>()
        .add_systems(OnEnter(GameState::InGame), reset_hud)
        .add_systems(
            FixedUpdate,
            (toggle_overlays, tick_toast, show_messages)
                .chain()
                .in_set(TickSet::Hud)
                .run_if(in_state(GameState::InGame)),
        );
}

fn reset_hud(mut toast: ResMut<Toast>, mut toggles: ResMut<HudToggles>) {
    *toast = Toast::default();
    *toggles = HudToggles::default();
}

fn toggle_overlays(mut actions: ResMut<ActionState>, mut toggles: ResMut<HudToggles>) {
    if actions.consume(Action::ToggleDebug) {
        toggles.debug = !toggles.debug;
    }
    if actions.consume(Action::ToggleInventory) {
        toggles.inventory = !toggles.inventory;
    }
}

fn tick_toast(mut toast: ResMut<Toast>) {
    toast.tick();
}

/// The newest message replaces whatever is showing.
fn show_messages(
    mut messages: EventReader<HudMessage>,
    config: Res<GameConfig>,
    mut toast: ResMut<Toast>,
) {
    if let Some(HudMessage(text)) = messages.read().last() {
        toast.show(text.clone(), config.toast_ticks);
    }
}

/// Debug overlay text: mode, position, tile, HP and the newest log lines.
pub fn debug_lines(
    mode: &str,
    actor: &Actor,
    tile_size: f32,
    status: &BattleStatus,
    log: &BattleLog,
) -> Vec<String> {
    let tile = actor.tile(tile_size);
    let mut lines = vec![
        "HUD".to_string(),
        format!("mode={}", mode),
        format!("x={:.1}, y={:.1}", actor.position.x, actor.position.y),
        format!("tile=({},{})", tile.x, tile.y),
        format!("HP {}/{}", status.hp, status.max_hp),
    ];
    if !log.lines().is_empty() {
        lines.push("--- log ---".to_string());
        lines.extend(log.tail(2).iter().cloned());
    }
    lines
}

/// Battle panel text: both combatants' HP and the last three log lines.
pub fn battle_lines(player: &BattleStatus, enemy: &BattleStatus, log: &BattleLog) -> Vec<String> {
    let mut lines = vec![
        format!("{}  HP {}/{}", player.name, player.hp, player.max_hp),
        format!("{}  HP {}/{}", enemy.name, enemy.hp, enemy.max_hp),
        String::new(),
    ];
    lines.extend(log.tail(3).iter().cloned());
    lines
}

/// Inventory window text.
pub fn inventory_lines(inventory: &Inventory, catalog: &ItemCatalog) -> Vec<String> {
    let mut lines = vec!["Items".to_string()];
    lines.extend(inventory.lines(catalog));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_expires_after_its_ticks() {
        let mut toast = Toast::default();
        assert_eq!(toast.visible(), None);

        toast.show("Got Potion.", 2);
        assert_eq!(toast.visible(), Some("Got Potion."));
        toast.tick();
        assert_eq!(toast.visible(), Some("Got Potion."));
        toast.tick();
        assert_eq!(toast.visible(), None);
        toast.tick();
        assert_eq!(toast.remaining, 0);
    }

    #[test]
    fn debug_overlay_shows_tile_and_last_two_log_lines() {
        let actor = Actor::new(Vec2::new(99.0, 131.0), Vec2::splat(26.0));
        let status = BattleStatus::new("Hero", 20, 5);
        let mut log = BattleLog::default();

        let lines = debug_lines("field", &actor, 32.0, &status, &log);
        assert_eq!(lines[1], "mode=field");
        assert_eq!(lines[3], "tile=(3,4)");
        assert_eq!(lines.len(), 5);

        log.clear_and_seed("one");
        log.push("two");
        log.push("three");
        let lines = debug_lines("battle", &actor, 32.0, &status, &log);
        assert_eq!(&lines[5..], ["--- log ---", "two", "three"]);
    }

    #[test]
    fn battle_panel_lists_both_hp() {
        let hero = BattleStatus::new("Hero", 20, 5);
        let mut slime = BattleStatus::new("Slime", 12, 3);
        slime.hp = 7;
        let log = BattleLog::default();
        let lines = battle_lines(&hero, &slime, &log);
        assert_eq!(lines[0], "Hero  HP 20/20");
        assert_eq!(lines[1], "Slime  HP 7/12");
    }
}

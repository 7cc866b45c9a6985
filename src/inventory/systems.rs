//! Field interaction: talking, opening chests and quick-slot item use.

use bevy::prelude::*;

use super::catalog::ItemCatalog;
use super::chest::{open_adjacent, Chest};
use super::items::{use_item, Inventory};
use crate::combat::BattleStatus;
use crate::core::{GameConfig, HudMessage};
use crate::input::{Action, ActionState};
use crate::player::{Actor, Npc, Player};
use crate::world::{rects_overlap, SpawnOrder};

/// Start every session with empty pockets.
pub fn reset_inventory(mut inventory: ResMut<Inventory>) {
    *inventory = Inventory::default();
}

/// Interact talks to a touched NPC, otherwise opens an adjacent chest.
pub fn interact(
    mut actions: ResMut<ActionState>,
    config: Res<GameConfig>,
    catalog: Res<ItemCatalog>,
    mut inventory: ResMut<Inventory>,
    player_query: Query<&Actor, With<Player>>,
    npc_query: Query<(&Actor, &Npc, &SpawnOrder), Without<Player>>,
    mut chest_query: Query<(&mut Chest, &SpawnOrder)>,
    mut messages: EventWriter<HudMessage>,
) {
    if !actions.consume(Action::Interact) {
        return;
    }
    let Ok(player) = player_query.get_single() else {
        return;
    };

    let mut npcs: Vec<_> = npc_query
        .iter()
        .filter(|(actor, _, _)| rects_overlap(player.rect(), actor.rect()))
        .collect();
    npcs.sort_by_key(|(_, _, order)| **order);
    if let Some((_, npc, _)) = npcs.first() {
        messages.send(HudMessage::new(format!("{}: {}", npc.name, npc.line)));
        return;
    }

    let mut chests: Vec<_> = chest_query.iter_mut().collect();
    chests.sort_by_key(|(_, order)| **order);
    let report = open_adjacent(
        player.tile(config.tile_size),
        chests.iter_mut().map(|(chest, _)| &mut **chest),
        &mut inventory,
        &catalog,
    );
    if report.ok {
        info!("{}", report.message);
    }
    messages.send(HudMessage::new(report.message));
}

/// UseSlot1 and UseSlot2 use the items bound in the config.
pub fn use_quick_slots(
    mut actions: ResMut<ActionState>,
    config: Res<GameConfig>,
    catalog: Res<ItemCatalog>,
    mut inventory: ResMut<Inventory>,
    mut player_query: Query<&mut BattleStatus, With<Player>>,
    mut messages: EventWriter<HudMessage>,
) {
    let Ok(mut status) = player_query.get_single_mut() else {
        return;
    };

    for (slot, action) in [Action::UseSlot1, Action::UseSlot2].into_iter().enumerate() {
        if !actions.consume(action) {
            continue;
        }
        let Some(item_id) = config.quick_slots.get(slot) else {
            messages.send(HudMessage::new(format!("Slot {} is empty.", slot + 1)));
            continue;
        };
        let report = use_item(&mut inventory, item_id, &mut status, &catalog);
        messages.send(HudMessage::new(format!(
            "{}  HP:{}/{}",
            report.message, status.hp, status.max_hp
        )));
    }
}

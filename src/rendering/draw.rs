//! Per-frame draw list.
//!
//! The game never touches sprites directly. Each frame it describes what
//! should be on screen as a flat list of commands; a presenter turns the
//! list into pixels. Commands are in painter's order.

use bevy::prelude::*;

use crate::combat::{ActiveBattle, BattleLog, BattleStatus};
use crate::core::{GameConfig, PlayState};
use crate::enemies::EnemySymbol;
use crate::inventory::{Chest, Inventory, ItemCatalog};
use crate::player::{Actor, Npc, Player};
use crate::ui::{battle_lines, debug_lines, inventory_lines, HudToggles, Toast};
use crate::world::{tile_hitbox, FieldCamera, TileMap};

pub const PLAYER_COLOR: Color = Color::srgb(0.35, 0.67, 1.0);
pub const NPC_COLOR: Color = Color::srgb(0.31, 0.78, 0.47);
pub const ENEMY_COLOR: Color = Color::srgb(0.9, 0.2, 0.2);
pub const CHEST_COLOR: Color = Color::srgb(1.0, 0.9, 0.2);
pub const OPENED_CHEST_COLOR: Color = Color::srgb(0.4, 0.4, 0.4);
pub const PANEL_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);

const CHEST_INSET: f32 = 6.0;
const TOAST_POSITION: Vec2 = Vec2::new(16.0, 12.0);
const DEBUG_POSITION: Vec2 = Vec2::new(16.0, 40.0);
const INVENTORY_PANEL: Vec2 = Vec2::new(360.0, 220.0);
const PANEL_MARGIN: f32 = 16.0;
/// Share of the viewport height covered by the battle panel.
const BATTLE_PANEL_SHARE: f32 = 0.35;

pub const TEXT_SIZE: f32 = 16.0;
pub const TITLE_TEXT_SIZE: f32 = 40.0;

/// Systems that build the draw list.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawSet;

/// Coordinate space of a rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawSpace {
    /// World pixels; the presenter subtracts the camera offset
    World,
    /// Viewport pixels from the top-left corner
    Screen,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Tile `id` at grid cell (col, row). Ids missing from the atlas are skipped.
    Tile { id: u32, col: i32, row: i32 },
    Rect {
        rect: Rect,
        color: Color,
        space: DrawSpace,
    },
    /// Lines of text in screen space, top-left anchored.
    Text {
        position: Vec2,
        lines: Vec<String>,
        size: f32,
    },
}

/// What to show this frame.
#[derive(Resource, Debug, Default, Clone)]
pub struct DrawList {
    pub camera_offset: Vec2,
    pub viewport: Vec2,
    pub tile_size: f32,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn rect(&mut self, rect: Rect, color: Color, space: DrawSpace) {
        self.push(DrawCommand::Rect { rect, color, space });
    }

    pub fn text(&mut self, position: Vec2, lines: Vec<String>, size: f32) {
        self.push(DrawCommand::Text {
            position,
            lines,
            size,
        });
    }

    pub fn tiles(&self) -> impl Iterator<Item = (u32, i32, i32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Tile { id, col, row } => Some((*id, *col, *row)),
            _ => None,
        })
    }
}

/// Start the frame with an empty list.
pub fn clear_draw_list(mut list: ResMut<DrawList>, config: Res<GameConfig>) {
    list.commands.clear();
    list.camera_offset = Vec2::ZERO;
    list.viewport = config.viewport_size();
    list.tile_size = config.tile_size;
}

/// Title screen text.
pub fn draw_title(mut list: ResMut<DrawList>) {
    let center = list.viewport / 2.0;
    list.text(
        center + Vec2::new(-130.0, -80.0),
        vec!["STEEL FIELD".to_string()],
        TITLE_TEXT_SIZE,
    );
    list.text(
        center + Vec2::new(-110.0, 0.0),
        vec![
            "Confirm: start".to_string(),
            "Back: quit".to_string(),
        ],
        TEXT_SIZE,
    );
}

/// Visible tiles, then chests, NPCs, live enemies and the player.
pub fn draw_field(
    mut list: ResMut<DrawList>,
    config: Res<GameConfig>,
    map: Res<TileMap>,
    camera: Res<FieldCamera>,
    chest_query: Query<&Chest>,
    npc_query: Query<&Actor, (With<Npc>, Without<Player>)>,
    enemy_query: Query<&EnemySymbol>,
    player_query: Query<&Actor, With<Player>>,
) {
    let ts = config.tile_size;
    list.camera_offset = camera.offset;

    if let Some(range) = camera.visible_tiles(ts, map.cols(), map.rows()) {
        for row in range.min.y..=range.max.y {
            for col in range.min.x..=range.max.x {
                if let Some(id) = map.get(col, row) {
                    list.push(DrawCommand::Tile { id, col, row });
                }
            }
        }
    }

    for chest in chest_query.iter() {
        let rect = tile_hitbox(chest.tile.x, chest.tile.y, ts, CHEST_INSET * 2.0);
        if camera.is_visible(rect) {
            let color = if chest.opened {
                OPENED_CHEST_COLOR
            } else {
                CHEST_COLOR
            };
            list.rect(rect, color, DrawSpace::World);
        }
    }

    for npc in npc_query.iter() {
        if camera.is_visible(npc.rect()) {
            list.rect(npc.rect(), NPC_COLOR, DrawSpace::World);
        }
    }

    for enemy in enemy_query.iter().filter(|e| !e.defeated) {
        let rect = enemy.hitbox(ts, config.actor_margin);
        if camera.is_visible(rect) {
            list.rect(rect, ENEMY_COLOR, DrawSpace::World);
        }
    }

    for player in player_query.iter() {
        list.rect(player.rect(), PLAYER_COLOR, DrawSpace::World);
    }
}

/// Screen-space overlays: battle panel, inventory window, debug text, toast.
pub fn draw_hud(
    mut list: ResMut<DrawList>,
    config: Res<GameConfig>,
    play_state: Res<State<PlayState>>,
    toast: Res<Toast>,
    toggles: Res<HudToggles>,
    log: Res<BattleLog>,
    inventory: Res<Inventory>,
    catalog: Option<Res<ItemCatalog>>,
    battle: Option<Res<ActiveBattle>>,
    player_query: Query<(&Actor, &BattleStatus), With<Player>>,
) {
    let viewport = list.viewport;
    let player = player_query.get_single().ok();

    if let (Some(battle), Some((_, status))) = (battle.as_deref(), player) {
        let top = viewport.y * (1.0 - BATTLE_PANEL_SHARE);
        list.rect(
            Rect::new(0.0, top, viewport.x, viewport.y),
            PANEL_COLOR,
            DrawSpace::Screen,
        );
        list.text(
            Vec2::new(PANEL_MARGIN, top + 12.0),
            battle_lines(status, &battle.enemy, &log),
            TEXT_SIZE,
        );
    }

    if toggles.inventory {
        if let Some(catalog) = catalog.as_deref() {
            let min = Vec2::new(PANEL_MARGIN, viewport.y - PANEL_MARGIN - INVENTORY_PANEL.y);
            list.rect(
                Rect::from_corners(min, min + INVENTORY_PANEL),
                PANEL_COLOR,
                DrawSpace::Screen,
            );
            list.text(
                min + Vec2::splat(8.0),
                inventory_lines(&inventory, catalog),
                TEXT_SIZE,
            );
        }
    }

    if toggles.debug {
        if let Some((actor, status)) = player {
            list.text(
                DEBUG_POSITION,
                debug_lines(play_state.get().label(), actor, config.tile_size, status, &log),
                TEXT_SIZE,
            );
        }
    }

    if let Some(text) = toast.visible() {
        list.text(TOAST_POSITION, vec![text.to_string()], TEXT_SIZE);
    }
}

//! Game configuration loaded from an external RON file.
//!
//! Every tunable of the field and battle loop lives here so a level can be
//! re-tuned without recompilation. Missing fields take their defaults.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

/// Default location of the configuration file.
pub const CONFIG_PATH: &str = "assets/data/game_config.ron";

/// Inertia model for player movement.
///
/// Each tick the velocity is pulled toward the input target by `accel`
/// (0..1, higher reacts faster) and then scaled by `friction` (0..1, lower
/// stops sooner).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct InertiaConfig {
    pub accel: f32,
    pub friction: f32,
}

/// Player placement and base battle stats.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerDef {
    pub name: String,
    /// Starting tile (column, row)
    pub start_tile: (i32, i32),
    pub max_hp: u32,
    pub attack: u32,
}

impl Default for PlayerDef {
    fn default() -> Self {
        Self {
            name: "Hero".to_string(),
            start_tile: (3, 4),
            max_hp: 20,
            attack: 5,
        }
    }
}

/// Enemy symbol placed on the field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnemyDef {
    pub name: String,
    pub tile: (i32, i32),
    pub hp: u32,
    pub attack: u32,
}

/// Treasure chest placed on the field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChestDef {
    pub tile: (i32, i32),
    pub item: String,
}

/// Non-player character placed on the field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NpcDef {
    pub name: String,
    pub tile: (i32, i32),
    pub line: String,
}

/// Game configuration loaded from assets/data/game_config.ron.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // Map
    pub tile_size: f32,
    pub viewport: (f32, f32),
    pub map_path: String,
    /// Asset path of the tileset image, relative to the assets folder
    pub tileset_path: String,
    pub first_tile_id: u32,
    pub solid_tiles: Vec<u32>,
    pub out_of_bounds_solid: bool,
    pub clamp_camera_to_map: bool,
    // Movement
    pub collision: bool,
    /// Keeps the player inside the map when `collision` is off
    pub clamp_to_map: bool,
    /// Actors are one tile minus this many pixels wide and tall
    pub actor_margin: f32,
    /// Pixels per tick
    pub player_speed: f32,
    pub run_multiplier: f32,
    pub inertia: Option<InertiaConfig>,
    // Battle
    /// Seconds before the enemy acts on its turn
    pub enemy_turn_delay: f32,
    // HUD
    pub toast_ticks: u32,
    // Items
    pub items_path: String,
    /// Item ids bound to UseSlot1, UseSlot2
    pub quick_slots: Vec<String>,
    // Scene
    pub player: PlayerDef,
    pub enemies: Vec<EnemyDef>,
    pub chests: Vec<ChestDef>,
    pub npcs: Vec<NpcDef>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_size: 32.0,
            viewport: (640.0, 480.0),
            map_path: "assets/maps/field01.csv".to_string(),
            tileset_path: "tiles/tileset.png".to_string(),
            first_tile_id: 1,
            solid_tiles: vec![1],
            out_of_bounds_solid: true,
            clamp_camera_to_map: false,
            collision: true,
            clamp_to_map: true,
            actor_margin: 6.0,
            player_speed: 4.0,
            run_multiplier: 1.8,
            inertia: None,
            enemy_turn_delay: 0.6,
            toast_ticks: 120,
            items_path: "assets/data/items.ron".to_string(),
            quick_slots: vec!["potion".to_string(), "hi_potion".to_string()],
            player: PlayerDef::default(),
            enemies: vec![
                EnemyDef {
                    name: "Slime".to_string(),
                    tile: (10, 5),
                    hp: 12,
                    attack: 3,
                },
                EnemyDef {
                    name: "Bat".to_string(),
                    tile: (14, 6),
                    hp: 8,
                    attack: 4,
                },
            ],
            chests: vec![
                ChestDef {
                    tile: (8, 6),
                    item: "potion".to_string(),
                },
                ChestDef {
                    tile: (12, 6),
                    item: "hi_potion".to_string(),
                },
            ],
            npcs: vec![NpcDef {
                name: "Villager".to_string(),
                tile: (5, 10),
                line: "Hello! Chests open from the tile next to them.".to_string(),
            }],
        }
    }
}

impl GameConfig {
    /// Load the configuration from the default path.
    pub fn load() -> Self {
        Self::load_from(CONFIG_PATH)
    }

    /// Load the configuration from `path`, falling back to defaults.
    pub fn load_from(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match ron::from_str(&contents) {
                Ok(config) => {
                    info!("Loaded game config from {}", path);
                    config
                }
                Err(e) => {
                    error!("Failed to parse {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Could not read {}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }

    /// Size of one side of an actor's collision box.
    pub fn actor_size(&self) -> f32 {
        (self.tile_size - self.actor_margin).max(1.0)
    }

    pub fn viewport_size(&self) -> Vec2 {
        Vec2::new(self.viewport.0, self.viewport.1)
    }
}

/// System to load the game config at startup.
pub fn load_game_config(mut commands: Commands) {
    commands.insert_resource(GameConfig::load());
}

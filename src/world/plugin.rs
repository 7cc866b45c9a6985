//! World plugin - map loading and field scene lifecycle.

use bevy::prelude::*;

use crate::core::{GameConfig, GameState};

use super::spawning::{cleanup_field_scene, spawn_field_scene};
use super::tilemap::TileMap;

/// World plugin - loads the tile map and builds the field scene.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            load_field_map.run_if(not(resource_exists::<TileMap>)),
        )
        .add_systems(OnEnter(GameState::InGame), spawn_field_scene)
        .add_systems(OnExit(GameState::InGame), cleanup_field_scene);
    }
}

/// Read the field map named in the config.
///
/// A map that fails to load is fatal: nothing is drawn and the app exits.
fn load_field_map(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut exit: EventWriter<AppExit>,
) {
    match TileMap::load(&config.map_path) {
        Ok(map) => {
            info!(
                "Loaded map {} ({}x{})",
                config.map_path,
                map.cols(),
                map.rows()
            );
            commands.insert_resource(map);
        }
        Err(e) => {
            error!("{}", e);
            exit.send(AppExit::error());
        }
    }
}

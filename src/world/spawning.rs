//! Field scene construction and teardown.

use bevy::prelude::*;

use crate::combat::BattleStatus;
use crate::core::GameConfig;
use crate::enemies::EnemySymbol;
use crate::inventory::Chest;
use crate::player::{Actor, Npc, Player};

use super::camera::FieldCamera;
use super::collision::CollisionResolver;

/// Marker for everything spawned with the field scene.
#[derive(Component)]
pub struct FieldEntity;

/// Position in the scene's placement list.
///
/// Queries do not guarantee order, so systems that need "first in spawn
/// order" sort by this.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpawnOrder(pub usize);

/// Top-left of an actor standing in tile `tile`.
pub fn actor_origin(tile: (i32, i32), tile_size: f32, margin: f32) -> Vec2 {
    Vec2::new(tile.0 as f32, tile.1 as f32) * tile_size + Vec2::splat(margin / 2.0)
}

/// Spawn the player, enemy symbols, chests and NPCs from the config.
pub fn spawn_field_scene(mut commands: Commands, config: Res<GameConfig>) {
    let ts = config.tile_size;
    let size = Vec2::splat(config.actor_size());

    commands.insert_resource(CollisionResolver::from_config(&config));
    commands.insert_resource(FieldCamera::new(
        config.viewport_size(),
        config.clamp_camera_to_map,
    ));

    let def = &config.player;
    commands.spawn((
        Player,
        Actor::new(actor_origin(def.start_tile, ts, config.actor_margin), size),
        BattleStatus::new(&def.name, def.max_hp, def.attack),
        FieldEntity,
    ));

    for (index, enemy) in config.enemies.iter().enumerate() {
        commands.spawn((
            EnemySymbol::new(
                &enemy.name,
                IVec2::new(enemy.tile.0, enemy.tile.1),
                enemy.hp,
                enemy.attack,
            ),
            SpawnOrder(index),
            FieldEntity,
        ));
    }

    for (index, chest) in config.chests.iter().enumerate() {
        commands.spawn((
            Chest::new(IVec2::new(chest.tile.0, chest.tile.1), &chest.item),
            SpawnOrder(index),
            FieldEntity,
        ));
    }

    for (index, npc) in config.npcs.iter().enumerate() {
        commands.spawn((
            Npc {
                name: npc.name.clone(),
                line: npc.line.clone(),
            },
            Actor::new(actor_origin(npc.tile, ts, config.actor_margin), size),
            SpawnOrder(index),
            FieldEntity,
        ));
    }

    info!(
        "Spawned field: {} enemies, {} chests, {} NPCs",
        config.enemies.len(),
        config.chests.len(),
        config.npcs.len()
    );
}

/// Clean up field entities when leaving InGame state.
pub fn cleanup_field_scene(mut commands: Commands, query: Query<Entity, With<FieldEntity>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

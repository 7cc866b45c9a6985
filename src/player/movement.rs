//! Top-down player movement and camera follow.

use bevy::prelude::*;

use super::components::*;
use crate::core::{GameConfig, InertiaConfig, PlayState, TickSet};
use crate::input::{Action, ActionState};
use crate::world::{CollisionResolver, FieldCamera, TileMap};

/// Below this speed an inertial actor is considered stopped.
const REST_SPEED: f32 = 0.01;

/// Set up player movement systems.
pub fn setup_movement_systems(app: &mut App) {
    app.add_systems(
        FixedUpdate,
        (
            player_movement.in_set(TickSet::Movement),
            camera_follow.in_set(TickSet::Camera),
        )
            .run_if(in_state(PlayState::Field))
            .run_if(resource_exists::<TileMap>),
    )
    .add_systems(OnEnter(PlayState::Battle), stop_player);
}

/// Velocity the input asks for this tick.
pub fn target_velocity(direction: Vec2, speed: f32, running: bool, run_multiplier: f32) -> Vec2 {
    let speed = if running { speed * run_multiplier } else { speed };
    direction * speed
}

/// Ease `velocity` toward `target`, then apply friction.
pub fn apply_inertia(velocity: Vec2, target: Vec2, inertia: InertiaConfig) -> Vec2 {
    let v = (velocity * (1.0 - inertia.accel) + target * inertia.accel) * inertia.friction;
    if v.length() < REST_SPEED {
        Vec2::ZERO
    } else {
        v
    }
}

/// Keep a `size` box at `position` inside a map of `map_size` pixels.
pub fn clamp_to_map(position: Vec2, size: Vec2, map_size: Vec2) -> Vec2 {
    position.clamp(Vec2::ZERO, (map_size - size).max(Vec2::ZERO))
}

/// Turn held move actions into a position update.
///
/// With collision on, each axis is tried separately and a blocked axis loses
/// its velocity. With collision off the player moves freely, optionally
/// clamped to the map.
pub fn player_movement(
    actions: Res<ActionState>,
    config: Res<GameConfig>,
    map: Res<TileMap>,
    resolver: Res<CollisionResolver>,
    mut player_query: Query<&mut Actor, With<Player>>,
) {
    let Ok(mut actor) = player_query.get_single_mut() else {
        return;
    };

    let target = target_velocity(
        actions.direction(),
        config.player_speed,
        actions.held(Action::Run),
        config.run_multiplier,
    );
    actor.velocity = match config.inertia {
        Some(inertia) => apply_inertia(actor.velocity, target, inertia),
        None => target,
    };

    if config.collision {
        let (position, blocked) =
            resolver.resolve_move(&map, actor.position, actor.size, actor.velocity);
        actor.position = position;
        if blocked.x {
            actor.velocity.x = 0.0;
        }
        if blocked.y {
            actor.velocity.y = 0.0;
        }
    } else {
        let mut position = actor.position + actor.velocity;
        if config.clamp_to_map {
            position = clamp_to_map(position, actor.size, map.pixel_size(config.tile_size));
        }
        actor.position = position;
    }
}

/// Keep the player roughly centered in the viewport.
pub fn camera_follow(
    config: Res<GameConfig>,
    map: Res<TileMap>,
    mut camera: ResMut<FieldCamera>,
    player_query: Query<&Actor, With<Player>>,
) {
    let Ok(actor) = player_query.get_single() else {
        return;
    };
    camera.follow(actor.center(), map.pixel_size(config.tile_size));
}

/// Drop any leftover momentum when a battle starts.
fn stop_player(mut player_query: Query<&mut Actor, With<Player>>) {
    for mut actor in player_query.iter_mut() {
        actor.velocity = Vec2::ZERO;
    }
}

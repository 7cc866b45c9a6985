//! Headless app harness shared by the integration tests.
//!
//! The app runs without a window or renderer. Tests press actions directly on
//! `ActionState` and step the simulation one fixed tick at a time.

#![allow(dead_code)]

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::state::state::StateTransition;

use steel_field::combat::BattleStatus;
use steel_field::core::{GameConfig, GameState, PlayState};
use steel_field::input::{Action, ActionState};
use steel_field::inventory::ItemCatalog;
use steel_field::player::{Actor, Player};
use steel_field::world::TileMap;
use steel_field::SteelFieldPlugin;

/// 8x6 room with a wall stub at (4, 1).
pub const ROOM: &str = "\
1,1,1,1,1,1,1,1
1,0,0,0,1,0,0,1
1,0,0,0,0,0,0,1
1,0,0,0,0,0,0,1
1,0,0,0,0,0,0,1
1,1,1,1,1,1,1,1
";

pub fn room() -> TileMap {
    TileMap::parse(ROOM).unwrap()
}

/// Open floor with no walls.
pub fn open_field(cols: usize, rows: usize) -> TileMap {
    TileMap::from_rows(vec![vec![0; cols]; rows]).unwrap()
}

/// Default config with an empty scene and an instant enemy turn.
pub fn empty_scene_config() -> GameConfig {
    let mut config = GameConfig {
        enemy_turn_delay: 0.0,
        enemies: Vec::new(),
        chests: Vec::new(),
        npcs: Vec::new(),
        ..default()
    };
    config.player.start_tile = (1, 1);
    config
}

/// Build an app and bring it into the field with `config` and `map`.
pub fn field_app(config: GameConfig, map: TileMap) -> App {
    let mut app = title_app(config, map);
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app.world_mut().run_schedule(StateTransition);
    app
}

/// Build an app and run its first frame, which ends on the title screen.
pub fn title_app(config: GameConfig, map: TileMap) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_resource(config)
        .insert_resource(map)
        .insert_resource(ItemCatalog::default())
        .add_plugins(SteelFieldPlugin);
    app.update();
    app
}

/// One simulation tick followed by any queued state change.
pub fn tick(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
    app.world_mut().run_schedule(StateTransition);
}

pub fn tick_n(app: &mut App, n: usize) {
    for _ in 0..n {
        tick(app);
    }
}

/// Rebuild the draw list as a rendered frame would.
pub fn draw_frame(app: &mut App) {
    app.world_mut().run_schedule(Update);
}

pub fn press(app: &mut App, action: Action) {
    app.world_mut().resource_mut::<ActionState>().press(action);
}

pub fn release(app: &mut App, action: Action) {
    app.world_mut().resource_mut::<ActionState>().release(action);
}

/// Press `action` and run one tick.
pub fn tap(app: &mut App, action: Action) {
    press(app, action);
    tick(app);
    release(app, action);
}

pub fn game_state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

pub fn play_state(app: &App) -> Option<PlayState> {
    app.world()
        .get_resource::<State<PlayState>>()
        .map(|state| *state.get())
}

pub fn player_actor(app: &mut App) -> Actor {
    app.world_mut()
        .query_filtered::<&Actor, With<Player>>()
        .single(app.world())
        .clone()
}

pub fn player_status(app: &mut App) -> BattleStatus {
    app.world_mut()
        .query_filtered::<&BattleStatus, With<Player>>()
        .single(app.world())
        .clone()
}

pub fn set_player_hp(app: &mut App, hp: u32) {
    let mut query = app
        .world_mut()
        .query_filtered::<&mut BattleStatus, With<Player>>();
    query.single_mut(app.world_mut()).hp = hp;
}

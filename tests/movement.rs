mod common;

use bevy::prelude::*;

use common::*;
use steel_field::input::Action;
use steel_field::world::FieldCamera;

#[test]
fn player_stops_flush_against_a_wall() {
    let mut app = field_app(empty_scene_config(), room());
    assert_eq!(player_actor(&mut app).position, Vec2::new(35.0, 35.0));

    press(&mut app, Action::MoveRight);
    tick_n(&mut app, 30);

    // The wall at (4, 1) starts at x = 128; a 26 px actor stepping 4 px
    // from x = 35 last fits at x = 99.
    let actor = player_actor(&mut app);
    assert_eq!(actor.position, Vec2::new(99.0, 35.0));
    assert_eq!(actor.velocity.x, 0.0);
}

#[test]
fn blocked_axis_still_lets_the_other_move() {
    let mut config = empty_scene_config();
    config.player.start_tile = (6, 2);
    let mut app = field_app(config, room());
    let start = player_actor(&mut app).position;

    press(&mut app, Action::MoveRight);
    press(&mut app, Action::MoveDown);
    tick_n(&mut app, 10);

    let end = player_actor(&mut app).position;
    // The east wall begins at x = 224, so x stays below 224 - 26.
    assert!(end.x <= 198.0);
    assert!(end.x > start.x);
    assert!(end.y > start.y + 25.0);
}

#[test]
fn running_covers_more_ground() {
    let mut app = field_app(empty_scene_config(), open_field(40, 4));

    press(&mut app, Action::MoveRight);
    tick(&mut app);
    let walked = player_actor(&mut app).position.x;

    press(&mut app, Action::Run);
    tick(&mut app);
    let ran = player_actor(&mut app).position.x - walked;

    assert!((walked - 39.0).abs() < 1e-4);
    assert!((ran - 7.2).abs() < 1e-4);
}

#[test]
fn free_movement_is_clamped_to_the_map() {
    let mut config = empty_scene_config();
    config.collision = false;
    let mut app = field_app(config, room());

    press(&mut app, Action::MoveLeft);
    press(&mut app, Action::MoveUp);
    tick_n(&mut app, 20);

    assert_eq!(player_actor(&mut app).position, Vec2::ZERO);
}

#[test]
fn free_movement_passes_through_walls() {
    let mut config = empty_scene_config();
    config.collision = false;
    let mut app = field_app(config, room());

    press(&mut app, Action::MoveRight);
    tick_n(&mut app, 50);

    // Clamped at the right edge of the 256 px wide map, walls ignored.
    assert_eq!(player_actor(&mut app).position.x, 256.0 - 26.0);
}

#[test]
fn camera_centers_on_the_player() {
    let mut config = empty_scene_config();
    config.viewport = (64.0, 64.0);
    config.player.start_tile = (6, 4);
    let mut app = field_app(config, room());

    tick(&mut app);

    // Player center (208, 144) minus half the viewport.
    let camera = app.world().resource::<FieldCamera>();
    assert_eq!(camera.offset, Vec2::new(176.0, 112.0));
}

#[test]
fn camera_never_goes_negative() {
    let mut app = field_app(empty_scene_config(), room());
    tick(&mut app);
    assert_eq!(app.world().resource::<FieldCamera>().offset, Vec2::ZERO);
}

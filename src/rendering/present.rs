//! Sprite presenter for the draw list.
//!
//! Only the binary adds this plugin. It owns the 2D camera and the tileset
//! image, and redraws the whole frame from [`DrawList`] every update.

use bevy::asset::LoadState;
use bevy::prelude::*;

use super::draw::{DrawCommand, DrawList, DrawSet, DrawSpace};
use crate::core::GameConfig;
use crate::world::TileAtlas;

/// Handle of the tileset image while it loads.
#[derive(Resource)]
pub struct TilesetHandle(pub Handle<Image>);

/// Marker for entities spawned from last frame's draw list.
#[derive(Component)]
pub struct Presented;

/// Presenter plugin - turns the draw list into sprites and text.
pub struct PresentPlugin;

impl Plugin for PresentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_presenter)
            .add_systems(
                Update,
                (
                    build_atlas.run_if(not(resource_exists::<TileAtlas>)),
                    present.after(DrawSet),
                ),
            );
    }
}

fn setup_presenter(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<GameConfig>,
) {
    commands.spawn(Camera2d);
    let handle = asset_server.load::<Image>(&config.tileset_path);
    commands.insert_resource(TilesetHandle(handle));
}

/// Slice the tileset once it has loaded.
///
/// A tileset that fails to load or is smaller than one tile is fatal.
fn build_atlas(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
    config: Res<GameConfig>,
    tileset: Res<TilesetHandle>,
    mut exit: EventWriter<AppExit>,
) {
    match asset_server.load_state(tileset.0.id()) {
        LoadState::Failed(e) => {
            error!("Failed to load tileset {}: {}", config.tileset_path, e);
            exit.send(AppExit::error());
            return;
        }
        LoadState::Loaded => {}
        _ => return,
    }
    let Some(image) = images.get(&tileset.0) else {
        return;
    };

    match TileAtlas::new(
        image.width(),
        image.height(),
        config.tile_size as u32,
        config.first_tile_id,
    ) {
        Ok(atlas) => {
            info!(
                "Sliced tileset {} into {} tiles",
                config.tileset_path,
                atlas.len()
            );
            commands.insert_resource(atlas);
        }
        Err(e) => {
            error!("{}: {}", config.tileset_path, e);
            exit.send(AppExit::error());
        }
    }
}

/// Bevy 2D transform for a top-left anchored box in viewport pixels.
fn screen_transform(min: Vec2, size: Vec2, viewport: Vec2, z: f32) -> Transform {
    Transform::from_xyz(
        min.x + size.x / 2.0 - viewport.x / 2.0,
        viewport.y / 2.0 - min.y - size.y / 2.0,
        z,
    )
}

/// Replace last frame's sprites with this frame's draw list.
///
/// Tiles are held back until the atlas exists. Ids the atlas does not know
/// are skipped.
fn present(
    mut commands: Commands,
    list: Res<DrawList>,
    atlas: Option<Res<TileAtlas>>,
    tileset: Res<TilesetHandle>,
    old: Query<Entity, With<Presented>>,
) {
    for entity in old.iter() {
        commands.entity(entity).despawn_recursive();
    }

    let ts = list.tile_size;
    for (index, command) in list.commands.iter().enumerate() {
        let z = index as f32 * 0.001;
        match command {
            DrawCommand::Tile { id, col, row } => {
                let Some(region) = atlas.as_ref().and_then(|a| a.region(*id)) else {
                    continue;
                };
                let world = Vec2::new(*col as f32, *row as f32) * ts;
                commands.spawn((
                    Sprite {
                        image: tileset.0.clone(),
                        rect: Some(region.as_rect()),
                        custom_size: Some(Vec2::splat(ts)),
                        ..default()
                    },
                    screen_transform(world - list.camera_offset, Vec2::splat(ts), list.viewport, z),
                    Presented,
                ));
            }
            DrawCommand::Rect { rect, color, space } => {
                let min = match space {
                    DrawSpace::World => rect.min - list.camera_offset,
                    DrawSpace::Screen => rect.min,
                };
                commands.spawn((
                    Sprite::from_color(*color, rect.size()),
                    screen_transform(min, rect.size(), list.viewport, z),
                    Presented,
                ));
            }
            DrawCommand::Text {
                position,
                lines,
                size,
            } => {
                commands.spawn((
                    Text::new(lines.join("\n")),
                    TextFont {
                        font_size: *size,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(position.x),
                        top: Val::Px(position.y),
                        ..default()
                    },
                    Presented,
                ));
            }
        }
    }
}

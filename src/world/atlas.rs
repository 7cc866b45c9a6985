//! Tileset slicing.

use std::collections::HashMap;

use bevy::prelude::*;

use super::error::AtlasError;

/// Pixel regions of a tileset image keyed by tile id.
///
/// Ids run row-major from `first_id` at the top-left tile. Partial tiles at
/// the right and bottom edges are ignored.
#[derive(Resource, Debug, Clone)]
pub struct TileAtlas {
    regions: HashMap<u32, URect>,
    tile_size: u32,
    columns: u32,
    rows: u32,
}

impl TileAtlas {
    /// Slice a `width` x `height` image into `tile_size` squares.
    pub fn new(
        width: u32,
        height: u32,
        tile_size: u32,
        first_id: u32,
    ) -> Result<Self, AtlasError> {
        if tile_size == 0 {
            return Err(AtlasError::ZeroTileSize);
        }
        if width < tile_size || height < tile_size {
            return Err(AtlasError::TooSmall {
                width,
                height,
                tile_size,
            });
        }

        let columns = width / tile_size;
        let rows = height / tile_size;
        let mut regions = HashMap::with_capacity((columns * rows) as usize);
        for row in 0..rows {
            for col in 0..columns {
                let min = UVec2::new(col * tile_size, row * tile_size);
                regions.insert(
                    first_id + row * columns + col,
                    URect::from_corners(min, min + UVec2::splat(tile_size)),
                );
            }
        }

        Ok(Self {
            regions,
            tile_size,
            columns,
            rows,
        })
    }

    /// Region for `id`. Unknown ids return `None` and are not drawn.
    pub fn region(&self, id: u32) -> Option<URect> {
        self.regions.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Tiles per row and per column of the source image.
    pub fn grid(&self) -> UVec2 {
        UVec2::new(self.columns, self.rows)
    }
}

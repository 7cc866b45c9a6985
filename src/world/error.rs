//! Error types for map and tileset loading.

use thiserror::Error;

/// Errors that can occur when loading a tile map.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    /// File could not be read.
    #[error("Failed to read map '{path}': {details}")]
    Read { path: String, details: String },

    /// No non-blank line in the input.
    #[error("Map is empty")]
    Empty,

    /// A cell is not a non-negative integer. Row and column are 1-based and
    /// count non-blank lines only.
    #[error("Invalid tile id '{value}' at row {row}, column {column}")]
    Parse {
        row: usize,
        column: usize,
        value: String,
    },
}

/// Errors that can occur when slicing a tileset image.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AtlasError {
    #[error("Tile size must be greater than zero")]
    ZeroTileSize,

    /// Image smaller than one tile in either axis.
    #[error("Tileset image {width}x{height} is smaller than tile size {tile_size}")]
    TooSmall {
        width: u32,
        height: u32,
        tile_size: u32,
    },
}

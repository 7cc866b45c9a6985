//! Tile map grid parsed from comma-separated text.

use std::fs;

use bevy::prelude::*;

use super::error::MapError;

/// Rectangular grid of tile ids, row 0 at the top.
///
/// Immutable after load. Short rows are right-padded with 0 so every row has
/// `cols` cells.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    cells: Vec<u32>,
    rows: usize,
    cols: usize,
}

impl TileMap {
    /// Parse a map from text, one row per line.
    ///
    /// Blank lines are skipped and empty cells read as 0. Any other cell must
    /// be a non-negative integer.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let mut rows = Vec::new();
        for (row_index, line) in text.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let mut row = Vec::new();
            for (col_index, cell) in line.split(',').enumerate() {
                let cell = cell.trim();
                if cell.is_empty() {
                    row.push(0);
                    continue;
                }
                let id = cell.parse::<u32>().map_err(|_| MapError::Parse {
                    row: row_index + 1,
                    column: col_index + 1,
                    value: cell.to_string(),
                })?;
                row.push(id);
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Read and parse a map file.
    pub fn load(path: &str) -> Result<Self, MapError> {
        let text = fs::read_to_string(path).map_err(|e| MapError::Read {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        Self::parse(&text)
    }

    /// Build a map from rows, padding short rows with 0.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, MapError> {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(MapError::Empty);
        }
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in &rows {
            cells.extend_from_slice(row);
            cells.extend(std::iter::repeat(0).take(cols - row.len()));
        }
        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Tile id at (col, row), or `None` outside the grid.
    pub fn get(&self, col: i32, row: i32) -> Option<u32> {
        if col < 0 || row < 0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Every cell as `(col, row, id)`, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &id)| (i % cols, i / cols, id))
    }

    /// The grid as rows of ids.
    pub fn grid(&self) -> Vec<Vec<u32>> {
        self.cells.chunks(self.cols).map(<[u32]>::to_vec).collect()
    }

    /// Canonical text form. `parse(to_csv())` returns an equal map.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        for row in self.cells.chunks(self.cols) {
            let line: Vec<String> = row.iter().map(u32::to_string).collect();
            out.push_str(&line.join(","));
            out.push('\n');
        }
        out
    }

    /// Size of the whole map in world pixels.
    pub fn pixel_size(&self, tile_size: f32) -> Vec2 {
        Vec2::new(self.cols as f32 * tile_size, self.rows as f32 * tile_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_and_columns() {
        let map = TileMap::parse("1,1,1\n1,0,1\n1,1,1\n").unwrap();
        assert_eq!(map.rows(), 3);
        assert_eq!(map.cols(), 3);
        assert_eq!(map.get(1, 1), Some(0));
        assert_eq!(map.get(2, 0), Some(1));
        assert_eq!(map.get(3, 0), None);
        assert_eq!(map.get(-1, 0), None);
    }

    #[test]
    fn short_rows_pad_with_zero() {
        let map = TileMap::parse("1,2,3,4\n5\n\n6,7\n").unwrap();
        assert_eq!(map.rows(), 3);
        assert_eq!(map.cols(), 4);
        assert_eq!(map.grid(), vec![vec![1, 2, 3, 4], vec![5, 0, 0, 0], vec![6, 7, 0, 0]]);
    }

    #[test]
    fn empty_cells_read_as_zero() {
        let map = TileMap::parse("1,,2,\r\n 3 , 4\n").unwrap();
        assert_eq!(map.grid(), vec![vec![1, 0, 2, 0], vec![3, 4, 0, 0]]);
    }

    #[test]
    fn bad_cell_reports_position() {
        let err = TileMap::parse("1,1\n\n1,x\n").unwrap_err();
        assert_eq!(
            err,
            MapError::Parse {
                row: 2,
                column: 2,
                value: "x".to_string()
            }
        );
        assert!(TileMap::parse("1,-2").is_err());
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(TileMap::parse("\n  \n\n"), Err(MapError::Empty));
        assert_eq!(TileMap::from_rows(vec![]), Err(MapError::Empty));
    }

    #[test]
    fn csv_round_trips() {
        let map = TileMap::parse("0,1,2\n3,4\n").unwrap();
        let again = TileMap::parse(&map.to_csv()).unwrap();
        assert_eq!(map, again);
        assert_eq!(map.to_csv(), "0,1,2\n3,4,0\n");
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = TileMap::load("assets/maps/does_not_exist.csv").unwrap_err();
        assert!(matches!(err, MapError::Read { .. }));
    }

    #[test]
    fn iter_is_row_major() {
        let map = TileMap::parse("1,2\n3,4\n").unwrap();
        let cells: Vec<_> = map.iter().collect();
        assert_eq!(cells, vec![(0, 0, 1), (1, 0, 2), (0, 1, 3), (1, 1, 4)]);
        assert_eq!(map.pixel_size(32.0), Vec2::new(64.0, 64.0));
    }
}

use crate::config::GridGeometry;
use crate::core::GridCell;
use serde::{Deserialize, Serialize};

/// Sprite position in screen pixels (top-left corner of the sprite).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPos {
    pub x: f32,
    pub y: f32,
}

impl PixelPos {
    pub fn new(x: f32, y: f32) -> Self {
        PixelPos { x, y }
    }
}

/// Converts between sprite pixels and board cells for one screen geometry.
#[derive(Clone, Copy, Debug)]
pub struct GridCoordinateMapper {
    cell_width: f32,
    cell_height: f32,
    x_offset: f32,
    y_offset: f32,
}

impl GridCoordinateMapper {
    pub fn new(geometry: &GridGeometry) -> Self {
        GridCoordinateMapper {
            cell_width: geometry.cell_width() as f32,
            cell_height: geometry.cell_height() as f32,
            x_offset: geometry.x_offset as f32,
            y_offset: geometry.y_offset as f32,
        }
    }

    /// Truncates toward zero after shifting to the sprite centre; never rounds.
    pub fn to_grid(&self, pos: PixelPos) -> GridCell {
        let row = (pos.y + self.y_offset) / self.cell_height;
        let col = (pos.x + self.x_offset) / self.cell_width;
        GridCell::new(row as i32, col as i32)
    }

    /// Sprite position that puts the sprite centre in the middle of `cell`.
    pub fn to_world(&self, cell: GridCell) -> PixelPos {
        PixelPos::new(
            cell.col as f32 * self.cell_width + self.cell_width / 2.0 - self.x_offset,
            cell.row as f32 * self.cell_height + self.cell_height / 2.0 - self.y_offset,
        )
    }
}

impl Default for GridCoordinateMapper {
    fn default() -> Self {
        GridCoordinateMapper::new(&GridGeometry::default())
    }
}

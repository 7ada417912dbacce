//! Mapping between maze grids and a 2D scene.
//!
//! These are the conversions the game's tilemap side needs: sizing a maze to fill an
//! orthographic camera view, placing objects at cell centres, and picking alternating wall
//! tile variants.

use crate::{
    engine::MIN_DIMENSION,
    maze::{Coord, Grid},
};

/// Columns kept free around the maze for the HUD.
const HORIZONTAL_MARGIN: i64 = 10;
/// Rows kept free around the maze for the HUD.
const VERTICAL_MARGIN: i64 = 4;

/// Maze size that fills an orthographic view, minus the HUD margins.
///
/// `orthographic_size` is half the view height in cells and `aspect` is width over height.
/// Results are clamped to the minimum maze dimension.
pub fn viewport_maze_size(orthographic_size: f32, aspect: f32) -> (u16, u16) {
    let view_height = orthographic_size * 2.0;
    let view_width = view_height * aspect;

    let clamp = |cells: f32, margin: i64| -> u16 {
        let cells = cells.round() as i64 - margin;
        cells.clamp(MIN_DIMENSION as i64, u16::MAX as i64) as u16
    };
    (
        clamp(view_width, HORIZONTAL_MARGIN),
        clamp(view_height, VERTICAL_MARGIN),
    )
}

/// Grid-to-world transform with the grid centred on the world origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldTransform {
    /// World units per cell.
    pub cell_size: f32,
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self { cell_size: 1.0 }
    }
}

impl WorldTransform {
    /// World position of the centre of `coord`. Grid `y` grows downwards, world `y` upwards.
    pub fn cell_to_world(&self, grid: &Grid, coord: Coord) -> (f32, f32) {
        let x = coord.0 as i32 - (grid.width() / 2) as i32;
        let y = (grid.height() / 2) as i32 - coord.1 as i32;
        (
            (x as f32 + 0.5) * self.cell_size,
            (y as f32 + 0.5) * self.cell_size,
        )
    }
}

/// Index of the wall tile variant for `coord`, alternating diagonally.
/// Returns 0 when there are no variants.
pub fn wall_variant(coord: Coord, variants: usize) -> usize {
    if variants == 0 {
        return 0;
    }
    (coord.0 as usize + coord.1 as usize) % variants
}

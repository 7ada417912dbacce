use std::fmt;

use super::{Coord, cell::Tile};
use crate::error::{MazeError, Result};

/// A fixed-size 2D array of tiles, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Tile]>,
    width: u16,
    height: u16,
}

impl Grid {
    /// Creates a grid with every cell set to `Tile::Wall`.
    pub fn new(width: u16, height: u16) -> Self {
        Grid::filled(width, height, Tile::Wall)
    }

    pub fn filled(width: u16, height: u16, tile: Tile) -> Self {
        let data = vec![tile; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    pub fn is_boundary(&self, coord: Coord) -> bool {
        let (x, y) = coord;
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    pub(crate) fn ravel_index(&self, coord: Coord) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    fn check_bounds(&self, coord: Coord) -> Result<usize> {
        if self.is_in_bounds(coord) {
            Ok(self.ravel_index(coord))
        } else {
            Err(MazeError::OutOfBounds {
                x: coord.0,
                y: coord.1,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Returns the tile at `coord`, or `OutOfBounds` if it lies outside the grid.
    pub fn get(&self, coord: Coord) -> Result<Tile> {
        self.check_bounds(coord).map(|idx| self.data[idx])
    }

    /// Overwrites the tile at `coord`, or fails with `OutOfBounds`.
    pub fn set(&mut self, coord: Coord, tile: Tile) -> Result<()> {
        let idx = self.check_bounds(coord)?;
        self.data[idx] = tile;
        Ok(())
    }

    /// `false` for walls and for coordinates outside the grid.
    pub fn is_floor(&self, coord: Coord) -> bool {
        self.is_in_bounds(coord) && self[coord].is_floor()
    }

    pub fn floor_count(&self) -> usize {
        self.data.iter().filter(|tile| tile.is_floor()).count()
    }

    /// All floor cells in row-major order.
    pub fn floor_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(|&c| self[c].is_floor())
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Rows of tiles, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        // chunks panics on a zero chunk size
        self.data.chunks(self.width.max(1) as usize)
    }

    /// In-bounds 4-connected neighbors of `coord`, in the order up, down, left, right.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        let (x, y) = coord;
        // NOTE: When x or y is 0, wrapping_sub yields u16::MAX which the bounds check drops.
        // saturating_add caps at u16::MAX, which is never a valid index either.
        [
            (x, y.wrapping_sub(1)),
            (x, y.saturating_add(1)),
            (x.wrapping_sub(1), y),
            (x.saturating_add(1), y),
        ]
        .into_iter()
        .filter(move |&c| self.is_in_bounds(c))
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Tile;

    fn index(&self, index: Coord) -> &Self::Output {
        assert!(
            self.is_in_bounds(index),
            "coordinate {:?} is out of bounds for a {}x{} grid",
            index,
            self.width,
            self.height
        );
        &self.data[self.ravel_index(index)]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for tile in row {
                write!(f, "{}", tile.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

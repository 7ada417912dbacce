pub mod cell;
pub mod grid;

pub use cell::{Marker, Tile};
pub use grid::Grid;

/// Grid coordinate as `(x, y)`, with `y` growing downwards.
pub type Coord = (u16, u16);

/// Midpoint between two cells on the same row or column.
pub fn midpoint(a: Coord, b: Coord) -> Coord {
    (a.0.midpoint(b.0), a.1.midpoint(b.1))
}

/// Counts the distinct pairs of 4-adjacent floor cells.
/// A floor region that forms a tree has exactly `floor_count - 1` of them.
pub fn floor_adjacency_count(grid: &Grid) -> usize {
    grid.floor_cells()
        .map(|(x, y)| {
            // Only look right and down so each pair is counted once
            [(x.saturating_add(1), y), (x, y.saturating_add(1))]
                .into_iter()
                .filter(|&c| c != (x, y) && grid.is_floor(c))
                .count()
        })
        .sum()
}

use rand::Rng;

use crate::{
    error::Result,
    maze::{Coord, Grid, Tile, midpoint},
};

/// Where the carver starts on the odd lattice.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CarveOrigin {
    /// Always `(1, 1)`.
    #[default]
    Corner,
    /// A uniformly random cell with odd coordinates.
    Random,
}

impl CarveOrigin {
    fn pick<R>(self, grid: &Grid, rng: &mut R) -> Coord
    where
        R: Rng + ?Sized,
    {
        match self {
            CarveOrigin::Corner => (1, 1),
            CarveOrigin::Random => {
                let columns = (grid.width() - 1) / 2;
                let rows = (grid.height() - 1) / 2;
                (
                    rng.random_range(0..columns) * 2 + 1,
                    rng.random_range(0..rows) * 2 + 1,
                )
            }
        }
    }
}

/// Get unvisited lattice neighbors of a cell.
/// A neighbor is two steps away in a cardinal direction, strictly inside the border,
/// and still a wall. Candidates are listed in the order up, down, left, right.
fn get_unvisited_neighbors(grid: &Grid, coord: Coord) -> Vec<Coord> {
    let (x, y) = coord;
    let (width, height) = (grid.width(), grid.height());
    [
        // NOTE: When x < 2 or y < 2, wrapping_sub lands near u16::MAX and is filtered out
        // by the interior check below, same as a saturated x + 2 or y + 2.
        (x, y.wrapping_sub(2)),
        (x, y.saturating_add(2)),
        (x.wrapping_sub(2), y),
        (x.saturating_add(2), y),
    ]
    .into_iter()
    .filter(|&(nx, ny)| nx > 0 && nx < width - 1 && ny > 0 && ny < height - 1)
    .filter(|&c| grid[c] == Tile::Wall)
    .collect()
}

/// Carves a perfect maze into `grid` with an iterative randomized depth-first search.
///
/// The grid is reset to walls first. Passages are carved in steps of two so that a wall strip
/// always separates parallel corridors, which requires odd dimensions of at least 3.
/// The carved floor forms a spanning tree over every interior odd lattice cell.
pub fn recursive_backtrack<R>(grid: &mut Grid, origin: CarveOrigin, rng: &mut R) -> Result<()>
where
    R: Rng + ?Sized,
{
    debug_assert!(grid.width() % 2 == 1 && grid.height() % 2 == 1);
    if grid.width() < 3 || grid.height() < 3 {
        return Ok(());
    }

    // Initialize the grid with walls
    for coord in grid.coords() {
        grid.set(coord, Tile::Wall)?;
    }

    let start = origin.pick(grid, rng);
    grid.set(start, Tile::Floor)?;

    // The stack keeps only floor cells on the current carving path
    let mut stack = vec![start];
    let mut carved = 1usize;

    while let Some(&cell) = stack.last() {
        let neighbors = get_unvisited_neighbors(grid, cell);

        if neighbors.is_empty() {
            // Dead end, backtrack
            stack.pop();
            continue;
        }

        let neighbor = neighbors[rng.random_range(0..neighbors.len())];
        grid.set(midpoint(cell, neighbor), Tile::Floor)?;
        grid.set(neighbor, Tile::Floor)?;
        carved += 2;
        stack.push(neighbor);
    }

    tracing::debug!(
        "[carve] carved {} floor cells into a {}x{} grid from {:?}",
        carved,
        grid.width(),
        grid.height(),
        start
    );
    Ok(())
}

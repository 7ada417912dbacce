//! Reachability queries over the floor cells of a grid.

use std::collections::HashMap;

mod bfs;

pub use bfs::Bfs;

use crate::{
    error::Result,
    maze::{Coord, Grid},
};
use bfs::check_bounds;

/// Returns true iff `end` is dequeued by a BFS from `start`.
pub fn is_reachable(grid: &Grid, start: Coord, end: Coord) -> Result<bool> {
    check_bounds(grid, end)?;
    Ok(Bfs::new(grid, start)?.any(|(cell, _)| cell == end))
}

/// Returns the last cell dequeued by a BFS from `start`, which is a cell of maximum graph
/// distance. Ties go to whichever such cell was enqueued last.
pub fn farthest_from(grid: &Grid, start: Coord) -> Result<Coord> {
    Ok(Bfs::new(grid, start)?.last().map_or(start, |(cell, _)| cell))
}

/// BFS distance from `start` of every cell reachable from it, `start` included.
pub fn distances_from(grid: &Grid, start: Coord) -> Result<HashMap<Coord, u32>> {
    Ok(Bfs::new(grid, start)?.collect())
}

/// A shortest path from `start` to `end`, both inclusive, or `None` if `end` is unreachable.
pub fn shortest_path(grid: &Grid, start: Coord, end: Coord) -> Result<Option<Vec<Coord>>> {
    check_bounds(grid, end)?;
    let mut bfs = Bfs::new(grid, start)?;
    if bfs.by_ref().any(|(cell, _)| cell == end) {
        Ok(bfs.path_to(end))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::MazeError, maze::Tile};

    /// Builds a grid from rows of `#` (wall) and `.` (floor).
    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows[0].len() as u16, rows.len() as u16);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '.' {
                    grid.set((x as u16, y as u16), Tile::Floor).unwrap();
                }
            }
        }
        grid
    }

    #[test]
    fn test_is_reachable() {
        let grid = grid_from(&[
            "#######", //
            "#...#.#", //
            "#.#.#.#", //
            "#######",
        ]);
        assert!(is_reachable(&grid, (1, 1), (3, 2)).unwrap());
        assert!(is_reachable(&grid, (1, 1), (1, 1)).unwrap());
        assert!(!is_reachable(&grid, (1, 1), (5, 1)).unwrap());
        // Walls are never entered
        assert!(!is_reachable(&grid, (1, 1), (2, 2)).unwrap());
    }

    #[test]
    fn test_out_of_bounds_queries() {
        let grid = Grid::new(3, 3);
        assert!(matches!(
            is_reachable(&grid, (3, 0), (1, 1)),
            Err(MazeError::OutOfBounds { x: 3, y: 0, .. })
        ));
        assert!(matches!(
            is_reachable(&grid, (1, 1), (0, 7)),
            Err(MazeError::OutOfBounds { x: 0, y: 7, .. })
        ));
        assert!(farthest_from(&grid, (5, 5)).is_err());
    }

    #[test]
    fn test_farthest_from_corridor() {
        let grid = grid_from(&[
            "#######", //
            "#.....#", //
            "#####.#", //
            "#.....#", //
            "#######",
        ]);
        assert_eq!(farthest_from(&grid, (1, 1)).unwrap(), (1, 3));
        assert_eq!(farthest_from(&grid, (1, 3)).unwrap(), (1, 1));
        let distances = distances_from(&grid, (1, 1)).unwrap();
        assert_eq!(distances[&(1, 3)], 10);
        assert_eq!(distances.len(), 11);
    }

    #[test]
    fn test_farthest_tie_break_is_last_enqueued() {
        // Both arm ends are two steps from the centre. Up is enqueued before down,
        // so the bottom end is dequeued last.
        let grid = grid_from(&[
            "###", //
            "#.#", //
            "#.#", //
            "#.#", //
            "#.#", //
            "#.#", //
            "###",
        ]);
        assert_eq!(farthest_from(&grid, (1, 3)).unwrap(), (1, 5));
    }

    #[test]
    fn test_farthest_from_isolated_cell() {
        let grid = grid_from(&["###", "#.#", "###"]);
        assert_eq!(farthest_from(&grid, (1, 1)).unwrap(), (1, 1));
    }

    #[test]
    fn test_shortest_path() {
        let grid = grid_from(&[
            "#####", //
            "#...#", //
            "#.#.#", //
            "#...#", //
            "#####",
        ]);
        let path = shortest_path(&grid, (1, 1), (3, 3)).unwrap().unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&(1, 1)));
        assert_eq!(path.last(), Some(&(3, 3)));
        // Consecutive cells are 4-adjacent floor cells
        for pair in path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!(a.0.abs_diff(b.0) + a.1.abs_diff(b.1), 1);
            assert!(grid.is_floor(b));
        }
        // Down is expanded before right, so the route goes down first
        assert_eq!(path[1], (1, 2));

        assert_eq!(shortest_path(&grid, (1, 1), (1, 1)).unwrap(), Some(vec![(1, 1)]));
        assert_eq!(shortest_path(&grid, (1, 1), (2, 2)).unwrap(), None);
    }

    #[test]
    fn test_bfs_distances_never_decrease() {
        let grid = grid_from(&[
            "#########", //
            "#.......#", //
            "#.#.###.#", //
            "#.#...#.#", //
            "#.......#", //
            "#########",
        ]);
        let order = Bfs::new(&grid, (4, 3)).unwrap().collect::<Vec<_>>();
        assert!(order.windows(2).all(|w| w[0].1 <= w[1].1));
        assert_eq!(order.len(), grid.floor_count());
    }
}

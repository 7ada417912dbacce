use std::collections::VecDeque;

use crate::{
    error::{MazeError, Result},
    maze::{Coord, Grid},
};

/// Breadth-first traversal over 4-connected floor cells.
///
/// Yields `(cell, distance)` in dequeue order, so distances never decrease.
/// The start cell is always yielded first, even if it is a wall.
/// Neighbors are enqueued in the fixed order up, down, left, right, which makes the
/// traversal order fully determined by the grid and the start cell.
pub struct Bfs<'a> {
    grid: &'a Grid,
    queue: VecDeque<Coord>,
    /// Distance and parent of each cell seen so far, indexed like the grid
    seen: Vec<Option<(u32, Coord)>>,
}

impl<'a> Bfs<'a> {
    pub fn new(grid: &'a Grid, start: Coord) -> Result<Self> {
        check_bounds(grid, start)?;
        let mut seen = vec![None; grid.width() as usize * grid.height() as usize];
        seen[grid.ravel_index(start)] = Some((0, start));
        Ok(Self {
            grid,
            queue: VecDeque::from([start]),
            seen,
        })
    }

    /// BFS distance of `coord`, if it has been seen.
    pub fn distance(&self, coord: Coord) -> Option<u32> {
        self.seen_entry(coord).map(|(distance, _)| distance)
    }

    fn seen_entry(&self, coord: Coord) -> Option<(u32, Coord)> {
        if self.grid.is_in_bounds(coord) {
            self.seen[self.grid.ravel_index(coord)]
        } else {
            None
        }
    }

    /// Walks parent links back from `end`. Only meaningful once `end` has been dequeued.
    pub fn path_to(&self, end: Coord) -> Option<Vec<Coord>> {
        let mut path = vec![end];
        let mut current = end;
        loop {
            let (distance, parent) = self.seen_entry(current)?;
            if distance == 0 {
                break;
            }
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }
}

impl Iterator for Bfs<'_> {
    type Item = (Coord, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.queue.pop_front()?;
        let distance = self.distance(current)?;
        let grid = self.grid;

        for neighbor in grid.neighbors(current) {
            let idx = grid.ravel_index(neighbor);
            if self.seen[idx].is_none() && grid[neighbor].is_floor() {
                self.seen[idx] = Some((distance + 1, current));
                self.queue.push_back(neighbor);
            }
        }

        Some((current, distance))
    }
}

pub(super) fn check_bounds(grid: &Grid, coord: Coord) -> Result<()> {
    if grid.is_in_bounds(coord) {
        Ok(())
    } else {
        Err(MazeError::OutOfBounds {
            x: coord.0,
            y: coord.1,
            width: grid.width(),
            height: grid.height(),
        })
    }
}

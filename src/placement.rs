//! Start and goal selection on a generated grid.

use rand::Rng;

use crate::{
    error::{MazeError, Result},
    maze::{Coord, Grid},
    solvers::{farthest_from, is_reachable},
};

/// How the start cell is chosen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StartPolicy {
    /// The first floor cell in row-major order. `(1, 1)` on a carved maze.
    Corner,
    /// Uniform rejection sampling over the whole grid until a floor cell is hit.
    #[default]
    RandomFloor,
}

/// How the goal cell is chosen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GoalPolicy {
    /// Uniform rejection sampling until a floor cell reachable from the start is hit.
    RandomReachable,
    /// The last cell of a BFS from the start, i.e. a cell at maximum distance.
    #[default]
    Farthest,
}

impl std::fmt::Display for GoalPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalPolicy::RandomReachable => write!(f, "random reachable"),
            GoalPolicy::Farthest => write!(f, "farthest"),
        }
    }
}

/// Picks a start and a reachable goal.
///
/// Rejection sampling is bounded by `max_attempts`. A grid with a single floor cell yields
/// `start == goal`; callers are expected to cope with that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Planner {
    pub start_policy: StartPolicy,
    pub goal_policy: GoalPolicy,
    pub max_attempts: u32,
}

impl Default for Planner {
    fn default() -> Self {
        Self {
            start_policy: StartPolicy::default(),
            goal_policy: GoalPolicy::default(),
            max_attempts: 10_000,
        }
    }
}

fn random_coord<R>(grid: &Grid, rng: &mut R) -> Coord
where
    R: Rng + ?Sized,
{
    (
        rng.random_range(0..grid.width()),
        rng.random_range(0..grid.height()),
    )
}

impl Planner {
    /// Returns `(start, goal)`.
    pub fn plan<R>(&self, grid: &Grid, rng: &mut R) -> Result<(Coord, Coord)>
    where
        R: Rng + ?Sized,
    {
        let start = self.pick_start(grid, rng)?;
        let goal = self.pick_goal(grid, start, rng)?;
        tracing::debug!(
            "[placement] start {:?}, goal {:?} ({} policy)",
            start,
            goal,
            self.goal_policy
        );
        Ok((start, goal))
    }

    pub fn pick_start<R>(&self, grid: &Grid, rng: &mut R) -> Result<Coord>
    where
        R: Rng + ?Sized,
    {
        match self.start_policy {
            StartPolicy::Corner => grid.floor_cells().next().ok_or(MazeError::NoFloorCell),
            StartPolicy::RandomFloor => {
                if grid.floor_count() == 0 {
                    return Err(MazeError::NoFloorCell);
                }
                for _ in 0..self.max_attempts {
                    let coord = random_coord(grid, rng);
                    if grid[coord].is_floor() {
                        return Ok(coord);
                    }
                }
                // Sparse grid, fall back to a uniform pick among the floor cells
                tracing::warn!(
                    "[placement] no floor cell hit in {} samples, picking from the floor list",
                    self.max_attempts
                );
                let floor = grid.floor_cells().collect::<Vec<_>>();
                Ok(floor[rng.random_range(0..floor.len())])
            }
        }
    }

    pub fn pick_goal<R>(&self, grid: &Grid, start: Coord, rng: &mut R) -> Result<Coord>
    where
        R: Rng + ?Sized,
    {
        match self.goal_policy {
            GoalPolicy::Farthest => farthest_from(grid, start),
            GoalPolicy::RandomReachable => {
                for _ in 0..self.max_attempts {
                    let coord = random_coord(grid, rng);
                    if grid[coord].is_floor() && is_reachable(grid, start, coord)? {
                        return Ok(coord);
                    }
                }
                tracing::warn!(
                    "[placement] gave up on a reachable goal from {:?} after {} attempts",
                    start,
                    self.max_attempts
                );
                Err(MazeError::NoReachableGoalFound {
                    attempts: self.max_attempts,
                })
            }
        }
    }
}

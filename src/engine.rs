use rand::Rng;

use crate::{
    error::{MazeError, Result},
    generators::{CarveOrigin, Generator, NoiseParams, generate_maze, get_rng},
    maze::{Coord, Grid},
    placement::{GoalPolicy, Planner, StartPolicy},
};

/// Smallest accepted width or height.
pub const MIN_DIMENSION: u16 = 3;

/// Everything that shapes a generated maze apart from its size and seed.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MazeConfig {
    pub generator: Generator,
    pub carve_origin: CarveOrigin,
    pub planner: Planner,
}

impl MazeConfig {
    pub fn with_generator(mut self, generator: Generator) -> Self {
        self.generator = generator;
        self
    }

    /// Shorthand for `with_generator(Generator::Noise(params))`.
    pub fn with_noise(self, params: NoiseParams) -> Self {
        self.with_generator(Generator::Noise(params))
    }

    pub fn with_carve_origin(mut self, origin: CarveOrigin) -> Self {
        self.carve_origin = origin;
        self
    }

    pub fn with_start_policy(mut self, policy: StartPolicy) -> Self {
        self.planner.start_policy = policy;
        self
    }

    pub fn with_goal_policy(mut self, policy: GoalPolicy) -> Self {
        self.planner.goal_policy = policy;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.planner.max_attempts = max_attempts;
        self
    }
}

/// A finished maze. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeResult {
    grid: Grid,
    start: Coord,
    goal: Coord,
}

impl MazeResult {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    /// Equal to `start` when the grid has a single floor cell.
    pub fn goal(&self) -> Coord {
        self.goal
    }

    pub fn into_parts(self) -> (Grid, Coord, Coord) {
        (self.grid, self.start, self.goal)
    }
}

/// Rounds an even dimension up to the next odd one.
pub fn normalize_dimension(value: u16) -> u16 {
    if value % 2 == 0 { value + 1 } else { value }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MazeEngine {
    config: MazeConfig,
}

impl MazeEngine {
    pub fn new(config: MazeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Generates a maze reproducibly from `seed`.
    pub fn generate(&self, width: u16, height: u16, seed: u64) -> Result<MazeResult> {
        tracing::debug!("[engine] generating {}x{} maze with seed {}", width, height, seed);
        self.generate_with_rng(width, height, &mut get_rng(Some(seed)))
    }

    /// Generates a maze drawing all randomness from `rng`.
    ///
    /// Even dimensions are bumped to the next odd value so the carver's lattice fits.
    /// Fails with `InvalidDimensions` when either dimension is below 3.
    pub fn generate_with_rng<R>(
        &self,
        width: u16,
        height: u16,
        rng: &mut R,
    ) -> Result<MazeResult>
    where
        R: Rng + ?Sized,
    {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        // u16::MAX is odd, so this never overflows
        let (width, height) = (normalize_dimension(width), normalize_dimension(height));

        let mut grid = Grid::new(width, height);
        generate_maze(&mut grid, self.config.generator, self.config.carve_origin, rng)?;
        let (start, goal) = self.config.planner.plan(&grid, rng)?;

        tracing::info!(
            "[engine] {} produced a {}x{} maze, start {:?}, goal {:?}",
            self.config.generator,
            width,
            height,
            start,
            goal
        );
        Ok(MazeResult { grid, start, goal })
    }
}

/// Generates a maze with the default configuration: DFS carving from `(1, 1)`, a random
/// floor start and the farthest reachable goal.
pub fn generate(width: u16, height: u16, seed: u64) -> Result<MazeResult> {
    MazeEngine::default().generate(width, height, seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        maze::{Tile, floor_adjacency_count},
        solvers::{distances_from, is_reachable, shortest_path},
    };

    fn assert_border_is_wall(grid: &Grid) {
        for c in grid.coords().filter(|&c| grid.is_boundary(c)) {
            assert_eq!(grid[c], Tile::Wall, "border cell {:?} is not a wall", c);
        }
    }

    #[test]
    fn test_generate_11x11_seed_42() {
        let result = generate(11, 11, 42).unwrap();
        let grid = result.grid();
        assert_eq!((grid.width(), grid.height()), (11, 11));
        assert!((0..11).all(|i| grid[(0, i)] == Tile::Wall && grid[(i, 0)] == Tile::Wall));
        assert_border_is_wall(grid);
        assert!(grid.is_floor(result.start()));
        assert!(grid.is_floor(result.goal()));

        let path = shortest_path(grid, result.start(), result.goal())
            .unwrap()
            .unwrap();
        assert!(path.len() > 1);

        assert_eq!(generate(11, 11, 42).unwrap(), result);
    }

    #[test]
    fn test_even_dimensions_are_normalized() {
        let result = generate(4, 4, 7).unwrap();
        assert_eq!((result.grid().width(), result.grid().height()), (5, 5));
        assert_border_is_wall(result.grid());
        // 2x2 lattice cells joined by 3 passages
        assert_eq!(result.grid().floor_count(), 7);

        let result = generate(10, 7, 7).unwrap();
        assert_eq!((result.grid().width(), result.grid().height()), (11, 7));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            generate(2, 9, 0),
            Err(MazeError::InvalidDimensions {
                width: 2,
                height: 9
            })
        );
        assert!(matches!(
            generate(9, 0, 0),
            Err(MazeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_smallest_maze_is_degenerate() {
        let result = generate(3, 3, 5).unwrap();
        assert_eq!(result.start(), (1, 1));
        assert_eq!(result.goal(), (1, 1));
    }

    #[test]
    fn test_carved_maze_invariants() {
        for seed in 0..25 {
            let result = generate(15, 11, seed).unwrap();
            let grid = result.grid();
            assert_border_is_wall(grid);

            // Connectivity: every floor cell is reachable from the start
            let distances = distances_from(grid, result.start()).unwrap();
            assert_eq!(distances.len(), grid.floor_count());

            // Acyclicity: a tree over F cells has F - 1 edges
            assert_eq!(floor_adjacency_count(grid), grid.floor_count() - 1);

            // Farthest policy: nothing is strictly farther than the goal
            let goal_distance = distances[&result.goal()];
            assert!(distances.values().all(|&d| d <= goal_distance));

            assert!(is_reachable(grid, result.start(), result.goal()).unwrap());
        }
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        // Statistical: a collision on one pair is possible, on all of them is not
        let differing = (1..=10u64)
            .filter(|&seed| {
                let a = generate(21, 21, seed).unwrap();
                let b = generate(21, 21, seed + 100).unwrap();
                (a.start(), a.goal()) != (b.start(), b.goal())
            })
            .count();
        assert!(differing >= 8);
        assert_ne!(generate(21, 21, 1).unwrap(), generate(21, 21, 2).unwrap());
    }

    #[test]
    fn test_noise_maze_goal_is_reachable() {
        let engine = MazeEngine::new(
            MazeConfig::default()
                .with_noise(NoiseParams::default())
                .with_goal_policy(GoalPolicy::RandomReachable),
        );
        for seed in 0..10 {
            let result = engine.generate(23, 23, seed).unwrap();
            let grid = result.grid();
            assert_border_is_wall(grid);
            assert!(grid.is_floor(result.start()));
            assert!(grid.is_floor(result.goal()));
            assert!(is_reachable(grid, result.start(), result.goal()).unwrap());
            assert_eq!(engine.generate(23, 23, seed).unwrap(), result);
        }
    }

    #[test]
    fn test_noise_maze_with_no_floor() {
        let engine = MazeEngine::new(MazeConfig::default().with_noise(NoiseParams {
            density: 13.0,
            threshold: -1.0,
        }));
        assert_eq!(engine.generate(9, 9, 1), Err(MazeError::NoFloorCell));
    }

    #[test]
    fn test_corner_start_and_random_origin() {
        let engine = MazeEngine::new(
            MazeConfig::default()
                .with_carve_origin(CarveOrigin::Random)
                .with_start_policy(StartPolicy::Corner),
        );
        let result = engine.generate(13, 9, 3).unwrap();
        assert_eq!(result.start(), (1, 1));
        let (grid, start, goal) = result.into_parts();
        assert!(is_reachable(&grid, start, goal).unwrap());
        assert_ne!(start, goal);
    }

    #[test]
    fn test_independent_threads_agree() {
        let handles = (0..4)
            .map(|_| std::thread::spawn(|| generate(31, 17, 99).unwrap()))
            .collect::<Vec<_>>();
        let results = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>();
        assert!(results.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_normalize_dimension() {
        assert_eq!(normalize_dimension(4), 5);
        assert_eq!(normalize_dimension(5), 5);
        assert_eq!(normalize_dimension(u16::MAX), u16::MAX);
    }
}

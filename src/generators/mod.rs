use rand::{Rng, SeedableRng, rngs::StdRng};

mod noise;
mod recur_backtrack;

pub use noise::{NoiseParams, noise_walls};
pub use recur_backtrack::{CarveOrigin, recursive_backtrack};

use crate::{error::Result, maze::Grid};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Wall placement strategy.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Generator {
    /// Randomized depth-first carving on the odd lattice. Always fully connected.
    #[default]
    RecurBacktrack,
    /// Perlin noise thresholding. Floor regions may be disconnected.
    Noise(NoiseParams),
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracking (DFS carving)"),
            Generator::Noise(_) => write!(f, "Perlin Noise Walls"),
        }
    }
}

/// Fills `grid` with walls and floor according to `generator`.
pub fn generate_maze<R>(
    grid: &mut Grid,
    generator: Generator,
    origin: CarveOrigin,
    rng: &mut R,
) -> Result<()>
where
    R: Rng + ?Sized,
{
    match generator {
        Generator::RecurBacktrack => recursive_backtrack(grid, origin, rng),
        Generator::Noise(params) => noise_walls(grid, params, rng),
    }
}

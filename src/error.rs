//! Error types shared by the grid, the searches and the engine.

use thiserror::Error;

/// Errors that can occur while building or querying a maze.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// A coordinate outside the grid extents was accessed.
    #[error("coordinate ({x}, {y}) is out of bounds for a {width}x{height} grid")]
    OutOfBounds {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },

    /// The requested maze is smaller than the minimum viable 3x3.
    #[error("maze dimensions {width}x{height} are too small, both must be at least 3")]
    InvalidDimensions { width: u16, height: u16 },

    /// The generated grid contains no floor cell to start from.
    #[error("the grid has no floor cell")]
    NoFloorCell,

    /// Goal sampling ran out of attempts without hitting a reachable floor cell.
    #[error("no reachable goal found after {attempts} attempts")]
    NoReachableGoalFound { attempts: u32 },
}

pub type Result<T> = std::result::Result<T, MazeError>;

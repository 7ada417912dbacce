//! Procedural maze generation for a 2D escape game.
//!
//! [`generate`] builds a maze with randomized depth-first carving and places a start and a
//! goal that is guaranteed to be reachable from it. [`MazeEngine`] exposes the same pipeline
//! with a configurable wall generator and placement policies.

pub mod engine;
pub mod error;
pub mod generators;
pub mod layout;
pub mod logging;
pub mod maze;
pub mod placement;
pub mod solvers;

pub use engine::{MazeConfig, MazeEngine, MazeResult, generate};
pub use error::MazeError;
pub use maze::{Coord, Grid, Tile};

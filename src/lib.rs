//! Pipe Twist - a corner-to-corner pipe rotation puzzle
//!
//! Core modules:
//! - `engine`: Deterministic puzzle engine (tiles, generation, connectivity)
//! - `session`: Game session controller (counters, timer, win detection)
//! - `score`: Best-score tracking for the current session

pub mod engine;
pub mod score;
pub mod session;

pub use engine::{Cell, Direction, Grid, Shape, SolveResult, Tile, generate, solve};
pub use score::BestScore;
pub use session::GameSession;

/// Game configuration constants
pub mod consts {
    /// Default board edge length, matching the classic 3x3 layout
    pub const DEFAULT_GRID_SIZE: usize = 3;
    /// Smallest board the generator and solver support
    pub const MIN_GRID_SIZE: usize = 2;
}

//! Deterministic puzzle engine
//!
//! All puzzle logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Fixed neighbor iteration order (up, right, down, left)
//! - No rendering or platform dependencies

pub mod generate;
pub mod grid;
pub mod solve;
pub mod tile;

pub use generate::generate;
pub use grid::{Cell, Grid};
pub use solve::{SolveResult, solve};
pub use tile::{Direction, Shape, Tile};

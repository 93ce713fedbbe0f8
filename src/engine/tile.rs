//! Tile shapes, rotations, and the port connection model
//!
//! Every tile is a pipe segment: a shape (fixed port pattern) plus a
//! rotation in quarter turns. Which of its four sides are open is a pure
//! function of (shape, rotation) - the lookup tables here are the single
//! source of truth for connectivity.

use serde::{Deserialize, Serialize};

/// One of a tile's four sides, in the fixed scan order used everywhere:
/// up, right, down, left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// All directions in scan order (up, right, down, left)
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

impl Direction {
    /// Index into a connection vector
    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// The side a neighbor presents back to us
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// (row, col) offset of the adjacent cell in this direction
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Right | Direction::Left)
    }
}

/// Pipe shape - the port pattern before rotation is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    /// Two opposite sides open
    Straight,
    /// Two adjacent sides open
    Elbow,
    /// Three sides open
    Tee,
    /// All four sides open
    Cross,
}

/// All shapes, for uniform random fill
pub const SHAPES: [Shape; 4] = [Shape::Straight, Shape::Elbow, Shape::Tee, Shape::Cross];

impl Shape {
    /// Number of rotations that produce distinct port patterns.
    ///
    /// Straight repeats after a half turn, so scrambling draws from 2.
    /// Cross is rotation-invariant but keeps the full range of 4; any
    /// draw yields the same ports.
    pub fn distinct_rotations(self) -> u8 {
        match self {
            Shape::Straight => 2,
            Shape::Elbow | Shape::Tee | Shape::Cross => 4,
        }
    }
}

/// Connection tables indexed [up, right, down, left], one row per rotation.
const STRAIGHT_PORTS: [[bool; 4]; 2] = [
    [true, false, true, false],  // vertical
    [false, true, false, true],  // horizontal
];
const ELBOW_PORTS: [[bool; 4]; 4] = [
    [true, true, false, false],
    [false, true, true, false],
    [false, false, true, true],
    [true, false, false, true],
];
const TEE_PORTS: [[bool; 4]; 4] = [
    [true, true, true, false],
    [false, true, true, true],
    [true, false, true, true],
    [true, true, false, true],
];
const CROSS_PORTS: [bool; 4] = [true, true, true, true];

/// Open ports for a shape at a given rotation, indexed [up, right, down, left]
pub fn connections(shape: Shape, rotation: u8) -> [bool; 4] {
    let rotation = (rotation % 4) as usize;
    match shape {
        Shape::Straight => STRAIGHT_PORTS[rotation % 2],
        Shape::Elbow => ELBOW_PORTS[rotation],
        Shape::Tee => TEE_PORTS[rotation],
        Shape::Cross => CROSS_PORTS,
    }
}

/// A single board tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub shape: Shape,
    /// Quarter turns clockwise, always kept in 0..=3
    pub rotation: u8,
    /// Generation metadata: this cell was placed on the guaranteed path.
    /// Never consulted by the solver.
    pub on_path: bool,
}

impl Tile {
    pub fn new(shape: Shape, rotation: u8, on_path: bool) -> Self {
        Self {
            shape,
            rotation: rotation % 4,
            on_path,
        }
    }

    /// Rotate one quarter turn clockwise; shape is untouched
    pub fn rotate_cw(&mut self) {
        self.rotation = (self.rotation + 1) % 4;
    }

    /// Open ports at the current rotation, indexed [up, right, down, left]
    pub fn ports(&self) -> [bool; 4] {
        connections(self.shape, self.rotation)
    }

    /// Whether the given side is open at the current rotation
    pub fn is_open(&self, dir: Direction) -> bool {
        self.ports()[dir.index()]
    }
}

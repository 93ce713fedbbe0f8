//! Board state: an N x N grid of pipe tiles
//!
//! The grid is the sole piece of mutable domain state. It is created by the
//! generator, mutated one rotation at a time by the player, and read-only
//! for the solver.

use serde::{Deserialize, Serialize};

use super::tile::{Direction, Tile};

/// A board coordinate (0-indexed, row-major)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// An N x N board of pipe tiles. Every cell is populated; there are no
/// holes at any point during gameplay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Build a grid from explicit row-major tiles. Panics if the tile count
    /// is not size * size; intended for the generator and test fixtures.
    pub fn from_tiles(size: usize, tiles: Vec<Tile>) -> Self {
        assert_eq!(tiles.len(), size * size, "grid requires size^2 tiles");
        Self { size, tiles }
    }

    /// Board edge length N
    pub fn size(&self) -> usize {
        self.size
    }

    /// The fixed entry cell (0, 0)
    pub fn start(&self) -> Cell {
        Cell::new(0, 0)
    }

    /// The fixed exit cell (N-1, N-1)
    pub fn goal(&self) -> Cell {
        Cell::new(self.size - 1, self.size - 1)
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Whether the cell is one of the two fixed endpoints
    pub fn is_endpoint(&self, cell: Cell) -> bool {
        cell == self.start() || cell == self.goal()
    }

    pub fn tile(&self, cell: Cell) -> &Tile {
        &self.tiles[cell.row * self.size + cell.col]
    }

    pub(crate) fn tile_mut(&mut self, cell: Cell) -> &mut Tile {
        &mut self.tiles[cell.row * self.size + cell.col]
    }

    /// The adjacent cell in the given direction, or None at the board edge
    pub fn neighbor(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        let (dr, dc) = dir.offset();
        let row = cell.row.checked_add_signed(dr)?;
        let col = cell.col.checked_add_signed(dc)?;
        let next = Cell::new(row, col);
        self.in_bounds(next).then_some(next)
    }

    /// Rotate the tile at `cell` one quarter turn clockwise.
    ///
    /// Out-of-range cells and the fixed start/goal endpoints are silently
    /// rejected: no state change, returns false. Only the rotation field of
    /// the one addressed tile ever changes.
    pub fn rotate(&mut self, cell: Cell) -> bool {
        if !self.in_bounds(cell) || self.is_endpoint(cell) {
            return false;
        }
        self.tile_mut(cell).rotate_cw();
        true
    }

    /// Iterate cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Cell::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tile::Shape;

    fn uniform_grid(size: usize, shape: Shape, rotation: u8) -> Grid {
        let tiles = vec![Tile::new(shape, rotation, false); size * size];
        Grid::from_tiles(size, tiles)
    }

    #[test]
    fn test_rotate_cycles_and_keeps_shape() {
        let mut grid = uniform_grid(3, Shape::Tee, 0);
        let cell = Cell::new(1, 1);
        for expected in [1, 2, 3, 0] {
            assert!(grid.rotate(cell));
            assert_eq!(grid.tile(cell).rotation, expected);
            assert_eq!(grid.tile(cell).shape, Shape::Tee);
        }
    }

    #[test]
    fn test_rotate_touches_only_target_cell() {
        let mut grid = uniform_grid(3, Shape::Elbow, 0);
        let before = grid.clone();
        assert!(grid.rotate(Cell::new(0, 1)));
        for cell in grid.cells() {
            if cell == Cell::new(0, 1) {
                assert_eq!(grid.tile(cell).rotation, 1);
            } else {
                assert_eq!(grid.tile(cell), before.tile(cell));
            }
        }
    }

    #[test]
    fn test_rotate_rejects_endpoints() {
        let mut grid = uniform_grid(3, Shape::Straight, 0);
        let before = grid.clone();
        assert!(!grid.rotate(grid.start()));
        assert!(!grid.rotate(grid.goal()));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_rotate_rejects_out_of_range() {
        let mut grid = uniform_grid(2, Shape::Cross, 0);
        let before = grid.clone();
        assert!(!grid.rotate(Cell::new(2, 0)));
        assert!(!grid.rotate(Cell::new(0, 5)));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_neighbor_edges() {
        let grid = uniform_grid(2, Shape::Cross, 0);
        let start = grid.start();
        assert_eq!(grid.neighbor(start, Direction::Up), None);
        assert_eq!(grid.neighbor(start, Direction::Left), None);
        assert_eq!(
            grid.neighbor(start, Direction::Right),
            Some(Cell::new(0, 1))
        );
        assert_eq!(grid.neighbor(start, Direction::Down), Some(Cell::new(1, 0)));
        assert_eq!(grid.neighbor(grid.goal(), Direction::Down), None);
    }
}

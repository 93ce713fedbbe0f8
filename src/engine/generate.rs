//! Board generation
//!
//! Builds a board that is guaranteed solvable: a hidden monotone path from
//! start to goal gets correctly-shaped tiles with scrambled rotations, and
//! every other cell is pure random noise. Deterministic for a fixed RNG
//! stream; never fails.

use rand::Rng;

use super::grid::{Cell, Grid};
use super::tile::{Direction, SHAPES, Shape, Tile};

/// Generate a `size` x `size` board (size >= 2).
///
/// The returned grid always admits a solution reachable by rotating
/// non-endpoint cells only: the hidden path tiles have the right shapes,
/// just the wrong rotations.
pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Grid {
    assert!(size >= 2, "board must be at least 2x2");

    let path = carve_path(size, rng);
    let mut tiles: Vec<Option<Tile>> = vec![None; size * size];

    // Correct shape and orientation for every path cell
    for (i, &cell) in path.iter().enumerate() {
        let prev = i.checked_sub(1).map(|j| path[j]);
        let next = path.get(i + 1).copied();
        let mut open = [false; 4];
        if let Some(prev) = prev {
            open[toward(cell, prev).index()] = true;
        }
        if let Some(next) = next {
            open[toward(cell, next).index()] = true;
        }
        let (shape, rotation) = shape_for_ports(open);
        tiles[cell.row * size + cell.col] = Some(Tile::new(shape, rotation, true));
    }

    // Scramble rotations of interior path cells so the player has to
    // rediscover them. Endpoints keep their fixed orientation.
    for &cell in &path[1..path.len() - 1] {
        if let Some(tile) = &mut tiles[cell.row * size + cell.col] {
            tile.rotation = rng.random_range(0..tile.shape.distinct_rotations());
        }
    }

    // Random noise everywhere else
    for slot in tiles.iter_mut() {
        if slot.is_none() {
            let shape = SHAPES[rng.random_range(0..SHAPES.len())];
            let rotation = rng.random_range(0..4);
            *slot = Some(Tile::new(shape, rotation, false));
        }
    }

    Grid::from_tiles(size, tiles.into_iter().flatten().collect())
}

/// Random monotone staircase from (0,0) to (size-1, size-1): each step goes
/// down or right, chosen uniformly while both stay in bounds. Every step
/// shrinks the remaining distance, so this always terminates.
fn carve_path<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<Cell> {
    let mut path = vec![Cell::new(0, 0)];
    let (mut row, mut col) = (0, 0);
    while row != size - 1 || col != size - 1 {
        let mut moves = [(0usize, 0usize); 2];
        let mut count = 0;
        if row < size - 1 {
            moves[count] = (row + 1, col);
            count += 1;
        }
        if col < size - 1 {
            moves[count] = (row, col + 1);
            count += 1;
        }
        (row, col) = moves[rng.random_range(0..count)];
        path.push(Cell::new(row, col));
    }
    path
}

/// Direction from `from` toward the adjacent cell `to`
fn toward(from: Cell, to: Cell) -> Direction {
    if to.row > from.row {
        Direction::Down
    } else if to.row < from.row {
        Direction::Up
    } else if to.col > from.col {
        Direction::Right
    } else {
        Direction::Left
    }
}

/// Map a required open-port set to the shape and rotation that realizes it.
///
/// The single-port case only occurs at the endpoints: a Straight is laid
/// along the required axis, which opens the required side plus its opposite
/// (off the board edge, where it connects to nothing).
fn shape_for_ports(open: [bool; 4]) -> (Shape, u8) {
    let [up, right, down, left] = open;
    match open.iter().filter(|p| **p).count() {
        4 => (Shape::Cross, 0),
        3 => {
            let rotation = if !left {
                0
            } else if !up {
                1
            } else if !right {
                2
            } else {
                3
            };
            (Shape::Tee, rotation)
        }
        2 if (up && down) || (right && left) => (Shape::Straight, if up { 0 } else { 1 }),
        2 => {
            let rotation = if up && right {
                0
            } else if right && down {
                1
            } else if down && left {
                2
            } else {
                3
            };
            (Shape::Elbow, rotation)
        }
        _ => (Shape::Straight, if right || left { 1 } else { 0 }),
    }
}

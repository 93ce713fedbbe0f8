//! Connectivity check: is there an open pipe run from start to goal?
//!
//! Breadth-first search over the board. Two adjacent tiles connect only
//! when both agree: the near tile's port toward the neighbor AND the
//! neighbor's port back must be open. A half-open joint carries nothing.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::grid::{Cell, Grid};
use super::tile::DIRECTIONS;

/// Outcome of a connectivity check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveResult {
    /// True when an open run from start to goal exists
    pub reachable: bool,
    /// The connecting cells in start-to-goal order, empty when unreachable.
    /// Used only to highlight the winning run.
    pub path: Vec<Cell>,
}

/// Check whether the goal is reachable from the start through open ports.
///
/// Pure function of the grid: identical grids produce identical results,
/// including the path, because neighbors are explored in the fixed order
/// up, right, down, left.
pub fn solve(grid: &Grid) -> SolveResult {
    let size = grid.size();
    let idx = |cell: Cell| cell.row * size + cell.col;

    let mut visited = vec![false; size * size];
    let mut parent: Vec<Option<Cell>> = vec![None; size * size];
    let mut queue = VecDeque::new();

    let start = grid.start();
    let goal = grid.goal();
    visited[idx(start)] = true;
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        if cell == goal {
            return SolveResult {
                reachable: true,
                path: trace_path(&parent, size, goal),
            };
        }
        let ports = grid.tile(cell).ports();
        for dir in DIRECTIONS {
            if !ports[dir.index()] {
                continue;
            }
            let Some(next) = grid.neighbor(cell, dir) else {
                continue;
            };
            if visited[idx(next)] {
                continue;
            }
            // Both sides of the joint must be open
            if !grid.tile(next).is_open(dir.opposite()) {
                continue;
            }
            visited[idx(next)] = true;
            parent[idx(next)] = Some(cell);
            queue.push_back(next);
        }
    }

    SolveResult::default()
}

/// Walk predecessor links from the goal back to the start, then reverse
fn trace_path(parent: &[Option<Cell>], size: usize, goal: Cell) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut cur = goal;
    while let Some(prev) = parent[cur.row * size + cur.col] {
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}

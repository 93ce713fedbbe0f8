//! Game session controller
//!
//! Thin orchestration around the engine: owns the current grid, the
//! rotation and time counters, and the session-best score. Single-threaded
//! and event-driven; every operation runs to completion, so no locking is
//! needed.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::engine::{Cell, Grid, SolveResult, generate, solve};
use crate::score::BestScore;

/// One player's session: a sequence of games sharing a best score.
///
/// The timer is owned here and advances only through `tick_second` while a
/// game is active; every transition out of the active state stops it
/// implicitly, so there is no timer handle to leak or cancel.
#[derive(Debug, Clone)]
pub struct GameSession {
    seed: u64,
    rng: Pcg32,
    size: usize,
    grid: Grid,
    rotation_count: u32,
    elapsed_secs: u32,
    best: Option<BestScore>,
    active: bool,
    last_solve: SolveResult,
}

impl GameSession {
    /// Create a session and start its first game.
    ///
    /// `size` is the board edge length (at least 2); `seed` fixes the RNG
    /// stream for every game in the session.
    pub fn new(size: usize, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let grid = generate(size, &mut rng);
        log::info!("Session started: {}x{} board, seed {}", size, size, seed);
        Self {
            seed,
            rng,
            size,
            grid,
            rotation_count: 0,
            elapsed_secs: 0,
            best: None,
            active: true,
            last_solve: SolveResult::default(),
        }
    }

    /// Discard the current board and start a fresh game.
    ///
    /// Resets the rotation counter and timer to zero; the session best
    /// score carries over.
    pub fn new_game(&mut self) {
        self.grid = generate(self.size, &mut self.rng);
        self.rotation_count = 0;
        self.elapsed_secs = 0;
        self.last_solve = SolveResult::default();
        self.active = true;
        log::info!("New game on {}x{} board", self.size, self.size);
    }

    /// Rotate the tile at `cell` one quarter turn clockwise and re-check
    /// connectivity.
    ///
    /// Silently ignored while no game is active, for out-of-range cells,
    /// and for the fixed start/goal tiles. Returns whether a rotation was
    /// applied. A rotation that completes the run ends the game, stops the
    /// timer, and updates the session best if strictly better.
    pub fn rotate(&mut self, cell: Cell) -> bool {
        if !self.active || !self.grid.rotate(cell) {
            return false;
        }
        self.rotation_count += 1;
        self.last_solve = solve(&self.grid);
        if self.last_solve.reachable {
            self.active = false;
            let result = BestScore::new(self.elapsed_secs, self.rotation_count);
            log::info!(
                "Solved in {}s with {} rotations",
                result.time_secs,
                result.rotations
            );
            if result.improves(self.best.as_ref()) {
                log::info!("New session best");
                self.best = Some(result);
            }
        }
        true
    }

    /// Advance the elapsed-time counter by one second. No-op unless a game
    /// is active.
    pub fn tick_second(&mut self) {
        if self.active {
            self.elapsed_secs += 1;
        }
    }

    // Read-only projections for the presentation layer

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rotation_count(&self) -> u32 {
        self.rotation_count
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn best(&self) -> Option<&BestScore> {
        self.best.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Result of the most recent connectivity check, for highlighting the
    /// winning run. Empty until the first rotation of the current game.
    pub fn last_solve(&self) -> &SolveResult {
        &self.last_solve
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Shape, Tile};

    /// Swap in a 2x2 board that is one rotation away from solved: the
    /// elbow at (0,1) must end at rotation 2 (open down/left).
    fn rig_near_win(session: &mut GameSession) {
        let tiles = vec![
            Tile::new(Shape::Straight, 1, true), // start: right/left
            Tile::new(Shape::Elbow, 1, true),    // one turn short of down/left
            Tile::new(Shape::Straight, 1, false),
            Tile::new(Shape::Straight, 0, true), // goal: up/down
        ];
        session.grid = Grid::from_tiles(2, tiles);
    }

    #[test]
    fn test_counters_reset_only_on_new_game() {
        let mut session = GameSession::new(3, 42);
        session.tick_second();
        session.tick_second();
        session.rotate(Cell::new(0, 1));
        assert_eq!(session.elapsed_secs(), 2);
        assert_eq!(session.rotation_count(), 1);

        session.new_game();
        assert_eq!(session.elapsed_secs(), 0);
        assert_eq!(session.rotation_count(), 0);
        assert!(session.is_active());
        assert!(session.last_solve().path.is_empty());
    }

    #[test]
    fn test_endpoints_never_rotated() {
        let mut session = GameSession::new(3, 7);
        let start_tile = *session.grid().tile(session.grid().start());
        let goal_tile = *session.grid().tile(session.grid().goal());
        assert!(!session.rotate(Cell::new(0, 0)));
        assert!(!session.rotate(Cell::new(2, 2)));
        assert_eq!(session.rotation_count(), 0);
        assert_eq!(*session.grid().tile(session.grid().start()), start_tile);
        assert_eq!(*session.grid().tile(session.grid().goal()), goal_tile);
    }

    #[test]
    fn test_out_of_range_is_silent_noop() {
        let mut session = GameSession::new(3, 7);
        assert!(!session.rotate(Cell::new(9, 9)));
        assert_eq!(session.rotation_count(), 0);
    }

    #[test]
    fn test_win_deactivates_and_stops_timer() {
        let mut session = GameSession::new(2, 1);
        rig_near_win(&mut session);
        session.tick_second();
        assert!(session.rotate(Cell::new(0, 1)));
        assert!(session.last_solve().reachable);
        assert!(!session.is_active());

        // Timer and rotations frozen after the win
        session.tick_second();
        assert_eq!(session.elapsed_secs(), 1);
        assert!(!session.rotate(Cell::new(0, 1)));
        assert_eq!(session.rotation_count(), 1);
        assert_eq!(
            session.best(),
            Some(&BestScore::new(1, 1)),
            "first win becomes the session best"
        );
    }

    #[test]
    fn test_best_score_time_then_rotation_tie_break() {
        let mut session = GameSession::new(2, 1);

        // Game 1: 10s, 5 rotations (one wasted full cycle, then the winner)
        rig_near_win(&mut session);
        for _ in 0..10 {
            session.tick_second();
        }
        for _ in 0..4 {
            session.rotate(Cell::new(1, 0));
        }
        session.rotate(Cell::new(0, 1));
        assert_eq!(session.best(), Some(&BestScore::new(10, 5)));

        // Game 2: 10s, 3 rotations - replaces on the tie-break
        session.new_game();
        rig_near_win(&mut session);
        for _ in 0..10 {
            session.tick_second();
        }
        session.rotate(Cell::new(1, 0));
        session.rotate(Cell::new(1, 0));
        session.rotate(Cell::new(0, 1));
        assert_eq!(session.best(), Some(&BestScore::new(10, 3)));

        // Game 3: 12s, 1 rotation - slower, does not replace
        session.new_game();
        rig_near_win(&mut session);
        for _ in 0..12 {
            session.tick_second();
        }
        session.rotate(Cell::new(0, 1));
        assert_eq!(session.best(), Some(&BestScore::new(10, 3)));
    }

    #[test]
    fn test_rotate_reevaluates_connectivity_each_move() {
        let mut session = GameSession::new(2, 1);
        rig_near_win(&mut session);
        // A noise-cell rotation still triggers a solve (unreachable)
        assert!(session.rotate(Cell::new(1, 0)));
        assert!(!session.last_solve().reachable);
        assert!(session.is_active());
    }

    #[test]
    fn test_same_seed_sessions_agree() {
        let a = GameSession::new(4, 123);
        let b = GameSession::new(4, 123);
        assert_eq!(a.grid(), b.grid());
    }
}

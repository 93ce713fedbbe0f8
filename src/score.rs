//! Best-score tracking
//!
//! Kept in memory for the current session only; a completed game replaces
//! the stored best when it is strictly better (faster time, rotation count
//! as the tie-break).

use serde::{Deserialize, Serialize};

/// Result of a completed game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    /// Seconds from game start to the winning rotation
    pub time_secs: u32,
    /// Player rotations spent
    pub rotations: u32,
}

impl BestScore {
    pub fn new(time_secs: u32, rotations: u32) -> Self {
        Self {
            time_secs,
            rotations,
        }
    }

    /// Strict ordering: lower time wins, equal times fall back to fewer
    /// rotations. An exact tie does not count as better.
    pub fn beats(&self, other: &BestScore) -> bool {
        self.time_secs < other.time_secs
            || (self.time_secs == other.time_secs && self.rotations < other.rotations)
    }

    /// Whether this result should replace the current best (if any)
    pub fn improves(&self, current: Option<&BestScore>) -> bool {
        current.is_none_or(|best| self.beats(best))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_result_always_qualifies() {
        assert!(BestScore::new(100, 99).improves(None));
    }

    #[test]
    fn test_lower_time_wins() {
        let best = BestScore::new(10, 3);
        assert!(BestScore::new(9, 50).improves(Some(&best)));
        assert!(!BestScore::new(11, 1).improves(Some(&best)));
    }

    #[test]
    fn test_rotation_tie_break() {
        let best = BestScore::new(10, 5);
        assert!(BestScore::new(10, 3).improves(Some(&best)));
        assert!(!BestScore::new(10, 5).improves(Some(&best)));
        assert!(!BestScore::new(10, 7).improves(Some(&best)));
    }
}

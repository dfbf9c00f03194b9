//! Win detection.

use crate::board::Board;

/// Signals completion once per board.
#[derive(Clone, Copy, Debug, Default)]
pub struct WinDetector {
    fired: bool,
}

impl WinDetector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true the first time `board` has every pair matched.
    pub fn check(&mut self, board: &Board) -> bool {
        if self.fired || board.match_count() < board.total_pairs() {
            return false;
        }
        self.fired = true;
        true
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Arm again for a new board.
    pub fn reset(&mut self) {
        self.fired = false;
    }
}

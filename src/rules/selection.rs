//! Selection state machine.
//!
//! ```text
//!            pick (valid)              pick (valid)
//!   Open ────────────────▶ Awaiting ────────────────▶ Locked ──▶ resolver
//!    ▲                                                  │
//!    └──────────────── open() after resolution ◀────────┘
//! ```
//!
//! Picks while `Locked` and picks of face-up, matched or unknown slots are
//! ignored; neither the board nor the buffer changes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::cards::SlotIndex;

/// Where the turn is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPhase {
    /// Input ignored (intro reveal, resolution, finished game).
    Locked,
    /// Waiting for the first pick of a turn.
    Open,
    /// One slot picked, waiting for the second.
    AwaitingSecondPick,
}

/// Why a pick was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    Locked,
    OutOfRange,
    AlreadyRevealed,
    AlreadyMatched,
}

/// Result of feeding one pick to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Ignored(IgnoreReason),
    /// First slot of the turn revealed and buffered.
    First(SlotIndex),
    /// Second slot revealed; the pair is handed off for resolution and the
    /// engine is now `Locked`.
    Pair(SlotIndex, SlotIndex),
}

/// Buffers up to two picks per turn.
#[derive(Clone, Debug)]
pub struct SelectionEngine {
    phase: SelectionPhase,
    buffer: SmallVec<[SlotIndex; 2]>,
}

impl Default for SelectionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionEngine {
    /// A new engine starts locked until the intro reveal ends.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: SelectionPhase::Locked,
            buffer: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    /// Would a pick be considered right now?
    #[must_use]
    pub fn can_select(&self) -> bool {
        self.phase != SelectionPhase::Locked
    }

    /// Slots picked this turn and not yet resolved.
    #[must_use]
    pub fn buffered(&self) -> &[SlotIndex] {
        &self.buffer
    }

    /// Stop accepting picks. Any half-finished turn is dropped.
    pub fn lock(&mut self) {
        self.phase = SelectionPhase::Locked;
        self.buffer.clear();
    }

    /// Start a new turn.
    pub fn open(&mut self) {
        self.phase = SelectionPhase::Open;
        self.buffer.clear();
    }

    /// Feed one pick. A valid pick reveals the slot on `board`.
    pub fn pick(&mut self, board: &mut Board, index: SlotIndex) -> Selection {
        if self.phase == SelectionPhase::Locked {
            return Selection::Ignored(IgnoreReason::Locked);
        }

        let reason = match board.slot(index) {
            None => Some(IgnoreReason::OutOfRange),
            Some(slot) if slot.is_matched() => Some(IgnoreReason::AlreadyMatched),
            Some(slot) if slot.is_revealed() => Some(IgnoreReason::AlreadyRevealed),
            Some(_) => None,
        };
        if let Some(reason) = reason {
            return Selection::Ignored(reason);
        }

        board.reveal(index);

        match self.buffer.first().copied() {
            None => {
                self.buffer.push(index);
                self.phase = SelectionPhase::AwaitingSecondPick;
                Selection::First(index)
            }
            Some(first) => {
                self.phase = SelectionPhase::Locked;
                self.buffer.clear();
                Selection::Pair(first, index)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardTypeId;
    use crate::core::GridDimensions;

    fn board() -> Board {
        let deck: Vec<_> = [0, 1, 0, 1].into_iter().map(CardTypeId::new).collect();
        Board::fresh(GridDimensions::new(2, 2).unwrap(), &deck)
    }

    fn open_engine() -> SelectionEngine {
        let mut engine = SelectionEngine::new();
        engine.open();
        engine
    }

    #[test]
    fn test_starts_locked() {
        let engine = SelectionEngine::new();
        assert_eq!(engine.phase(), SelectionPhase::Locked);
        assert!(!engine.can_select());
    }

    #[test]
    fn test_locked_pick_changes_nothing() {
        let mut board = board();
        let before = board.clone();
        let mut engine = SelectionEngine::new();

        let result = engine.pick(&mut board, SlotIndex::new(0));

        assert_eq!(result, Selection::Ignored(IgnoreReason::Locked));
        assert_eq!(board, before);
        assert!(engine.buffered().is_empty());
    }

    #[test]
    fn test_two_picks_make_a_pair() {
        let mut board = board();
        let mut engine = open_engine();

        assert_eq!(
            engine.pick(&mut board, SlotIndex::new(0)),
            Selection::First(SlotIndex::new(0))
        );
        assert_eq!(engine.phase(), SelectionPhase::AwaitingSecondPick);
        assert_eq!(engine.buffered(), &[SlotIndex::new(0)]);
        assert!(board.slot(SlotIndex::new(0)).unwrap().is_revealed());

        assert_eq!(
            engine.pick(&mut board, SlotIndex::new(3)),
            Selection::Pair(SlotIndex::new(0), SlotIndex::new(3))
        );
        assert_eq!(engine.phase(), SelectionPhase::Locked);
        assert!(engine.buffered().is_empty());
        assert!(board.slot(SlotIndex::new(3)).unwrap().is_revealed());
    }

    #[test]
    fn test_repick_same_slot_is_ignored() {
        let mut board = board();
        let mut engine = open_engine();

        engine.pick(&mut board, SlotIndex::new(1));
        assert_eq!(
            engine.pick(&mut board, SlotIndex::new(1)),
            Selection::Ignored(IgnoreReason::AlreadyRevealed)
        );
        assert_eq!(engine.phase(), SelectionPhase::AwaitingSecondPick);
    }

    #[test]
    fn test_matched_and_unknown_slots_are_ignored() {
        let mut board = board();
        board.mark_matched(SlotIndex::new(0), SlotIndex::new(2));
        let mut engine = open_engine();

        assert_eq!(
            engine.pick(&mut board, SlotIndex::new(2)),
            Selection::Ignored(IgnoreReason::AlreadyMatched)
        );
        assert_eq!(
            engine.pick(&mut board, SlotIndex::new(40)),
            Selection::Ignored(IgnoreReason::OutOfRange)
        );
        assert_eq!(engine.phase(), SelectionPhase::Open);
    }

    #[test]
    fn test_lock_drops_half_turn() {
        let mut board = board();
        let mut engine = open_engine();

        engine.pick(&mut board, SlotIndex::new(1));
        engine.lock();

        assert!(engine.buffered().is_empty());
        assert_eq!(engine.phase(), SelectionPhase::Locked);
    }
}

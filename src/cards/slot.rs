//! Card slots - runtime card state.
//!
//! A `CardSlot` is one grid position. Its `index` is its only stable
//! identity across sessions; the type is fixed when the board is dealt or
//! loaded, and only the `revealed`/`matched` flags change during play.

use serde::{Deserialize, Serialize};

use super::definition::CardTypeId;

/// Position of a slot on the board, stable for the board's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotIndex(pub u32);

impl SlotIndex {
    /// Create a new slot index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the board's slot vector.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// One card on the board.
///
/// Invariant: `matched` implies `revealed`. The setters below keep it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSlot {
    index: SlotIndex,
    card_type: CardTypeId,
    revealed: bool,
    matched: bool,
}

impl CardSlot {
    /// A face-down, unmatched slot.
    #[must_use]
    pub fn new(index: SlotIndex, card_type: CardTypeId) -> Self {
        Self {
            index,
            card_type,
            revealed: false,
            matched: false,
        }
    }

    #[must_use]
    pub fn index(&self) -> SlotIndex {
        self.index
    }

    #[must_use]
    pub fn card_type(&self) -> CardTypeId {
        self.card_type
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Can this slot be picked?
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.revealed && !self.matched
    }

    /// Turn the card face-up.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Turn the card face-down. Matched cards stay face-up.
    ///
    /// Returns true if the slot was flipped.
    pub fn hide(&mut self) -> bool {
        if self.matched || !self.revealed {
            return false;
        }
        self.revealed = false;
        true
    }

    /// Mark as matched, which also reveals.
    pub fn mark_matched(&mut self) {
        self.matched = true;
        self.revealed = true;
    }
}

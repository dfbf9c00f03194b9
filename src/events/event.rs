//! Game event types.
//!
//! Events describe state changes the presentation layer reacts to: flipping
//! a tile, dimming a matched pair, playing the right sound, updating the
//! score readout. The engine fires them and never waits on the result.

use serde::{Deserialize, Serialize};

use crate::cards::SlotIndex;

use super::presenter::Presenter;

/// Something the presentation layer should show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A slot turned face-up.
    SlotRevealed(SlotIndex),

    /// A slot turned face-down.
    SlotHidden(SlotIndex),

    /// A slot became part of a found pair.
    SlotMatched(SlotIndex),

    /// Two picked slots did not match; they will flip back after a delay.
    Mismatch { first: SlotIndex, second: SlotIndex },

    /// The score changed.
    ScoreChanged(i64),

    /// Every pair has been found.
    GameWon { score: i64 },
}

impl GameEvent {
    /// Route this event to the matching presenter callback.
    pub fn dispatch<P: Presenter + ?Sized>(&self, presenter: &mut P) {
        match *self {
            GameEvent::SlotRevealed(index) => presenter.on_slot_revealed(index),
            GameEvent::SlotHidden(index) => presenter.on_slot_hidden(index),
            GameEvent::SlotMatched(index) => presenter.on_slot_matched(index),
            GameEvent::Mismatch { first, second } => presenter.on_mismatch(first, second),
            GameEvent::ScoreChanged(score) => presenter.on_score_changed(score),
            GameEvent::GameWon { score } => presenter.on_game_won(score),
        }
    }

    /// Slot this event concerns, if any.
    #[must_use]
    pub fn slot(&self) -> Option<SlotIndex> {
        match *self {
            GameEvent::SlotRevealed(index)
            | GameEvent::SlotHidden(index)
            | GameEvent::SlotMatched(index) => Some(index),
            _ => None,
        }
    }
}

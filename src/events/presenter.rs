//! Presentation boundary.
//!
//! The engine is handed a `Presenter` at construction and calls it as state
//! changes. Every callback defaults to a no-op, so an embedder implements
//! only what it renders.

use crate::cards::SlotIndex;

use super::event::GameEvent;

/// Receives state changes for rendering and audio feedback.
pub trait Presenter {
    /// A slot flipped face-up (flip sound).
    fn on_slot_revealed(&mut self, _index: SlotIndex) {}

    /// A slot flipped face-down.
    fn on_slot_hidden(&mut self, _index: SlotIndex) {}

    /// A slot joined a found pair (correct-choice sound, dim the tile).
    fn on_slot_matched(&mut self, _index: SlotIndex) {}

    /// A picked pair did not match (wrong-choice sound).
    fn on_mismatch(&mut self, _first: SlotIndex, _second: SlotIndex) {}

    /// The score readout should change.
    fn on_score_changed(&mut self, _score: i64) {}

    /// The board is solved (win sound).
    fn on_game_won(&mut self, _score: i64) {}
}

/// Presenter that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn on_slot_revealed(&mut self, index: SlotIndex) {
        (**self).on_slot_revealed(index);
    }

    fn on_slot_hidden(&mut self, index: SlotIndex) {
        (**self).on_slot_hidden(index);
    }

    fn on_slot_matched(&mut self, index: SlotIndex) {
        (**self).on_slot_matched(index);
    }

    fn on_mismatch(&mut self, first: SlotIndex, second: SlotIndex) {
        (**self).on_mismatch(first, second);
    }

    fn on_score_changed(&mut self, score: i64) {
        (**self).on_score_changed(score);
    }

    fn on_game_won(&mut self, score: i64) {
        (**self).on_game_won(score);
    }
}

/// Presenter that records every event in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Count events matching a predicate.
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&GameEvent) -> bool,
    {
        self.events.iter().filter(|e| predicate(e)).count()
    }
}

impl Presenter for EventLog {
    fn on_slot_revealed(&mut self, index: SlotIndex) {
        self.events.push(GameEvent::SlotRevealed(index));
    }

    fn on_slot_hidden(&mut self, index: SlotIndex) {
        self.events.push(GameEvent::SlotHidden(index));
    }

    fn on_slot_matched(&mut self, index: SlotIndex) {
        self.events.push(GameEvent::SlotMatched(index));
    }

    fn on_mismatch(&mut self, first: SlotIndex, second: SlotIndex) {
        self.events.push(GameEvent::Mismatch { first, second });
    }

    fn on_score_changed(&mut self, score: i64) {
        self.events.push(GameEvent::ScoreChanged(score));
    }

    fn on_game_won(&mut self, score: i64) {
        self.events.push(GameEvent::GameWon { score });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_presenter_accepts_everything() {
        let mut presenter = NullPresenter;
        GameEvent::GameWon { score: 1 }.dispatch(&mut presenter);
        GameEvent::SlotRevealed(SlotIndex::new(0)).dispatch(&mut presenter);
    }

    #[test]
    fn test_event_log_drain_and_count() {
        let mut log = EventLog::new();
        log.on_slot_revealed(SlotIndex::new(0));
        log.on_slot_revealed(SlotIndex::new(1));
        log.on_score_changed(1);

        assert_eq!(log.count(|e| matches!(e, GameEvent::SlotRevealed(_))), 2);

        let drained = log.drain();
        assert_eq!(drained.len(), 3);
        assert!(log.events().is_empty());
    }

    #[test]
    fn test_borrowed_presenter_forwards() {
        let mut log = EventLog::new();
        {
            let mut borrowed = &mut log;
            GameEvent::SlotHidden(SlotIndex::new(2)).dispatch(&mut borrowed);
        }
        assert_eq!(log.events(), &[GameEvent::SlotHidden(SlotIndex::new(2))]);
    }
}

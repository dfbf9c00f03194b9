//! The board: ordered card slots plus match count and score.

use rustc_hash::FxHashMap;

use crate::cards::{CardSlot, CardTypeId, SlotIndex};
use crate::core::{CorruptSaveError, GridDimensions};
use crate::persistence::SaveRecord;

/// All slots of one game, in index order.
///
/// `match_count` and `score` are only changed through the resolver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    dimensions: GridDimensions,
    slots: Vec<CardSlot>,
    match_count: usize,
    score: i64,
}

impl Board {
    /// Lay a shuffled deck onto a fresh board, slot `i` taking `deck[i]`.
    ///
    /// `deck` must have exactly `dimensions.cells()` entries.
    #[must_use]
    pub fn fresh(dimensions: GridDimensions, deck: &[CardTypeId]) -> Self {
        debug_assert_eq!(deck.len(), dimensions.cells());
        let slots = deck
            .iter()
            .enumerate()
            .map(|(i, &card_type)| CardSlot::new(SlotIndex::new(i as u32), card_type))
            .collect();

        Self {
            dimensions,
            slots,
            match_count: 0,
            score: 0,
        }
    }

    /// Rebuild a board from a save record.
    ///
    /// The layout must list every slot of `record.dimensions` exactly once.
    /// A slot counts as matched only when its pair partner is matched too;
    /// a lone matched flag is dropped.
    pub fn from_record(record: &SaveRecord) -> Result<Self, CorruptSaveError> {
        let cells = record.dimensions.cells();
        let mut placed: Vec<Option<CardSlot>> = (0..cells).map(|_| None).collect();
        for &(index, card_type) in &record.layout {
            let slot = placed
                .get_mut(index.as_usize())
                .ok_or(CorruptSaveError::SlotOutOfRange {
                    index: index.raw(),
                    cells,
                })?;
            if slot.is_some() {
                return Err(CorruptSaveError::DuplicateSlot(index.raw()));
            }
            *slot = Some(CardSlot::new(index, card_type));
        }

        let mut slots: Vec<CardSlot> = placed.into_iter().flatten().collect();
        if slots.len() != cells {
            return Err(CorruptSaveError::IncompleteLayout {
                found: slots.len(),
                expected: cells,
            });
        }

        let mut matched_per_type: FxHashMap<CardTypeId, Vec<usize>> = FxHashMap::default();
        for slot in &slots {
            if record.is_matched(slot.index()) {
                matched_per_type
                    .entry(slot.card_type())
                    .or_default()
                    .push(slot.index().as_usize());
            }
        }

        let mut match_count = 0;
        for (card_type, positions) in matched_per_type {
            if positions.len() == 2 {
                for pos in positions {
                    slots[pos].mark_matched();
                }
                match_count += 1;
            } else {
                log::debug!("dropping unpaired matched flag for {}", card_type);
            }
        }

        Ok(Self {
            dimensions: record.dimensions,
            slots,
            match_count,
            score: record.score,
        })
    }

    /// Snapshot for persistence.
    #[must_use]
    pub fn to_record(&self) -> SaveRecord {
        SaveRecord {
            dimensions: self.dimensions,
            layout: self
                .slots
                .iter()
                .map(|s| (s.index(), s.card_type()))
                .collect(),
            matched: self.matched_indices().collect(),
            score: self.score,
        }
    }

    #[must_use]
    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.dimensions.total_pairs()
    }

    #[must_use]
    pub fn match_count(&self) -> usize {
        self.match_count
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Have all pairs been found?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.match_count >= self.total_pairs()
    }

    #[must_use]
    pub fn slot(&self, index: SlotIndex) -> Option<&CardSlot> {
        self.slots.get(index.as_usize())
    }

    pub fn slots(&self) -> impl Iterator<Item = &CardSlot> {
        self.slots.iter()
    }

    pub fn matched_indices(&self) -> impl Iterator<Item = SlotIndex> + '_ {
        self.slots.iter().filter(|s| s.is_matched()).map(CardSlot::index)
    }

    /// Turn a slot face-up. Returns true if it was face-down.
    pub fn reveal(&mut self, index: SlotIndex) -> bool {
        match self.slots.get_mut(index.as_usize()) {
            Some(slot) if !slot.is_revealed() => {
                slot.reveal();
                true
            }
            _ => false,
        }
    }

    /// Turn a slot face-down. Matched slots never flip back.
    pub fn hide(&mut self, index: SlotIndex) -> bool {
        self.slots
            .get_mut(index.as_usize())
            .is_some_and(CardSlot::hide)
    }

    /// Turn every face-down slot up, returning the ones that flipped.
    pub fn reveal_all(&mut self) -> Vec<SlotIndex> {
        self.slots
            .iter_mut()
            .filter(|s| !s.is_revealed())
            .map(|s| {
                s.reveal();
                s.index()
            })
            .collect()
    }

    /// Turn every unmatched slot down, returning the ones that flipped.
    pub fn hide_unmatched(&mut self) -> Vec<SlotIndex> {
        self.slots
            .iter_mut()
            .filter_map(|s| s.hide().then(|| s.index()))
            .collect()
    }

    pub(crate) fn mark_matched(&mut self, first: SlotIndex, second: SlotIndex) {
        for index in [first, second] {
            if let Some(slot) = self.slots.get_mut(index.as_usize()) {
                slot.mark_matched();
            }
        }
        self.match_count += 1;
    }

    pub(crate) fn adjust_score(&mut self, delta: i64) {
        self.score += delta;
    }
}

//! Save records: the persisted snapshot of a board.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::cards::{CardTypeId, SlotIndex};
use crate::core::GridDimensions;

/// Everything needed to resume a board.
///
/// `layout` covers every slot, in index order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    /// Grid the layout was dealt on.
    pub dimensions: GridDimensions,

    /// `(index, type)` for every slot.
    pub layout: Vec<(SlotIndex, CardTypeId)>,

    /// Slots that were matched.
    pub matched: BTreeSet<SlotIndex>,

    /// Score at save time.
    pub score: i64,
}

impl SaveRecord {
    #[must_use]
    pub fn is_matched(&self, index: SlotIndex) -> bool {
        self.matched.contains(&index)
    }
}

//! Match resolution.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::SlotIndex;
use crate::core::ScoringRule;

/// Outcome of comparing two picked slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Same type: both slots are now matched.
    Matched { first: SlotIndex, second: SlotIndex },

    /// Different types: both slots stay face-up until flipped back.
    Mismatched { first: SlotIndex, second: SlotIndex },
}

impl Resolution {
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Matched { .. })
    }
}

/// Compares picked pairs and applies the scoring rule.
///
/// The only writer of the board's match count and score.
#[derive(Clone, Copy, Debug, Default)]
pub struct MatchResolver {
    scoring: ScoringRule,
}

impl MatchResolver {
    pub fn new(scoring: ScoringRule) -> Self {
        Self { scoring }
    }

    #[must_use]
    pub fn scoring(&self) -> ScoringRule {
        self.scoring
    }

    /// Resolve a pair picked this turn.
    ///
    /// On a match both slots become matched, the match count goes up by one
    /// and the reward is added. On a mismatch the penalty is subtracted and
    /// the slots are left face-up for [`flip_back`](Self::flip_back).
    pub fn resolve(&self, board: &mut Board, first: SlotIndex, second: SlotIndex) -> Resolution {
        let same_type = match (board.slot(first), board.slot(second)) {
            (Some(a), Some(b)) => first != second && a.card_type() == b.card_type(),
            _ => false,
        };

        if same_type {
            board.mark_matched(first, second);
            board.adjust_score(self.scoring.match_reward);
            log::debug!("{} and {} match, score {}", first, second, board.score());
            Resolution::Matched { first, second }
        } else {
            board.adjust_score(-self.scoring.mismatch_penalty);
            log::debug!("{} and {} differ, score {}", first, second, board.score());
            Resolution::Mismatched { first, second }
        }
    }

    /// Delayed half of a mismatch: turn both slots face-down again.
    ///
    /// Returns the slots that actually flipped.
    pub fn flip_back(&self, board: &mut Board, first: SlotIndex, second: SlotIndex) -> Vec<SlotIndex> {
        [first, second]
            .into_iter()
            .filter(|&index| board.hide(index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardTypeId;
    use crate::core::GridDimensions;

    fn board() -> Board {
        let deck: Vec<_> = [0, 1, 0, 1].into_iter().map(CardTypeId::new).collect();
        let mut board = Board::fresh(GridDimensions::new(2, 2).unwrap(), &deck);
        board.reveal_all();
        board
    }

    #[test]
    fn test_match_scores_and_counts() {
        let mut board = board();
        let resolver = MatchResolver::default();

        let result = resolver.resolve(&mut board, SlotIndex::new(0), SlotIndex::new(2));

        assert!(result.is_match());
        assert_eq!(board.match_count(), 1);
        assert_eq!(board.score(), 1);
        assert!(board.slot(SlotIndex::new(0)).unwrap().is_matched());
        assert!(board.slot(SlotIndex::new(2)).unwrap().is_matched());
    }

    #[test]
    fn test_mismatch_penalizes_and_leaves_face_up() {
        let mut board = board();
        let resolver = MatchResolver::default();

        let result = resolver.resolve(&mut board, SlotIndex::new(0), SlotIndex::new(1));

        assert_eq!(
            result,
            Resolution::Mismatched {
                first: SlotIndex::new(0),
                second: SlotIndex::new(1)
            }
        );
        assert_eq!(board.match_count(), 0);
        assert_eq!(board.score(), -1);
        assert!(board.slot(SlotIndex::new(0)).unwrap().is_revealed());

        let flipped = resolver.flip_back(&mut board, SlotIndex::new(0), SlotIndex::new(1));
        assert_eq!(flipped, vec![SlotIndex::new(0), SlotIndex::new(1)]);
        assert!(!board.slot(SlotIndex::new(1)).unwrap().is_revealed());
    }

    #[test]
    fn test_score_goes_negative() {
        let mut board = board();
        let resolver = MatchResolver::default();

        for _ in 0..3 {
            resolver.resolve(&mut board, SlotIndex::new(0), SlotIndex::new(1));
        }
        assert_eq!(board.score(), -3);
    }

    #[test]
    fn test_custom_scoring_rule() {
        let mut board = board();
        let resolver = MatchResolver::new(ScoringRule {
            match_reward: 10,
            mismatch_penalty: 4,
        });

        resolver.resolve(&mut board, SlotIndex::new(0), SlotIndex::new(1));
        resolver.resolve(&mut board, SlotIndex::new(1), SlotIndex::new(3));

        assert_eq!(board.score(), 6);
        assert_eq!(resolver.scoring().match_reward, 10);
    }

    #[test]
    fn test_flip_back_skips_matched() {
        let mut board = board();
        let resolver = MatchResolver::default();
        resolver.resolve(&mut board, SlotIndex::new(0), SlotIndex::new(2));

        let flipped = resolver.flip_back(&mut board, SlotIndex::new(0), SlotIndex::new(1));

        assert_eq!(flipped, vec![SlotIndex::new(1)]);
        assert!(board.slot(SlotIndex::new(0)).unwrap().is_revealed());
    }
}

//! Game configuration.
//!
//! Callers configure a session at startup by providing a `GameConfig`:
//! - requested grid size (validated by `GridSpec`)
//! - timer delays for the intro reveal and mismatch flip-back
//! - the scoring rule
//! - how catalog types are chosen for the deck
//! - an optional RNG seed

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default time the whole board stays face-up when a session starts.
pub const DEFAULT_INTRO_REVEAL_DELAY: f64 = 2.0;

/// Default time a mismatched pair stays face-up.
pub const DEFAULT_MISMATCH_DELAY: f64 = 0.5;

/// Points awarded and taken away on resolution.
///
/// Score has no floor; it may go negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRule {
    /// Added to the score when a pair matches.
    pub match_reward: i64,

    /// Subtracted from the score when a pair does not match.
    pub mismatch_penalty: i64,
}

impl Default for ScoringRule {
    fn default() -> Self {
        Self {
            match_reward: 1,
            mismatch_penalty: 1,
        }
    }
}

/// Which catalog entries a fresh deck uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckSelection {
    /// The first `required_pairs` entries, in catalog order.
    #[default]
    Leading,
    /// A uniformly random subset of `required_pairs` entries.
    Random,
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Requested column count (may be widened by one).
    pub columns: i64,

    /// Requested row count.
    pub rows: i64,

    /// Seconds all cards stay revealed at session start.
    pub intro_reveal_delay: f64,

    /// Seconds a mismatched pair stays revealed.
    pub mismatch_delay: f64,

    /// Scoring rule.
    pub scoring: ScoringRule,

    /// Catalog subset strategy.
    pub deck_selection: DeckSelection,

    /// Seed for dealing. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: 4,
            rows: 4,
            intro_reveal_delay: DEFAULT_INTRO_REVEAL_DELAY,
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
            scoring: ScoringRule::default(),
            deck_selection: DeckSelection::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a config for a `columns x rows` grid with default timings.
    pub fn new(columns: i64, rows: i64) -> Self {
        Self {
            columns,
            rows,
            ..Self::default()
        }
    }

    /// Set the intro reveal delay.
    #[must_use]
    pub fn with_intro_reveal_delay(mut self, seconds: f64) -> Self {
        self.intro_reveal_delay = seconds;
        self
    }

    /// Set the mismatch flip-back delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, seconds: f64) -> Self {
        self.mismatch_delay = seconds;
        self
    }

    /// Set the scoring rule.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringRule) -> Self {
        self.scoring = scoring;
        self
    }

    /// Set the deck selection strategy.
    #[must_use]
    pub fn with_deck_selection(mut self, selection: DeckSelection) -> Self {
        self.deck_selection = selection;
        self
    }

    /// Deal deterministically from `seed`.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the timer delays. Grid size is checked by `GridSpec::normalize`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, seconds) in [
            ("intro_reveal_delay", self.intro_reveal_delay),
            ("mismatch_delay", self.mismatch_delay),
        ] {
            if !seconds.is_finite() || seconds < 0.0 {
                return Err(ConfigError::InvalidDelay(name));
            }
        }
        Ok(())
    }
}

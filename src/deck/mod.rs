//! Deck building and shuffling.
//!
//! A fresh board is dealt in two steps:
//! 1. `DeckBuilder::choose_types` picks `required_pairs` catalog types
//!    (the leading entries, or a random subset)
//! 2. `DeckBuilder::build` doubles each type and permutes the result with
//!    `GameRng::shuffle` (Fisher–Yates)

mod builder;

pub use builder::DeckBuilder;

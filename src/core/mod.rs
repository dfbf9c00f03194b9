//! Core engine types: grid sizing, configuration, errors, RNG.
//!
//! This module holds the building blocks every other module depends on.

pub mod config;
pub mod error;
pub mod grid;
pub mod rng;

pub use config::{DeckSelection, GameConfig, ScoringRule};
pub use error::{ConfigError, CorruptSaveError, Error, Result, StoreError};
pub use grid::{GridDimensions, GridSpec};
pub use rng::{GameRng, GameRngState};

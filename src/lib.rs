//! # memory-match
//!
//! Game-state engine for a tile-matching memory puzzle: a grid of face-down
//! cards where every type appears on exactly two cards. The player reveals
//! two cards per turn; pairs stay face-up, mismatches flip back.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: Rendering, audio and input devices live behind the
//!    `Presenter` trait and plain method calls.
//!
//! 2. **Explicit time**: Delayed effects are enumerable `ScheduledTask`s on a
//!    single-threaded `Scheduler`, advanced by the caller's game loop.
//!
//! 3. **Resumable**: Every resolution writes the board to a flat key-value
//!    store, so a session can be restored after a restart.
//!
//! ## Modules
//!
//! - `core`: Grid sizing, configuration, errors, RNG
//! - `cards`: Card types, the catalog, board slots
//! - `deck`: Deck building and shuffling
//! - `board`: Board state
//! - `rules`: Selection state machine, match resolution, win detection
//! - `schedule`: Deferred tasks
//! - `events`: Presentation events and the `Presenter` boundary
//! - `persistence`: Save records, codec, key-value stores
//! - `session`: The `MemoryGame` engine facade

pub mod board;
pub mod cards;
pub mod core;
pub mod deck;
pub mod events;
pub mod persistence;
pub mod rules;
pub mod schedule;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, CorruptSaveError, DeckSelection, Error, GameConfig, GameRng, GridDimensions,
    GridSpec, Result, ScoringRule, StoreError,
};

pub use crate::cards::{AssetRef, CardCatalog, CardSlot, CardTypeId, SlotIndex};

pub use crate::board::Board;

pub use crate::deck::DeckBuilder;

pub use crate::rules::{
    IgnoreReason, MatchResolver, Resolution, Selection, SelectionEngine, SelectionPhase,
    WinDetector,
};

pub use crate::schedule::{ScheduledTask, Scheduler};

pub use crate::events::{EventLog, GameEvent, NullPresenter, Presenter};

pub use crate::persistence::{
    FileStore, KeyValueStore, MemoryStore, PersistenceCodec, SaveKeys, SaveRecord,
};

pub use crate::session::{MemoryGame, PickOutcome, SessionOrigin};

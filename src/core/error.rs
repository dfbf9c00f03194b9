//! Error types.
//!
//! - `ConfigError`: the requested grid cannot be dealt. Fatal to game start.
//! - `CorruptSaveError`: a persisted layout cannot be trusted. Callers discard
//!   the save and deal a fresh board.
//! - `StoreError`: the key-value substrate failed to read or write.

use thiserror::Error;

/// The requested game cannot be set up.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {columns}x{rows}")]
    NonPositiveDimensions { columns: i64, rows: i64 },

    #[error("grid {columns}x{rows} has too many cells")]
    GridTooLarge { columns: i64, rows: i64 },

    #[error("not enough card types: need {required} pairs but catalog has {available}")]
    InsufficientCatalog { required: usize, available: usize },

    #[error("{0} must be a finite, non-negative number of seconds")]
    InvalidDelay(&'static str),
}

/// A persisted board that cannot be reconstructed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CorruptSaveError {
    #[error("saved layout is present but grid dimensions are missing")]
    MissingDimensions,

    #[error("saved grid dimensions {columns}x{rows} are invalid")]
    InvalidDimensions { columns: i64, rows: i64 },

    #[error("malformed layout entry {0:?}")]
    MalformedLayoutEntry(String),

    #[error("layout references unknown card type {0:?}")]
    UnknownCardType(String),

    #[error("layout slot {index} is outside a board of {cells} cells")]
    SlotOutOfRange { index: u32, cells: usize },

    #[error("layout lists slot {0} more than once")]
    DuplicateSlot(u32),

    #[error("layout covers {found} slots but the board has {expected}")]
    IncompleteLayout { found: usize, expected: usize },

    #[error("card type {0:?} does not appear exactly twice")]
    UnpairedType(String),
}

/// The key-value store failed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store encoding failed: {0}")]
    Encode(#[from] bincode::Error),
}

/// Any error surfaced by the engine.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    CorruptSave(#[from] CorruptSaveError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, Error>;

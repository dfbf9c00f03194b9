//! Card type definitions.
//!
//! A `CardTypeId` is what two cards must share to form a pair. Each type
//! carries a display name (the persisted form) and an opaque asset reference
//! that the engine passes through to presentation untouched.

use serde::{Deserialize, Serialize};

/// Card type identifier. Position of the type in its catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardTypeId(pub u32);

impl CardTypeId {
    /// Create a new card type ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Catalog position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CardType({})", self.0)
    }
}

/// Reference to the visual asset for a card face (sprite path, atlas key...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetRef(pub String);

impl AssetRef {
    #[must_use]
    pub fn new(asset: impl Into<String>) -> Self {
        Self(asset.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One catalog entry: a card type and the asset that draws it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Identifier of this type.
    pub id: CardTypeId,

    /// Stable name, written to save records.
    pub name: String,

    /// Face asset, passed through to presentation.
    pub asset: AssetRef,
}

//! Card system: type definitions, the catalog, and board slots.
//!
//! ## Key Types
//!
//! - `CardTypeId`: What two cards share to form a pair
//! - `CardCatalog`: Ordered type → asset table, with name lookup for saves
//! - `SlotIndex`: Stable position of a card on the board
//! - `CardSlot`: Runtime card state (type, revealed, matched)

pub mod definition;
pub mod registry;
pub mod slot;

pub use definition::{AssetRef, CardTypeId, CatalogEntry};
pub use registry::CardCatalog;
pub use slot::{CardSlot, SlotIndex};

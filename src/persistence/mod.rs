//! Persistence: save records, the codec, and key-value stores.
//!
//! ## Key Types
//!
//! - `SaveRecord`: the snapshot that fully determines a resumable board
//! - `PersistenceCodec`: writes/reads a record as flat key-value entries
//! - `KeyValueStore`: the storage primitives the codec needs
//! - `MemoryStore` / `FileStore`: bundled store implementations
//!
//! Persistence is best-effort: a failed write is reported to the caller
//! but the game carries on.

mod codec;
mod record;
mod store;

pub use codec::{PersistenceCodec, SaveKeys};
pub use record::SaveRecord;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoredValue};

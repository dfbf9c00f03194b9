//! Save record codec.
//!
//! A board is persisted as five flat entries:
//!
//! | key             | kind   | value                                 |
//! |-----------------|--------|---------------------------------------|
//! | `grid_columns`  | int    | column count                          |
//! | `grid_rows`     | int    | row count                             |
//! | `card_layout`   | string | `index:TypeName` pairs joined by `,`  |
//! | `matched_cards` | string | matched slot indices joined by `,`    |
//! | `score`         | int    | score                                 |
//!
//! Type names are escaped before they are joined: `%`, `,`, `:` and any
//! whitespace character become `%XX` per UTF-8 byte, so every name the
//! catalog accepts reads back unchanged.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use crate::board::Board;
use crate::cards::{CardCatalog, CardTypeId, SlotIndex};
use crate::core::{CorruptSaveError, GridDimensions, StoreError};

use super::record::SaveRecord;
use super::store::KeyValueStore;

const LIST_DELIMITER: &str = ",";
const PAIR_DELIMITER: &str = ":";
const ESCAPE: char = '%';

/// Key names used for a save record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveKeys {
    pub columns: String,
    pub rows: String,
    pub layout: String,
    pub matched: String,
    pub score: String,
}

impl Default for SaveKeys {
    fn default() -> Self {
        Self::with_prefix("")
    }
}

impl SaveKeys {
    /// Default key names, each prefixed with `prefix`.
    ///
    /// Lets several boards share one store.
    #[must_use]
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            columns: format!("{prefix}grid_columns"),
            rows: format!("{prefix}grid_rows"),
            layout: format!("{prefix}card_layout"),
            matched: format!("{prefix}matched_cards"),
            score: format!("{prefix}score"),
        }
    }

    fn all(&self) -> [&str; 5] {
        [
            self.columns.as_str(),
            self.rows.as_str(),
            self.layout.as_str(),
            self.matched.as_str(),
            self.score.as_str(),
        ]
    }
}

/// Converts boards to and from key-value entries.
///
/// Holds the catalog used to name types in the layout string.
#[derive(Clone, Debug)]
pub struct PersistenceCodec {
    catalog: CardCatalog,
    keys: SaveKeys,
}

impl PersistenceCodec {
    pub fn new(catalog: CardCatalog) -> Self {
        Self::with_keys(catalog, SaveKeys::default())
    }

    pub fn with_keys(catalog: CardCatalog, keys: SaveKeys) -> Self {
        Self { catalog, keys }
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn keys(&self) -> &SaveKeys {
        &self.keys
    }

    /// Write the board (layout, matched slots, score, dimensions) and flush.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S, board: &Board) -> Result<(), StoreError> {
        let dims = board.dimensions();
        store.set_int(&self.keys.columns, i64::from(dims.columns()));
        store.set_int(&self.keys.rows, i64::from(dims.rows()));
        store.set_string(&self.keys.layout, &self.encode_layout(board));
        store.set_string(&self.keys.matched, &encode_matched(board));
        store.set_int(&self.keys.score, board.score());
        store.flush()
    }

    /// Read a save record.
    ///
    /// Returns `Ok(None)` when no layout is stored. Matched-index entries that
    /// do not parse or fall outside the board are skipped, as is a missing or
    /// mistyped score; any problem with the layout itself is an error.
    pub fn load<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<Option<SaveRecord>, CorruptSaveError> {
        let Some(layout) = store.get_string(&self.keys.layout) else {
            return Ok(None);
        };

        let dimensions = self.load_dimensions(store)?;
        let layout = self.decode_layout(&layout, dimensions)?;
        let matched = store
            .get_string(&self.keys.matched)
            .map(|s| decode_matched(&s, dimensions.cells()))
            .unwrap_or_default();
        let score = store.get_int(&self.keys.score).unwrap_or(0);

        Ok(Some(SaveRecord {
            dimensions,
            layout,
            matched,
            score,
        }))
    }

    /// Delete every key of the save record, then flush.
    pub fn reset<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), StoreError> {
        for key in self.keys.all() {
            store.delete_key(key);
        }
        store.flush()
    }

    fn encode_layout(&self, board: &Board) -> String {
        board
            .slots()
            .map(|slot| {
                let name = self.catalog.name(slot.card_type()).unwrap_or_default();
                format!("{}{}{}", slot.index().raw(), PAIR_DELIMITER, escape_name(name))
            })
            .collect::<Vec<_>>()
            .join(LIST_DELIMITER)
    }

    fn load_dimensions<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<GridDimensions, CorruptSaveError> {
        let (Some(columns), Some(rows)) = (store.get_int(&self.keys.columns), store.get_int(&self.keys.rows)) else {
            return Err(CorruptSaveError::MissingDimensions);
        };

        u32::try_from(columns)
            .ok()
            .zip(u32::try_from(rows).ok())
            .and_then(|(c, r)| GridDimensions::new(c, r))
            .ok_or(CorruptSaveError::InvalidDimensions { columns, rows })
    }

    fn decode_layout(
        &self,
        layout: &str,
        dimensions: GridDimensions,
    ) -> Result<Vec<(SlotIndex, CardTypeId)>, CorruptSaveError> {
        let cells = dimensions.cells();
        let mut slots: Vec<Option<CardTypeId>> = vec![None; cells];

        for entry in layout.split(LIST_DELIMITER).map(str::trim).filter(|e| !e.is_empty()) {
            let malformed = || CorruptSaveError::MalformedLayoutEntry(entry.to_string());

            let (index, name) = entry.split_once(PAIR_DELIMITER).ok_or_else(malformed)?;
            let index: u32 = index.trim().parse().map_err(|_| malformed())?;
            let name = unescape_name(name.trim()).ok_or_else(malformed)?;
            let card_type = self
                .catalog
                .resolve(&name)
                .ok_or(CorruptSaveError::UnknownCardType(name))?;

            let slot = slots
                .get_mut(index as usize)
                .ok_or(CorruptSaveError::SlotOutOfRange { index, cells })?;
            if slot.is_some() {
                return Err(CorruptSaveError::DuplicateSlot(index));
            }
            *slot = Some(card_type);
        }

        let found = slots.iter().filter(|s| s.is_some()).count();
        if found != cells {
            return Err(CorruptSaveError::IncompleteLayout {
                found,
                expected: cells,
            });
        }

        let layout: Vec<(SlotIndex, CardTypeId)> = slots
            .into_iter()
            .enumerate()
            .filter_map(|(i, t)| t.map(|t| (SlotIndex::new(i as u32), t)))
            .collect();

        let mut per_type: FxHashMap<CardTypeId, usize> = FxHashMap::default();
        for (_, card_type) in &layout {
            *per_type.entry(*card_type).or_insert(0) += 1;
        }
        if let Some((card_type, _)) = per_type.iter().find(|(_, &count)| count != 2) {
            let name = self.catalog.name(*card_type).unwrap_or_default();
            return Err(CorruptSaveError::UnpairedType(name.to_string()));
        }

        Ok(layout)
    }
}

fn escape_name(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        if c == ESCAPE || c == ',' || c == ':' || c.is_whitespace() {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                escaped.push_str(&format!("{ESCAPE}{byte:02X}"));
            }
        } else {
            escaped.push(c);
        }
    }
    escaped
}

/// Inverse of `escape_name`. `None` on a truncated or non-hex escape, or
/// bytes that are not UTF-8.
fn unescape_name(escaped: &str) -> Option<String> {
    let mut bytes = Vec::with_capacity(escaped.len());
    let mut iter = escaped.bytes();
    while let Some(byte) = iter.next() {
        if byte == ESCAPE as u8 {
            let high = char::from(iter.next()?).to_digit(16)?;
            let low = char::from(iter.next()?).to_digit(16)?;
            bytes.push((high * 16 + low) as u8);
        } else {
            bytes.push(byte);
        }
    }
    String::from_utf8(bytes).ok()
}

fn encode_matched(board: &Board) -> String {
    board
        .matched_indices()
        .map(|i| i.raw().to_string())
        .collect::<Vec<_>>()
        .join(LIST_DELIMITER)
}

fn decode_matched(matched: &str, cells: usize) -> BTreeSet<SlotIndex> {
    matched
        .split(LIST_DELIMITER)
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .filter_map(|entry| match entry.parse::<u32>() {
            Ok(index) if (index as usize) < cells => Some(SlotIndex::new(index)),
            _ => {
                log::debug!("skipping matched entry {:?}", entry);
                None
            }
        })
        .collect()
}

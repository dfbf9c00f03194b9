//! Key-value stores.
//!
//! The persistence substrate is a flat map of string keys to primitive
//! values. Anything that can provide the [`KeyValueStore`] primitives works:
//! the in-process [`MemoryStore`], the file-backed [`FileStore`], or an
//! embedder's own preference store.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::StoreError;

/// A stored primitive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StoredValue {
    Text(String),
    Float(f64),
    Int(i64),
}

/// Flat string-keyed store.
///
/// Typed getters return `None` when the key is missing or holds a value of
/// another type. Writes may be buffered until [`flush`](Self::flush).
pub trait KeyValueStore {
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&mut self, key: &str, value: &str);

    fn get_float(&self, key: &str) -> Option<f64>;
    fn set_float(&mut self, key: &str, value: f64);

    fn get_int(&self, key: &str) -> Option<i64>;
    fn set_int(&mut self, key: &str, value: i64);

    fn has_key(&self, key: &str) -> bool;

    /// Remove a key. Missing keys are not an error; returns whether it existed.
    fn delete_key(&mut self, key: &str) -> bool;

    /// Make buffered writes durable.
    fn flush(&mut self) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }

    fn set_string(&mut self, key: &str, value: &str) {
        (**self).set_string(key, value);
    }

    fn get_float(&self, key: &str) -> Option<f64> {
        (**self).get_float(key)
    }

    fn set_float(&mut self, key: &str, value: f64) {
        (**self).set_float(key, value);
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        (**self).get_int(key)
    }

    fn set_int(&mut self, key: &str, value: i64) {
        (**self).set_int(key, value);
    }

    fn has_key(&self, key: &str) -> bool {
        (**self).has_key(key)
    }

    fn delete_key(&mut self, key: &str) -> bool {
        (**self).delete_key(key)
    }

    fn flush(&mut self) -> Result<(), StoreError> {
        (**self).flush()
    }
}

/// In-process store. `flush` is a no-op.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStore {
    values: FxHashMap<String, StoredValue>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw access, for inspection and tests.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&StoredValue> {
        self.values.get(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_string(&self, key: &str) -> Option<String> {
        match self.values.get(key) {
            Some(StoredValue::Text(s)) => Some(s.clone()),
            _ => None,
        }
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.to_string(), StoredValue::Text(value.to_string()));
    }

    fn get_float(&self, key: &str) -> Option<f64> {
        match self.values.get(key) {
            Some(StoredValue::Float(v)) => Some(*v),
            _ => None,
        }
    }

    fn set_float(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), StoredValue::Float(value));
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        match self.values.get(key) {
            Some(StoredValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    fn set_int(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), StoredValue::Int(value));
    }

    fn has_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn delete_key(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    fn flush(&mut self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Store persisted to a single bincode file.
///
/// Reads happen from memory; `flush` writes the whole map to a temp file
/// and renames it over the target.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: MemoryStore,
    dirty: bool,
}

impl FileStore {
    /// Open the store at `path`. A missing file opens empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match fs::read(&path) {
            Ok(bytes) => MemoryStore {
                values: bincode::deserialize(&bytes)?,
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => MemoryStore::new(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            path,
            values,
            dirty: false,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl KeyValueStore for FileStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get_string(key)
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values.set_string(key, value);
        self.mark_dirty();
    }

    fn get_float(&self, key: &str) -> Option<f64> {
        self.values.get_float(key)
    }

    fn set_float(&mut self, key: &str, value: f64) {
        self.values.set_float(key, value);
        self.mark_dirty();
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        self.values.get_int(key)
    }

    fn set_int(&mut self, key: &str, value: i64) {
        self.values.set_int(key, value);
        self.mark_dirty();
    }

    fn has_key(&self, key: &str) -> bool {
        self.values.has_key(key)
    }

    fn delete_key(&mut self, key: &str) -> bool {
        let existed = self.values.delete_key(key);
        if existed {
            self.mark_dirty();
        }
        existed
    }

    fn flush(&mut self) -> Result<(), StoreError> {
        if !self.dirty {
            return Ok(());
        }

        let bytes = bincode::serialize(&self.values.values)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        self.dirty = false;
        Ok(())
    }
}

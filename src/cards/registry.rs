//! Card catalog: the explicit type → asset table.
//!
//! The catalog is built once, before a session starts, and handed to both the
//! deck builder and the persistence codec. Saved layouts refer to types by
//! name and are resolved back through [`CardCatalog::resolve`].

use rustc_hash::FxHashMap;

use super::definition::{AssetRef, CardTypeId, CatalogEntry};

/// Ordered catalog of card types.
///
/// ## Example
///
/// ```
/// use memory_match::cards::CardCatalog;
///
/// let mut catalog = CardCatalog::new();
/// let apple = catalog.push("Apple", "sprites/apple.png");
/// let pear = catalog.push("Pear", "sprites/pear.png");
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.resolve("Pear"), Some(pear));
/// assert_eq!(catalog.asset(apple).unwrap().as_str(), "sprites/apple.png");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    entries: Vec<CatalogEntry>,
    by_name: FxHashMap<String, CardTypeId>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from `(name, asset)` pairs, in order.
    pub fn from_entries<N, A>(entries: impl IntoIterator<Item = (N, A)>) -> Self
    where
        N: Into<String>,
        A: Into<String>,
    {
        let mut catalog = Self::new();
        for (name, asset) in entries {
            catalog.push(name, asset);
        }
        catalog
    }

    /// Append a card type.
    ///
    /// Names are unique: pushing an existing name returns its id unchanged.
    pub fn push(&mut self, name: impl Into<String>, asset: impl Into<String>) -> CardTypeId {
        let name = name.into();
        if let Some(&id) = self.by_name.get(&name) {
            return id;
        }

        let id = CardTypeId::new(self.entries.len() as u32);
        self.by_name.insert(name.clone(), id);
        self.entries.push(CatalogEntry {
            id,
            name,
            asset: AssetRef::new(asset),
        });
        id
    }

    /// Get a catalog entry by ID.
    #[must_use]
    pub fn get(&self, id: CardTypeId) -> Option<&CatalogEntry> {
        self.entries.get(id.index())
    }

    /// Look up a type by its persisted name.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<CardTypeId> {
        self.by_name.get(name).copied()
    }

    /// Name of a type.
    #[must_use]
    pub fn name(&self, id: CardTypeId) -> Option<&str> {
        self.get(id).map(|e| e.name.as_str())
    }

    /// Face asset of a type.
    #[must_use]
    pub fn asset(&self, id: CardTypeId) -> Option<&AssetRef> {
        self.get(id).map(|e| &e.asset)
    }

    /// Number of card types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All type ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = CardTypeId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    /// Iterate over entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_get() {
        let mut catalog = CardCatalog::new();

        let id = catalog.push("Apple", "apple.png");
        assert_eq!(id, CardTypeId::new(0));

        let entry = catalog.get(id).unwrap();
        assert_eq!(entry.name, "Apple");
        assert_eq!(entry.asset.as_str(), "apple.png");

        assert!(catalog.get(CardTypeId::new(9)).is_none());
    }

    #[test]
    fn test_duplicate_name_returns_existing() {
        let mut catalog = CardCatalog::new();

        let first = catalog.push("Apple", "apple.png");
        let second = catalog.push("Apple", "other.png");

        assert_eq!(first, second);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.asset(first).unwrap().as_str(), "apple.png");
    }

    #[test]
    fn test_resolve() {
        let catalog = CardCatalog::from_entries([("A", "a.png"), ("B", "b.png")]);

        assert_eq!(catalog.resolve("B"), Some(CardTypeId::new(1)));
        assert_eq!(catalog.resolve("C"), None);
        assert_eq!(catalog.name(CardTypeId::new(0)), Some("A"));
    }

    #[test]
    fn test_iteration_order() {
        let catalog = CardCatalog::from_entries([("C", "c"), ("A", "a"), ("B", "b")]);

        let names: Vec<_> = catalog.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);

        let ids: Vec<_> = catalog.ids().map(CardTypeId::raw).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }
}

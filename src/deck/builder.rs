//! Deck construction.

use crate::cards::{CardCatalog, CardTypeId};
use crate::core::{ConfigError, DeckSelection, GameRng};

/// Turns a catalog into a shuffled, paired deck.
///
/// ## Example
///
/// ```
/// use memory_match::cards::CardCatalog;
/// use memory_match::core::{DeckSelection, GameRng};
/// use memory_match::deck::DeckBuilder;
///
/// let catalog = CardCatalog::from_entries([("A", "a"), ("B", "b"), ("C", "c")]);
/// let builder = DeckBuilder::new(&catalog, DeckSelection::Leading);
///
/// let deck = builder.deal(2, &mut GameRng::new(7)).unwrap();
/// assert_eq!(deck.len(), 4);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DeckBuilder<'a> {
    catalog: &'a CardCatalog,
    selection: DeckSelection,
}

impl<'a> DeckBuilder<'a> {
    pub fn new(catalog: &'a CardCatalog, selection: DeckSelection) -> Self {
        Self { catalog, selection }
    }

    /// Pick `required_pairs` distinct types from the catalog.
    pub fn choose_types(
        &self,
        required_pairs: usize,
        rng: &mut GameRng,
    ) -> Result<Vec<CardTypeId>, ConfigError> {
        if required_pairs > self.catalog.len() {
            return Err(ConfigError::InsufficientCatalog {
                required: required_pairs,
                available: self.catalog.len(),
            });
        }

        let mut ids: Vec<CardTypeId> = self.catalog.ids().collect();
        if self.selection == DeckSelection::Random {
            rng.shuffle(&mut ids);
        }
        ids.truncate(required_pairs);
        Ok(ids)
    }

    /// Double every type in `subset`, then shuffle.
    ///
    /// The result has length `2 * subset.len()` and each type exactly twice,
    /// provided `subset` has no repeats.
    pub fn build(subset: &[CardTypeId], rng: &mut GameRng) -> Vec<CardTypeId> {
        let mut deck: Vec<CardTypeId> = subset
            .iter()
            .flat_map(|&id| [id, id])
            .collect();
        rng.shuffle(&mut deck);
        deck
    }

    /// Choose types and build the deck in one step.
    pub fn deal(&self, required_pairs: usize, rng: &mut GameRng) -> Result<Vec<CardTypeId>, ConfigError> {
        let types = self.choose_types(required_pairs, rng)?;
        log::debug!("dealing {} pairs from a catalog of {}", types.len(), self.catalog.len());
        Ok(Self::build(&types, rng))
    }
}

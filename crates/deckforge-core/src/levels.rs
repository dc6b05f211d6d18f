//! Player card-level data.

use std::collections::HashMap;

use crate::card::{CardId, CardSet};
use crate::deck::Deck;

/// The competitive maximum a card level is measured against.
pub const LEVEL_CEILING: u32 = 14;

/// One player's card deficits, keyed by card identifier.
///
/// The deficit measures how far a card sits below the competitive
/// maximum: 0 means maxed, larger values mean further below. A card with
/// no entry is not owned by the player and disqualifies any deck that
/// needs it.
///
/// The index is produced by an external player-data loader; the core's
/// only contract with level data is this typed lookup.
#[derive(Debug, Clone, Default)]
pub struct LevelIndex {
    deficits: HashMap<CardId, u32>,
}

impl LevelIndex {
    /// Creates an empty level index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the deficit for a card.
    pub fn insert(&mut self, card: CardId, deficit: u32) {
        self.deficits.insert(card, deficit);
    }

    /// Returns the deficit for `card`, or `None` when the player does not
    /// own it.
    #[inline]
    pub fn deficit(&self, card: &CardId) -> Option<u32> {
        self.deficits.get(card).copied()
    }

    /// Returns the number of cards with level data.
    #[inline]
    pub fn len(&self) -> usize {
        self.deficits.len()
    }

    /// Returns true when no level data is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.deficits.is_empty()
    }

    /// Effective level (`LEVEL_CEILING − deficit`) for each card of a
    /// deck, in deck order. `None` marks an unowned card.
    pub fn deck_card_levels(&self, deck: &Deck) -> Vec<Option<u32>> {
        deck.cards()
            .iter()
            .map(|card| {
                self.deficit(card)
                    .map(|deficit| LEVEL_CEILING.saturating_sub(deficit))
            })
            .collect()
    }

    /// Share of the competitive maximum reached across a card set, as a
    /// percentage. 100.0 when every card is maxed; unowned cards count
    /// as level zero.
    pub fn level_utilization(&self, cards: &CardSet) -> f64 {
        if cards.is_empty() {
            return 0.0;
        }
        let reached: u64 = cards
            .iter()
            .map(|card| {
                self.deficit(card)
                    .map_or(0, |deficit| LEVEL_CEILING.saturating_sub(deficit)) as u64
            })
            .sum();
        let ceiling = LEVEL_CEILING as u64 * cards.len() as u64;
        reached as f64 / ceiling as f64 * 100.0
    }
}

impl FromIterator<(CardId, u32)> for LevelIndex {
    fn from_iter<T: IntoIterator<Item = (CardId, u32)>>(iter: T) -> Self {
        LevelIndex {
            deficits: iter.into_iter().collect(),
        }
    }
}

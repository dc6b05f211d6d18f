//! Recommended deck-set result records.

use crate::card::CardSet;
use crate::deck::DeckKey;

/// A recommended combination of decks with no card repeated across
/// member decks.
///
/// Produced by the recommender and owned by the caller thereafter; the
/// core never persists results.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckSet {
    score: f64,
    deck_keys: Vec<DeckKey>,
    cards: CardSet,
}

impl DeckSet {
    /// Assembles a result record.
    pub fn new(score: f64, deck_keys: Vec<DeckKey>, cards: CardSet) -> Self {
        DeckSet {
            score,
            deck_keys,
            cards,
        }
    }

    /// Returns the final score of the combination.
    #[inline]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Returns the chosen deck keys, in selection order.
    #[inline]
    pub fn deck_keys(&self) -> &[DeckKey] {
        &self.deck_keys
    }

    /// Returns the full card set of the combination.
    #[inline]
    pub fn cards(&self) -> &CardSet {
        &self.cards
    }

    /// Counts the cards shared with another deck-set.
    pub fn overlap(&self, other: &DeckSet) -> usize {
        self.cards.intersection(&other.cards).count()
    }
}

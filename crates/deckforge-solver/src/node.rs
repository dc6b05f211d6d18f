//! Search node representation.
//!
//! Each node is a partial deck-set: the decks committed so far, their
//! combined card set, the cumulative score, and the highest catalog
//! index consumed.

use deckforge_core::{CardSet, Deck, DeckKey, DeckSet};
use smallvec::SmallVec;

/// Deck keys chosen so far; at most four decks per set in practice.
pub type DeckKeyList = SmallVec<[DeckKey; 4]>;

/// A partial deck-set in the staged search.
///
/// The index bound is what turns deck *selection* into an unordered
/// *combination*: only decks at a strictly greater catalog index may
/// extend a partial set, so the same unordered combination is never
/// counted once per permutation.
#[derive(Debug, Clone)]
pub struct PartialDeckSet {
    /// Cumulative score; may carry the large negative rejection sentinel.
    score: f64,

    /// Cards committed by all chosen decks, disjoint by construction.
    cards: CardSet,

    /// Catalog keys of the chosen decks, in selection order.
    deck_keys: DeckKeyList,

    /// Highest catalog index consumed so far (None for the root).
    max_index: Option<usize>,
}

impl PartialDeckSet {
    /// Creates the empty root node the first stage expands from.
    pub fn root() -> Self {
        PartialDeckSet {
            score: 0.0,
            cards: CardSet::new(),
            deck_keys: DeckKeyList::new(),
            max_index: None,
        }
    }

    /// Creates the extension of this node by one deck.
    ///
    /// `score` is the already-computed cumulative score of the extension;
    /// the card set and key list grow by the deck's cards and key.
    pub fn extended(&self, deck: &Deck, index: usize, score: f64) -> Self {
        let mut cards = self.cards.clone();
        for card in deck.cards() {
            cards.insert(card.clone());
        }
        let mut deck_keys = self.deck_keys.clone();
        deck_keys.push(deck.key().clone());
        PartialDeckSet {
            score,
            cards,
            deck_keys,
            max_index: Some(index),
        }
    }

    /// Returns the cumulative score.
    #[inline]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Returns the committed card set.
    #[inline]
    pub fn cards(&self) -> &CardSet {
        &self.cards
    }

    /// Returns the chosen deck keys in selection order.
    #[inline]
    pub fn deck_keys(&self) -> &[DeckKey] {
        &self.deck_keys
    }

    /// Returns the highest catalog index consumed so far.
    #[inline]
    pub fn max_index(&self) -> Option<usize> {
        self.max_index
    }

    /// Returns the number of decks committed so far.
    #[inline]
    pub fn depth(&self) -> usize {
        self.deck_keys.len()
    }

    /// Converts a completed node into a caller-owned result record.
    pub fn into_deck_set(self) -> DeckSet {
        DeckSet::new(self.score, self.deck_keys.into_vec(), self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use deckforge_core::CardId;

    fn deck(tag: u32) -> Deck {
        let cards: Vec<CardId> = (0..8)
            .map(|i| CardId::new(format!("t{tag}-{i}")))
            .collect();
        Deck::new(cards, 1, 1, 50.0, Utc::now()).unwrap()
    }

    #[test]
    fn test_root_node() {
        let root = PartialDeckSet::root();
        assert_eq!(root.score(), 0.0);
        assert_eq!(root.depth(), 0);
        assert!(root.cards().is_empty());
        assert!(root.max_index().is_none());
    }

    #[test]
    fn test_extended_accumulates() {
        let root = PartialDeckSet::root();
        let first = deck(0);
        let second = deck(1);

        let one = root.extended(&first, 3, 10.0);
        assert_eq!(one.depth(), 1);
        assert_eq!(one.cards().len(), 8);
        assert_eq!(one.max_index(), Some(3));

        let two = one.extended(&second, 7, 25.0);
        assert_eq!(two.depth(), 2);
        assert_eq!(two.cards().len(), 16);
        assert_eq!(two.max_index(), Some(7));
        assert_eq!(two.score(), 25.0);
        assert_eq!(two.deck_keys()[0], *first.key());
        assert_eq!(two.deck_keys()[1], *second.key());

        // the original node is untouched
        assert_eq!(one.depth(), 1);
    }

    #[test]
    fn test_into_deck_set() {
        let root = PartialDeckSet::root();
        let d = deck(0);
        let set = root.extended(&d, 0, 42.0).into_deck_set();
        assert_eq!(set.score(), 42.0);
        assert_eq!(set.deck_keys(), &[d.key().clone()]);
        assert_eq!(set.cards().len(), 8);
    }
}

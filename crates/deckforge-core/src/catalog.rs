//! The deck catalog: an immutable, ordered snapshot of scraped decks.

use crate::deck::Deck;

/// Ordered sequence of decks for one computation.
///
/// The catalog is supplied by an external scraping/storage subsystem and
/// treated as an immutable snapshot for the duration of a recommendation.
/// Deck order is significant: the search extends partial deck-sets only
/// with decks at a strictly greater catalog index, which is what turns
/// deck *selection* into an unordered *combination*.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    decks: Vec<Deck>,
}

impl Catalog {
    /// Creates a catalog from an ordered deck list.
    pub fn new(decks: Vec<Deck>) -> Self {
        Catalog { decks }
    }

    /// Returns the deck at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Deck> {
        self.decks.get(index)
    }

    /// Returns the number of decks.
    #[inline]
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    /// Returns true when the catalog holds no decks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Iterates decks with their catalog indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Deck)> {
        self.decks.iter().enumerate()
    }

    /// Iterates decks at indices strictly greater than `bound`.
    ///
    /// A `bound` of `None` starts from the beginning of the catalog.
    pub fn iter_above(&self, bound: Option<usize>) -> impl Iterator<Item = (usize, &Deck)> {
        let start = bound.map_or(0, |idx| idx + 1);
        self.decks[start.min(self.decks.len())..]
            .iter()
            .enumerate()
            .map(move |(offset, deck)| (start + offset, deck))
    }

    /// Returns the underlying deck slice.
    #[inline]
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }
}

impl FromIterator<Deck> for Catalog {
    fn from_iter<T: IntoIterator<Item = Deck>>(iter: T) -> Self {
        Catalog::new(iter.into_iter().collect())
    }
}

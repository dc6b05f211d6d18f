//! Meta decks and their catalog keys.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::card::{CardId, CardSet};
use crate::error::DomainError;

/// Number of cards in a meta deck.
pub const DECK_SIZE: usize = 8;

/// Unique catalog key of a deck, derived from its card identifiers.
///
/// The key is the comma-joined card list in scraped order, matching the
/// deck ids used by the upstream stats site.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DeckKey(String);

impl DeckKey {
    /// Derives the key from an ordered card list.
    pub fn from_cards(cards: &[CardId]) -> Self {
        let mut key = String::new();
        for (i, card) in cards.iter().enumerate() {
            if i > 0 {
                key.push(',');
            }
            key.push_str(card.as_str());
        }
        DeckKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeckKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A meta deck scraped from ranked play data.
///
/// A deck holds exactly [`DECK_SIZE`] distinct cards plus aggregate
/// popularity statistics and a capture timestamp. Decks are immutable
/// once loaded for a computation.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use deckforge_core::{CardId, Deck};
///
/// let cards: Vec<CardId> = ["a", "b", "c", "d", "e", "f", "g", "h"]
///     .into_iter()
///     .map(CardId::from)
///     .collect();
/// let deck = Deck::new(cards, 10, 1_000, 52.3, Utc::now()).unwrap();
/// assert_eq!(deck.key().as_str(), "a,b,c,d,e,f,g,h");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    key: DeckKey,
    cards: Vec<CardId>,
    rating: i64,
    usage: i64,
    win_rate: f64,
    entry_date: DateTime<Utc>,
}

impl Deck {
    /// Creates a deck from an ordered card list and its scraped statistics.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDeckSize`] when `cards` does not hold
    /// exactly [`DECK_SIZE`] entries, or [`DomainError::DuplicateCard`]
    /// when a card appears twice. Both indicate a broken upstream loader;
    /// callers should fail fast rather than repair the record.
    pub fn new(
        cards: Vec<CardId>,
        rating: i64,
        usage: i64,
        win_rate: f64,
        entry_date: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if cards.len() != DECK_SIZE {
            return Err(DomainError::InvalidDeckSize { found: cards.len() });
        }
        let mut seen = CardSet::new();
        for card in &cards {
            if !seen.insert(card.clone()) {
                return Err(DomainError::DuplicateCard { card: card.clone() });
            }
        }
        let key = DeckKey::from_cards(&cards);
        Ok(Deck {
            key,
            cards,
            rating,
            usage,
            win_rate,
            entry_date,
        })
    }

    /// Returns the unique catalog key.
    #[inline]
    pub fn key(&self) -> &DeckKey {
        &self.key
    }

    /// Returns the cards in scraped order.
    #[inline]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Returns the popularity rating.
    #[inline]
    pub fn rating(&self) -> i64 {
        self.rating
    }

    /// Returns the usage count.
    #[inline]
    pub fn usage(&self) -> i64 {
        self.usage
    }

    /// Returns the scraped win rate, in percent.
    #[inline]
    pub fn win_rate(&self) -> f64 {
        self.win_rate
    }

    /// Returns the capture timestamp.
    #[inline]
    pub fn entry_date(&self) -> DateTime<Utc> {
        self.entry_date
    }

    /// Collects the deck's cards into a set.
    pub fn card_set(&self) -> CardSet {
        self.cards.iter().cloned().collect()
    }
}

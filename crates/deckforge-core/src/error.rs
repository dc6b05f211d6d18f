//! Error types for DeckForge

use thiserror::Error;

use crate::card::CardId;
use crate::deck::DECK_SIZE;

/// Main error type for domain-model violations.
///
/// These errors indicate contract violations by the upstream loader
/// (a scraped deck that does not carry eight distinct cards); they are
/// raised at construction time and never during a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A deck was built from the wrong number of cards.
    #[error("deck must contain exactly {DECK_SIZE} cards, found {found}")]
    InvalidDeckSize {
        /// Number of cards actually supplied.
        found: usize,
    },

    /// A deck listed the same card twice.
    #[error("deck lists card {card} more than once")]
    DuplicateCard {
        /// The repeated card.
        card: CardId,
    },
}

/// Result type alias for domain-model operations.
pub type Result<T> = std::result::Result<T, DomainError>;

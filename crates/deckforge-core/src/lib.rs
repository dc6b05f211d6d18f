//! DeckForge Core - Domain types for the deck-set recommender
//!
//! This crate provides the fundamental types the recommender operates on:
//! - Card identifiers and card sets
//! - Meta decks with their catalog keys and popularity statistics
//! - The immutable deck catalog snapshot
//! - Per-player card-level data
//! - Recommended deck-set result records

pub mod card;
pub mod catalog;
pub mod deck;
pub mod deck_set;
pub mod error;
pub mod levels;

pub use card::{CardId, CardSet};
pub use catalog::Catalog;
pub use deck::{Deck, DeckKey, DECK_SIZE};
pub use deck_set::DeckSet;
pub use error::DomainError;
pub use levels::{LevelIndex, LEVEL_CEILING};

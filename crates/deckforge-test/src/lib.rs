//! Shared test fixtures for DeckForge crates.
//!
//! Synthetic catalogs and level indexes with predictable shapes, so
//! scenario tests across the workspace agree on one vocabulary.

use chrono::{DateTime, TimeZone, Utc};
use deckforge_core::{CardId, Catalog, Deck, LevelIndex};

/// A fixed evaluation instant so recency math is reproducible in tests.
pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()
}

/// A deck whose eight cards are unique to `tag` (`t3-0` .. `t3-7`).
///
/// Decks built from different tags are pairwise card-disjoint.
pub fn disjoint_deck(tag: usize, rating: i64, usage: i64, entry_date: DateTime<Utc>) -> Deck {
    let cards: Vec<CardId> = (0..8)
        .map(|i| CardId::new(format!("t{tag}-{i}")))
        .collect();
    Deck::new(cards, rating, usage, 50.0, entry_date)
        .unwrap_or_else(|err| panic!("fixture deck invalid: {err}"))
}

/// A catalog of `n` pairwise-disjoint decks captured at `entry_date`.
///
/// Ratings descend with the catalog index (`100 − index`) and usage is a
/// flat 100, so scores strictly decrease along the catalog.
pub fn disjoint_catalog(n: usize, entry_date: DateTime<Utc>) -> Catalog {
    (0..n)
        .map(|tag| disjoint_deck(tag, 100 - tag as i64, 100, entry_date))
        .collect()
}

/// Level data putting every card of the catalog at the given deficit.
pub fn levels_at_deficit(catalog: &Catalog, deficit: u32) -> LevelIndex {
    catalog
        .decks()
        .iter()
        .flat_map(|deck| deck.cards().iter().map(move |c| (c.clone(), deficit)))
        .collect()
}

/// Level data with every card of the catalog at the competitive maximum.
pub fn maxed_levels(catalog: &Catalog) -> LevelIndex {
    levels_at_deficit(catalog, 0)
}

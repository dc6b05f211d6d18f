//! Deck-Set Recommendation Demo
//!
//! Builds a synthetic catalog of meta decks and a partially-leveled
//! player collection, then runs the recommender in both exhaustive and
//! beam-pruned mode.

use std::sync::Arc;

use chrono::{Duration, Utc};
use deckforge::prelude::*;
use deckforge_console::{print_deck_set, ConsoleProgress};

/// A synthetic deck: eight cards drawn from a rolling window over a
/// shared card pool, so neighboring decks overlap and distant ones
/// don't.
fn demo_deck(index: usize, rating: i64, usage: i64, age_days: i64) -> Deck {
    let cards: Vec<CardId> = (0..8)
        .map(|slot| CardId::new(format!("card-{:02}", index * 5 + slot)))
        .collect();
    Deck::new(
        cards,
        rating,
        usage,
        48.0 + (index % 7) as f64,
        Utc::now() - Duration::days(age_days),
    )
    .expect("demo deck is well-formed")
}

fn main() {
    deckforge_console::init();

    println!("DeckForge Recommendation Demo");
    println!("=============================\n");

    // A small catalog: popular fresh decks up front, a stale one at the
    // end that the recency decay should eliminate.
    let catalog: Catalog = vec![
        demo_deck(0, 95, 1_200, 2),
        demo_deck(1, 88, 2_100, 5),
        demo_deck(2, 80, 900, 1),
        demo_deck(3, 75, 1_500, 12),
        demo_deck(4, 70, 800, 3),
        demo_deck(5, 92, 3_000, 60),
    ]
    .into_iter()
    .collect();

    // The player owns every card, most near max, a few lagging behind.
    let mut levels = LevelIndex::new();
    for (i, deck) in catalog.iter() {
        for card in deck.cards() {
            levels.insert(card.clone(), (i % 3) as u32);
        }
    }

    println!(
        "Catalog: {} decks, player owns {} cards\n",
        catalog.len(),
        levels.len()
    );

    let request = RecommendRequest::new(Utc::now());

    println!("--- Exhaustive search, two-deck sets ---\n");
    let recommender = Recommender::new(
        RecommenderConfig::new()
            .with_decks_to_generate(2)
            .with_decks_to_return(3)
            .without_pruning(),
    )
    .with_listener(Arc::new(ConsoleProgress::new()));

    match recommender.recommend(&catalog, &levels, &request) {
        Ok(results) if results.is_empty() => {
            println!("Could not generate decks matching required criteria...")
        }
        Ok(results) => {
            for (idx, set) in results.iter().enumerate() {
                print_deck_set(idx, set, &levels);
            }
        }
        Err(err) => eprintln!("recommendation failed: {err}"),
    }

    println!("\n--- Beam search with diversity ---\n");
    let recommender = Recommender::new(
        RecommenderConfig::new()
            .with_decks_to_generate(2)
            .with_decks_to_return(3)
            .with_beam_width(10)
            .with_diversity(12),
    )
    .with_listener(Arc::new(ConsoleProgress::new()));

    match recommender.recommend(&catalog, &levels, &request) {
        Ok(results) if results.is_empty() => {
            println!("Could not generate decks matching required criteria...")
        }
        Ok(results) => {
            for (idx, set) in results.iter().enumerate() {
                print_deck_set(idx, set, &levels);
            }
        }
        Err(err) => eprintln!("recommendation failed: {err}"),
    }
}

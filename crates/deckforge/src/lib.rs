//! DeckForge - A Deck-Set Recommender in Rust
//!
//! Feed it a catalog of scraped meta decks and one player's card levels;
//! it returns the ranked deck combinations that player can actually run.
//!
//! # Example
//!
//! ```rust
//! use deckforge::prelude::*;
//! use chrono::Utc;
//!
//! let recommender = Recommender::new(
//!     RecommenderConfig::new()
//!         .with_decks_to_generate(2)
//!         .with_decks_to_return(3),
//! );
//! let results = recommender
//!     .recommend(
//!         &Catalog::default(),
//!         &LevelIndex::new(),
//!         &RecommendRequest::new(Utc::now()),
//!     )
//!     .unwrap();
//! assert!(results.is_empty());
//! ```

// Domain types
pub use deckforge_core::{
    CardId, CardSet, Catalog, Deck, DeckKey, DeckSet, DomainError, LevelIndex, DECK_SIZE,
    LEVEL_CEILING,
};

// Configuration
pub use deckforge_config::{ConfigError, DiversityConfig, PruningConfig, RecommenderConfig};

// Search engine
pub use deckforge_solver::{
    CountingProgressListener, LoggingProgressListener, ProgressListener, RecommendError,
    RecommendRequest, Recommender,
};

// Console output (optional)
#[cfg(feature = "console")]
pub use deckforge_console as console;

pub mod prelude {
    pub use super::{
        CardId, CardSet, Catalog, Deck, DeckKey, DeckSet, LevelIndex, ProgressListener,
        RecommendRequest, Recommender, RecommenderConfig,
    };
}

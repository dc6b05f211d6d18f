//! Recommendation orchestrator.
//!
//! Drives the staged search: expand, prune between stages, finalize.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use deckforge_config::{ConfigError, RecommenderConfig};
use deckforge_core::{CardSet, Catalog, DeckSet, LevelIndex};

use crate::event::{ProgressEventSupport, ProgressListener};
use crate::expand::{expand_stage, select_beam};
use crate::finalize::finalize;
use crate::node::PartialDeckSet;
use crate::score::ScoringContext;

/// Error type for recommendation runs.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// The configuration failed validation.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for recommendation runs.
pub type Result<T> = std::result::Result<T, RecommendError>;

/// Per-invocation inputs that are not tuning configuration.
///
/// The `as_of` instant anchors the recency decay; callers stamp it once
/// so that identical requests stay reproducible — the core never reads
/// the wall clock.
#[derive(Debug, Clone)]
pub struct RecommendRequest {
    include: CardSet,
    exclude: CardSet,
    as_of: DateTime<Utc>,
}

impl RecommendRequest {
    /// Creates a request evaluated at the given instant, with no card
    /// constraints.
    pub fn new(as_of: DateTime<Utc>) -> Self {
        RecommendRequest {
            include: CardSet::new(),
            exclude: CardSet::new(),
            as_of,
        }
    }

    /// Requires every returned deck-set to contain these cards.
    ///
    /// The set must already be validated against the catalog; identifier
    /// validation is the front end's responsibility.
    pub fn with_include(mut self, include: CardSet) -> Self {
        self.include = include;
        self
    }

    /// Forbids these cards in any returned deck-set.
    pub fn with_exclude(mut self, exclude: CardSet) -> Self {
        self.exclude = exclude;
        self
    }

    /// Returns the required cards.
    #[inline]
    pub fn include(&self) -> &CardSet {
        &self.include
    }

    /// Returns the forbidden cards.
    #[inline]
    pub fn exclude(&self) -> &CardSet {
        &self.exclude
    }

    /// Returns the evaluation instant.
    #[inline]
    pub fn as_of(&self) -> DateTime<Utc> {
        self.as_of
    }
}

/// The deck-set recommender.
///
/// Holds tuning configuration and progress listeners; each
/// [`recommend`](Recommender::recommend) call is an independent,
/// deterministic computation over the catalog and level snapshots it is
/// given.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use deckforge_config::RecommenderConfig;
/// use deckforge_core::{Catalog, LevelIndex};
/// use deckforge_solver::{RecommendRequest, Recommender};
///
/// let recommender = Recommender::new(
///     RecommenderConfig::new()
///         .with_decks_to_generate(1)
///         .with_decks_to_return(3),
/// );
/// let results = recommender
///     .recommend(
///         &Catalog::default(),
///         &LevelIndex::new(),
///         &RecommendRequest::new(Utc::now()),
///     )
///     .unwrap();
/// assert!(results.is_empty());
/// ```
#[derive(Debug)]
pub struct Recommender {
    config: RecommenderConfig,
    events: ProgressEventSupport,
}

impl Recommender {
    /// Creates a recommender with the given configuration.
    pub fn new(config: RecommenderConfig) -> Self {
        Recommender {
            config,
            events: ProgressEventSupport::new(),
        }
    }

    /// Registers a progress listener.
    pub fn with_listener(mut self, listener: Arc<dyn ProgressListener>) -> Self {
        self.events.add_listener(listener);
        self
    }

    /// Registers a progress listener on an existing recommender.
    pub fn add_listener(&mut self, listener: Arc<dyn ProgressListener>) {
        self.events.add_listener(listener);
    }

    /// Returns the configuration.
    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Computes the ranked deck-sets for one player.
    ///
    /// The catalog and level index are immutable snapshots for the
    /// duration of the call. An empty catalog, an empty level index, or
    /// a search that starves at some stage all propagate naturally to an
    /// empty result — only invalid configuration is an error.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::Config`] when the configured parameters
    /// are out of range.
    pub fn recommend(
        &self,
        catalog: &Catalog,
        levels: &LevelIndex,
        request: &RecommendRequest,
    ) -> Result<Vec<DeckSet>> {
        self.config.validate()?;

        let stages = self.config.decks_to_generate;
        let ctx = ScoringContext {
            levels,
            exclude: request.exclude(),
            as_of: request.as_of(),
        };

        self.events.fire_recommendation_started(stages);
        tracing::debug!(
            stages,
            catalog = catalog.len(),
            pruning = ?self.config.beam_width(),
            "starting recommendation"
        );

        let mut frontier = vec![PartialDeckSet::root()];
        for stage in 1..=stages {
            self.events.fire_stage_started(stage, stages);
            frontier = expand_stage(catalog, &frontier, &ctx);

            // Prune between stages only; the final frontier goes to the
            // finalizer in full. A single-stage run is never pruned.
            if stage < stages {
                if let Some(beam_width) = self.config.beam_width() {
                    frontier = select_beam(frontier, beam_width);
                }
            }

            tracing::debug!(stage, surviving = frontier.len(), "stage complete");
            self.events.fire_stage_ended(stage, stages, frontier.len());
            if frontier.is_empty() {
                break;
            }
        }

        self.events.fire_ranking_started(frontier.len());
        let results = finalize(
            frontier,
            request.include(),
            self.config.overlap_limit(),
            self.config.decks_to_return,
        );
        tracing::debug!(returned = results.len(), "recommendation complete");
        self.events.fire_recommendation_ended(results.len());
        Ok(results)
    }
}

#[cfg(test)]
#[path = "recommender_tests.rs"]
mod tests;

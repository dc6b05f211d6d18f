//! Candidate scoring.
//!
//! Scores one deck as an extension of a partial deck-set. The score is a
//! popularity proxy (`rating × usage`) decayed by capture age and
//! discounted by how far the player's card levels sit below the
//! competitive maximum.

use chrono::{DateTime, Utc};

use deckforge_core::{CardSet, Deck, LevelIndex, LEVEL_CEILING};

use crate::node::PartialDeckSet;

/// Sentinel score for disqualified extensions.
///
/// Large enough (negatively) that a rejected extension can never survive
/// a positive-score filter or a top-K selection, while leaving the
/// enumeration free to continue past it.
pub const REJECTED_SCORE: f64 = -1_000_000_000.0;

/// Score fraction lost per day since a deck was captured.
///
/// Deliberately unclamped: a deck older than 50 days flips an otherwise
/// positive score negative and drops out of contention entirely.
pub const RECENCY_DECAY_PER_DAY: f64 = 0.02;

/// Exponential discount rate applied per level below deck readiness.
pub const READINESS_DECAY: f64 = 0.2;

/// Immutable inputs shared by every scoring call of one recommendation.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    /// The player's card deficits.
    pub levels: &'a LevelIndex,

    /// Cards the caller excluded outright.
    pub exclude: &'a CardSet,

    /// The instant recency is measured against. Callers stamp this once
    /// per request; the scorer never reads the wall clock.
    pub as_of: DateTime<Utc>,
}

/// Computes the score contribution of `deck` when appended to `partial`.
///
/// Returns [`REJECTED_SCORE`] when the deck reuses a committed card,
/// touches an excluded card, or needs a card the player has no level
/// entry for. Rejection disqualifies only this extension; the caller
/// keeps enumerating.
pub fn score_candidate(deck: &Deck, partial: &PartialDeckSet, ctx: &ScoringContext<'_>) -> f64 {
    let base = (deck.rating() * deck.usage()) as f64;
    let age_days = (ctx.as_of - deck.entry_date()).num_days() as f64;
    let mut score = base * (1.0 - age_days * RECENCY_DECAY_PER_DAY);

    let mut rejected = false;
    // Distance from a fully-ready deck, summed over all eight cards.
    let mut levels_off_max: i64 = 0;

    for card in deck.cards() {
        if partial.cards().contains(card) || ctx.exclude.contains(card) {
            rejected = true;
            break;
        }
        match ctx.levels.deficit(card) {
            Some(deficit) => {
                levels_off_max += LEVEL_CEILING as i64 - deficit as i64;
            }
            None => {
                rejected = true;
                break;
            }
        }
    }

    if rejected {
        score = REJECTED_SCORE;
    }
    if score > 0.0 {
        score *= (-READINESS_DECAY * levels_off_max as f64).exp();
    }
    score
}

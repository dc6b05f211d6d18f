//! Final ranking and diversification of completed deck-sets.

use deckforge_core::{CardSet, DeckSet};

use crate::node::PartialDeckSet;

/// Ranks candidates and applies the inclusion and diversity filters.
///
/// Candidates are sorted by descending score with a stable sort, so tied
/// candidates keep their prior relative order — a determinism guarantee
/// callers can rely on. A candidate is accepted when its card set covers
/// `include` and, if `overlap_limit` is set, shares at most that many
/// cards with every already-accepted set. The walk stops after
/// `decks_to_return` acceptances or when candidates run out; the result
/// may be shorter than requested, including empty.
pub fn finalize(
    candidates: Vec<PartialDeckSet>,
    include: &CardSet,
    overlap_limit: Option<usize>,
    decks_to_return: usize,
) -> Vec<DeckSet> {
    let mut ranked: Vec<DeckSet> = candidates
        .into_iter()
        .map(PartialDeckSet::into_deck_set)
        .collect();
    ranked.sort_by(|a, b| b.score().total_cmp(&a.score()));

    let mut accepted: Vec<DeckSet> = Vec::new();
    for candidate in ranked {
        if !include.is_subset(candidate.cards()) {
            continue;
        }
        if let Some(limit) = overlap_limit {
            let too_close = accepted
                .iter()
                .any(|chosen| candidate.overlap(chosen) > limit);
            if too_close {
                continue;
            }
        }
        accepted.push(candidate);
        if accepted.len() == decks_to_return {
            break;
        }
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use deckforge_core::{CardId, Deck};

    fn partial(tag: u32, score: f64) -> PartialDeckSet {
        let cards: Vec<CardId> = (0..8)
            .map(|i| CardId::new(format!("t{tag}-{i}")))
            .collect();
        let deck = Deck::new(
            cards,
            1,
            1,
            50.0,
            Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        )
        .unwrap();
        PartialDeckSet::root().extended(&deck, tag as usize, score)
    }

    #[test]
    fn test_sorts_descending_by_score() {
        let results = finalize(
            vec![partial(0, 1.0), partial(1, 3.0), partial(2, 2.0)],
            &CardSet::new(),
            None,
            3,
        );
        let scores: Vec<f64> = results.iter().map(DeckSet::score).collect();
        assert_eq!(scores, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_ties_keep_prior_order() {
        let a = partial(0, 2.0);
        let b = partial(1, 2.0);
        let c = partial(2, 2.0);
        let results = finalize(vec![a, b, c], &CardSet::new(), None, 3);
        // stable sort: tied candidates stay in submission order
        assert!(results[0].deck_keys()[0].as_str().starts_with("t0"));
        assert!(results[1].deck_keys()[0].as_str().starts_with("t1"));
        assert!(results[2].deck_keys()[0].as_str().starts_with("t2"));
    }

    #[test]
    fn test_include_filter() {
        let include: CardSet = [CardId::new("t2-0")].into_iter().collect();
        let results = finalize(
            vec![partial(0, 3.0), partial(1, 2.0), partial(2, 1.0)],
            &include,
            None,
            3,
        );
        assert_eq!(results.len(), 1);
        assert!(include.is_subset(results[0].cards()));
    }

    #[test]
    fn test_truncates_to_requested_count() {
        let results = finalize(
            vec![partial(0, 1.0), partial(1, 2.0), partial(2, 3.0)],
            &CardSet::new(),
            None,
            2,
        );
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_diversity_rejects_overlapping_candidate() {
        // two identical-card candidates and one disjoint one
        let top = partial(0, 3.0);
        let duplicate = {
            let cards: Vec<CardId> = (0..8).map(|i| CardId::new(format!("t0-{i}"))).collect();
            let deck = Deck::new(
                cards,
                1,
                1,
                50.0,
                Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
            )
            .unwrap();
            PartialDeckSet::root().extended(&deck, 9, 2.5)
        };
        let distinct = partial(1, 1.0);

        let results = finalize(
            vec![top, duplicate, distinct],
            &CardSet::new(),
            Some(4),
            2,
        );
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].score(), 3.0);
        // the higher-scoring duplicate (overlap 8 > 4) was skipped
        assert_eq!(results[1].score(), 1.0);
    }

    #[test]
    fn test_empty_candidates_empty_result() {
        let results = finalize(Vec::new(), &CardSet::new(), None, 5);
        assert!(results.is_empty());
    }
}

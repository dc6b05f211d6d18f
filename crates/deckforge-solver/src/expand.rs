//! Stage expansion and beam selection.
//!
//! One stage of the search extends every surviving partial deck-set with
//! every deck at a strictly greater catalog index, keeps the extensions
//! whose cumulative score stays positive, and (in beam mode) cuts the
//! frontier down to the top `beam_width` extensions by score.

use rayon::prelude::*;

use deckforge_core::Catalog;

use crate::node::PartialDeckSet;
use crate::score::{score_candidate, ScoringContext};

/// Expands one search stage.
///
/// Candidates are enumerated in (parent order × catalog order); only
/// extensions with a positive cumulative score survive. Scoring is
/// parallelized per parent, but the output order is the deterministic
/// enumeration order regardless of thread scheduling.
pub fn expand_stage(
    catalog: &Catalog,
    frontier: &[PartialDeckSet],
    ctx: &ScoringContext<'_>,
) -> Vec<PartialDeckSet> {
    let extensions: Vec<Vec<PartialDeckSet>> = frontier
        .par_iter()
        .map(|partial| expand_one(catalog, partial, ctx))
        .collect();
    extensions.into_iter().flatten().collect()
}

/// Positive-score extensions of a single partial deck-set.
fn expand_one(
    catalog: &Catalog,
    partial: &PartialDeckSet,
    ctx: &ScoringContext<'_>,
) -> Vec<PartialDeckSet> {
    let mut out = Vec::new();
    for (index, deck) in catalog.iter_above(partial.max_index()) {
        let cumulative = partial.score() + score_candidate(deck, partial, ctx);
        if cumulative > 0.0 {
            out.push(partial.extended(deck, index, cumulative));
        }
    }
    out
}

/// Retains the top `beam_width` candidates by score.
///
/// Survivors keep their enumeration order: selection is by score value
/// only, with a stable tie-break applied once, after all scores are
/// known. When `beam_width` covers every candidate the cut is a literal
/// no-op, so a wide-enough beam reproduces the exhaustive result
/// exactly.
pub fn select_beam(candidates: Vec<PartialDeckSet>, beam_width: usize) -> Vec<PartialDeckSet> {
    if candidates.len() <= beam_width {
        return candidates;
    }

    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| candidates[b].score().total_cmp(&candidates[a].score()));
    order.truncate(beam_width);
    order.sort_unstable();

    let mut keep = order.into_iter().peekable();
    candidates
        .into_iter()
        .enumerate()
        .filter_map(|(idx, candidate)| {
            if keep.peek() == Some(&idx) {
                keep.next();
                Some(candidate)
            } else {
                None
            }
        })
        .collect()
}

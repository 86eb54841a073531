//! Selection of the best-first matching subset of a ranking.

use crate::types::MatchResult;

/// Keep only matching rows, best score first, capped at `max_results`.
///
/// The sort is stable and the input ranking arrives in original collection
/// order, so candidates with equal scores keep their original relative order
/// (alphabetical, if the collection was pre-sorted) instead of being
/// reshuffled. `max_results == 0` means unbounded. The input is never
/// mutated.
pub fn select(ranking: &[MatchResult], max_results: usize) -> Vec<MatchResult> {
    let mut hits: Vec<MatchResult> = ranking.iter().filter(|r| r.matched).copied().collect();
    hits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if max_results > 0 && hits.len() > max_results {
        hits.truncate(max_results);
    }
    hits
}

/// [`select`], mapped back onto the candidate slice.
///
/// Returns borrowed candidates in best-first order. Rows whose index falls
/// outside `items` are skipped rather than panicking.
pub fn select_from<'a, T>(
    items: &'a [T],
    ranking: &[MatchResult],
    max_results: usize,
) -> Vec<&'a T> {
    select(ranking, max_results)
        .iter()
        .filter_map(|hit| items.get(hit.index))
        .collect()
}

//! Ranking a candidate collection against one query.
//!
//! The ranker evaluates every candidate's sort key independently and writes
//! each result into the slot matching the candidate's original index, so the
//! output is aligned 1:1 with the input collection whether the pass ran
//! sequentially or on the rayon pool.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::collection::SortKeyed;
use crate::engine::{MatchEngine, Scratch};
use crate::filter::select;
use crate::metrics::metrics_recorder;
use crate::score::ScoreModel;
use crate::types::{FilterError, MatchResult, Ranking};

/// Collections at or above this size rank on the rayon pool when the
/// `parallel` feature is enabled.
#[cfg(feature = "parallel")]
const PARALLEL_CUTOVER: usize = 256;

/// Cooperative cancellation signal for in-flight rankings.
///
/// Interactive callers hand a clone of the token to the ranking pass and
/// trip it when a newer query supersedes the one in flight. The flag is
/// checked between candidates, never inside a single candidate's evaluation
/// (which is bounded and fast), so abandonment is prompt and partial work is
/// simply discarded.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of every pass holding a clone of this token.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Ranks candidate collections with a [`MatchEngine`].
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    engine: MatchEngine,
}

impl Ranker {
    /// Construct a ranker, validating the model invariants.
    pub fn new(model: ScoreModel) -> Result<Self, FilterError> {
        Ok(Self {
            engine: MatchEngine::new(model)?,
        })
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Rank every candidate against `query`.
    ///
    /// The returned ranking has exactly `collection.len()` rows and row `i`
    /// carries `index == i`. Candidates whose sort key cannot be derived are
    /// reported as non-matching; the failure is logged and the remaining
    /// candidates still rank.
    pub fn rank<C>(&self, query: &str, collection: &C) -> Ranking
    where
        C: SortKeyed + Sync + ?Sized,
    {
        self.rank_inner(query, collection, None)
    }

    /// Rank with a cancellation token, for search-as-you-type callers.
    ///
    /// Returns [`FilterError::Cancelled`] when the token tripped during the
    /// pass; the partial ranking is discarded.
    pub fn rank_cancellable<C>(
        &self,
        query: &str,
        collection: &C,
        cancel: &CancelToken,
    ) -> Result<Ranking, FilterError>
    where
        C: SortKeyed + Sync + ?Sized,
    {
        let ranking = self.rank_inner(query, collection, Some(cancel));
        if cancel.is_cancelled() {
            return Err(FilterError::Cancelled);
        }
        Ok(ranking)
    }

    /// Rank and select in one call: matching candidates only, best first,
    /// capped at `max_results` (`0` = unbounded).
    pub fn filter<C>(&self, query: &str, collection: &C, max_results: usize) -> Vec<MatchResult>
    where
        C: SortKeyed + Sync + ?Sized,
    {
        select(&self.rank(query, collection), max_results)
    }

    fn rank_inner<C>(&self, query: &str, collection: &C, cancel: Option<&CancelToken>) -> Ranking
    where
        C: SortKeyed + Sync + ?Sized,
    {
        let start = Instant::now();
        let results = self.rank_slots(query, collection, cancel);
        let matched = results.iter().filter(|r| r.matched).count();
        let latency = start.elapsed();

        tracing::debug!(
            candidates = results.len(),
            matched,
            ?latency,
            "ranked collection"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_rank(results.len(), matched, latency);
        }
        results
    }

    fn rank_slots<C>(&self, query: &str, collection: &C, cancel: Option<&CancelToken>) -> Ranking
    where
        C: SortKeyed + Sync + ?Sized,
    {
        let len = collection.len();

        #[cfg(feature = "parallel")]
        if len >= PARALLEL_CUTOVER {
            return (0..len)
                .into_par_iter()
                .map_init(
                    || Scratch::for_query(query),
                    |scratch, index| self.evaluate_slot(scratch, collection, index, cancel),
                )
                .collect();
        }

        let mut scratch = Scratch::for_query(query);
        (0..len)
            .map(|index| self.evaluate_slot(&mut scratch, collection, index, cancel))
            .collect()
    }

    /// Evaluate one candidate into its reserved output slot.
    fn evaluate_slot<C>(
        &self,
        scratch: &mut Scratch,
        collection: &C,
        index: usize,
        cancel: Option<&CancelToken>,
    ) -> MatchResult
    where
        C: SortKeyed + ?Sized,
    {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            // The whole pass is being discarded; skip the DP.
            return MatchResult {
                index,
                score: 0.0,
                matched: false,
            };
        }
        match collection.sort_key(index) {
            Ok(key) => {
                let eval = self.engine.evaluate_key(scratch, &key);
                MatchResult {
                    index,
                    score: if eval.matched { eval.score } else { 0.0 },
                    matched: eval.matched,
                }
            }
            Err(err) => {
                tracing::warn!(index, error = %err, "treating candidate as non-matching");
                MatchResult {
                    index,
                    score: 0.0,
                    matched: false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::collection::KeyError;

    /// Collection whose third key cannot be derived.
    struct FlakyKeys(Vec<&'static str>);

    impl SortKeyed for FlakyKeys {
        fn len(&self) -> usize {
            self.0.len()
        }

        fn sort_key(&self, index: usize) -> Result<Cow<'_, str>, KeyError> {
            if index == 2 {
                return Err(KeyError::new("backing row vanished"));
            }
            Ok(Cow::Borrowed(self.0[index]))
        }
    }

    #[test]
    fn ranking_is_aligned_with_the_collection() {
        let ranker = Ranker::default();
        let items = vec!["alpha", "bravo", "charlie"];
        let ranking = ranker.rank("a", &items);
        assert_eq!(ranking.len(), 3);
        for (i, result) in ranking.iter().enumerate() {
            assert_eq!(result.index, i);
        }
    }

    #[test]
    fn key_failure_degrades_to_non_matching() {
        let ranker = Ranker::default();
        let collection = FlakyKeys(vec!["apple", "apricot", "avocado", "banana"]);
        let ranking = ranker.rank("a", &collection);
        assert_eq!(ranking.len(), 4);
        assert!(ranking[0].matched);
        assert!(ranking[1].matched);
        assert!(!ranking[2].matched, "failed key must read as a miss");
        assert!(ranking[3].matched);
    }

    #[test]
    fn cancelled_pass_reports_cancellation() {
        let ranker = Ranker::default();
        let token = CancelToken::new();
        token.cancel();
        let items = vec!["alpha", "bravo"];
        let result = ranker.rank_cancellable("a", &items, &token);
        assert!(matches!(result, Err(FilterError::Cancelled)));
    }

    #[test]
    fn fresh_token_does_not_cancel() {
        let ranker = Ranker::default();
        let token = CancelToken::new();
        let items = vec!["alpha", "bravo"];
        let ranking = ranker
            .rank_cancellable("a", &items, &token)
            .expect("uncancelled pass should complete");
        assert_eq!(ranking.len(), 2);
    }

    #[test]
    fn filter_chains_rank_and_select() {
        let ranker = Ranker::default();
        let items = vec!["aab", "xyz", "a-b"];
        let hits = ranker.filter("ab", &items, 0);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].index, 2);
        assert_eq!(hits[1].index, 0);
    }
}

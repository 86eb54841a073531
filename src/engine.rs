//! Optimal-alignment evaluation of one query against one sort key.
//!
//! Matching is case-insensitive subsequence matching; scoring explores every
//! placement of the query inside the key and returns the best total under
//! the configured [`ScoreModel`]. A greedy left-to-right scan would pick the
//! first occurrence of each query character and under-score keys with
//! repeated characters (`"ab"` against `"aab"` must match the second `a` to
//! earn the adjacency bonus), so both the skip and consume branches are
//! explored with an O(|query| × |key|) dynamic program.

use crate::score::ScoreModel;
use crate::types::FilterError;

#[cfg(test)]
mod tests;

/// Outcome of evaluating one query against one key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// True iff the query is a case-insensitive subsequence of the key.
    pub matched: bool,
    /// Best alignment score; `0.0` when `matched` is false or the query is
    /// empty.
    pub score: f64,
}

impl Evaluation {
    const MISS: Self = Self {
        matched: false,
        score: 0.0,
    };

    const EMPTY_QUERY: Self = Self {
        matched: true,
        score: 0.0,
    };
}

/// Reusable working memory for [`MatchEngine::evaluate_with`].
///
/// Holds the decoded query, the decoded key, and the four rolled DP rows so
/// repeated evaluations against a hot collection allocate nothing once the
/// buffers have grown to the largest key seen.
#[derive(Debug, Default)]
pub struct Scratch {
    query: Vec<char>,
    key: Vec<char>,
    folded_key: Vec<char>,
    d_prev: Vec<f64>,
    d_cur: Vec<f64>,
    m_prev: Vec<f64>,
    m_cur: Vec<f64>,
}

impl Scratch {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn for_query(query: &str) -> Self {
        let mut scratch = Self::new();
        scratch.load_query(query);
        scratch
    }

    pub(crate) fn load_query(&mut self, query: &str) {
        self.query.clear();
        self.query.extend(query.chars().map(fold_char));
    }
}

/// Evaluates queries against sort keys under an immutable [`ScoreModel`].
///
/// The engine holds no cross-call state; evaluation is a pure function of
/// `(model, query, key)` and identical inputs always produce the identical
/// result.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    model: ScoreModel,
}

impl MatchEngine {
    /// Construct an engine, validating the model invariants.
    pub fn new(model: ScoreModel) -> Result<Self, FilterError> {
        model.validate()?;
        Ok(Self { model })
    }

    /// The weights this engine scores with.
    pub fn model(&self) -> &ScoreModel {
        &self.model
    }

    /// Evaluate with a transient scratch buffer.
    ///
    /// Convenience for one-off calls; interactive filtering over a whole
    /// collection should go through [`crate::rank::Ranker`], which reuses
    /// scratch memory per worker.
    pub fn evaluate(&self, query: &str, key: &str) -> Evaluation {
        let mut scratch = Scratch::for_query(query);
        self.evaluate_key(&mut scratch, key)
    }

    /// Evaluate reusing caller-held working memory.
    pub fn evaluate_with(&self, scratch: &mut Scratch, query: &str, key: &str) -> Evaluation {
        scratch.load_query(query);
        self.evaluate_key(scratch, key)
    }

    /// Evaluate the key against the query already loaded into `scratch`.
    ///
    /// Two-table DP over `(query position, key position)`, rows rolled so
    /// space stays O(|key|). `m[j]` is the best score with the current query
    /// character consumed exactly at key position `j - 1`; `d[j]` is the
    /// best score over all placements within the first `j` key characters,
    /// with every unused key character penalized.
    pub(crate) fn evaluate_key(&self, scratch: &mut Scratch, key: &str) -> Evaluation {
        if scratch.query.is_empty() {
            // Empty query matches everything at score zero, by contract.
            return Evaluation::EMPTY_QUERY;
        }

        let Scratch {
            query,
            key: key_chars,
            folded_key,
            d_prev,
            d_cur,
            m_prev,
            m_cur,
        } = scratch;

        key_chars.clear();
        key_chars.extend(key.chars());
        let n = key_chars.len();
        let m = query.len();
        if m > n {
            // A subsequence cannot be longer than the key; covers the
            // empty-key case.
            return Evaluation::MISS;
        }

        folded_key.clear();
        folded_key.extend(key_chars.iter().copied().map(fold_char));

        let w = &self.model;
        for row in [&mut *d_prev, &mut *d_cur, &mut *m_prev, &mut *m_cur] {
            row.clear();
            row.resize(n + 1, f64::NEG_INFINITY);
        }
        // Row 0: no query consumed yet; every skipped key char is penalized.
        for (j, slot) in d_prev.iter_mut().enumerate() {
            *slot = w.unmatched_letter_penalty * j as f64;
        }

        for i in 1..=m {
            let qc = query[i - 1];
            d_cur[0] = f64::NEG_INFINITY;
            m_cur[0] = f64::NEG_INFINITY;
            for j in 1..=n {
                let mut consumed = f64::NEG_INFINITY;
                if folded_key[j - 1] == qc {
                    // Previous query char either sat exactly at j - 2
                    // (adjacency credit) or anywhere earlier.
                    let best_prev = (m_prev[j - 1] + w.adjacency_bonus).max(d_prev[j - 1]);
                    if best_prev > f64::NEG_INFINITY {
                        consumed = best_prev + self.consume_bonus(key_chars, i, j);
                    }
                }
                m_cur[j] = consumed;
                d_cur[j] = (d_cur[j - 1] + w.unmatched_letter_penalty).max(consumed);
            }
            std::mem::swap(d_prev, d_cur);
            std::mem::swap(m_prev, m_cur);
        }

        let score = d_prev[n];
        if score.is_finite() {
            Evaluation {
                matched: true,
                score,
            }
        } else {
            Evaluation::MISS
        }
    }

    /// Positional bonus for consuming key char `j - 1` as query char `i - 1`.
    #[inline]
    fn consume_bonus(&self, key: &[char], i: usize, j: usize) -> f64 {
        let w = &self.model;
        let mut bonus = 0.0;
        if i == 1 {
            // First query char: accumulated leading penalty for the j - 1
            // key chars before it, capped at the floor.
            bonus += (w.leading_letter_penalty * (j - 1) as f64).max(w.max_leading_letter_penalty);
        }
        if j >= 2 {
            let prev = key[j - 2];
            if key[j - 1].is_uppercase() && prev.is_lowercase() {
                bonus += w.camel_bonus;
            }
            if is_separator(prev) {
                bonus += w.separator_bonus;
            }
        }
        bonus
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self {
            model: ScoreModel::default(),
        }
    }
}

/// Simple per-char case fold, applied identically to query and key.
///
/// Multi-char expansions (ß → ss) collapse to their first scalar so key
/// positions stay stable for the positional bonuses.
#[inline]
fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Word delimiter inside a key: any non-alphanumeric character.
#[inline]
fn is_separator(c: char) -> bool {
    !c.is_alphanumeric()
}

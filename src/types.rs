use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-candidate outcome of ranking a collection against one query.
///
/// `MatchResult` rows are aligned 1:1 with the input collection: the row at
/// position `i` of a [`Ranking`] always carries `index == i`, regardless of
/// whether ranking ran sequentially or on the rayon pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Position of the candidate in the original collection. Stable identity
    /// for mapping back to the caller's data after selection reorders rows.
    pub index: usize,
    /// Alignment score. Meaningful only when `matched` is true; `0.0`
    /// otherwise.
    pub score: f64,
    /// Whether the query is a case-insensitive subsequence of the
    /// candidate's sort key.
    pub matched: bool,
}

/// Ranking of a whole collection: one [`MatchResult`] per candidate, in
/// original collection order.
pub type Ranking = Vec<MatchResult>;

/// Errors produced by the engine and ranker.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The supplied score model violates a construction invariant. Fatal to
    /// the engine instance; never silently corrected.
    #[error("invalid score model: {0}")]
    InvalidModel(String),
    /// An in-flight ranking was abandoned via its cancellation token.
    /// Partial results are discarded by the caller.
    #[error("ranking cancelled")]
    Cancelled,
}

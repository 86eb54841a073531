// Metrics hooks for ranking.
//
// Callers install a global `RankMetrics` implementation via
// [`set_rank_metrics`], then every `Ranker` reports per-call candidate and
// match counts plus wall-clock latency. This keeps instrumentation decoupled
// from any specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for ranking operations.
pub trait RankMetrics: Send + Sync {
    /// Record the outcome of one ranking pass.
    ///
    /// `candidates` is the size of the ranked collection, `matched` the
    /// number of candidates whose key contained the query as a subsequence,
    /// and `latency` the wall-clock duration of the pass.
    fn record_rank(&self, candidates: usize, matched: usize, latency: Duration);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn RankMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn RankMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn RankMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global rank metrics recorder.
///
/// Typically called once during startup so all `Ranker` instances share the
/// same metrics backend.
pub fn set_rank_metrics(recorder: Option<Arc<dyn RankMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

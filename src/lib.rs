//! # fuzzrank
//!
//! ## Purpose
//!
//! `fuzzrank` is a fuzzy subsequence matching and ranking engine for
//! search-as-you-type filtering. Given a short query and a collection that
//! can derive a string sort key per candidate, it decides for every
//! candidate whether the query is a case-insensitive subsequence of the key,
//! scores the best alignment under a configurable set of positional
//! bonuses and penalties, and selects the matching candidates best first.
//!
//! Scoring runs an optimal-alignment search, not a greedy scan: when a query
//! character could land on several key positions, the engine explores both
//! the skip and consume branches so repeated characters pick the placement
//! that maximizes adjacency, camel-case, and separator credit.
//!
//! ## Core Types
//!
//! - [`ScoreModel`]: the six bonus/penalty weights, with defaults.
//! - [`MatchEngine`]: evaluates one query against one key.
//! - [`Ranker`]: ranks a whole collection, one [`MatchResult`] per
//!   candidate in original order; parallel for large collections and
//!   cancellable between candidates.
//! - [`SortKeyed`]: the capability a collection implements to expose a
//!   derived sort key per index.
//! - [`select`] / [`select_from`]: best-first selection of the matching
//!   subset, with stable ties and an optional result cap.
//!
//! ## Example Usage
//!
//! ```
//! use fuzzrank::{Ranker, ScoreModel, select_from};
//!
//! let apps = vec!["Activity Monitor", "Safari", "System Settings"];
//!
//! let ranker = Ranker::new(ScoreModel::default()).expect("default model is valid");
//! let ranking = ranker.rank("ss", &apps);
//! let hits = select_from(&apps, &ranking, 10);
//!
//! assert_eq!(hits.first(), Some(&&"System Settings"));
//! ```
//!
//! ## Observability
//!
//! The ranker emits `tracing` events per pass (and a warning per candidate
//! whose key could not be derived). Install a [`RankMetrics`] implementation
//! via [`set_rank_metrics`] to record per-pass latency and match counts in a
//! metrics backend; this is typically done once during startup.

pub mod collection;
pub mod config;
pub mod engine;
pub mod filter;
pub mod metrics;
pub mod rank;
pub mod score;
pub mod types;

pub use crate::collection::{KeyError, SortKeyed};
pub use crate::config::{ConfigLoadError, EngineConfig, RankerYamlConfig};
pub use crate::engine::{Evaluation, MatchEngine, Scratch};
pub use crate::filter::{select, select_from};
pub use crate::metrics::{RankMetrics, set_rank_metrics};
pub use crate::rank::{CancelToken, Ranker};
pub use crate::score::ScoreModel;
pub use crate::types::{FilterError, MatchResult, Ranking};

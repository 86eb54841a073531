//! Candidate collection capability.
//!
//! Candidates are opaque to the engine: the only requirement is that the
//! collection can derive a string sort key per index. Any data shape can
//! participate by implementing [`SortKeyed`]; slices of string-like values
//! get a blanket implementation.

use std::borrow::Cow;

use thiserror::Error;

/// A single candidate's sort key could not be derived.
///
/// The ranker treats the affected candidate as non-matching and keeps going;
/// the failure is logged for diagnostics but never aborts the ranking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("key derivation failed: {0}")]
pub struct KeyError(pub String);

impl KeyError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Collection of candidates that can derive a sort key per index.
///
/// The sort key is typically a concatenation of the fields a human would
/// search on (name, owner, tags). Keys may be borrowed from the collection
/// or built on the fly; `Cow` covers both without forcing a copy.
///
/// Implementations must be consistent: `sort_key(i)` is called once per
/// ranking pass for every `i < len()`, possibly from multiple rayon workers
/// at once.
pub trait SortKeyed {
    /// Number of candidates in the collection.
    fn len(&self) -> usize;

    /// Whether the collection has no candidates.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Derive the sort key for the candidate at `index`.
    fn sort_key(&self, index: usize) -> Result<Cow<'_, str>, KeyError>;
}

impl<T: AsRef<str>> SortKeyed for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn sort_key(&self, index: usize) -> Result<Cow<'_, str>, KeyError> {
        self.get(index)
            .map(|item| Cow::Borrowed(item.as_ref()))
            .ok_or_else(|| KeyError::new(format!("index {index} out of bounds")))
    }
}

impl<T: AsRef<str>> SortKeyed for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn sort_key(&self, index: usize) -> Result<Cow<'_, str>, KeyError> {
        self.as_slice().sort_key(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_of_strs_derives_keys() {
        let items = ["alpha", "bravo"];
        assert_eq!(SortKeyed::len(&items[..]), 2);
        assert_eq!(items[..].sort_key(1).unwrap(), "bravo");
    }

    #[test]
    fn vec_of_strings_derives_keys() {
        let items = vec!["alpha".to_string(), "bravo".to_string()];
        assert_eq!(SortKeyed::len(&items), 2);
        assert_eq!(items.sort_key(0).unwrap(), "alpha");
        assert!(!items.is_empty());
    }

    #[test]
    fn out_of_bounds_index_is_a_key_error() {
        let items = ["only"];
        let err = items[..].sort_key(3).expect_err("index should be invalid");
        assert!(err.to_string().contains("out of bounds"));
    }
}

//! Scoring weights for the alignment search.
//!
//! A [`ScoreModel`] is an immutable set of six bonus/penalty weights supplied
//! at engine construction. It is designed to be cheap to copy and
//! serde-friendly so it can be embedded in higher-level configs or loaded
//! from the YAML layer in [`crate::config`].

use serde::{Deserialize, Serialize};

use crate::types::FilterError;

/// Bonus and penalty weights applied while scoring an alignment.
///
/// Bonuses reward placements (adjacent runs, word starts); penalties charge
/// for key characters the alignment leaves unused. All six have defaults;
/// override individual fields with struct-update syntax:
///
/// ```
/// use fuzzrank::ScoreModel;
///
/// let model = ScoreModel {
///     separator_bonus: 15.0,
///     max_leading_letter_penalty: -6.0,
///     ..ScoreModel::default()
/// };
/// assert!(model.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreModel {
    /// Reward when a matched character immediately follows the previously
    /// matched character in the key.
    #[serde(default = "ScoreModel::default_adjacency_bonus")]
    pub adjacency_bonus: f64,
    /// Reward when a matched character starts a new word via an uppercase
    /// letter preceded by a lowercase letter.
    #[serde(default = "ScoreModel::default_camel_bonus")]
    pub camel_bonus: f64,
    /// Reward when a matched character immediately follows a separator
    /// (any non-alphanumeric character).
    #[serde(default = "ScoreModel::default_separator_bonus")]
    pub separator_bonus: f64,
    /// Penalty per unmatched key character preceding the first matched
    /// character, accumulated down to `max_leading_letter_penalty`.
    #[serde(default = "ScoreModel::default_leading_letter_penalty")]
    pub leading_letter_penalty: f64,
    /// Floor for the accumulated leading-letter penalty (most negative
    /// value the accumulation may reach).
    #[serde(default = "ScoreModel::default_max_leading_letter_penalty")]
    pub max_leading_letter_penalty: f64,
    /// Penalty per key character not used by the chosen alignment,
    /// including the suffix after the last match.
    #[serde(default = "ScoreModel::default_unmatched_letter_penalty")]
    pub unmatched_letter_penalty: f64,
}

impl ScoreModel {
    pub(crate) fn default_adjacency_bonus() -> f64 {
        5.0
    }

    pub(crate) fn default_camel_bonus() -> f64 {
        10.0
    }

    pub(crate) fn default_separator_bonus() -> f64 {
        10.0
    }

    pub(crate) fn default_leading_letter_penalty() -> f64 {
        -3.0
    }

    pub(crate) fn default_max_leading_letter_penalty() -> f64 {
        -9.0
    }

    pub(crate) fn default_unmatched_letter_penalty() -> f64 {
        -1.0
    }

    /// Validate the construction invariants.
    ///
    /// Every weight must be finite, and the leading-penalty floor must be at
    /// least as negative as a single `leading_letter_penalty` unit.
    pub fn validate(&self) -> Result<(), FilterError> {
        let weights = [
            ("adjacency_bonus", self.adjacency_bonus),
            ("camel_bonus", self.camel_bonus),
            ("separator_bonus", self.separator_bonus),
            ("leading_letter_penalty", self.leading_letter_penalty),
            (
                "max_leading_letter_penalty",
                self.max_leading_letter_penalty,
            ),
            ("unmatched_letter_penalty", self.unmatched_letter_penalty),
        ];
        for (name, value) in weights {
            if !value.is_finite() {
                return Err(FilterError::InvalidModel(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.max_leading_letter_penalty > self.leading_letter_penalty {
            return Err(FilterError::InvalidModel(format!(
                "max_leading_letter_penalty ({}) must not be weaker than \
                 leading_letter_penalty ({})",
                self.max_leading_letter_penalty, self.leading_letter_penalty
            )));
        }
        Ok(())
    }
}

impl Default for ScoreModel {
    fn default() -> Self {
        Self {
            adjacency_bonus: Self::default_adjacency_bonus(),
            camel_bonus: Self::default_camel_bonus(),
            separator_bonus: Self::default_separator_bonus(),
            leading_letter_penalty: Self::default_leading_letter_penalty(),
            max_leading_letter_penalty: Self::default_max_leading_letter_penalty(),
            unmatched_letter_penalty: Self::default_unmatched_letter_penalty(),
        }
    }
}

//! YAML configuration file support.
//!
//! Lets hosts define the scoring weights and ranker knobs in a single YAML
//! file and load them at startup instead of hard-coding a [`ScoreModel`].
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # fuzzrank engine configuration
//! version: "1.0"
//! name: "launcher search"
//!
//! weights:
//!   adjacency_bonus: 5.0
//!   camel_bonus: 10.0
//!   separator_bonus: 15.0
//!   leading_letter_penalty: -3.0
//!   max_leading_letter_penalty: -6.0
//!   unmatched_letter_penalty: -1.0
//!
//! ranker:
//!   max_results: 200
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::score::ScoreModel;

/// Errors that can occur when loading YAML configuration files.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EngineConfig {
    /// Configuration format version.
    pub version: String,

    /// Optional configuration name/description.
    #[serde(default)]
    pub name: Option<String>,

    /// Scoring weights; omitted fields fall back to the model defaults.
    #[serde(default)]
    pub weights: ScoreModel,

    /// Ranker configuration.
    #[serde(default)]
    pub ranker: RankerYamlConfig,
}

impl EngineConfig {
    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: EngineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.weights
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            weights: ScoreModel::default(),
            ranker: RankerYamlConfig::default(),
        }
    }
}

/// Ranker section of the YAML configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankerYamlConfig {
    /// Result cap applied after sorting; `0` means unbounded.
    #[serde(default)]
    pub max_results: usize,

    /// Whether large collections may rank on the rayon pool. Has no effect
    /// when the crate is built without the `parallel` feature.
    #[serde(default = "true_value")]
    pub parallel: bool,
}

impl Default for RankerYamlConfig {
    fn default() -> Self {
        Self {
            max_results: 0,
            parallel: true,
        }
    }
}

// Helper for serde defaults
fn true_value() -> bool {
    true
}

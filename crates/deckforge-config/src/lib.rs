//! Configuration system for DeckForge.
//!
//! Load recommender configuration from TOML or YAML files to control
//! search depth, pruning, and diversification without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use deckforge_config::RecommenderConfig;
//!
//! let config = RecommenderConfig::from_toml_str(r#"
//!     decks_to_generate = 4
//!     decks_to_return = 3
//!
//!     [pruning]
//!     enabled = true
//!     beam_width = 100
//!
//!     [diversity]
//!     enabled = true
//! "#).unwrap();
//!
//! assert_eq!(config.decks_to_return, 3);
//! assert_eq!(config.beam_width(), Some(100));
//! ```
//!
//! Use the default config when no file is present:
//!
//! ```
//! use deckforge_config::RecommenderConfig;
//!
//! let config = RecommenderConfig::load("recommender.toml").unwrap_or_default();
//! // Proceeds with defaults if the file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Maximum number of deck-sets a caller may request.
pub const MAX_DECKS_TO_RETURN: usize = 20;

/// Maximum number of decks per generated set.
pub const MAX_DECKS_TO_GENERATE: usize = 4;

/// Main recommender configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RecommenderConfig {
    /// Number of decks assembled into each set (search stages), 1–4.
    #[serde(default = "default_decks_to_generate")]
    pub decks_to_generate: usize,

    /// Number of ranked deck-sets to return, 1–20.
    #[serde(default = "default_decks_to_return")]
    pub decks_to_return: usize,

    /// Beam pruning between search stages.
    #[serde(default)]
    pub pruning: PruningConfig,

    /// Diversification of the returned deck-sets.
    #[serde(default)]
    pub diversity: DiversityConfig,
}

fn default_decks_to_generate() -> usize {
    4
}

fn default_decks_to_return() -> usize {
    5
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        RecommenderConfig {
            decks_to_generate: default_decks_to_generate(),
            decks_to_return: default_decks_to_return(),
            pruning: PruningConfig::default(),
            diversity: DiversityConfig::default(),
        }
    }
}

impl RecommenderConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the number of decks per generated set.
    pub fn with_decks_to_generate(mut self, decks_to_generate: usize) -> Self {
        self.decks_to_generate = decks_to_generate;
        self
    }

    /// Sets the number of deck-sets to return.
    pub fn with_decks_to_return(mut self, decks_to_return: usize) -> Self {
        self.decks_to_return = decks_to_return;
        self
    }

    /// Enables beam pruning with the given width.
    pub fn with_beam_width(mut self, beam_width: usize) -> Self {
        self.pruning = PruningConfig {
            enabled: true,
            beam_width,
        };
        self
    }

    /// Disables beam pruning (exhaustive search).
    pub fn without_pruning(mut self) -> Self {
        self.pruning.enabled = false;
        self
    }

    /// Enables diversification with the given pairwise overlap limit.
    pub fn with_diversity(mut self, overlap_limit: usize) -> Self {
        self.diversity = DiversityConfig {
            enabled: true,
            overlap_limit,
        };
        self
    }

    /// Returns the beam width when pruning is enabled.
    pub fn beam_width(&self) -> Option<usize> {
        self.pruning.enabled.then_some(self.pruning.beam_width)
    }

    /// Returns the overlap limit when diversification is enabled.
    pub fn overlap_limit(&self) -> Option<usize> {
        self.diversity.enabled.then_some(self.diversity.overlap_limit)
    }

    /// Checks the configured values against their allowed ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decks_to_generate == 0 || self.decks_to_generate > MAX_DECKS_TO_GENERATE {
            return Err(ConfigError::Invalid(format!(
                "decks_to_generate must be between 1 and {MAX_DECKS_TO_GENERATE}, got {}",
                self.decks_to_generate
            )));
        }
        if self.decks_to_return == 0 || self.decks_to_return > MAX_DECKS_TO_RETURN {
            return Err(ConfigError::Invalid(format!(
                "decks_to_return must be between 1 and {MAX_DECKS_TO_RETURN}, got {}",
                self.decks_to_return
            )));
        }
        if self.pruning.enabled && self.pruning.beam_width == 0 {
            return Err(ConfigError::Invalid(
                "beam_width must be at least 1 when pruning is enabled".to_string(),
            ));
        }
        Ok(())
    }
}

/// Beam pruning configuration.
///
/// When enabled, only the top `beam_width` partial deck-sets by score
/// survive between search stages. Disabled pruning keeps every
/// positive-score partial set — exhaustive but combinatorially expensive
/// on large catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PruningConfig {
    /// Whether beam pruning is applied between stages.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Number of top partial sets retained between stages.
    #[serde(default = "default_beam_width")]
    pub beam_width: usize,
}

fn default_true() -> bool {
    true
}

fn default_beam_width() -> usize {
    150
}

impl Default for PruningConfig {
    fn default() -> Self {
        PruningConfig {
            enabled: true,
            beam_width: default_beam_width(),
        }
    }
}

/// Diversification configuration.
///
/// When enabled, a candidate deck-set is rejected if it shares more than
/// `overlap_limit` cards with an already-accepted set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DiversityConfig {
    /// Whether returned deck-sets are diversified.
    #[serde(default)]
    pub enabled: bool,

    /// Maximum cards two accepted deck-sets may share.
    #[serde(default = "default_overlap_limit")]
    pub overlap_limit: usize,
}

fn default_overlap_limit() -> usize {
    23
}

impl Default for DiversityConfig {
    fn default() -> Self {
        DiversityConfig {
            enabled: false,
            overlap_limit: default_overlap_limit(),
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;

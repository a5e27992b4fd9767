//! Configuration system for MineForge.
//!
//! Load enumerator configuration from TOML or YAML files to control guards,
//! threading and output shaping without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use mineforge_config::{EnumerationConfig, LayerThreadCount};
//! use std::time::Duration;
//!
//! let config = EnumerationConfig::from_toml_str(r#"
//!     node_limit = 1000000
//!     layer_thread_count = "none"
//!
//!     [termination]
//!     seconds_spent_limit = 5
//! "#).unwrap();
//!
//! assert_eq!(config.node_limit, Some(1_000_000));
//! assert_eq!(config.layer_thread_count, LayerThreadCount::None);
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(5)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use mineforge_config::EnumerationConfig;
//!
//! let config = EnumerationConfig::load("mineforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Frontier width below which `Auto` threading stays sequential.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

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

/// Main enumerator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EnumerationConfig {
    /// Maximum number of branches ever created (None = unlimited).
    ///
    /// Checked after each layer is bounded, so the count reported on abort
    /// may exceed the limit by up to one layer's worth of siblings.
    #[serde(default)]
    pub node_limit: Option<u64>,

    /// Deadline configuration.
    ///
    /// Observed between layers only; one wide layer can run past it.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,

    /// Threads used to compute bounds within one layer.
    #[serde(default)]
    pub layer_thread_count: LayerThreadCount,

    /// Minimum frontier width before `Auto` threading fans out.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,

    /// Sort emitted configurations lexicographically.
    #[serde(default = "default_true")]
    pub sort_output: bool,

    /// Enumerate independent islands separately and combine the results.
    #[serde(default)]
    pub split_islands: bool,
}

fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

fn default_true() -> bool {
    true
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            node_limit: None,
            termination: None,
            layer_thread_count: LayerThreadCount::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            sort_output: true,
            split_islands: false,
        }
    }
}

impl EnumerationConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
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
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings that cannot be honored.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layer_thread_count == LayerThreadCount::Count(0) {
            return Err(ConfigError::Invalid(
                "layer_thread_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the node limit.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Sets the deadline in seconds.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the deadline in milliseconds.
    pub fn with_termination_millis(mut self, millis: u64) -> Self {
        self.termination = Some(TerminationConfig {
            millis_spent_limit: Some(millis),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the layer thread count.
    pub fn with_layer_thread_count(mut self, count: LayerThreadCount) -> Self {
        self.layer_thread_count = count;
        self
    }

    /// Sets the parallel threshold.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Enables or disables sorted output.
    pub fn with_sort_output(mut self, sort: bool) -> Self {
        self.sort_output = sort;
        self
    }

    /// Enables or disables island splitting.
    pub fn with_split_islands(mut self, split: bool) -> Self {
        self.split_islands = split;
        self
    }

    /// Returns the deadline, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }
}

/// Thread count for per-layer bound computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerThreadCount {
    /// Use the global rayon pool once the frontier reaches the threshold.
    #[default]
    Auto,

    /// Always sequential.
    None,

    /// Dedicated pool with a specific number of threads.
    Count(usize),
}

/// Deadline configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend enumerating.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend enumerating.
    pub millis_spent_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the combined limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let millis = self
            .seconds_spent_limit
            .unwrap_or(0)
            .saturating_mul(1000)
            .saturating_add(self.millis_spent_limit.unwrap_or(0));
        if millis > 0 {
            Some(Duration::from_millis(millis))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests;

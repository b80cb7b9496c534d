//! Configuration system for AllocForge.
//!
//! Load allocator configuration from TOML or YAML files to control the
//! tie-break policy, post-condition checking, and batch parallelism without
//! code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use allocforge_config::{AllocatorConfig, BatchThreadCount, TieBreak};
//!
//! let config = AllocatorConfig::from_toml_str(r#"
//!     tie_break = "heavier_first"
//!     environment_mode = "full_assert"
//!     batch_thread_count = { count = 4 }
//! "#).unwrap();
//!
//! assert_eq!(config.tie_break, TieBreak::HeavierFirst);
//! assert_eq!(config.batch_thread_count, BatchThreadCount::Count(4));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use allocforge_config::AllocatorConfig;
//!
//! let config = AllocatorConfig::load("allocforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name the CLI looks for when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "allocforge.toml";

/// Default relative tolerance for post-condition checks.
pub const DEFAULT_ASSERT_TOLERANCE: f64 = 1e-9;

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

/// Main allocator configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AllocatorConfig {
    /// Ordering applied to items with exactly equal value-density.
    #[serde(default)]
    pub tie_break: TieBreak,

    /// Environment mode controlling post-condition checks.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Relative tolerance used by post-condition checks.
    #[serde(default = "default_assert_tolerance")]
    pub assert_tolerance: f64,

    /// Number of threads for batch allocation.
    #[serde(default)]
    pub batch_thread_count: BatchThreadCount,
}

fn default_assert_tolerance() -> f64 {
    DEFAULT_ASSERT_TOLERANCE
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::default(),
            environment_mode: EnvironmentMode::default(),
            assert_tolerance: DEFAULT_ASSERT_TOLERANCE,
            batch_thread_count: BatchThreadCount::default(),
        }
    }
}

impl AllocatorConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a file, picking the format by extension.
    ///
    /// `.yaml` and `.yml` are read as YAML; anything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
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

    /// Checks values serde cannot express as types.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.assert_tolerance.is_finite() || self.assert_tolerance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "assert_tolerance must be a finite non-negative number, got {}",
                self.assert_tolerance
            )));
        }
        if self.batch_thread_count == BatchThreadCount::Count(0) {
            return Err(ConfigError::Invalid(
                "batch_thread_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the tie-break policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Sets the post-condition tolerance.
    pub fn with_assert_tolerance(mut self, tolerance: f64) -> Self {
        self.assert_tolerance = tolerance;
        self
    }

    /// Sets the batch thread count.
    pub fn with_batch_thread_count(mut self, count: BatchThreadCount) -> Self {
        self.batch_thread_count = count;
        self
    }

    /// Returns `true` if post-conditions are checked after each allocation.
    pub fn is_asserted(&self) -> bool {
        self.environment_mode == EnvironmentMode::FullAssert
    }
}

/// Ordering among items whose value-density is exactly equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep input order (stable sort).
    #[default]
    InputOrder,

    /// Prefer higher weight, then higher value, then input order.
    HeavierFirst,
}

/// Environment mode affecting allocator checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// No post-condition checks.
    #[default]
    NonAsserted,

    /// Re-check every post-condition after each allocation.
    FullAssert,
}

/// Batch thread count configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchThreadCount {
    /// Use the global rayon pool.
    #[default]
    Auto,

    /// Allocate sequentially on the calling thread.
    None,

    /// Dedicated pool with a specific number of threads.
    Count(usize),
}

#[cfg(test)]
mod tests;

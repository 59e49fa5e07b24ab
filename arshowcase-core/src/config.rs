//! Runtime configuration for the showcase
//!
//! All fields have defaults, so an empty JSON object is a valid
//! configuration. Thresholds are expressed in MiB.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Error, Result};

/// Which entry becomes active after the active entry is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReassignPolicy {
    /// First remaining entry in insertion order
    #[default]
    First,
    /// Entry that preceded the removed one, or the new first entry
    Previous,
    /// Most recently inserted remaining entry
    Last,
}

/// Upload size guidance bands, in MiB
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeLimits {
    /// Uploads at or below this size are comfortable
    pub caution_mib: f64,
    /// Uploads above this size get a strong warning
    pub blocking_mib: f64,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            caution_mib: 10.0,
            blocking_mib: 50.0,
        }
    }
}

/// Top-level showcase configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub size_limits: SizeLimits,
    /// Label used when a source carries no usable name
    pub default_model_name: String,
    pub reassign_policy: ReassignPolicy,
    /// Number of diagnostic messages kept on screen
    pub diagnostic_capacity: usize,
    /// Environment preset applied to a fresh viewer
    pub default_environment: String,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            size_limits: SizeLimits::default(),
            default_model_name: "Untitled model".to_string(),
            reassign_policy: ReassignPolicy::First,
            diagnostic_capacity: 5,
            default_environment: "Blank".to_string(),
        }
    }
}

impl ShowcaseConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ShowcaseConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check the invariants serde cannot express
    pub fn validate(&self) -> Result<()> {
        let limits = &self.size_limits;
        let positive = |mib: f64| mib.is_finite() && mib > 0.0;
        if !positive(limits.caution_mib) || !positive(limits.blocking_mib) {
            return Err(Error::Config("size limits must be positive".to_string()));
        }
        if limits.caution_mib > limits.blocking_mib {
            return Err(Error::Config(format!(
                "caution limit {} MiB exceeds blocking limit {} MiB",
                limits.caution_mib, limits.blocking_mib
            )));
        }
        if self.default_model_name.trim().is_empty() {
            return Err(Error::Config("default model name must not be blank".to_string()));
        }
        if self.diagnostic_capacity == 0 {
            return Err(Error::Config("diagnostic capacity must be at least 1".to_string()));
        }
        Ok(())
    }
}

//! Evaluation configuration.
//!
//! Every tunable table and threshold of the pipeline lives here. The default
//! configuration reproduces the built-in behaviour exactly; a config file only
//! needs to name the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::confidence::{SourceWeights, HIGH_CONFIDENCE_THRESHOLD};
use crate::depth::DepthThresholds;
use crate::error::ConfigError;

/// Tunables for a [`Coordinator`](crate::coordinator::Coordinator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Base reliability weight per source type.
    pub weights: SourceWeights,
    /// Minimum base weight for a high-confidence source.
    pub high_confidence_threshold: f32,
    /// Depth-selection thresholds.
    pub depth: DepthThresholds,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            weights: SourceWeights::default(),
            high_confidence_threshold: HIGH_CONFIDENCE_THRESHOLD,
            depth: DepthThresholds::default(),
        }
    }
}

fn check_unit(name: &str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::InvalidThreshold {
            name: name.to_string(),
            reason: format!("{value} is out of range [0.0, 1.0]"),
        });
    }
    Ok(())
}

impl EvaluationConfig {
    /// Parses and validates a JSON config.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Malformed` for invalid JSON, or the first
    /// validation failure.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s).map_err(|e| ConfigError::Malformed {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`EvaluationConfig::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&raw)
    }

    /// Checks ranges and threshold ordering.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (source_type, weight) in self.weights.iter() {
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(ConfigError::InvalidWeight {
                    source_type: source_type.to_string(),
                    weight,
                });
            }
        }

        check_unit("high_confidence_threshold", self.high_confidence_threshold)?;

        let d = &self.depth;
        if d.moderate_factor_count > d.deep_factor_count {
            return Err(ConfigError::InvalidThreshold {
                name: "depth.moderate_factor_count".to_string(),
                reason: format!(
                    "{} exceeds depth.deep_factor_count ({})",
                    d.moderate_factor_count, d.deep_factor_count
                ),
            });
        }
        if d.medium_token_min >= d.long_token_min {
            return Err(ConfigError::InvalidThreshold {
                name: "depth.medium_token_min".to_string(),
                reason: format!(
                    "{} must be below depth.long_token_min ({})",
                    d.medium_token_min, d.long_token_min
                ),
            });
        }
        Ok(())
    }
}

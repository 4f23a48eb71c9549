//! Source-reliability confidence scoring.
//!
//! The confidence of an evidence base is the mean reliability weight of its
//! sources. Weights come from a fixed per-type table; a source type never
//! carries a weight of its own.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::EvaluationConfig;
use crate::error::{KyroEvalError, KyroEvalResult};
use crate::source::{Source, SourceType};

/// Built-in reliability weight per source type.
pub const DEFAULT_WEIGHTS: [(SourceType, f32); 5] = [
    (SourceType::Academic, 1.0),
    (SourceType::Primary, 0.9),
    (SourceType::News, 0.6),
    (SourceType::Blog, 0.3),
    (SourceType::Other, 0.2),
];

/// Minimum base weight for a source to count as high-confidence.
pub const HIGH_CONFIDENCE_THRESHOLD: f32 = 0.6;

fn default_weight(source_type: SourceType) -> f32 {
    DEFAULT_WEIGHTS
        .iter()
        .find(|(t, _)| *t == source_type)
        .map_or(0.0, |(_, w)| *w)
}

/// Mapping from source type to base reliability weight.
///
/// Types missing from a configured table fall back to [`DEFAULT_WEIGHTS`],
/// so a config file only needs to name the weights it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceWeights(BTreeMap<SourceType, f32>);

impl Default for SourceWeights {
    fn default() -> Self {
        Self(DEFAULT_WEIGHTS.into_iter().collect())
    }
}

impl SourceWeights {
    /// Creates the built-in table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the weight for one source type.
    #[must_use]
    pub fn with_weight(mut self, source_type: SourceType, weight: f32) -> Self {
        self.0.insert(source_type, weight);
        self
    }

    /// Returns the base weight for a source type.
    ///
    /// A non-finite stored weight is ignored in favour of the built-in default.
    #[must_use]
    pub fn weight(&self, source_type: SourceType) -> f32 {
        match self.0.get(&source_type).copied() {
            Some(w) if w.is_finite() => w,
            Some(w) => {
                tracing::warn!(
                    source_type = source_type.as_str(),
                    weight = w,
                    "non-finite source weight; using default"
                );
                default_weight(source_type)
            }
            None => default_weight(source_type),
        }
    }

    /// Iterates over explicitly configured entries.
    pub fn iter(&self) -> impl Iterator<Item = (SourceType, f32)> + '_ {
        self.0.iter().map(|(t, w)| (*t, *w))
    }
}

/// Weight assigned to one source during scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedSource {
    /// Source label.
    pub name: String,
    /// Source type.
    pub source_type: SourceType,
    /// Base weight looked up for the type.
    pub weight: f32,
}

/// Confidence score together with how it was computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceAssessment {
    value: f32,
    sources: Vec<WeightedSource>,
    high_confidence_count: usize,
}

impl ConfidenceAssessment {
    /// The clamped confidence in [0.0, 1.0].
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.value
    }

    /// Per-source weights, in input order.
    #[must_use]
    pub fn sources(&self) -> &[WeightedSource] {
        &self.sources
    }

    /// Number of sources at or above the high-confidence threshold.
    #[must_use]
    pub const fn high_confidence_count(&self) -> usize {
        self.high_confidence_count
    }
}

/// Computes a weighted reliability score from source metadata.
#[derive(Debug, Clone)]
pub struct ConfidenceScorer {
    weights: SourceWeights,
    high_confidence_threshold: f32,
}

impl Default for ConfidenceScorer {
    fn default() -> Self {
        Self::new(SourceWeights::default())
    }
}

impl ConfidenceScorer {
    /// Creates a scorer over the given weight table.
    #[must_use]
    pub fn new(weights: SourceWeights) -> Self {
        Self {
            weights,
            high_confidence_threshold: HIGH_CONFIDENCE_THRESHOLD,
        }
    }

    /// Creates a scorer from a validated config.
    #[must_use]
    pub fn from_config(config: &EvaluationConfig) -> Self {
        Self {
            weights: config.weights.clone(),
            high_confidence_threshold: config.high_confidence_threshold,
        }
    }

    /// The weight table in use.
    #[must_use]
    pub const fn weights(&self) -> &SourceWeights {
        &self.weights
    }

    /// Scores the evidence base and reports per-source weights.
    ///
    /// # Errors
    ///
    /// Returns `KyroEvalError::InsufficientData` if `sources` is empty: an
    /// empty evidence base has no defined confidence.
    #[allow(clippy::cast_precision_loss)]
    pub fn assess(&self, sources: &[Source]) -> KyroEvalResult<ConfidenceAssessment> {
        if sources.is_empty() {
            return Err(KyroEvalError::insufficient_data(
                "no sources to score; confidence is undefined",
            ));
        }

        let weighted: Vec<WeightedSource> = sources
            .iter()
            .map(|s| WeightedSource {
                name: s.name.clone(),
                source_type: s.source_type,
                weight: self.weights.weight(s.source_type),
            })
            .collect();

        let total: f32 = weighted.iter().map(|w| w.weight).sum();
        let mean = total / weighted.len() as f32;
        let value = mean.clamp(0.0, 1.0);
        if (value - mean).abs() > f32::EPSILON {
            tracing::warn!(mean, clamped = value, "confidence mean outside [0, 1]; clamped");
        }

        let high_confidence_count = weighted
            .iter()
            .filter(|w| w.weight >= self.high_confidence_threshold)
            .count();

        tracing::debug!(
            sources = weighted.len(),
            high_confidence = high_confidence_count,
            confidence = value,
            "scored evidence base"
        );

        Ok(ConfidenceAssessment {
            value,
            sources: weighted,
            high_confidence_count,
        })
    }

    /// Scores the evidence base.
    ///
    /// # Errors
    ///
    /// Returns `KyroEvalError::InsufficientData` if `sources` is empty.
    pub fn score(&self, sources: &[Source]) -> KyroEvalResult<f32> {
        self.assess(sources).map(|a| a.value())
    }
}

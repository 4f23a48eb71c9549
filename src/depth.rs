//! Analysis-depth selection.
//!
//! Maps the complexity of a query to how deeply it should be analysed.
//! Complexity has two signals: how many distinct complexity factors the query
//! carries, and how long its text is.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::EvaluationConfig;
use crate::query::Query;

/// How deeply a query should be analysed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    /// Quick pass.
    Light,
    /// Standard analysis.
    Moderate,
    /// Full analysis.
    Deep,
}

impl AnalysisMode {
    /// Returns the stable snake_case tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Deep => "deep",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length class of the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenBucket {
    /// Fewer than 10 tokens (by default).
    Short,
    /// 10 to 30 tokens (by default).
    Medium,
    /// More than 30 tokens (by default).
    Long,
}

/// Thresholds driving [`DepthSelector`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepthThresholds {
    /// Factor count at which a query is analysed deeply.
    pub deep_factor_count: usize,
    /// Factor count at which a query is analysed moderately.
    pub moderate_factor_count: usize,
    /// Smallest token count in the medium bucket.
    pub medium_token_min: usize,
    /// Smallest token count in the long bucket.
    pub long_token_min: usize,
}

impl Default for DepthThresholds {
    fn default() -> Self {
        Self {
            deep_factor_count: 3,
            moderate_factor_count: 1,
            medium_token_min: 10,
            long_token_min: 31,
        }
    }
}

impl DepthThresholds {
    /// Buckets a token count.
    #[must_use]
    pub const fn bucket(&self, token_count: usize) -> TokenBucket {
        if token_count >= self.long_token_min {
            TokenBucket::Long
        } else if token_count >= self.medium_token_min {
            TokenBucket::Medium
        } else {
            TokenBucket::Short
        }
    }
}

/// The complexity signals extracted from a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexitySignal {
    /// Distinct non-blank complexity factors.
    pub factor_count: usize,
    /// Whitespace tokens in the query text.
    pub token_count: usize,
    /// Length class of the text.
    pub bucket: TokenBucket,
}

/// Chooses an [`AnalysisMode`] from query complexity.
#[derive(Debug, Clone, Default)]
pub struct DepthSelector {
    thresholds: DepthThresholds,
}

impl DepthSelector {
    /// Creates a selector with the given thresholds.
    #[must_use]
    pub const fn new(thresholds: DepthThresholds) -> Self {
        Self { thresholds }
    }

    /// Creates a selector from a validated config.
    #[must_use]
    pub fn from_config(config: &EvaluationConfig) -> Self {
        Self::new(config.depth.clone())
    }

    /// Extracts the complexity signals of a query.
    #[must_use]
    pub fn complexity(&self, query: &Query) -> ComplexitySignal {
        let token_count = query.token_count();
        ComplexitySignal {
            factor_count: query.distinct_factor_count(),
            token_count,
            bucket: self.thresholds.bucket(token_count),
        }
    }

    /// Selects the analysis mode for already-extracted complexity signals.
    ///
    /// Rules are checked in order and the first match wins:
    /// 1. enough factors for deep, or long text → `Deep`
    /// 2. any factor, or medium text → `Moderate`
    /// 3. otherwise → `Light`
    #[must_use]
    pub fn mode_for(&self, signal: &ComplexitySignal) -> AnalysisMode {
        let t = &self.thresholds;

        let mode = if signal.factor_count >= t.deep_factor_count
            || signal.bucket == TokenBucket::Long
        {
            AnalysisMode::Deep
        } else if signal.factor_count >= t.moderate_factor_count
            || signal.bucket == TokenBucket::Medium
        {
            AnalysisMode::Moderate
        } else {
            AnalysisMode::Light
        };

        tracing::debug!(
            factors = signal.factor_count,
            tokens = signal.token_count,
            bucket = ?signal.bucket,
            mode = mode.as_str(),
            "selected analysis depth"
        );
        mode
    }

    /// Selects the analysis mode for a query.
    #[must_use]
    pub fn select_mode(&self, query: &Query) -> AnalysisMode {
        self.mode_for(&self.complexity(query))
    }
}

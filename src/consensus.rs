//! Consensus evaluation.
//!
//! Classifies how high-confidence sources line up on the claim under test.
//! Low-confidence sources never influence the verdict, and any dispute among
//! high-confidence sources blocks a consensus regardless of how many sources
//! support the claim.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::confidence::{SourceWeights, HIGH_CONFIDENCE_THRESHOLD};
use crate::config::EvaluationConfig;
use crate::source::{ClaimSupport, Source};

/// Verdict on whether strong sources agree with the claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsensusVerdict {
    /// High-confidence sources unanimously support the claim.
    Consensus,
    /// High-confidence sources disagree, or none support the claim.
    NoConsensus,
    /// No high-confidence source takes a position.
    InsufficientData,
}

impl ConsensusVerdict {
    /// Returns the stable snake_case tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Consensus => "consensus",
            Self::NoConsensus => "no_consensus",
            Self::InsufficientData => "insufficient_data",
        }
    }
}

impl fmt::Display for ConsensusVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stance counts among high-confidence sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportTally {
    /// High-confidence sources supporting the claim.
    pub supports: usize,
    /// High-confidence sources disputing the claim.
    pub disputes: usize,
    /// High-confidence sources taking no position.
    pub neutral: usize,
    /// Sources below the high-confidence threshold.
    pub excluded: usize,
}

impl SupportTally {
    /// Number of high-confidence sources.
    #[must_use]
    pub const fn high_confidence(&self) -> usize {
        self.supports + self.disputes + self.neutral
    }

    /// Share of supporting sources among high-confidence sources that take a
    /// position, or `None` if none do.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn support_ratio(&self) -> Option<f32> {
        let stances = self.supports + self.disputes;
        if stances == 0 {
            None
        } else {
            Some(self.supports as f32 / stances as f32)
        }
    }

    /// Classifies the tally.
    #[must_use]
    pub const fn verdict(&self) -> ConsensusVerdict {
        match (self.supports, self.disputes) {
            (0, 0) => ConsensusVerdict::InsufficientData,
            (_, 0) => ConsensusVerdict::Consensus,
            _ => ConsensusVerdict::NoConsensus,
        }
    }
}

/// Classifies claim agreement against confidence-weighted sources.
#[derive(Debug, Clone)]
pub struct ConsensusEvaluator {
    weights: SourceWeights,
    threshold: f32,
}

impl Default for ConsensusEvaluator {
    fn default() -> Self {
        Self::new(SourceWeights::default(), HIGH_CONFIDENCE_THRESHOLD)
    }
}

impl ConsensusEvaluator {
    /// Creates an evaluator over the given weight table and high-confidence threshold.
    #[must_use]
    pub fn new(weights: SourceWeights, threshold: f32) -> Self {
        Self { weights, threshold }
    }

    /// Creates an evaluator from a validated config.
    #[must_use]
    pub fn from_config(config: &EvaluationConfig) -> Self {
        Self::new(config.weights.clone(), config.high_confidence_threshold)
    }

    /// Returns true if the source's base weight reaches the threshold.
    #[must_use]
    pub fn is_high_confidence(&self, source: &Source) -> bool {
        self.weights.weight(source.source_type) >= self.threshold
    }

    /// Partitions sources by stance, counting only high-confidence ones.
    #[must_use]
    pub fn tally(&self, sources: &[Source]) -> SupportTally {
        sources.iter().fold(SupportTally::default(), |mut tally, s| {
            if !self.is_high_confidence(s) {
                tally.excluded += 1;
                return tally;
            }
            match s.claim_support {
                ClaimSupport::Supports => tally.supports += 1,
                ClaimSupport::Disputes => tally.disputes += 1,
                ClaimSupport::Neutral => tally.neutral += 1,
            }
            tally
        })
    }

    /// Classifies an already-computed tally.
    ///
    /// `confidence` is the overall evidence score. It does not change the
    /// verdict: without high-confidence sources the result is
    /// `InsufficientData` however high the overall score is.
    #[must_use]
    pub fn verdict_for(&self, tally: &SupportTally, confidence: f32) -> ConsensusVerdict {
        let verdict = tally.verdict();
        tracing::debug!(
            supports = tally.supports,
            disputes = tally.disputes,
            neutral = tally.neutral,
            excluded = tally.excluded,
            confidence,
            verdict = verdict.as_str(),
            "evaluated consensus"
        );
        verdict
    }

    /// Evaluates consensus among high-confidence sources.
    #[must_use]
    pub fn evaluate(&self, sources: &[Source], confidence: f32) -> ConsensusVerdict {
        self.verdict_for(&self.tally(sources), confidence)
    }
}

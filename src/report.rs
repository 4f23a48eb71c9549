//! Evaluation results and audited run reports.
//!
//! [`EvaluationResult`] carries the four judgments of a run.
//! [`EvaluationReport`] wraps a result with an identity, a timestamp, a
//! digest of the input it was computed from, and the intermediate signals
//! each stage produced, so a run can be audited or reproduced later.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::confidence::ConfidenceAssessment;
use crate::consensus::{ConsensusVerdict, SupportTally};
use crate::depth::{AnalysisMode, ComplexitySignal};

/// The four judgments produced for one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Confidence of the evidence base, in [0.0, 1.0].
    pub confidence: f32,
    /// Selected analysis depth.
    pub mode: AnalysisMode,
    /// Consensus among high-confidence sources.
    pub consensus: ConsensusVerdict,
    /// Natural-language conclusion.
    pub conclusion: String,
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confidence Score: {:.2}", self.confidence)?;
        writeln!(f, "Analysis Mode: {}", self.mode)?;
        writeln!(f, "Consensus Status: {}", self.consensus)?;
        write!(f, "Conclusion: {}", self.conclusion)
    }
}

/// Unique identifier for an evaluation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvaluationId(Uuid);

impl EvaluationId {
    /// Creates a new random evaluation ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EvaluationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EvaluationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// blake3 digest of an input's canonical JSON, hex encoded.
#[must_use]
pub fn input_digest(canonical_json: &str) -> String {
    blake3::hash(canonical_json.as_bytes()).to_hex().to_string()
}

/// An auditable record of one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Run identity.
    pub id: EvaluationId,
    /// When the run completed.
    pub evaluated_at: DateTime<Utc>,
    /// Digest of the canonical input; equal inputs give equal digests.
    pub input_digest: String,
    /// The judgments.
    pub result: EvaluationResult,
    /// How the confidence score was computed.
    pub confidence: ConfidenceAssessment,
    /// Complexity signals behind the analysis mode.
    pub complexity: ComplexitySignal,
    /// Stance counts behind the consensus verdict.
    pub tally: SupportTally,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_all_four_judgments() {
        let result = EvaluationResult {
            confidence: 0.65,
            mode: AnalysisMode::Moderate,
            consensus: ConsensusVerdict::NoConsensus,
            conclusion: "Data suggests X possibly".to_string(),
        };
        let text = result.to_string();
        assert!(text.contains("Confidence Score: 0.65"));
        assert!(text.contains("Analysis Mode: moderate"));
        assert!(text.contains("Consensus Status: no_consensus"));
        assert!(text.ends_with("Conclusion: Data suggests X possibly"));
    }

    #[test]
    fn result_json_uses_snake_case_tags() {
        let result = EvaluationResult {
            confidence: 1.0,
            mode: AnalysisMode::Deep,
            consensus: ConsensusVerdict::InsufficientData,
            conclusion: "c".to_string(),
        };
        let v = serde_json::to_value(&result).unwrap();
        assert_eq!(v["mode"], "deep");
        assert_eq!(v["consensus"], "insufficient_data");
    }

    #[test]
    fn digest_is_stable_and_content_sensitive() {
        let a = input_digest(r#"{"claim":"X"}"#);
        assert_eq!(a, input_digest(r#"{"claim":"X"}"#));
        assert_ne!(a, input_digest(r#"{"claim":"Y"}"#));
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn evaluation_ids_are_unique() {
        assert_ne!(EvaluationId::new(), EvaluationId::new());
    }
}

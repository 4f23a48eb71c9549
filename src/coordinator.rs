//! Pipeline coordinator.
//!
//! Feeds one [`EvaluationInput`] through the four stages in order:
//!
//! 1. [`ConfidenceScorer`] on the sources
//! 2. [`DepthSelector`] on the query
//! 3. [`ConsensusEvaluator`] on the sources and the stage-1 confidence
//! 4. [`ReasoningSynthesizer`] on the premises, claim, stage-2 mode and stage-3 verdict
//!
//! Stage failures propagate unchanged and abort the run; no partial result is
//! ever returned.

use chrono::Utc;

use crate::confidence::{ConfidenceAssessment, ConfidenceScorer};
use crate::config::EvaluationConfig;
use crate::consensus::{ConsensusEvaluator, SupportTally};
use crate::depth::{ComplexitySignal, DepthSelector};
use crate::error::KyroEvalResult;
use crate::input::EvaluationInput;
use crate::reasoning::ReasoningSynthesizer;
use crate::report::{input_digest, EvaluationId, EvaluationReport, EvaluationResult};

struct StageOutputs {
    result: EvaluationResult,
    confidence: ConfidenceAssessment,
    complexity: ComplexitySignal,
    tally: SupportTally,
}

/// Orchestrates the four evaluation stages.
///
/// # Examples
///
/// ```
/// use kyroeval::{ClaimSupport, Coordinator, EvaluationInput, Query, Source};
///
/// let input = EvaluationInput::new(
///     vec![Source::academic("NBER", ClaimSupport::Supports)],
///     Query::new("do tariffs increase prices?")
///         .with_factors(["causal", "multi-variable", "trend"]),
///     "do tariffs increase prices?",
/// )
/// .with_premises(["Supply and demand govern prices."]);
///
/// let result = Coordinator::default().run(&input).unwrap();
/// assert_eq!(result.confidence, 1.0);
/// assert_eq!(
///     result.conclusion,
///     "Supply and demand govern prices. Data suggests do tariffs increase prices? strongly likely"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Coordinator {
    scorer: ConfidenceScorer,
    selector: DepthSelector,
    evaluator: ConsensusEvaluator,
    synthesizer: ReasoningSynthesizer,
}

impl Coordinator {
    /// Creates a coordinator from explicit components.
    #[must_use]
    pub fn new(
        scorer: ConfidenceScorer,
        selector: DepthSelector,
        evaluator: ConsensusEvaluator,
        synthesizer: ReasoningSynthesizer,
    ) -> Self {
        Self {
            scorer,
            selector,
            evaluator,
            synthesizer,
        }
    }

    /// Creates a coordinator from a validated config.
    #[must_use]
    pub fn from_config(config: &EvaluationConfig) -> Self {
        Self::new(
            ConfidenceScorer::from_config(config),
            DepthSelector::from_config(config),
            ConsensusEvaluator::from_config(config),
            ReasoningSynthesizer::new(),
        )
    }

    fn run_stages(&self, input: &EvaluationInput) -> KyroEvalResult<StageOutputs> {
        let _span = tracing::info_span!(
            "evaluate",
            sources = input.sources.len(),
            premises = input.premises.len()
        )
        .entered();

        input.validate()?;

        let confidence = self.scorer.assess(&input.sources)?;
        let complexity = self.selector.complexity(&input.query);
        let mode = self.selector.mode_for(&complexity);
        let tally = self.evaluator.tally(&input.sources);
        let consensus = self.evaluator.verdict_for(&tally, confidence.value());
        let conclusion = self
            .synthesizer
            .synthesize(&input.premises, &input.claim, mode, consensus)?;

        Ok(StageOutputs {
            result: EvaluationResult {
                confidence: confidence.value(),
                mode,
                consensus,
                conclusion,
            },
            confidence,
            complexity,
            tally,
        })
    }

    /// Runs the pipeline on one input.
    ///
    /// # Errors
    ///
    /// - `KyroEvalError::InputShape` if the input violates boundary limits
    /// - `KyroEvalError::InsufficientData` if there are no sources
    /// - `KyroEvalError::MalformedClaim` if the claim is empty
    pub fn run(&self, input: &EvaluationInput) -> KyroEvalResult<EvaluationResult> {
        let result = self.run_stages(input)?.result;
        tracing::info!(
            confidence = result.confidence,
            mode = result.mode.as_str(),
            consensus = result.consensus.as_str(),
            "evaluation complete"
        );
        Ok(result)
    }

    /// Runs the pipeline and wraps the result in an auditable report.
    ///
    /// # Errors
    ///
    /// Same as [`Coordinator::run`].
    pub fn run_with_report(&self, input: &EvaluationInput) -> KyroEvalResult<EvaluationReport> {
        let stages = self.run_stages(input)?;
        let digest = input_digest(&input.to_canonical_json()?);
        let report = EvaluationReport {
            id: EvaluationId::new(),
            evaluated_at: Utc::now(),
            input_digest: digest,
            result: stages.result,
            confidence: stages.confidence,
            complexity: stages.complexity,
            tally: stages.tally,
        };
        tracing::info!(
            id = %report.id,
            digest = %report.input_digest,
            confidence = report.result.confidence,
            mode = report.result.mode.as_str(),
            consensus = report.result.consensus.as_str(),
            "evaluation complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confidence::SourceWeights;
    use crate::consensus::ConsensusVerdict;
    use crate::depth::AnalysisMode;
    use crate::query::Query;
    use crate::source::{ClaimSupport, Source, SourceType};

    #[test]
    fn no_sources_fails_before_later_stages() {
        // The empty claim would fail synthesis; scoring must fail first.
        let input = EvaluationInput::new(Vec::new(), Query::new("q"), "");
        let err = Coordinator::default().run(&input).unwrap_err();
        assert!(err.is_insufficient_data());
    }

    #[test]
    fn empty_claim_propagates_unchanged() {
        let input = EvaluationInput::new(
            vec![Source::academic("a", ClaimSupport::Supports)],
            Query::new("q"),
            "",
        );
        let err = Coordinator::default().run(&input).unwrap_err();
        assert!(err.is_malformed_claim());
    }

    #[test]
    fn shape_violation_precedes_pipeline() {
        let input = EvaluationInput::new(Vec::new(), Query::new("q"), "X").with_premises([" "]);
        let err = Coordinator::default().run(&input).unwrap_err();
        assert!(err.is_input_shape());
    }

    #[test]
    fn stages_feed_forward() {
        let input = EvaluationInput::new(
            vec![
                Source::academic("a", ClaimSupport::Supports),
                Source::news("n", ClaimSupport::Disputes),
            ],
            Query::new("q").with_factor("causal"),
            "rates rise",
        )
        .with_premises(["A", "B"]);
        let result = Coordinator::default().run(&input).unwrap();
        assert!((result.confidence - 0.8).abs() < 1e-6);
        assert_eq!(result.mode, AnalysisMode::Moderate);
        assert_eq!(result.consensus, ConsensusVerdict::NoConsensus);
        assert_eq!(result.conclusion, "A therefore B Data suggests rates rise possibly");
    }

    #[test]
    fn report_carries_stage_diagnostics() {
        let input = EvaluationInput::new(
            vec![
                Source::academic("a", ClaimSupport::Supports),
                Source::blog("b", ClaimSupport::Disputes),
            ],
            Query::new("q"),
            "X",
        );
        let coordinator = Coordinator::default();
        let report = coordinator.run_with_report(&input).unwrap();
        assert_eq!(report.result, coordinator.run(&input).unwrap());
        assert_eq!(report.tally.excluded, 1);
        assert_eq!(report.confidence.high_confidence_count(), 1);
        assert_eq!(report.complexity.factor_count, 0);

        let again = coordinator.run_with_report(&input).unwrap();
        assert_eq!(report.input_digest, again.input_digest);
        assert_ne!(report.id, again.id);
    }

    #[test]
    fn report_diagnostics_explain_the_verdict() {
        let input = EvaluationInput::new(
            vec![
                Source::academic("a", ClaimSupport::Supports),
                Source::news("n", ClaimSupport::Disputes),
            ],
            Query::new("q").with_factors(["causal", "trend", "policy"]),
            "X",
        );
        let report = Coordinator::default().run_with_report(&input).unwrap();
        assert_eq!(report.tally.verdict(), report.result.consensus);
        assert_eq!(
            DepthSelector::default().mode_for(&report.complexity),
            report.result.mode
        );
    }

    #[test]
    fn non_finite_weights_keep_confidence_in_range() {
        let weights = SourceWeights::new().with_weight(SourceType::Academic, f32::NAN);
        let coordinator = Coordinator::new(
            ConfidenceScorer::new(weights.clone()),
            DepthSelector::default(),
            ConsensusEvaluator::new(weights, 0.6),
            ReasoningSynthesizer::new(),
        );
        let input = EvaluationInput::new(
            vec![Source::academic("a", ClaimSupport::Supports)],
            Query::new("q"),
            "X",
        );
        let result = coordinator.run(&input).unwrap();
        assert!((0.0..=1.0).contains(&result.confidence));
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.consensus, ConsensusVerdict::Consensus);
    }

    #[test]
    fn config_flows_into_components() {
        let config = EvaluationConfig::from_json(r#"{"high_confidence_threshold": 0.95}"#).unwrap();
        let input = EvaluationInput::new(
            vec![
                Source::academic("a", ClaimSupport::Supports),
                Source::primary("p", ClaimSupport::Disputes),
            ],
            Query::new("q"),
            "X",
        );
        let result = Coordinator::from_config(&config).run(&input).unwrap();
        assert_eq!(result.consensus, ConsensusVerdict::Consensus);

        let result = Coordinator::default().run(&input).unwrap();
        assert_eq!(result.consensus, ConsensusVerdict::NoConsensus);
    }
}

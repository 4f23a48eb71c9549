//! Hybrid reasoning synthesis.
//!
//! A conclusion has two parts:
//! - a deductive segment collapsing the ordered premise chain into one
//!   statement (`P1 and P2 therefore P3`), and
//! - an inductive segment assessing the claim (`Data suggests <claim> <qualifier>`).
//!
//! The qualifier comes from the analysis mode and is then softened along the
//! [`QUALIFIER_LADDER`] according to the consensus verdict.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consensus::ConsensusVerdict;
use crate::depth::AnalysisMode;
use crate::error::{KyroEvalError, KyroEvalResult};
use crate::input::DeductivePremise;

/// Strength of the inductive assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Qualifier {
    /// No assessment possible.
    Inconclusive,
    /// Weak support.
    Possibly,
    /// Moderate support.
    Likely,
    /// Strong support.
    StronglyLikely,
}

/// Qualifiers from strongest to weakest. Softening moves one rung down.
pub const QUALIFIER_LADDER: [Qualifier; 4] = [
    Qualifier::StronglyLikely,
    Qualifier::Likely,
    Qualifier::Possibly,
    Qualifier::Inconclusive,
];

impl Qualifier {
    /// The qualifier an analysis mode earns before consensus is considered.
    #[must_use]
    pub const fn for_mode(mode: AnalysisMode) -> Self {
        match mode {
            AnalysisMode::Light => Self::Possibly,
            AnalysisMode::Moderate => Self::Likely,
            AnalysisMode::Deep => Self::StronglyLikely,
        }
    }

    /// One rung weaker; `Inconclusive` stays put.
    #[must_use]
    pub fn soften(self) -> Self {
        QUALIFIER_LADDER
            .iter()
            .position(|q| *q == self)
            .and_then(|i| QUALIFIER_LADDER.get(i + 1))
            .copied()
            .unwrap_or(Self::Inconclusive)
    }

    /// Adjusts the qualifier for a consensus verdict.
    #[must_use]
    pub fn adjust(self, verdict: ConsensusVerdict) -> Self {
        match verdict {
            ConsensusVerdict::Consensus => self,
            ConsensusVerdict::NoConsensus => self.soften(),
            ConsensusVerdict::InsufficientData => Self::Inconclusive,
        }
    }

    /// The phrase rendered into the conclusion.
    #[must_use]
    pub const fn phrase(&self) -> &'static str {
        match self {
            Self::Inconclusive => "inconclusive",
            Self::Possibly => "possibly",
            Self::Likely => "likely",
            Self::StronglyLikely => "strongly likely",
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

/// Merges a deductive premise chain with an inductive claim assessment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReasoningSynthesizer;

impl ReasoningSynthesizer {
    /// Creates a synthesizer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the premise chain, or `None` if there are no premises.
    ///
    /// Premises are joined in order with "and", except the last pair which is
    /// joined with "therefore". Blank premises are skipped.
    #[must_use]
    pub fn deductive_segment(&self, premises: &[DeductivePremise]) -> Option<String> {
        let statements: Vec<&str> = premises
            .iter()
            .map(DeductivePremise::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        let (last, earlier) = statements.split_last()?;
        if earlier.is_empty() {
            return Some((*last).to_string());
        }
        Some(format!("{} therefore {last}", earlier.join(" and ")))
    }

    /// Renders the claim assessment.
    #[must_use]
    pub fn inductive_segment(&self, claim: &str, qualifier: Qualifier) -> String {
        format!("Data suggests {claim} {qualifier}")
    }

    /// Synthesizes the final conclusion.
    ///
    /// The claim is inserted verbatim, surrounding whitespace included; no
    /// attempt is made to repair its grammar or punctuation.
    ///
    /// # Errors
    ///
    /// Returns `KyroEvalError::MalformedClaim` if `claim` is empty or blank.
    pub fn synthesize(
        &self,
        premises: &[DeductivePremise],
        claim: &str,
        mode: AnalysisMode,
        consensus: ConsensusVerdict,
    ) -> KyroEvalResult<String> {
        if claim.trim().is_empty() {
            return Err(KyroEvalError::malformed_claim(
                "claim is empty; nothing to evaluate",
            ));
        }

        let qualifier = Qualifier::for_mode(mode).adjust(consensus);
        let inductive = self.inductive_segment(claim, qualifier);
        let conclusion = match self.deductive_segment(premises) {
            Some(deductive) => format!("{deductive} {inductive}"),
            None => inductive,
        };

        tracing::debug!(
            premises = premises.len(),
            qualifier = qualifier.phrase(),
            "synthesized conclusion"
        );
        Ok(conclusion)
    }
}

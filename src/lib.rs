//! # KyroEval - Evidence Evaluation Pipeline
//!
//! KyroEval takes a research query together with the sources bearing on it
//! and produces four judgments about the evidence base.
//!
//! ## Core Concepts
//!
//! - **Confidence**: mean reliability of the sources, from a fixed per-type weight table
//! - **Analysis mode**: `light`, `moderate` or `deep`, chosen from query complexity
//! - **Consensus**: whether high-confidence sources unanimously support the claim
//! - **Conclusion**: a deductive premise chain merged with a qualified inductive assessment
//!
//! ## Usage
//!
//! ```rust
//! use kyroeval::{ClaimSupport, Coordinator, EvaluationInput, Query, Source};
//! use kyroeval::{AnalysisMode, ConsensusVerdict};
//!
//! let input = EvaluationInput::new(
//!     vec![
//!         Source::academic("NBER w24412", ClaimSupport::Supports),
//!         Source::blog("Tariff Watch", ClaimSupport::Disputes),
//!     ],
//!     Query::new("X"),
//!     "X",
//! );
//!
//! let result = Coordinator::default().run(&input)?;
//! assert_eq!(result.mode, AnalysisMode::Light);
//! assert_eq!(result.consensus, ConsensusVerdict::Consensus);
//! assert_eq!(result.conclusion, "Data suggests X possibly");
//! # Ok::<(), kyroeval::KyroEvalError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Data model
pub mod error;
pub mod input;
pub mod query;
pub mod source;

// Pipeline stages
pub mod confidence;
pub mod consensus;
pub mod depth;
pub mod reasoning;

// Orchestration
pub mod config;
pub mod coordinator;
pub mod report;

// Re-export primary types at crate root for convenience
pub use confidence::{ConfidenceAssessment, ConfidenceScorer, SourceWeights};
pub use config::EvaluationConfig;
pub use consensus::{ConsensusEvaluator, ConsensusVerdict, SupportTally};
pub use coordinator::Coordinator;
pub use depth::{AnalysisMode, ComplexitySignal, DepthSelector, DepthThresholds, TokenBucket};
pub use error::{ConfigError, InputShapeError, KyroEvalError, KyroEvalResult};
pub use input::{DeductivePremise, EvaluationInput};
pub use query::Query;
pub use reasoning::{Qualifier, ReasoningSynthesizer};
pub use report::{EvaluationId, EvaluationReport, EvaluationResult};
pub use source::{ClaimSupport, Source, SourceType};

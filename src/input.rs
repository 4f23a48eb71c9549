//! Evaluation input record and its boundary validation.
//!
//! Parsing and shape validation happen here, before any pipeline stage runs,
//! so that a malformed record surfaces as a single [`InputShapeError`] and the
//! pipeline only ever sees well-formed input.
//!
//! Two conditions are deliberately left to the pipeline: an empty `sources`
//! array (the confidence scorer reports insufficient data) and an empty
//! `claim` (the reasoning synthesizer reports a malformed claim).

use std::fmt;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::InputShapeError;
use crate::query::Query;
use crate::source::Source;

/// Upper bound for free-form text fields.
pub const MAX_TEXT_LEN: usize = 16 * 1024;

/// Upper bound for the number of sources.
pub const MAX_SOURCES: usize = 1024;
/// Upper bound for the length of the premise chain.
pub const MAX_PREMISES: usize = 256;
/// Upper bound for the number of complexity factors.
pub const MAX_FACTORS: usize = 64;

/// One statement in a first-principles chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeductivePremise(String);

impl DeductivePremise {
    /// Creates a premise.
    #[must_use]
    pub fn new(statement: impl Into<String>) -> Self {
        Self(statement.into())
    }

    /// The premise statement.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DeductivePremise {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DeductivePremise {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for DeductivePremise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything one evaluation run consumes.
///
/// # Examples
///
/// ```
/// use kyroeval::EvaluationInput;
///
/// let input = EvaluationInput::from_json(r#"{
///     "sources": [{"name": "NBER", "type": "academic", "claim_support": "supports"}],
///     "query": {"text": "do tariffs increase prices?", "factors": ["causal"]},
///     "premises": ["Supply and demand govern prices."],
///     "claim": "do tariffs increase prices?"
/// }"#).unwrap();
/// assert_eq!(input.sources.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationInput {
    /// Evidence, in input order.
    pub sources: Vec<Source>,

    /// The research query.
    pub query: Query,

    /// First-principles chain, in order.
    #[serde(default)]
    pub premises: Vec<DeductivePremise>,

    /// The inductive question under test.
    pub claim: String,
}

fn check_text(field: &str, value: &str) -> Result<(), InputShapeError> {
    if value.len() > MAX_TEXT_LEN {
        return Err(InputShapeError::FieldTooLong {
            field: field.to_string(),
            max_length: MAX_TEXT_LEN,
        });
    }
    Ok(())
}

fn check_non_blank(field: &str, value: &str) -> Result<(), InputShapeError> {
    if value.trim().is_empty() {
        return Err(InputShapeError::MissingField {
            field: field.to_string(),
        });
    }
    check_text(field, value)
}

fn check_count(field: &str, len: usize, max_items: usize) -> Result<(), InputShapeError> {
    if len > max_items {
        return Err(InputShapeError::TooManyItems {
            field: field.to_string(),
            max_items,
        });
    }
    Ok(())
}

impl EvaluationInput {
    /// Creates an input record with no premises.
    #[must_use]
    pub fn new(sources: Vec<Source>, query: Query, claim: impl Into<String>) -> Self {
        Self {
            sources,
            query,
            premises: Vec::new(),
            claim: claim.into(),
        }
    }

    /// Sets the premise chain.
    #[must_use]
    pub fn with_premises<I, P>(mut self, premises: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<DeductivePremise>,
    {
        self.premises = premises.into_iter().map(Into::into).collect();
        self
    }

    /// Parses and validates a JSON record.
    ///
    /// # Errors
    ///
    /// Returns `InputShapeError` if the JSON is malformed, a required field
    /// is missing, an enum tag is unknown, or a limit is exceeded.
    pub fn from_json(s: &str) -> Result<Self, InputShapeError> {
        let input: Self = serde_json::from_str(s).map_err(|e| InputShapeError::Malformed {
            message: e.to_string(),
        })?;
        input.validate()?;
        Ok(input)
    }

    /// Parses and validates a JSON record from a reader.
    ///
    /// # Errors
    ///
    /// See [`EvaluationInput::from_json`].
    pub fn from_reader(reader: impl Read) -> Result<Self, InputShapeError> {
        let input: Self = serde_json::from_reader(reader).map_err(|e| InputShapeError::Malformed {
            message: e.to_string(),
        })?;
        input.validate()?;
        Ok(input)
    }

    /// Validates an already-decoded JSON value.
    ///
    /// # Errors
    ///
    /// See [`EvaluationInput::from_json`].
    pub fn from_value(value: serde_json::Value) -> Result<Self, InputShapeError> {
        let input: Self = serde_json::from_value(value).map_err(|e| InputShapeError::Malformed {
            message: e.to_string(),
        })?;
        input.validate()?;
        Ok(input)
    }

    /// Checks field limits and non-blank requirements.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), InputShapeError> {
        check_count("sources", self.sources.len(), MAX_SOURCES)?;
        for source in &self.sources {
            check_non_blank("sources[].name", &source.name)?;
        }

        check_text("query.text", &self.query.text)?;
        check_count("query.factors", self.query.factors.len(), MAX_FACTORS)?;
        for factor in &self.query.factors {
            check_text("query.factors[]", factor)?;
        }

        check_count("premises", self.premises.len(), MAX_PREMISES)?;
        for premise in &self.premises {
            check_non_blank("premises[]", premise.as_str())?;
        }

        check_text("claim", &self.claim)
    }

    /// Serializes the record to canonical (compact) JSON.
    ///
    /// Factors are a sorted set, so equal records always produce equal bytes.
    ///
    /// # Errors
    ///
    /// Returns `InputShapeError::Malformed` if serialization fails.
    pub fn to_canonical_json(&self) -> Result<String, InputShapeError> {
        serde_json::to_string(self).map_err(|e| InputShapeError::Malformed {
            message: format!("serialize input: {e}"),
        })
    }
}

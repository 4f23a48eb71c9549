//! The research query under evaluation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A research query and the tags describing what makes it complex.
///
/// Factors are a set: duplicate tags collapse when the query is built or
/// deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Free-form query text.
    pub text: String,

    /// Complexity drivers such as `"causal"` or `"multi-variable"`.
    #[serde(default)]
    pub factors: BTreeSet<String>,
}

impl Query {
    /// Creates a query with no complexity factors.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            factors: BTreeSet::new(),
        }
    }

    /// Adds a complexity factor.
    #[must_use]
    pub fn with_factor(mut self, factor: impl Into<String>) -> Self {
        self.factors.insert(factor.into());
        self
    }

    /// Adds several complexity factors.
    #[must_use]
    pub fn with_factors<I, S>(mut self, factors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.factors.extend(factors.into_iter().map(Into::into));
        self
    }

    /// Number of distinct, non-blank factors.
    ///
    /// Tags are compared after trimming and ASCII-lowercasing, so `"Causal"`
    /// and `" causal "` count once.
    #[must_use]
    pub fn distinct_factor_count(&self) -> usize {
        self.factors
            .iter()
            .map(|f| f.trim().to_ascii_lowercase())
            .filter(|f| !f.is_empty())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Number of whitespace-separated tokens in the query text.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

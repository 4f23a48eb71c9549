//! Source and provenance types.
//!
//! A source is a piece of evidence bearing on the claim under test: what kind
//! of publication it is, and whether it supports, disputes, or is neutral
//! toward the claim.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of publication a source is.
///
/// The kind determines the source's base reliability weight
/// (see [`SourceWeights`](crate::confidence::SourceWeights)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Peer-reviewed or academic publication.
    Academic,
    /// Primary material: datasets, filings, first-hand records.
    Primary,
    /// News reporting.
    News,
    /// Blogs and opinion pieces.
    Blog,
    /// Anything else.
    Other,
}

impl SourceType {
    /// All source types, in descending default-weight order.
    pub const ALL: [Self; 5] = [
        Self::Academic,
        Self::Primary,
        Self::News,
        Self::Blog,
        Self::Other,
    ];

    /// Returns the stable snake_case tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Academic => "academic",
            Self::Primary => "primary",
            Self::News => "news",
            Self::Blog => "blog",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stance of a source toward the claim under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimSupport {
    /// The source backs the claim.
    Supports,
    /// The source contradicts the claim.
    Disputes,
    /// The source takes no position.
    Neutral,
}

impl ClaimSupport {
    /// Returns true for `Supports` and `Disputes`.
    #[must_use]
    pub const fn is_stance(&self) -> bool {
        !matches!(self, Self::Neutral)
    }
}

impl fmt::Display for ClaimSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Supports => write!(f, "supports"),
            Self::Disputes => write!(f, "disputes"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// A single piece of evidence.
///
/// # Examples
///
/// ```
/// use kyroeval::{ClaimSupport, Source, SourceType};
///
/// let source = Source::academic("NBER w24412", ClaimSupport::Supports);
/// assert_eq!(source.source_type, SourceType::Academic);
/// assert!(source.claim_support.is_stance());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Human-readable label (title, outlet, URL).
    pub name: String,

    /// Kind of publication.
    #[serde(rename = "type")]
    pub source_type: SourceType,

    /// Stance toward the claim.
    pub claim_support: ClaimSupport,
}

impl Source {
    /// Creates a source.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        source_type: SourceType,
        claim_support: ClaimSupport,
    ) -> Self {
        Self {
            name: name.into(),
            source_type,
            claim_support,
        }
    }

    /// Creates an academic source.
    #[must_use]
    pub fn academic(name: impl Into<String>, claim_support: ClaimSupport) -> Self {
        Self::new(name, SourceType::Academic, claim_support)
    }

    /// Creates a primary source.
    #[must_use]
    pub fn primary(name: impl Into<String>, claim_support: ClaimSupport) -> Self {
        Self::new(name, SourceType::Primary, claim_support)
    }

    /// Creates a news source.
    #[must_use]
    pub fn news(name: impl Into<String>, claim_support: ClaimSupport) -> Self {
        Self::new(name, SourceType::News, claim_support)
    }

    /// Creates a blog source.
    #[must_use]
    pub fn blog(name: impl Into<String>, claim_support: ClaimSupport) -> Self {
        Self::new(name, SourceType::Blog, claim_support)
    }

    /// Creates a source of unclassified type.
    #[must_use]
    pub fn other(name: impl Into<String>, claim_support: ClaimSupport) -> Self {
        Self::new(name, SourceType::Other, claim_support)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\"{}\" ({})", self.source_type, self.name, self.claim_support)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_constructors() {
        assert_eq!(
            Source::academic("a", ClaimSupport::Supports).source_type,
            SourceType::Academic
        );
        assert_eq!(
            Source::primary("p", ClaimSupport::Neutral).source_type,
            SourceType::Primary
        );
        assert_eq!(Source::news("n", ClaimSupport::Disputes).source_type, SourceType::News);
        assert_eq!(Source::blog("b", ClaimSupport::Supports).source_type, SourceType::Blog);
        assert_eq!(Source::other("o", ClaimSupport::Supports).source_type, SourceType::Other);
    }

    #[test]
    fn test_claim_support_stance() {
        assert!(ClaimSupport::Supports.is_stance());
        assert!(ClaimSupport::Disputes.is_stance());
        assert!(!ClaimSupport::Neutral.is_stance());
    }

    #[test]
    fn test_source_display() {
        let s = Source::news("Reuters", ClaimSupport::Disputes);
        assert_eq!(format!("{s}"), "news:\"Reuters\" (disputes)");
    }

    #[test]
    fn test_source_json_shape() {
        let json = r#"{"name": "Fed note", "type": "primary", "claim_support": "neutral"}"#;
        let source: Source = serde_json::from_str(json).unwrap();
        assert_eq!(source, Source::primary("Fed note", ClaimSupport::Neutral));

        let back = serde_json::to_value(&source).unwrap();
        assert_eq!(back["type"], "primary");
        assert_eq!(back["claim_support"], "neutral");
    }

    #[test]
    fn test_unknown_source_type_rejected() {
        let json = r#"{"name": "x", "type": "tabloid", "claim_support": "supports"}"#;
        assert!(serde_json::from_str::<Source>(json).is_err());
    }

    #[test]
    fn test_source_type_tags_match_serde() {
        for t in SourceType::ALL {
            let v = serde_json::to_value(t).unwrap();
            assert_eq!(v, t.as_str());
        }
    }
}

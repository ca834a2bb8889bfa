//! Sentence-level statements and their inferred semantic roles.

use serde::{Deserialize, Serialize};

/// Confidence assigned to statements segmented from raw text.
pub const DEFAULT_STATEMENT_CONFIDENCE: f64 = 0.8;

/// Statements whose trimmed text is this many characters or shorter are dropped.
pub const MIN_STATEMENT_CHARS: usize = 20;

/// The rhetorical role a statement plays in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticRole {
    /// Default role: an assertion of fact or position.
    Claim,
    /// Points at attached or referenced documentation.
    Evidence,
    /// Draws a conclusion ("derfor", "konklusjon").
    Conclusion,
    /// Describes a procedure or course of action.
    Procedure,
    /// States a demand or obligation ("krav", "må", "skal").
    Requirement,
}

impl SemanticRole {
    /// Classifies a statement by lower-cased keyword matching.
    ///
    /// Checked in order: conclusion, requirement, evidence, procedure. The
    /// first group with a hit wins; anything else is a [`SemanticRole::Claim`].
    ///
    /// ```
    /// use layered_statements::SemanticRole;
    ///
    /// assert_eq!(SemanticRole::classify("Derfor må kravet avvises"), SemanticRole::Conclusion);
    /// assert_eq!(SemanticRole::classify("Kravet må dokumenteres"), SemanticRole::Requirement);
    /// assert_eq!(SemanticRole::classify("Vi viser til saken"), SemanticRole::Claim);
    /// ```
    pub fn classify(text: &str) -> Self {
        let lower = text.to_lowercase();
        let has_any = |keywords: &[&str]| keywords.iter().any(|kw| lower.contains(kw));

        if has_any(&["derfor", "konklusjon"]) {
            SemanticRole::Conclusion
        } else if has_any(&["krav", "må", "skal"]) {
            SemanticRole::Requirement
        } else if has_any(&["vedlagt", "dokumentasjon"]) {
            SemanticRole::Evidence
        } else if has_any(&["prosedyre", "fremgangsmåte"]) {
            SemanticRole::Procedure
        } else {
            SemanticRole::Claim
        }
    }

    /// Returns the serialized tag for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticRole::Claim => "claim",
            SemanticRole::Evidence => "evidence",
            SemanticRole::Conclusion => "conclusion",
            SemanticRole::Procedure => "procedure",
            SemanticRole::Requirement => "requirement",
        }
    }
}

/// Character offsets of a statement within its source text (end exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StatementSpan {
    pub start: usize,
    pub end: usize,
}

impl StatementSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered by the span.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A normalized sentence-level unit of document text.
///
/// Statements are created by extraction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    pub text: String,
    pub semantic_role: SemanticRole,
    pub span: StatementSpan,
    /// Confidence from 0.0 to 1.0
    pub confidence: f64,
}

impl Statement {
    pub fn new(
        text: impl Into<String>,
        semantic_role: SemanticRole,
        span: StatementSpan,
        confidence: f64,
    ) -> Self {
        Self {
            text: text.into(),
            semantic_role,
            span,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Builds a standalone statement, classifying its role and spanning the
    /// whole text.
    ///
    /// Useful for callers that already hold segmented sentences and want to
    /// hand them over as `structure.statements`.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let role = SemanticRole::classify(&text);
        let span = StatementSpan::new(0, text.chars().count());
        Self::new(text, role, span, DEFAULT_STATEMENT_CONFIDENCE)
    }

    /// Lower-cased text, the form every detector matches against.
    pub fn lowercase_text(&self) -> String {
        self.text.to_lowercase()
    }

    /// Returns true if the trimmed text is long enough to be analyzed.
    pub fn is_substantive(&self) -> bool {
        is_substantive(&self.text)
    }
}

/// Returns true if `text` has more than [`MIN_STATEMENT_CHARS`] characters
/// once trimmed.
pub fn is_substantive(text: &str) -> bool {
    text.trim().chars().count() > MIN_STATEMENT_CHARS
}

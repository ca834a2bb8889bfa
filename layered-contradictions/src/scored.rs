//! `Scored<T>`: values paired with the confidence that produced them.
//!
//! Detector output carries the fixed constant of the rule that fired; the
//! document-level score is a blend of those constants. Keeping the source next
//! to the number makes it easy to check that a finding's confidence really is
//! its detector's constant.

use std::fmt;

/// A value with an associated confidence score.
///
/// # Example
/// ```
/// use layered_contradictions::{Scored, ScoreSource};
///
/// let hit = Scored::rule("Settlement offered while liability is denied", 0.89, "settlement_contradiction");
/// assert_eq!(hit.confidence, 0.89);
/// assert_eq!(hit.source, ScoreSource::Rule { rule_name: "settlement_contradiction" });
/// ```
#[derive(Clone)]
pub struct Scored<T> {
    /// The actual value
    pub value: T,
    /// Confidence score from 0.0 to 1.0
    pub confidence: f64,
    /// Where this score came from
    pub source: ScoreSource,
}

/// The source of a confidence score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreSource {
    /// A fixed constant attached to a detection rule
    Rule {
        /// Tag of the rule that fired
        rule_name: &'static str,
    },
    /// Blended from several rule scores
    Blended,
}

impl<T> Scored<T> {
    /// Create a new scored value, clamping confidence into `[0, 1]`.
    pub fn new(value: T, confidence: f64, source: ScoreSource) -> Self {
        Self {
            value,
            confidence: confidence.clamp(0.0, 1.0),
            source,
        }
    }

    /// Create a scored value from a detection rule.
    pub fn rule(value: T, confidence: f64, rule_name: &'static str) -> Self {
        Self::new(value, confidence, ScoreSource::Rule { rule_name })
    }

    /// Create a blended scored value.
    pub fn blended(value: T, confidence: f64) -> Self {
        Self::new(value, confidence, ScoreSource::Blended)
    }

    /// Map the inner value while preserving confidence and source.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Scored<U> {
        Scored {
            value: f(self.value),
            confidence: self.confidence,
            source: self.source,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Scored<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Compact format for snapshot tests: Scored(value, conf: 0.85)
        write!(f, "Scored({:?}, conf: {:.2})", self.value, self.confidence)
    }
}

impl<T: PartialEq> PartialEq for Scored<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
            && (self.confidence - other.confidence).abs() < f64::EPSILON
            && self.source == other.source
    }
}

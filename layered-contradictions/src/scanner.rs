//! Pairwise scan over extracted statements.
//!
//! Every unordered pair `(i, j)` with `i < j` is tried against the detectors
//! in priority order, and the first hit is the pair's only match. Matches are
//! then deduplicated on the unordered pair of statement texts, keeping the
//! earliest.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use layered_statements::Statement;

use crate::contradiction_type::ContradictionType;
use crate::detectors::{first_detection, PreparedStatement};
use crate::scored::ScoreSource;

// ============================================================================
// Types
// ============================================================================

/// A contradiction between two statements.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContradictionMatch {
    pub statement1: Statement,
    pub statement2: Statement,
    #[serde(rename = "type")]
    pub contradiction_type: ContradictionType,
    /// The fixed constant of the detector that fired
    pub confidence: f64,
    pub explanation: String,
    /// The two statement texts, in scan order
    pub evidence: Vec<String>,
    #[serde(skip)]
    pub source: ScoreSource,
}

impl ContradictionMatch {
    /// The unordered pair of statement texts used for deduplication.
    pub fn text_key(&self) -> (&str, &str) {
        let (a, b) = (self.statement1.text.as_str(), self.statement2.text.as_str());
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

// ============================================================================
// Scanner
// ============================================================================

/// Runs the detector chain over all statement pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairwiseScanner;

impl PairwiseScanner {
    pub fn new() -> Self {
        Self
    }

    /// All matches in scan order, one at most per statement pair.
    pub fn scan(&self, statements: &[Statement]) -> Vec<ContradictionMatch> {
        let prepared: Vec<PreparedStatement<'_>> =
            statements.iter().map(PreparedStatement::new).collect();

        let mut matches = Vec::new();
        for i in 0..prepared.len() {
            for j in (i + 1)..prepared.len() {
                let (a, b) = (&prepared[i], &prepared[j]);

                let Some((contradiction_type, hit)) = first_detection(a, b) else {
                    continue;
                };

                debug!(
                    first = i,
                    second = j,
                    contradiction_type = contradiction_type.as_str(),
                    confidence = hit.confidence,
                    "contradiction detected"
                );

                matches.push(ContradictionMatch {
                    statement1: a.statement.clone(),
                    statement2: b.statement.clone(),
                    contradiction_type,
                    confidence: hit.confidence,
                    explanation: hit.value,
                    evidence: vec![a.statement.text.clone(), b.statement.text.clone()],
                    source: hit.source,
                });
            }
        }
        matches
    }

    /// Scan and deduplicate in one step.
    pub fn scan_unique(&self, statements: &[Statement]) -> Vec<ContradictionMatch> {
        deduplicate(self.scan(statements))
    }
}

/// Keep the first match for each unordered pair of statement texts.
pub fn deduplicate(matches: Vec<ContradictionMatch>) -> Vec<ContradictionMatch> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut unique = Vec::with_capacity(matches.len());

    for m in matches {
        let (a, b) = m.text_key();
        if seen.insert((a.to_string(), b.to_string())) {
            unique.push(m);
        } else {
            debug!(
                contradiction_type = m.contradiction_type.as_str(),
                "duplicate statement pair dropped"
            );
        }
    }
    unique
}

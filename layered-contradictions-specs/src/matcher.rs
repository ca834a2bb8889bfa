//! Checks fixture expectations against a `ModuleResult`.

use std::fmt;

use layered_contradictions::ModuleResult;

use crate::fixture::FixtureExpectation;

/// Confidences are fixed constants or simple blends of them.
const CONFIDENCE_TOLERANCE: f64 = 1e-6;

/// How serious a field mismatch is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchSeverity {
    /// Wrong category, count or severity.
    Hard,
    /// Right category, different confidence.
    Soft,
}

/// A single field that did not match.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMismatch {
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
    pub severity: MismatchSeverity,
}

impl fmt::Display for FieldMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.severity {
            MismatchSeverity::Hard => "✗",
            MismatchSeverity::Soft => "~",
        };
        write!(
            f,
            "{} {}: expected `{}`, found `{}`",
            marker, self.field, self.expected, self.actual
        )
    }
}

/// Outcome of one expectation.
#[derive(Debug, Clone, PartialEq)]
pub enum AssertionOutcome {
    Passed,
    Failed(Vec<FieldMismatch>),
    NotFound { reason: String },
}

/// One checked expectation, named by a stable reference such as
/// `severity` or `finding[1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssertionResult {
    pub reference: String,
    pub outcome: AssertionOutcome,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchResult {
    pub passed: Vec<AssertionResult>,
    pub failed: Vec<AssertionResult>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, reference: impl Into<String>, mismatches: Vec<FieldMismatch>) {
        let reference = reference.into();
        if mismatches.is_empty() {
            self.passed.push(AssertionResult {
                reference,
                outcome: AssertionOutcome::Passed,
            });
        } else {
            self.failed.push(AssertionResult {
                reference,
                outcome: AssertionOutcome::Failed(mismatches),
            });
        }
    }

    fn record_not_found(&mut self, reference: impl Into<String>, reason: String) {
        self.failed.push(AssertionResult {
            reference: reference.into(),
            outcome: AssertionOutcome::NotFound { reason },
        });
    }

    pub fn all_passed(&self) -> bool {
        self.failed.is_empty()
    }
}

fn hard(field: &'static str, expected: impl fmt::Display, actual: impl fmt::Display) -> FieldMismatch {
    FieldMismatch {
        field,
        expected: expected.to_string(),
        actual: actual.to_string(),
        severity: MismatchSeverity::Hard,
    }
}

fn confidence_mismatch(expected: f64, actual: f64) -> Option<FieldMismatch> {
    if (expected - actual).abs() <= CONFIDENCE_TOLERANCE {
        None
    } else {
        Some(FieldMismatch {
            field: "confidence",
            expected: format!("{:.4}", expected),
            actual: format!("{:.4}", actual),
            severity: MismatchSeverity::Soft,
        })
    }
}

/// Check every expectation the fixture states.
pub fn check_expectations(expect: &FixtureExpectation, result: &ModuleResult) -> MatchResult {
    let mut matches = MatchResult::new();

    if let Some(expected) = expect.findings {
        let mismatches = if expected == result.findings.len() {
            vec![]
        } else {
            vec![hard("findings", expected, result.findings.len())]
        };
        matches.record("findings", mismatches);
    }

    if let Some(expected) = expect.confidence {
        matches.record(
            "confidence",
            confidence_mismatch(expected, result.confidence).into_iter().collect(),
        );
    }

    if let Some(expected) = expect.severity {
        let mismatches = if expected == result.severity {
            vec![]
        } else {
            vec![hard("severity", expected, result.severity)]
        };
        matches.record("severity", mismatches);
    }

    if let Some(expected) = expect.actionable {
        let mismatches = if expected == result.actionable {
            vec![]
        } else {
            vec![hard("actionable", expected, result.actionable)]
        };
        matches.record("actionable", mismatches);
    }

    // The nth expectation of a type matches the nth finding of that type.
    for (idx, expected) in expect.finding.iter().enumerate() {
        let reference = format!("finding[{}]", idx);
        let occurrence = expect.finding[..idx]
            .iter()
            .filter(|e| e.contradiction_type == expected.contradiction_type)
            .count();
        let found = result
            .findings
            .iter()
            .filter(|f| f.contradiction_type == expected.contradiction_type)
            .nth(occurrence);

        let Some(finding) = found else {
            let reported: Vec<&str> = result
                .findings
                .iter()
                .map(|f| f.contradiction_type.as_str())
                .collect();
            matches.record_not_found(
                reference,
                format!(
                    "no {} finding #{} (reported: [{}])",
                    expected.contradiction_type,
                    occurrence + 1,
                    reported.join(", ")
                ),
            );
            continue;
        };

        let mut mismatches = Vec::new();
        if let Some(confidence) = expected.confidence {
            mismatches.extend(confidence_mismatch(confidence, finding.confidence));
        }
        if let Some(severity) = expected.severity {
            if severity != finding.severity {
                mismatches.push(hard("severity", severity, finding.severity));
            }
        }
        matches.record(reference, mismatches);
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::ExpectedFinding;
    use layered_contradictions::{ContradictionEngine, ContradictionType, Severity};
    use layered_statements::ProcessedDocument;

    fn settlement_result() -> ModuleResult {
        let doc = ProcessedDocument::from_text(
            "doc",
            "Vi tilbyr et oppgjør på 25 000 kroner for å avslutte denne saken. \
             Vi benekter ethvert ansvar for de påståtte skadene i denne saken.",
        );
        tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap()
            .block_on(ContradictionEngine::new().analyze(&doc))
            .unwrap()
    }

    fn expected(ty: ContradictionType, confidence: Option<f64>, severity: Option<Severity>) -> ExpectedFinding {
        ExpectedFinding {
            contradiction_type: ty,
            confidence,
            severity,
        }
    }

    #[test]
    fn test_all_expectations_pass() {
        let expect = FixtureExpectation {
            findings: Some(1),
            confidence: Some(0.89),
            severity: Some(Severity::Critical),
            actionable: Some(true),
            finding: vec![expected(
                ContradictionType::SettlementContradiction,
                Some(0.89),
                Some(Severity::Critical),
            )],
        };
        let matches = check_expectations(&expect, &settlement_result());
        assert!(matches.all_passed());
        assert_eq!(matches.passed.len(), 5);
    }

    #[test]
    fn test_confidence_mismatch_is_soft() {
        let expect = FixtureExpectation {
            finding: vec![expected(ContradictionType::SettlementContradiction, Some(0.9), None)],
            ..FixtureExpectation::default()
        };
        let matches = check_expectations(&expect, &settlement_result());
        let AssertionOutcome::Failed(fields) = &matches.failed[0].outcome else {
            panic!("expected field mismatch");
        };
        assert_eq!(fields[0].severity, MismatchSeverity::Soft);
        assert_eq!(fields[0].to_string(), "~ confidence: expected `0.9000`, found `0.8900`");
    }

    #[test]
    fn test_missing_type_not_found() {
        let expect = FixtureExpectation {
            finding: vec![
                expected(ContradictionType::SettlementContradiction, None, None),
                expected(ContradictionType::SettlementContradiction, None, None),
            ],
            ..FixtureExpectation::default()
        };
        let matches = check_expectations(&expect, &settlement_result());
        assert_eq!(matches.passed.len(), 1);
        assert_eq!(matches.failed[0].reference, "finding[1]");
        assert_eq!(
            matches.failed[0].outcome,
            AssertionOutcome::NotFound {
                reason: "no settlement_contradiction finding #2 (reported: [settlement_contradiction])"
                    .to_string()
            }
        );
    }

    #[test]
    fn test_count_and_severity_mismatch_are_hard() {
        let expect = FixtureExpectation {
            findings: Some(0),
            severity: Some(Severity::Info),
            ..FixtureExpectation::default()
        };
        let matches = check_expectations(&expect, &settlement_result());
        assert_eq!(matches.failed.len(), 2);
        for failed in &matches.failed {
            let AssertionOutcome::Failed(fields) = &failed.outcome else {
                panic!("expected field mismatch");
            };
            assert_eq!(fields[0].severity, MismatchSeverity::Hard);
        }
    }
}

//! Findings: the reported form of a contradiction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SeverityThresholds;
use crate::contradiction_type::ContradictionType;
use crate::legal_database::LegalProvision;
use crate::scanner::ContradictionMatch;

/// How serious a finding (or a whole document) is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A deduplicated contradiction with severity and legal framing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    #[serde(rename = "type")]
    pub contradiction_type: ContradictionType,
    pub evidence: Vec<String>,
    pub explanation: String,
    pub confidence: f64,
    pub severity: Severity,
    pub legal_implication: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_backing: Option<Vec<LegalProvision>>,
}

/// Turns contradiction matches into findings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FindingClassifier {
    thresholds: SeverityThresholds,
    relevance_cutoff: f64,
}

impl Default for FindingClassifier {
    fn default() -> Self {
        Self::new(SeverityThresholds::default(), 0.8)
    }
}

impl FindingClassifier {
    pub fn new(thresholds: SeverityThresholds, relevance_cutoff: f64) -> Self {
        Self {
            thresholds,
            relevance_cutoff,
        }
    }

    pub fn thresholds(&self) -> &SeverityThresholds {
        &self.thresholds
    }

    /// Provisions scoring strictly above the relevance cutoff, or `None` when
    /// none qualify.
    pub fn backing(&self, provisions: Option<&[LegalProvision]>) -> Option<Vec<LegalProvision>> {
        let relevant: Vec<LegalProvision> = provisions?
            .iter()
            .filter(|p| p.relevance_score > self.relevance_cutoff)
            .cloned()
            .collect();
        if relevant.is_empty() {
            None
        } else {
            Some(relevant)
        }
    }

    pub fn classify(&self, m: &ContradictionMatch, backing: Option<Vec<LegalProvision>>) -> Finding {
        Finding {
            contradiction_type: m.contradiction_type,
            evidence: m.evidence.clone(),
            explanation: m.explanation.clone(),
            confidence: m.confidence,
            severity: self.thresholds.classify(m.confidence),
            legal_implication: m.contradiction_type.legal_implication().to_string(),
            legal_backing: backing,
        }
    }

    /// One finding per match, in order.
    pub fn build_findings(
        &self,
        matches: &[ContradictionMatch],
        provisions: Option<&[LegalProvision]>,
    ) -> Vec<Finding> {
        let backing = self.backing(provisions);
        matches
            .iter()
            .map(|m| self.classify(m, backing.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::PairwiseScanner;
    use layered_statements::Statement;

    fn settlement_match() -> ContradictionMatch {
        let statements = vec![
            Statement::from_text("Vi tilbyr et oppgjør på 25 000 kroner for å avslutte denne saken"),
            Statement::from_text("Vi benekter ethvert ansvar for de påståtte skadene i denne saken"),
        ];
        PairwiseScanner::new().scan(&statements).remove(0)
    }

    fn provision(id: &str, relevance_score: f64) -> LegalProvision {
        LegalProvision {
            id: id.to_string(),
            title: String::new(),
            citation: String::new(),
            text: String::new(),
            relevance_score,
            contradiction_types: vec![],
        }
    }

    #[test]
    fn test_classify_settlement() {
        let finding = FindingClassifier::default().classify(&settlement_match(), None);
        assert_eq!(finding.contradiction_type, ContradictionType::SettlementContradiction);
        assert_eq!(finding.confidence, 0.89);
        assert_eq!(finding.severity, Severity::Critical);
        assert_eq!(
            finding.legal_implication,
            ContradictionType::SettlementContradiction.legal_implication()
        );
        assert_eq!(finding.evidence.len(), 2);
    }

    #[test]
    fn test_custom_thresholds_change_severity() {
        let classifier = FindingClassifier::new(
            SeverityThresholds {
                critical: 0.95,
                warning: 0.5,
            },
            0.8,
        );
        let finding = classifier.classify(&settlement_match(), None);
        assert_eq!(finding.severity, Severity::Warning);
    }

    #[test]
    fn test_backing_requires_relevance_above_cutoff() {
        let classifier = FindingClassifier::default();
        let provisions = vec![provision("a", 0.8), provision("b", 0.81), provision("c", 0.5)];

        let findings = classifier.build_findings(&[settlement_match()], Some(&provisions));
        let ids: Vec<_> = findings[0]
            .legal_backing
            .as_ref()
            .unwrap()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b"]);

        let weak = vec![provision("a", 0.8)];
        let findings = classifier.build_findings(&[settlement_match()], Some(&weak));
        assert_eq!(findings[0].legal_backing, None);
    }

    #[test]
    fn test_finding_wire_format() {
        let finding = FindingClassifier::default().classify(&settlement_match(), None);
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["type"], "settlement_contradiction");
        assert_eq!(json["severity"], "critical");
        assert!(json.get("legalImplication").is_some());
        assert!(json.get("legalBacking").is_none());
    }
}

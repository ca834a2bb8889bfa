//! TOML fixture format.
//!
//! ```toml
//! title = "Settlement offered while liability is denied"
//! legal_database = false
//!
//! [document]
//! text = "Vi tilbyr et oppgjør ... Vi benekter ethvert ansvar ..."
//! institution = "NAV"
//!
//! [expect]
//! findings = 1
//! severity = "critical"
//! actionable = true
//!
//! [[expect.finding]]
//! type = "settlement_contradiction"
//! confidence = 0.89
//! severity = "critical"
//! ```
//!
//! A document gives either `text` (segmented by the engine) or
//! `statements` (used as-is).

use serde::Deserialize;

use layered_contradictions::{ContradictionType, Severity};
use layered_statements::{ProcessedDocument, Statement};

use crate::errors::{SpecError, SpecResult};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContradictionFixture {
    #[serde(default)]
    pub title: Option<String>,
    /// Enrich with the built-in Norwegian administrative-law catalog.
    #[serde(default)]
    pub legal_database: bool,
    pub document: FixtureDocument,
    #[serde(default)]
    pub expect: FixtureExpectation,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureDocument {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub statements: Option<Vec<String>>,
    #[serde(default)]
    pub institution: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureExpectation {
    /// Exact number of findings.
    #[serde(default)]
    pub findings: Option<usize>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub actionable: Option<bool>,
    /// Findings that must be present, matched by type in order of occurrence.
    #[serde(default, rename = "finding")]
    pub finding: Vec<ExpectedFinding>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpectedFinding {
    #[serde(rename = "type")]
    pub contradiction_type: ContradictionType,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub severity: Option<Severity>,
}

impl ContradictionFixture {
    /// Build the engine input. `id` names the document in logs.
    pub fn to_document(&self, id: &str) -> ProcessedDocument {
        let text = self.document.text.clone().unwrap_or_default();
        let mut document = ProcessedDocument::from_text(id, text);
        if let Some(statements) = &self.document.statements {
            document = document.with_statements(
                statements.iter().map(|s| Statement::from_text(s.as_str())).collect(),
            );
        }
        if let Some(institution) = &self.document.institution {
            document = document.with_metadata(ProcessedDocument::INSTITUTION_KEY, institution.as_str());
        }
        document
    }
}

/// Parse fixture TOML.
pub fn parse_fixture(content: &str) -> SpecResult<ContradictionFixture> {
    let fixture: ContradictionFixture = toml::from_str(content).map_err(|e| SpecError::Parse {
        line: e
            .span()
            .map(|span| content[..span.start].matches('\n').count() + 1)
            .unwrap_or(0),
        message: e.message().to_string(),
    })?;

    let has_text = fixture
        .document
        .text
        .as_deref()
        .map_or(false, |t| !t.trim().is_empty());
    let has_statements = fixture
        .document
        .statements
        .as_ref()
        .map_or(false, |s| !s.is_empty());
    if !has_text && !has_statements {
        return Err(SpecError::Parse {
            line: 0,
            message: "[document] needs `text` or `statements`".to_string(),
        });
    }

    Ok(fixture)
}

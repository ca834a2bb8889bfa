//! The engine's terminal output.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::finding::{Finding, Severity};
use crate::legal_database::{LegalPrecedent, LegalProvision, MeritAssessment};
use crate::recommendation::Recommendation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleResult {
    pub module_id: String,
    pub severity: Severity,
    pub findings: Vec<Finding>,
    pub actionable: bool,
    pub recommendations: Vec<Recommendation>,
    pub confidence: f64,
    /// Wall-clock milliseconds for the whole analysis
    pub processing_time: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_provisions: Option<Vec<LegalProvision>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precedents: Option<Vec<LegalPrecedent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merit_assessment: Option<MeritAssessment>,
}

impl ModuleResult {
    /// Same result without the timing, for comparing repeated runs.
    pub fn without_timing(&self) -> ModuleResult {
        ModuleResult {
            processing_time: 0,
            ..self.clone()
        }
    }
}

/// Plain-text report. Timing is left out so the output is reproducible.
impl fmt::Display for ModuleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} (confidence {:.2}{})",
            self.module_id,
            self.severity,
            self.confidence,
            if self.actionable { ", actionable" } else { "" }
        )?;

        writeln!(f, "findings ({}):", self.findings.len())?;
        for finding in &self.findings {
            writeln!(
                f,
                "  [{}] {} {:.2}",
                finding.severity, finding.contradiction_type, finding.confidence
            )?;
            writeln!(f, "    {}", finding.explanation)?;
            for evidence in &finding.evidence {
                writeln!(f, "    > {}", evidence)?;
            }
            if let Some(backing) = &finding.legal_backing {
                let citations: Vec<&str> = backing.iter().map(|p| p.citation.as_str()).collect();
                writeln!(f, "    backing: {}", citations.join("; "))?;
            }
        }

        writeln!(f, "recommendations ({}):", self.recommendations.len())?;
        for rec in &self.recommendations {
            writeln!(f, "  {} (p={:.2})", rec.strategy, rec.success_probability)?;
            if let Some(precedent) = &rec.precedent_backing {
                writeln!(f, "    precedent: {} ({})", precedent.case_name, precedent.citation)?;
            }
        }

        if let Some(merit) = &self.merit_assessment {
            writeln!(
                f,
                "merit: {} ({:.2})",
                if merit.high_merit { "high" } else { "low" },
                merit.score
            )?;
        }
        Ok(())
    }
}

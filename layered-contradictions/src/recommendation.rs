//! Remediation strategies for detected contradictions.
//!
//! Every contradiction that survives deduplication gets its own
//! recommendation; recommendations are not deduplicated against each other.

use serde::{Deserialize, Serialize};

use crate::contradiction_type::ContradictionType;
use crate::legal_database::LegalPrecedent;
use crate::scanner::ContradictionMatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Immediate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
}

/// Static strategy data for one contradiction category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyProfile {
    pub strategy: &'static str,
    pub success_probability: f64,
    pub required_actions: &'static [&'static str],
    pub expected_outcome: &'static str,
}

impl StrategyProfile {
    /// Used for tags outside the known vocabulary.
    pub const GENERIC: StrategyProfile = StrategyProfile {
        strategy: "Challenge the inconsistent position",
        success_probability: 0.75,
        required_actions: &[
            "Document both contradictory statements with dates and sources",
            "Request a written clarification from the institution",
        ],
        expected_outcome: "The institution is required to reconcile its position",
    };

    pub fn for_type(ty: ContradictionType) -> StrategyProfile {
        match ty {
            ContradictionType::SettlementContradiction => StrategyProfile {
                strategy: "Leverage the settlement offer as implicit acknowledgment of liability",
                success_probability: 0.85,
                required_actions: &[
                    "Quote the settlement offer next to the liability denial",
                    "Demand an explanation of the legal basis for offering payment",
                    "Use the offer as the starting point for negotiation",
                ],
                expected_outcome: "Improved settlement terms or acknowledgment of liability",
            },
            ContradictionType::PhysicalConfrontationContradiction => StrategyProfile {
                strategy: "Expose the contradictory incident account",
                success_probability: 0.82,
                required_actions: &[
                    "Collect witness statements about the incident",
                    "Request the institution's internal incident reports",
                    "Present the incident description against the denial",
                ],
                expected_outcome: "The denial of the incident is withdrawn",
            },
            ContradictionType::FactualInconsistency => StrategyProfile {
                strategy: "Demand clarification of the facts",
                success_probability: 0.80,
                required_actions: &[
                    "List the mutually exclusive claims side by side",
                    "Invoke the duty to clarify the case (forvaltningsloven § 17)",
                ],
                expected_outcome: "The decision is reconsidered on a corrected factual basis",
            },
            ContradictionType::MedicalCausationContradiction => StrategyProfile {
                strategy: "Challenge the causation assessment",
                success_probability: 0.78,
                required_actions: &[
                    "Obtain an independent medical statement on causation",
                    "Show the acknowledged symptoms against the causation denial",
                    "Request the full medical basis for the assessment",
                ],
                expected_outcome: "A new causation assessment",
            },
            ContradictionType::DirectNegation => StrategyProfile {
                strategy: "Demand correction of the contradictory statement",
                success_probability: 0.88,
                required_actions: &[
                    "Quote both statements verbatim",
                    "Request written confirmation of which statement is correct",
                ],
                expected_outcome: "The incorrect statement is corrected on the record",
            },
            ContradictionType::TimelineImpossible => StrategyProfile {
                strategy: "Reconstruct the chronology",
                success_probability: 0.84,
                required_actions: &[
                    "Build a dated timeline from the correspondence",
                    "Request the case log with registration dates",
                ],
                expected_outcome: "The decision is reassessed on the correct chronology",
            },
            ContradictionType::AuthorityConflict => StrategyProfile {
                strategy: "Reconcile the conflicting authority positions",
                success_probability: 0.80,
                required_actions: &[
                    "Obtain the decisions from both authorities",
                    "Ask the institution which decision it relies on",
                    "Consider a complaint to the superior body",
                ],
                expected_outcome: "A consistent position aligned with the favorable decision",
            },
            ContradictionType::AdministrativeJurisdictionContradiction => StrategyProfile {
                strategy: "Challenge the procedural handling of the case",
                success_probability: 0.76,
                required_actions: &[
                    "Request written confirmation of the case status",
                    "Ask which body holds competence over the case",
                ],
                expected_outcome: "Clarified case status and the correct body handling the case",
            },
            ContradictionType::ProceduralDelayManipulation => StrategyProfile {
                strategy: "Challenge the unjustified delay",
                success_probability: 0.79,
                required_actions: &[
                    "Document when each piece of evidence was submitted",
                    "Invoke the duty to decide without undue delay (forvaltningsloven § 11 a)",
                    "Set a deadline before escalating to the ombud",
                ],
                expected_outcome: "A decision within a set deadline",
            },
            ContradictionType::BurdenOfProofEvasion => StrategyProfile {
                strategy: "Restore the correct burden of proof",
                success_probability: 0.77,
                required_actions: &[
                    "List the evidence already submitted",
                    "Demand an assessment of the submitted evidence",
                ],
                expected_outcome: "The submitted evidence is assessed on its merits",
            },
            ContradictionType::LegalMandateViolation => StrategyProfile {
                strategy: "Assert invalidity due to procedural error",
                success_probability: 0.81,
                required_actions: &[
                    "Identify the breached statutory duty",
                    "Argue that the error may have affected the outcome (forvaltningsloven § 41)",
                    "Request reversal of the decision",
                ],
                expected_outcome: "The decision is set aside and the case reconsidered",
            },
        }
    }

    /// Profile for a raw tag, falling back to [`StrategyProfile::GENERIC`].
    pub fn for_tag(tag: &str) -> StrategyProfile {
        ContradictionType::from_tag(tag)
            .map(Self::for_type)
            .unwrap_or(Self::GENERIC)
    }
}

/// A suggested legal strategy tied to one contradiction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub strategy: String,
    pub priority: Priority,
    pub success_probability: f64,
    pub description: String,
    pub required_actions: Vec<String>,
    pub expected_outcome: String,
    pub risk_level: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precedent_backing: Option<LegalPrecedent>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationGenerator;

impl RecommendationGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn recommend(
        &self,
        m: &ContradictionMatch,
        precedents: Option<&[LegalPrecedent]>,
    ) -> Recommendation {
        let profile = StrategyProfile::for_type(m.contradiction_type);
        let tag = m.contradiction_type.as_str();

        Recommendation {
            strategy: profile.strategy.to_string(),
            priority: Priority::Immediate,
            success_probability: profile.success_probability,
            description: format!("{}: {}", m.contradiction_type.description(), m.explanation),
            required_actions: profile.required_actions.iter().map(|a| a.to_string()).collect(),
            expected_outcome: profile.expected_outcome.to_string(),
            risk_level: RiskLevel::Low,
            precedent_backing: precedents
                .and_then(|all| all.iter().find(|p| p.fact_pattern.contains(tag)))
                .cloned(),
        }
    }

    /// One recommendation per match, in order.
    pub fn build_recommendations(
        &self,
        matches: &[ContradictionMatch],
        precedents: Option<&[LegalPrecedent]>,
    ) -> Vec<Recommendation> {
        matches.iter().map(|m| self.recommend(m, precedents)).collect()
    }
}

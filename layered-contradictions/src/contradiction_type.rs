//! The closed vocabulary of contradiction categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Legal implication used when a category tag is not recognized.
pub const GENERIC_LEGAL_IMPLICATION: &str =
    "The contradiction weakens the consistency and credibility of the institution's position.";

/// The category of a detected contradiction.
///
/// Adding a variant means adding a detector, a legal implication and a
/// recommendation strategy; the exhaustive matches below enforce the last two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContradictionType {
    /// Settlement offered while liability is denied.
    SettlementContradiction,
    /// A physical incident described while any confrontation is denied.
    PhysicalConfrontationContradiction,
    /// Mutually exclusive claims about the same event.
    FactualInconsistency,
    /// Symptoms linked to the incident while causation is denied.
    MedicalCausationContradiction,
    /// A statement and its explicit negation.
    DirectNegation,
    /// Temporal ordering words contradicted by the dates themselves.
    TimelineImpossible,
    /// Different authorities cited with opposite outcomes.
    AuthorityConflict,
    /// Case both closed and ongoing, or both within and outside competence.
    AdministrativeJurisdictionContradiction,
    /// Delay justified after a long wait or while evidence is already available.
    ProceduralDelayManipulation,
    /// Proof demanded while the evidence is never assessed.
    BurdenOfProofEvasion,
    /// Governing statute cited alongside its breach.
    LegalMandateViolation,
}

impl ContradictionType {
    /// All categories in detector priority order.
    pub const ALL: [ContradictionType; 11] = [
        ContradictionType::SettlementContradiction,
        ContradictionType::PhysicalConfrontationContradiction,
        ContradictionType::FactualInconsistency,
        ContradictionType::MedicalCausationContradiction,
        ContradictionType::DirectNegation,
        ContradictionType::TimelineImpossible,
        ContradictionType::AuthorityConflict,
        ContradictionType::AdministrativeJurisdictionContradiction,
        ContradictionType::ProceduralDelayManipulation,
        ContradictionType::BurdenOfProofEvasion,
        ContradictionType::LegalMandateViolation,
    ];

    /// The snake_case tag used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContradictionType::SettlementContradiction => "settlement_contradiction",
            ContradictionType::PhysicalConfrontationContradiction => {
                "physical_confrontation_contradiction"
            }
            ContradictionType::FactualInconsistency => "factual_inconsistency",
            ContradictionType::MedicalCausationContradiction => "medical_causation_contradiction",
            ContradictionType::DirectNegation => "direct_negation",
            ContradictionType::TimelineImpossible => "timeline_impossible",
            ContradictionType::AuthorityConflict => "authority_conflict",
            ContradictionType::AdministrativeJurisdictionContradiction => {
                "administrative_jurisdiction_contradiction"
            }
            ContradictionType::ProceduralDelayManipulation => "procedural_delay_manipulation",
            ContradictionType::BurdenOfProofEvasion => "burden_of_proof_evasion",
            ContradictionType::LegalMandateViolation => "legal_mandate_violation",
        }
    }

    /// Parse a wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ty| ty.as_str() == tag)
    }

    /// Returns a human-readable description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ContradictionType::SettlementContradiction => {
                "Settlement offered while liability is denied"
            }
            ContradictionType::PhysicalConfrontationContradiction => {
                "Physical incident described while confrontation is denied"
            }
            ContradictionType::FactualInconsistency => "Mutually exclusive factual claims",
            ContradictionType::MedicalCausationContradiction => {
                "Symptoms acknowledged while causation is denied"
            }
            ContradictionType::DirectNegation => "Statement directly negated",
            ContradictionType::TimelineImpossible => "Impossible chronology",
            ContradictionType::AuthorityConflict => "Conflicting authority positions",
            ContradictionType::AdministrativeJurisdictionContradiction => {
                "Contradictory case status or competence"
            }
            ContradictionType::ProceduralDelayManipulation => {
                "Delay justified despite a long wait or available evidence"
            }
            ContradictionType::BurdenOfProofEvasion => "Burden of proof shifted and evaded",
            ContradictionType::LegalMandateViolation => "Governing statute cited and breached",
        }
    }

    /// The fixed legal framing attached to findings of this category.
    pub fn legal_implication(&self) -> &'static str {
        match self {
            ContradictionType::SettlementContradiction => {
                "Offering payment while denying liability undermines the denial and may be read as an implicit acknowledgment of responsibility."
            }
            ContradictionType::PhysicalConfrontationContradiction => {
                "Describing a physical incident while denying that one occurred undermines the factual basis of the institution's position and its credibility."
            }
            ContradictionType::FactualInconsistency => {
                "Mutually exclusive accounts of the same event show that the facts were not properly clarified before the decision (forvaltningsloven § 17)."
            }
            ContradictionType::MedicalCausationContradiction => {
                "Acknowledging symptoms linked to the incident while denying causation undermines the causation assessment the decision rests on."
            }
            ContradictionType::DirectNegation => {
                "A statement and its direct negation cannot both be true; at least one of the institution's statements is incorrect."
            }
            ContradictionType::TimelineImpossible => {
                "The stated chronology is impossible, which undermines the factual basis of the decision."
            }
            ContradictionType::AuthorityConflict => {
                "Opposite outcomes attributed to different authorities must be reconciled; the institution cannot rely on both."
            }
            ContradictionType::AdministrativeJurisdictionContradiction => {
                "Treating a case as both closed and ongoing, or as both within and outside the institution's competence, indicates a procedural error."
            }
            ContradictionType::ProceduralDelayManipulation => {
                "Justifying further delay after a long wait, or while the evidence is already available, may breach the duty to decide without undue delay (forvaltningsloven § 11 a)."
            }
            ContradictionType::BurdenOfProofEvasion => {
                "Demanding proof while avoiding any assessment of the evidence over a long period may amount to an unlawful shift of the burden of proof."
            }
            ContradictionType::LegalMandateViolation => {
                "Citing the governing procedural statute while breaching it may render the decision invalid (forvaltningsloven § 41)."
            }
        }
    }
}

/// Legal implication for a raw tag, falling back to the generic sentence.
pub fn legal_implication_for_tag(tag: &str) -> &'static str {
    ContradictionType::from_tag(tag)
        .map(|ty| ty.legal_implication())
        .unwrap_or(GENERIC_LEGAL_IMPLICATION)
}

impl fmt::Display for ContradictionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tags_round_trip() {
        for ty in ContradictionType::ALL {
            assert_eq!(ContradictionType::from_tag(ty.as_str()), Some(ty));
        }
        assert_eq!(ContradictionType::from_tag("authority_violation"), None);
    }

    #[test]
    fn test_serde_uses_wire_tags() {
        for ty in ContradictionType::ALL {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.as_str()));
        }
    }

    #[test]
    fn test_priority_order_has_no_duplicates() {
        let unique: HashSet<_> = ContradictionType::ALL.iter().collect();
        assert_eq!(unique.len(), ContradictionType::ALL.len());
        assert_eq!(ContradictionType::ALL[0], ContradictionType::SettlementContradiction);
        assert_eq!(ContradictionType::ALL[10], ContradictionType::LegalMandateViolation);
    }

    #[test]
    fn test_unknown_tag_gets_generic_implication() {
        assert_eq!(legal_implication_for_tag("something_else"), GENERIC_LEGAL_IMPLICATION);
        assert_eq!(
            legal_implication_for_tag("direct_negation"),
            ContradictionType::DirectNegation.legal_implication()
        );
    }

    #[test]
    fn test_every_type_has_distinct_implication() {
        let implications: HashSet<_> = ContradictionType::ALL
            .iter()
            .map(|ty| ty.legal_implication())
            .collect();
        assert_eq!(implications.len(), ContradictionType::ALL.len());
        assert!(!implications.contains(GENERIC_LEGAL_IMPLICATION));
    }
}

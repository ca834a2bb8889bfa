//! The legal-database collaborator used to enrich an analysis.
//!
//! Detection never depends on it. When a database is configured and at least
//! one contradiction was found, the engine asks for provisions, precedents and
//! a merit assessment keyed by the set of contradiction types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::contradiction_type::ContradictionType;
use crate::errors::EngineResult;

/// A statutory provision relevant to one or more contradiction types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalProvision {
    pub id: String,
    pub title: String,
    pub citation: String,
    pub text: String,
    pub relevance_score: f64,
    #[serde(default)]
    pub contradiction_types: Vec<ContradictionType>,
}

/// A decided case whose facts resemble a contradiction pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalPrecedent {
    pub id: String,
    pub case_name: String,
    pub citation: String,
    /// Free text; mentions the contradiction tags the case is about
    pub fact_pattern: String,
    pub outcome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
}

/// External judgment of whether the case merits legal outreach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeritAssessment {
    pub high_merit: bool,
    pub score: f64,
    pub rationale: String,
}

/// Aggregate signal handed to [`LegalDatabase::identify_high_merit_cases`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContradictionSummary {
    pub contradiction_types: Vec<ContradictionType>,
    pub confidence: f64,
    pub findings_count: usize,
}

/// Lookup service for provisions, precedents and merit.
#[async_trait]
pub trait LegalDatabase: Send + Sync {
    async fn find_relevant_laws(
        &self,
        contradiction_types: &[ContradictionType],
    ) -> EngineResult<Vec<LegalProvision>>;

    async fn find_similar_precedents(
        &self,
        contradiction_types: &[ContradictionType],
        institution_hint: &str,
    ) -> EngineResult<Vec<LegalPrecedent>>;

    async fn identify_high_merit_cases(
        &self,
        summary: &ContradictionSummary,
    ) -> EngineResult<MeritAssessment>;
}

/// An in-process catalog.
///
/// Provisions are returned when they list any requested type. Precedents are
/// returned when their fact pattern names a requested type and, given a
/// non-empty hint, when they concern that institution or no institution in
/// particular. Catalog order is preserved.
#[derive(Debug, Clone)]
pub struct StaticLegalDatabase {
    provisions: Vec<LegalProvision>,
    precedents: Vec<LegalPrecedent>,
    merit_threshold: f64,
}

/// Score at or above which a case is judged high merit.
pub const DEFAULT_MERIT_THRESHOLD: f64 = 0.85;

/// Score added per distinct contradiction type beyond the first.
const MERIT_BREADTH_BONUS: f64 = 0.02;

impl Default for StaticLegalDatabase {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl StaticLegalDatabase {
    pub fn new(provisions: Vec<LegalProvision>, precedents: Vec<LegalPrecedent>) -> Self {
        Self {
            provisions,
            precedents,
            merit_threshold: DEFAULT_MERIT_THRESHOLD,
        }
    }

    pub fn with_merit_threshold(mut self, threshold: f64) -> Self {
        self.merit_threshold = threshold;
        self
    }

    /// Core Norwegian administrative-law provisions and a small sample
    /// precedent catalog.
    pub fn norwegian_administrative() -> Self {
        use ContradictionType::*;

        let provision = |id: &str,
                         title: &str,
                         citation: &str,
                         text: &str,
                         relevance_score: f64,
                         contradiction_types: Vec<ContradictionType>| LegalProvision {
            id: id.to_string(),
            title: title.to_string(),
            citation: citation.to_string(),
            text: text.to_string(),
            relevance_score,
            contradiction_types,
        };

        let provisions = vec![
            provision(
                "fvl-17",
                "Forvaltningsorganets utrednings- og informasjonsplikt",
                "forvaltningsloven § 17",
                "Forvaltningsorganet skal påse at saken er så godt opplyst som mulig før vedtak treffes.",
                0.92,
                vec![
                    FactualInconsistency,
                    MedicalCausationContradiction,
                    DirectNegation,
                    TimelineImpossible,
                    BurdenOfProofEvasion,
                ],
            ),
            provision(
                "fvl-11a",
                "Saksforberedelse uten ugrunnet opphold",
                "forvaltningsloven § 11 a",
                "Forvaltningsorganet skal forberede og avgjøre saken uten ugrunnet opphold.",
                0.88,
                vec![ProceduralDelayManipulation],
            ),
            provision(
                "fvl-25",
                "Begrunnelsens innhold",
                "forvaltningsloven § 25",
                "I begrunnelsen skal vises til de regler vedtaket bygger på, og nevnes de faktiske forhold vedtaket bygger på.",
                0.84,
                vec![
                    SettlementContradiction,
                    PhysicalConfrontationContradiction,
                    AuthorityConflict,
                ],
            ),
            provision(
                "fvl-41",
                "Virkningen av saksbehandlingsfeil ved enkeltvedtak",
                "forvaltningsloven § 41",
                "Vedtaket er gyldig når det er grunn til å regne med at feilen ikke kan ha virket bestemmende inn på vedtakets innhold.",
                0.90,
                vec![LegalMandateViolation, AdministrativeJurisdictionContradiction],
            ),
            provision(
                "fvl-11",
                "Veiledningsplikt",
                "forvaltningsloven § 11",
                "Forvaltningsorganene har innenfor sitt saksområde en alminnelig veiledningsplikt.",
                0.72,
                vec![
                    AdministrativeJurisdictionContradiction,
                    ProceduralDelayManipulation,
                ],
            ),
        ];

        let precedents = vec![
            LegalPrecedent {
                id: "prec-settlement".to_string(),
                case_name: "Erstatningssak, forlik uten ansvarserkjennelse".to_string(),
                citation: "KATALOG-2020-01".to_string(),
                fact_pattern: "settlement_contradiction: erstatning tilbudt samtidig som ansvar ble bestridt".to_string(),
                outcome: "Ansvar fastslått".to_string(),
                institution: None,
            },
            LegalPrecedent {
                id: "prec-causation-nav".to_string(),
                case_name: "Yrkesskadesak, omstridt årsakssammenheng".to_string(),
                citation: "KATALOG-2019-07".to_string(),
                fact_pattern: "medical_causation_contradiction: symptomer erkjent, årsakssammenheng avvist".to_string(),
                outcome: "Vedtaket opphevet".to_string(),
                institution: Some("NAV".to_string()),
            },
            LegalPrecedent {
                id: "prec-delay".to_string(),
                case_name: "Klagesak, lang saksbehandlingstid".to_string(),
                citation: "KATALOG-2021-03".to_string(),
                fact_pattern: "procedural_delay_manipulation and burden_of_proof_evasion over flere år".to_string(),
                outcome: "Kritikkverdig saksbehandling".to_string(),
                institution: None,
            },
        ];

        Self::new(provisions, precedents)
    }

    pub fn provisions(&self) -> &[LegalProvision] {
        &self.provisions
    }

    pub fn precedents(&self) -> &[LegalPrecedent] {
        &self.precedents
    }

    fn merit(&self, summary: &ContradictionSummary) -> MeritAssessment {
        let breadth = summary.contradiction_types.len().saturating_sub(1) as f64;
        let score = (summary.confidence + MERIT_BREADTH_BONUS * breadth).clamp(0.0, 1.0);
        let high_merit = summary.findings_count > 0 && score >= self.merit_threshold;
        let rationale = format!(
            "{} finding(s) across {} contradiction type(s) with aggregate confidence {:.2}",
            summary.findings_count,
            summary.contradiction_types.len(),
            summary.confidence
        );
        MeritAssessment {
            high_merit,
            score,
            rationale,
        }
    }
}

#[async_trait]
impl LegalDatabase for StaticLegalDatabase {
    async fn find_relevant_laws(
        &self,
        contradiction_types: &[ContradictionType],
    ) -> EngineResult<Vec<LegalProvision>> {
        Ok(self
            .provisions
            .iter()
            .filter(|p| p.contradiction_types.iter().any(|ty| contradiction_types.contains(ty)))
            .cloned()
            .collect())
    }

    async fn find_similar_precedents(
        &self,
        contradiction_types: &[ContradictionType],
        institution_hint: &str,
    ) -> EngineResult<Vec<LegalPrecedent>> {
        let hint = institution_hint.trim();
        Ok(self
            .precedents
            .iter()
            .filter(|p| {
                contradiction_types
                    .iter()
                    .any(|ty| p.fact_pattern.contains(ty.as_str()))
            })
            .filter(|p| match (&p.institution, hint.is_empty()) {
                (_, true) | (None, false) => true,
                (Some(institution), false) => institution.eq_ignore_ascii_case(hint),
            })
            .cloned()
            .collect())
    }

    async fn identify_high_merit_cases(
        &self,
        summary: &ContradictionSummary,
    ) -> EngineResult<MeritAssessment> {
        Ok(self.merit(summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(types: Vec<ContradictionType>, confidence: f64, findings_count: usize) -> ContradictionSummary {
        ContradictionSummary {
            contradiction_types: types,
            confidence,
            findings_count,
        }
    }

    #[tokio::test]
    async fn test_provisions_filtered_by_type() {
        let db = StaticLegalDatabase::norwegian_administrative();
        let laws = db
            .find_relevant_laws(&[ContradictionType::ProceduralDelayManipulation])
            .await
            .unwrap();
        let ids: Vec<_> = laws.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["fvl-11a", "fvl-11"]);
    }

    #[tokio::test]
    async fn test_precedents_respect_institution_hint() {
        let db = StaticLegalDatabase::norwegian_administrative();
        let types = [ContradictionType::MedicalCausationContradiction];

        let any = db.find_similar_precedents(&types, "").await.unwrap();
        assert_eq!(any.len(), 1);

        let nav = db.find_similar_precedents(&types, "nav").await.unwrap();
        assert_eq!(nav.len(), 1);

        let other = db.find_similar_precedents(&types, "Finanstilsynet").await.unwrap();
        assert!(other.is_empty());
    }

    #[tokio::test]
    async fn test_precedent_without_institution_matches_any_hint() {
        let db = StaticLegalDatabase::norwegian_administrative();
        let found = db
            .find_similar_precedents(&[ContradictionType::BurdenOfProofEvasion], "NAV")
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "prec-delay");
    }

    #[tokio::test]
    async fn test_merit_assessment() {
        let db = StaticLegalDatabase::default().with_merit_threshold(0.85);

        let strong = db
            .identify_high_merit_cases(&summary(
                vec![ContradictionType::SettlementContradiction],
                0.89,
                1,
            ))
            .await
            .unwrap();
        assert!(strong.high_merit);
        assert_eq!(strong.score, 0.89);

        let broad = db
            .identify_high_merit_cases(&summary(
                vec![
                    ContradictionType::AdministrativeJurisdictionContradiction,
                    ContradictionType::ProceduralDelayManipulation,
                    ContradictionType::LegalMandateViolation,
                ],
                0.82,
                3,
            ))
            .await
            .unwrap();
        assert!(broad.high_merit);
        assert!((broad.score - 0.86).abs() < 1e-9);

        let weak = db
            .identify_high_merit_cases(&summary(vec![ContradictionType::DirectNegation], 0.7, 1))
            .await
            .unwrap();
        assert!(!weak.high_merit);
    }

    #[test]
    fn test_provision_wire_format() {
        let db = StaticLegalDatabase::norwegian_administrative();
        let json = serde_json::to_value(&db.provisions()[1]).unwrap();
        assert_eq!(json["relevanceScore"], 0.88);
        assert_eq!(
            json["contradictionTypes"],
            serde_json::json!(["procedural_delay_manipulation"])
        );
    }
}

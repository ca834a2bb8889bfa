//! The engine facade: statements in, `ModuleResult` out.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, instrument};

use layered_statements::{ProcessedDocument, StatementExtractor};

use crate::config::EngineConfig;
use crate::contradiction_type::ContradictionType;
use crate::errors::{EngineError, EngineResult};
use crate::finding::FindingClassifier;
use crate::legal_database::{
    ContradictionSummary, LegalDatabase, LegalPrecedent, LegalProvision, MeritAssessment,
};
use crate::recommendation::RecommendationGenerator;
use crate::result::ModuleResult;
use crate::scanner::{ContradictionMatch, PairwiseScanner};
use crate::scoring::AggregateScorer;

/// Results of the legal-database fan-out.
#[derive(Debug, Clone, Default)]
struct Enrichment {
    provisions: Option<Vec<LegalProvision>>,
    precedents: Option<Vec<LegalPrecedent>>,
    merit: Option<MeritAssessment>,
}

/// Detects contradictions in a document and packages findings,
/// recommendations and an aggregate score.
///
/// Each call to [`analyze`](Self::analyze) is independent. The engine holds no
/// mutable state and can be shared across tasks.
pub struct ContradictionEngine {
    config: EngineConfig,
    extractor: StatementExtractor,
    scanner: PairwiseScanner,
    classifier: FindingClassifier,
    recommender: RecommendationGenerator,
    scorer: AggregateScorer,
    legal_database: Option<Arc<dyn LegalDatabase>>,
}

impl Default for ContradictionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ContradictionEngine {
    pub fn new() -> Self {
        Self::from_valid_config(EngineConfig::default())
    }

    /// Engine with a custom configuration, validated first.
    pub fn with_config(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: EngineConfig) -> Self {
        Self {
            extractor: StatementExtractor::new(),
            scanner: PairwiseScanner::new(),
            classifier: FindingClassifier::new(
                config.thresholds,
                config.enrichment.provision_relevance_cutoff,
            ),
            recommender: RecommendationGenerator::new(),
            scorer: AggregateScorer::new(config.thresholds),
            legal_database: None,
            config,
        }
    }

    pub fn with_legal_database(mut self, database: Arc<dyn LegalDatabase>) -> Self {
        self.legal_database = Some(database);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Extract, scan and deduplicate without enrichment or packaging.
    pub fn detect(&self, document: &ProcessedDocument) -> Vec<ContradictionMatch> {
        let statements = self.extractor.extract(document);
        self.scanner.scan_unique(&statements)
    }

    /// Run the full analysis. Any failure aborts the call.
    #[instrument(skip_all, fields(document_id = %document.id))]
    pub async fn analyze(&self, document: &ProcessedDocument) -> EngineResult<ModuleResult> {
        let started = Instant::now();
        match self.run(document, started).await {
            Ok(result) => {
                info!(
                    findings = result.findings.len(),
                    confidence = result.confidence,
                    severity = result.severity.as_str(),
                    processing_time_ms = result.processing_time,
                    "contradiction analysis complete"
                );
                Ok(result)
            }
            Err(err) => {
                error!(document_id = %document.id, error = %err, "contradiction analysis failed");
                Err(err)
            }
        }
    }

    async fn run(&self, document: &ProcessedDocument, started: Instant) -> EngineResult<ModuleResult> {
        let statements = self.extractor.extract(document);
        info!(statements = statements.len(), "analyzing document");

        let matches = self.scanner.scan_unique(&statements);
        let confidences: Vec<f64> = matches.iter().map(|m| m.confidence).collect();
        let aggregate = self.scorer.score(&confidences);

        let enrichment = self
            .enrich(&matches, aggregate.confidence, document.institution_hint())
            .await?;

        let findings = self
            .classifier
            .build_findings(&matches, enrichment.provisions.as_deref());
        let recommendations = self
            .recommender
            .build_recommendations(&matches, enrichment.precedents.as_deref());

        Ok(ModuleResult {
            module_id: self.config.module_id.clone(),
            severity: aggregate.value,
            actionable: !findings.is_empty(),
            findings,
            recommendations,
            confidence: aggregate.confidence,
            processing_time: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            legal_provisions: enrichment.provisions,
            precedents: enrichment.precedents,
            merit_assessment: enrichment.merit,
        })
    }

    /// Query the legal database concurrently, bounded by the configured
    /// timeout. Skipped when there is no database or nothing was found.
    async fn enrich(
        &self,
        matches: &[ContradictionMatch],
        confidence: f64,
        institution_hint: &str,
    ) -> EngineResult<Enrichment> {
        let Some(database) = &self.legal_database else {
            return Ok(Enrichment::default());
        };
        if matches.is_empty() {
            return Ok(Enrichment::default());
        }

        let types: Vec<ContradictionType> = matches
            .iter()
            .map(|m| m.contradiction_type)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let summary = ContradictionSummary {
            contradiction_types: types.clone(),
            confidence,
            findings_count: matches.len(),
        };

        let lookups = async {
            tokio::try_join!(
                database.find_relevant_laws(&types),
                database.find_similar_precedents(&types, institution_hint),
                database.identify_high_merit_cases(&summary),
            )
        };

        let timeout_ms = self.config.enrichment.timeout_ms;
        let (provisions, precedents, merit) =
            tokio::time::timeout(self.config.enrichment.timeout(), lookups)
                .await
                .map_err(|_| EngineError::EnrichmentTimeout { timeout_ms })??;

        Ok(Enrichment {
            provisions: Some(provisions),
            precedents: Some(precedents),
            merit: Some(merit),
        })
    }
}

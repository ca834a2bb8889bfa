#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Contradiction detection for institutional legal correspondence.
//!
//! This crate runs on top of `layered-statements`:
//!
//! ## Detection
//!
//! - [`PairwiseScanner`] - Tries every statement pair against the detectors in priority order
//! - [`deduplicate`] - Keeps the first match per unordered pair of statement texts
//! - [`ContradictionType`] - The eleven contradiction categories, in priority order
//!
//! ## Reporting
//!
//! - [`FindingClassifier`] - Severity and legal framing per contradiction
//! - [`RecommendationGenerator`] - One remediation strategy per contradiction
//! - [`AggregateScorer`] - Document-level confidence and severity
//! - [`ContradictionEngine`] - Runs everything and packages a [`ModuleResult`]
//!
//! ## Enrichment
//!
//! An optional [`LegalDatabase`] supplies provisions, precedents and a merit
//! assessment. [`StaticLegalDatabase`] is an in-process catalog.
//!
//! ## Confidence Scoring
//!
//! Detectors return [`Scored<T>`] with their fixed rule constant; the document
//! score is [`ScoreSource::Blended`].
//!
//! ## Example
//!
//! ```
//! use layered_contradictions::{ContradictionEngine, ContradictionType};
//! use layered_statements::ProcessedDocument;
//!
//! let doc = ProcessedDocument::from_text(
//!     "letter-1",
//!     "Vi tilbyr et oppgjør på 25 000 kroner for å avslutte denne saken. \
//!      Vi benekter ethvert ansvar for de påståtte skadene i denne saken.",
//! );
//! let found = ContradictionEngine::new().detect(&doc);
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].contradiction_type, ContradictionType::SettlementContradiction);
//! ```

mod config;
mod contradiction_type;
mod dates;
mod detectors;
mod engine;
mod errors;
mod finding;
mod legal_database;
mod patterns;
mod recommendation;
mod result;
mod scanner;
mod scored;
mod scoring;

pub use config::{EngineConfig, EnrichmentConfig, SeverityThresholds};
pub use contradiction_type::{legal_implication_for_tag, ContradictionType, GENERIC_LEGAL_IMPLICATION};
pub use dates::{extract_dates, first_date};
pub use detectors::{
    base_confidence, detect, first_detection, PreparedStatement,
    ADMINISTRATIVE_JURISDICTION_CONFIDENCE, AUTHORITY_CONFLICT_CONFIDENCE,
    BURDEN_OF_PROOF_CONFIDENCE, DIRECT_NEGATION_CONFIDENCE, FACTUAL_INCONSISTENCY_CONFIDENCE,
    LEGAL_MANDATE_FULL_CONFIDENCE, LEGAL_MANDATE_PARTIAL_CONFIDENCE, MEDICAL_CAUSATION_CONFIDENCE,
    PHYSICAL_CONFRONTATION_CONFIDENCE, PROCEDURAL_DELAY_CONFIDENCE, SETTLEMENT_CONFIDENCE,
    TIMELINE_CONFIDENCE,
};
pub use engine::ContradictionEngine;
pub use errors::{EngineError, EngineResult};
pub use finding::{Finding, FindingClassifier, Severity};
pub use legal_database::{
    ContradictionSummary, LegalDatabase, LegalPrecedent, LegalProvision, MeritAssessment,
    StaticLegalDatabase, DEFAULT_MERIT_THRESHOLD,
};
pub use patterns::AUTHORITIES;
pub use recommendation::{Priority, Recommendation, RecommendationGenerator, RiskLevel, StrategyProfile};
pub use result::ModuleResult;
pub use scanner::{deduplicate, ContradictionMatch, PairwiseScanner};
pub use scored::{ScoreSource, Scored};
pub use scoring::{AggregateScorer, PEAK_WEIGHT};

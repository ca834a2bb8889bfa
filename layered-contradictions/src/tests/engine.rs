use layered_statements::{ProcessedDocument, Statement};

use crate::{
    base_confidence, ContradictionEngine, ContradictionType, EngineConfig, EngineError,
    SeverityThresholds, Severity, LEGAL_MANDATE_PARTIAL_CONFIDENCE,
};

const MIXED_LETTER: &str = "Vi tilbyr et oppgjør på 25 000 kroner for å avslutte denne saken. \
    Søknaden ble mottatt av oss i god tid før fristen. \
    Vi benekter ethvert ansvar for de påståtte skadene i denne saken. \
    Vi har ikke mottatt noe dokument fra deg.";

fn letter(text: &str) -> ProcessedDocument {
    ProcessedDocument::from_text("letter-1", text)
}

#[tokio::test]
async fn aggregate_blends_all_findings() {
    let result = ContradictionEngine::new().analyze(&letter(MIXED_LETTER)).await.unwrap();

    let types: Vec<_> = result.findings.iter().map(|f| f.contradiction_type).collect();
    assert_eq!(
        types,
        vec![ContradictionType::SettlementContradiction, ContradictionType::DirectNegation]
    );
    assert!((result.confidence - 0.905).abs() < 1e-9);
    assert_eq!(result.severity, Severity::Critical);
    assert!(result.actionable);
    assert_eq!(result.recommendations.len(), result.findings.len());
}

#[tokio::test]
async fn repeated_analysis_is_identical() {
    let engine = ContradictionEngine::new();
    let doc = letter(MIXED_LETTER);

    let first = engine.analyze(&doc).await.unwrap();
    let second = engine.analyze(&doc).await.unwrap();
    assert_eq!(first.without_timing(), second.without_timing());
    assert_eq!(first.to_string(), second.to_string());
}

#[tokio::test]
async fn finding_confidence_is_detector_constant() {
    let result = ContradictionEngine::new().analyze(&letter(MIXED_LETTER)).await.unwrap();
    for finding in &result.findings {
        let expected = base_confidence(finding.contradiction_type);
        assert!(
            finding.confidence == expected
                || (finding.contradiction_type == ContradictionType::LegalMandateViolation
                    && finding.confidence == LEGAL_MANDATE_PARTIAL_CONFIDENCE)
        );
    }
}

#[tokio::test]
async fn presegmented_statements_are_used() {
    let doc = letter("Denne teksten blir ikke brukt når setninger er oppgitt.").with_statements(vec![
        Statement::from_text("Vi tilbyr et oppgjør på 25 000 kroner for å avslutte denne saken"),
        Statement::from_text("For kort"),
        Statement::from_text("Vi benekter ethvert ansvar for de påståtte skadene i denne saken"),
    ]);

    let result = ContradictionEngine::new().analyze(&doc).await.unwrap();
    assert_eq!(result.findings.len(), 1);
    assert_eq!(
        result.findings[0].evidence,
        vec![
            "Vi tilbyr et oppgjør på 25 000 kroner for å avslutte denne saken".to_string(),
            "Vi benekter ethvert ansvar for de påståtte skadene i denne saken".to_string(),
        ]
    );
}

#[tokio::test]
async fn custom_thresholds_and_module_id() {
    let config = EngineConfig {
        module_id: "contradictions-strict".to_string(),
        thresholds: SeverityThresholds {
            critical: 0.95,
            warning: 0.9,
        },
        ..EngineConfig::default()
    };
    let engine = ContradictionEngine::with_config(config).unwrap();
    let result = engine.analyze(&letter(MIXED_LETTER)).await.unwrap();

    assert_eq!(result.module_id, "contradictions-strict");
    assert_eq!(result.findings[0].severity, Severity::Info);
    assert_eq!(result.findings[1].severity, Severity::Warning);
    assert_eq!(result.severity, Severity::Warning);
}

#[test]
fn invalid_config_rejected() {
    let config = EngineConfig {
        thresholds: SeverityThresholds {
            critical: 0.5,
            warning: 0.9,
        },
        ..EngineConfig::default()
    };
    assert!(matches!(
        ContradictionEngine::with_config(config),
        Err(EngineError::Config { .. })
    ));
}

#[test]
fn detect_without_packaging() {
    let found = ContradictionEngine::new().detect(&letter(MIXED_LETTER));
    assert_eq!(found.len(), 2);
    assert_eq!(found[1].evidence[0], "Søknaden ble mottatt av oss i god tid før fristen");
}

#[tokio::test]
async fn wire_format_uses_camel_case() {
    let result = ContradictionEngine::new().analyze(&letter(MIXED_LETTER)).await.unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["moduleId"], "contradiction_detection");
    assert_eq!(json["severity"], "critical");
    assert_eq!(json["actionable"], true);
    assert!(json["processingTime"].is_u64());
    assert_eq!(json["findings"][0]["type"], "settlement_contradiction");
    assert_eq!(json["recommendations"][1]["priority"], "immediate");
    assert!(json.get("legalProvisions").is_none());
    assert!(json.get("meritAssessment").is_none());
}

#[tokio::test]
async fn text_without_substantive_statements() {
    let result = ContradictionEngine::new()
        .analyze(&letter("Hei. Takk for sist! Mvh."))
        .await
        .unwrap();
    assert!(result.findings.is_empty());
    assert_eq!(result.confidence, 0.0);
}

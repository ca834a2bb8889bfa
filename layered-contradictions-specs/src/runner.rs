//! Runs fixtures through the contradiction engine.

use std::sync::Arc;

use layered_contradictions::{ContradictionEngine, ModuleResult, StaticLegalDatabase};

use crate::errors::{SpecError, SpecResult};
use crate::fixture::ContradictionFixture;
use crate::matcher::{check_expectations, MatchResult};

/// Engine and result for one fixture run.
#[derive(Debug, Clone)]
pub struct FixtureRun {
    pub name: String,
    pub result: ModuleResult,
    pub matches: MatchResult,
}

fn engine_for(fixture: &ContradictionFixture) -> ContradictionEngine {
    let engine = ContradictionEngine::new();
    if fixture.legal_database {
        engine.with_legal_database(Arc::new(StaticLegalDatabase::norwegian_administrative()))
    } else {
        engine
    }
}

/// Analyze the fixture document on a single-threaded runtime.
pub fn run_fixture(name: &str, fixture: &ContradictionFixture) -> SpecResult<ModuleResult> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|e| SpecError::Load {
            path: name.to_string(),
            message: format!("failed to start runtime: {}", e),
        })?;

    let document = fixture.to_document(name);
    let engine = engine_for(fixture);
    let result = runtime.block_on(engine.analyze(&document))?;
    Ok(result)
}

/// Run a fixture and check its expectations.
pub fn check_fixture(name: &str, fixture: &ContradictionFixture) -> SpecResult<FixtureRun> {
    let result = run_fixture(name, fixture)?;
    let matches = check_expectations(&fixture.expect, &result);
    Ok(FixtureRun {
        name: name.to_string(),
        result,
        matches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_fixture;

    #[test]
    fn test_run_text_fixture() {
        let fixture = parse_fixture(
            r#"
[document]
text = "Vi tilbyr et oppgjør på 25 000 kroner for å avslutte denne saken. Vi benekter ethvert ansvar for de påståtte skadene i denne saken."
"#,
        )
        .unwrap();
        let result = run_fixture("inline", &fixture).unwrap();
        assert_eq!(result.findings.len(), 1);
        assert!(result.legal_provisions.is_none());
    }

    #[test]
    fn test_run_with_catalog() {
        let fixture = parse_fixture(
            r#"
legal_database = true

[document]
text = "Vi tilbyr et oppgjør på 25 000 kroner for å avslutte denne saken. Vi benekter ethvert ansvar for de påståtte skadene i denne saken."
"#,
        )
        .unwrap();
        let result = run_fixture("inline", &fixture).unwrap();
        assert!(result.legal_provisions.is_some());
        assert!(result.merit_assessment.is_some());
    }

    #[test]
    fn test_check_fixture_reports_mismatch() {
        let fixture = parse_fixture(
            r#"
[document]
text = "Dette er et vanlig dokument uten motsigelser."

[expect]
findings = 2
"#,
        )
        .unwrap();
        let run = check_fixture("inline", &fixture).unwrap();
        assert_eq!(run.matches.failed.len(), 1);
        assert!(run.matches.passed.is_empty());
    }
}

//! Expected failures tracking via TOML file.
//!
//! ```toml
//! [[pending]]
//! fixture = "administrative/jurisdiction.toml"
//! assertion = "finding[0]"
//! reason = "competence phrasing not covered yet"
//! added = "2026-10-01"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::{SpecError, SpecResult};

/// Loaded expected failures configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpectedFailures {
    /// Known failures (won't fix soon).
    #[serde(default)]
    pub known: Vec<FailureEntry>,
    /// Pending failures (awaiting fix).
    #[serde(default)]
    pub pending: Vec<FailureEntry>,
}

/// A single expected failure entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureEntry {
    /// Fixture path relative to the fixtures directory.
    pub fixture: String,
    /// Expectation reference (e.g. "severity", "finding[1]").
    pub assertion: String,
    #[serde(default)]
    pub reason: Option<String>,
    /// Date added (YYYY-MM-DD).
    #[serde(default)]
    pub added: Option<String>,
    #[serde(default)]
    pub issue: Option<String>,
}

/// Failure lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureState {
    /// Known limitation, won't fix soon.
    Known,
    /// Awaiting fix, not blocking.
    Pending,
    /// Expected to pass - failure is a regression.
    Regression,
}

impl ExpectedFailures {
    /// Load from a TOML file. A missing file means no expected failures.
    pub fn load(path: &Path) -> SpecResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SpecError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| SpecError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Classify a failed expectation.
    pub fn is_expected(&self, fixture: &str, assertion_ref: &str) -> FailureState {
        if self.known.iter().any(|e| e.matches(fixture, assertion_ref)) {
            FailureState::Known
        } else if self.pending.iter().any(|e| e.matches(fixture, assertion_ref)) {
            FailureState::Pending
        } else {
            FailureState::Regression
        }
    }

    /// Count total expected failures.
    pub fn count(&self) -> usize {
        self.known.len() + self.pending.len()
    }

    pub fn get_entry(&self, fixture: &str, assertion_ref: &str) -> Option<&FailureEntry> {
        self.known
            .iter()
            .chain(self.pending.iter())
            .find(|e| e.matches(fixture, assertion_ref))
    }

    /// Entries whose fixture was not among `fixtures`; usually stale.
    pub fn unknown_fixtures<'a>(&'a self, fixtures: &[&str]) -> Vec<&'a FailureEntry> {
        self.known
            .iter()
            .chain(self.pending.iter())
            .filter(|e| !fixtures.contains(&e.fixture.as_str()))
            .collect()
    }
}

impl FailureEntry {
    fn matches(&self, fixture: &str, assertion_ref: &str) -> bool {
        self.fixture == fixture && self.assertion == assertion_ref
    }
}

/// Result of running the harness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessResult {
    pub total: usize,
    pub passed: usize,
    /// Known + pending.
    pub expected_failures: usize,
    pub regressions: usize,
}

impl HarnessResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all tests passed (no regressions).
    pub fn success(&self) -> bool {
        self.regressions == 0
    }

    pub fn failed(&self) -> usize {
        self.expected_failures + self.regressions
    }

    pub fn record_pass(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    pub fn record_failure(&mut self, state: FailureState) {
        self.total += 1;
        match state {
            FailureState::Known | FailureState::Pending => {
                self.expected_failures += 1;
            }
            FailureState::Regression => {
                self.regressions += 1;
            }
        }
    }
}

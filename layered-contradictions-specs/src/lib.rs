#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Fixture-driven regression harness for layered-contradictions.
//!
//! Each fixture is a TOML file holding a document (free text or
//! pre-segmented statements) and the findings the engine must report for it.
//!
//! ## Modules
//!
//! - [`fixture`] - Fixture format and parsing
//! - [`loader`] - Loads fixtures from disk
//! - [`runner`] - Runs fixtures through the engine
//! - [`matcher`] - Checks expectations against the engine output
//! - [`formatter`] - Failure and summary formatting
//! - [`failures`] - Expected failures tracking via TOML
//! - [`errors`] - Error types for the harness

pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod matcher;
pub mod runner;

pub use errors::{SpecError, SpecResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use fixture::{parse_fixture, ContradictionFixture, ExpectedFinding, FixtureDocument, FixtureExpectation};
pub use formatter::{format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture};
pub use matcher::{
    check_expectations, AssertionOutcome, AssertionResult, FieldMismatch, MatchResult,
    MismatchSeverity,
};
pub use runner::{check_fixture, run_fixture, FixtureRun};

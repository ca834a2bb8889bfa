//! Failure and summary formatting.

use std::fmt::Write;

use layered_contradictions::ModuleResult;

use crate::matcher::{AssertionOutcome, AssertionResult, FieldMismatch};

/// Format a failed expectation with the reported findings for context.
pub fn format_failure(fixture_name: &str, failed: &AssertionResult, result: &ModuleResult) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "\nFAIL: {} [{}]", fixture_name, failed.reference);
    let _ = writeln!(output);

    match &failed.outcome {
        AssertionOutcome::Failed(fields) => {
            for field in fields {
                let _ = writeln!(output, "    {}", field);
            }
        }
        AssertionOutcome::NotFound { reason } => {
            let _ = writeln!(output, "  finding not found: {}", reason);
        }
        AssertionOutcome::Passed => {
            let _ = writeln!(output, "  (passed)");
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "  Engine reported:");
    for line in result.to_string().lines() {
        let _ = writeln!(output, "  | {}", line);
    }

    if let Some(hint) = generate_hint(failed) {
        let _ = writeln!(output);
        let _ = writeln!(output, "  hint: {}", hint);
    }

    output
}

/// Format a summary of all results.
pub fn format_summary(
    fixture_name: &str,
    passed: usize,
    failed: usize,
    expected_failures: usize,
    regressions: usize,
) -> String {
    let mut output = String::new();

    let status = if regressions > 0 { "FAIL" } else { "PASS" };

    let _ = writeln!(output, "\n{}: {}", status, fixture_name);
    let _ = writeln!(
        output,
        "  {} passed, {} failed ({} expected, {} regressions)",
        passed, failed, expected_failures, regressions
    );

    output
}

fn generate_hint(failed: &AssertionResult) -> Option<&'static str> {
    match &failed.outcome {
        AssertionOutcome::NotFound { .. } => Some(
            "a higher-priority detector may have claimed the pair, or the pair was dropped as a duplicate",
        ),
        AssertionOutcome::Failed(fields) if fields.iter().any(is_confidence) => Some(
            "finding confidences are fixed per detector; the aggregate is max(mean, 0.8 x max)",
        ),
        _ => None,
    }
}

fn is_confidence(field: &FieldMismatch) -> bool {
    field.field == "confidence"
}

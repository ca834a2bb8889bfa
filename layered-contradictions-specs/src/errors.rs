//! Error types for the fixture harness.

use layered_contradictions::EngineError;
use thiserror::Error;

/// Errors that can occur while loading or running fixtures.
#[derive(Debug, Error)]
pub enum SpecError {
    /// A fixture file is not valid TOML or misses required fields.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A fixture file or directory could not be read.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },

    /// The engine failed while analyzing a fixture document.
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// An expectation did not hold.
    #[error("assertion failed: {message}")]
    Assertion { message: String },
}

/// Result type for harness operations.
pub type SpecResult<T> = Result<T, SpecError>;

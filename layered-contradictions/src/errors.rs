//! Error types for contradiction analysis.
//!
//! Detection itself cannot fail. Errors come from configuration and from the
//! optional legal-database enrichment, and they abort the whole analysis.

use thiserror::Error;

/// Errors that can occur during analysis or engine setup.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A legal-database lookup failed.
    #[error("legal database {operation} failed: {message}")]
    LegalDatabase {
        operation: &'static str,
        message: String,
    },

    /// Enrichment did not finish within the configured bound.
    #[error("legal database enrichment timed out after {timeout_ms}ms")]
    EnrichmentTimeout { timeout_ms: u64 },

    /// Configuration values are out of range.
    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// Configuration could not be read or parsed.
    #[error("failed to load configuration: {path}: {message}")]
    ConfigLoad { path: String, message: String },
}

impl EngineError {
    /// Convenience constructor for collaborator failures.
    pub fn legal_database(operation: &'static str, message: impl Into<String>) -> Self {
        EngineError::LegalDatabase {
            operation,
            message: message.into(),
        }
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Statement segmentation and document model for layered legal analysis.
//!
//! This crate is the bottom layer of the contradiction-detection workspace:
//!
//! - [`ProcessedDocument`] - The document contract produced by text extraction
//! - [`Statement`] / [`SemanticRole`] / [`StatementSpan`] - Sentence-level units
//! - [`StatementExtractor`] - Segments text into filtered, ordered statements
//!
//! ## Example
//!
//! ```
//! use layered_statements::{ProcessedDocument, StatementExtractor};
//!
//! let doc = ProcessedDocument::from_text(
//!     "doc-1",
//!     "Vi tilbyr et oppgjør på 25 000 kroner. Ok.",
//! );
//! let statements = StatementExtractor::new().extract(&doc);
//! assert_eq!(statements.len(), 1);
//! ```

mod document;
mod extractor;
mod statement;

pub use document::{DocumentStructure, ProcessedDocument};
pub use extractor::StatementExtractor;
pub use statement::{
    is_substantive, SemanticRole, Statement, StatementSpan, DEFAULT_STATEMENT_CONFIDENCE,
    MIN_STATEMENT_CHARS,
};

#[cfg(test)]
mod tests {
    mod extraction;
}

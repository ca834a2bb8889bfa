//! The processed-document contract handed over by document ingestion.
//!
//! Binary parsing (PDF, DOCX) happens upstream. By the time a document reaches
//! this crate it carries the extracted text and, optionally, statements that
//! were already segmented by the producer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::statement::Statement;

/// Structural information extracted alongside the text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentStructure {
    /// Pre-segmented statements. When present and non-empty these are used
    /// instead of segmenting `extracted_text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statements: Option<Vec<Statement>>,
}

/// A document whose text has already been extracted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedDocument {
    pub id: String,
    #[serde(default)]
    pub extracted_text: String,
    #[serde(default)]
    pub structure: DocumentStructure,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl ProcessedDocument {
    /// Metadata key holding the issuing institution's name.
    pub const INSTITUTION_KEY: &'static str = "institution";

    /// Create a document from raw extracted text.
    pub fn from_text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extracted_text: text.into(),
            structure: DocumentStructure::default(),
            metadata: Map::new(),
        }
    }

    /// Attach pre-segmented statements.
    pub fn with_statements(mut self, statements: Vec<Statement>) -> Self {
        self.structure.statements = Some(statements);
        self
    }

    /// Attach a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Returns the pre-segmented statements if the producer supplied any.
    pub fn presegmented(&self) -> Option<&[Statement]> {
        self.structure
            .statements
            .as_deref()
            .filter(|statements| !statements.is_empty())
    }

    /// The institution named in metadata, or an empty string.
    pub fn institution_hint(&self) -> &str {
        self.metadata
            .get(Self::INSTITUTION_KEY)
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_statement_list_is_not_presegmented() {
        let doc = ProcessedDocument::from_text("doc-1", "Tekst").with_statements(Vec::new());
        assert!(doc.presegmented().is_none());
    }

    #[test]
    fn test_institution_hint() {
        let doc = ProcessedDocument::from_text("doc-1", "");
        assert_eq!(doc.institution_hint(), "");

        let doc = doc.with_metadata("institution", "Gjensidige");
        assert_eq!(doc.institution_hint(), "Gjensidige");

        let doc = doc.with_metadata("institution", 42);
        assert_eq!(doc.institution_hint(), "");
    }

    #[test]
    fn test_deserializes_wire_contract() {
        let json = r#"{
            "id": "case-17",
            "extractedText": "Vi har mottatt klagen din og vurderer den",
            "structure": {},
            "metadata": {"institution": "NAV"}
        }"#;
        let doc: ProcessedDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.id, "case-17");
        assert!(doc.presegmented().is_none());
        assert_eq!(doc.institution_hint(), "NAV");
    }

    #[test]
    fn test_deserializes_presegmented_statements() {
        let json = r#"{
            "id": "case-18",
            "structure": {
                "statements": [{
                    "text": "Vi har mottatt klagen din og vurderer den",
                    "semanticRole": "claim",
                    "span": {"start": 0, "end": 41},
                    "confidence": 0.9
                }]
            }
        }"#;
        let doc: ProcessedDocument = serde_json::from_str(json).unwrap();
        let statements = doc.presegmented().unwrap();
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].confidence, 0.9);
        assert_eq!(doc.extracted_text, "");
    }
}

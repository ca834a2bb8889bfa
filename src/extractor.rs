//! Statement extraction.
//!
//! Turns a [`ProcessedDocument`] into the ordered, filtered statement list the
//! contradiction scanner works on:
//!
//! - Pre-segmented statements are used verbatim when the producer supplied any
//! - Otherwise the text is split on runs of `.`, `!` and `?`
//! - Statements of [`MIN_STATEMENT_CHARS`] characters or fewer (trimmed) are dropped
//!
//! Unlike a full sentence-boundary resolver there is no abbreviation handling:
//! "15. januar" splits after "15". Downstream detectors are tuned to that.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::ProcessedDocument;
use crate::statement::{
    is_substantive, SemanticRole, Statement, StatementSpan, DEFAULT_STATEMENT_CONFIDENCE,
    MIN_STATEMENT_CHARS,
};

static SENTENCE_TERMINATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Extracts normalized statements from processed documents.
#[derive(Debug, Clone)]
pub struct StatementExtractor {
    /// Confidence given to statements segmented from raw text
    default_confidence: f64,
}

impl Default for StatementExtractor {
    fn default() -> Self {
        Self {
            default_confidence: DEFAULT_STATEMENT_CONFIDENCE,
        }
    }
}

impl StatementExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits text into trimmed, non-empty candidate sentences.
    ///
    /// No length filtering happens here.
    pub fn split_sentences(text: &str) -> Vec<&str> {
        SENTENCE_TERMINATORS
            .split(text)
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .collect()
    }

    /// Extract the statements of a document in document order.
    pub fn extract(&self, document: &ProcessedDocument) -> Vec<Statement> {
        match document.presegmented() {
            Some(statements) => statements
                .iter()
                .filter(|statement| statement.is_substantive())
                .cloned()
                .collect(),
            None => self.extract_from_text(&document.extracted_text),
        }
    }

    /// Segment raw text and locate each surviving sentence in the source.
    ///
    /// The offset search resumes where the previous statement ended, so a
    /// sentence repeated verbatim gets the offset of its own occurrence.
    pub fn extract_from_text(&self, text: &str) -> Vec<Statement> {
        let mut statements = Vec::new();
        let mut cursor = OffsetCursor::default();

        for sentence in Self::split_sentences(text) {
            if !is_substantive(sentence) {
                continue;
            }

            let span = cursor.locate(text, sentence);
            statements.push(Statement::new(
                sentence,
                SemanticRole::classify(sentence),
                span,
                self.default_confidence,
            ));
        }

        statements
    }

    /// The minimum number of characters a statement must exceed.
    pub fn min_chars(&self) -> usize {
        MIN_STATEMENT_CHARS
    }
}

/// Tracks the end of the previous match in both byte and character units.
#[derive(Debug, Default)]
struct OffsetCursor {
    byte: usize,
    chars: usize,
}

impl OffsetCursor {
    fn locate(&mut self, text: &str, sentence: &str) -> StatementSpan {
        let Some(found) = text[self.byte..].find(sentence) else {
            // Sentences always come from `text`, so this only guards against misuse.
            return StatementSpan::new(self.chars, self.chars);
        };

        let start_byte = self.byte + found;
        let start = self.chars + text[self.byte..start_byte].chars().count();
        let end = start + sentence.chars().count();

        self.byte = start_byte + sentence.len();
        self.chars = end;

        StatementSpan::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_terminator_runs() {
        let sentences = StatementExtractor::split_sentences("Hva?! Nei... Ja. ");
        assert_eq!(sentences, vec!["Hva", "Nei", "Ja"]);
    }

    #[test]
    fn test_split_without_terminator() {
        let sentences = StatementExtractor::split_sentences("  bare en setning uten punktum ");
        assert_eq!(sentences, vec!["bare en setning uten punktum"]);
    }

    #[test]
    fn test_split_empty_text() {
        assert!(StatementExtractor::split_sentences("").is_empty());
        assert!(StatementExtractor::split_sentences(" . ! ").is_empty());
    }

    #[test]
    fn test_short_sentences_are_dropped() {
        let extractor = StatementExtractor::new();
        let statements =
            extractor.extract_from_text("For kort. Denne setningen er lang nok til analyse.");
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].text, "Denne setningen er lang nok til analyse");
    }

    #[test]
    fn test_repeated_sentence_gets_its_own_offset() {
        let extractor = StatementExtractor::new();
        let text = "Vi avviser kravet i sin helhet. Vi avviser kravet i sin helhet.";
        let statements = extractor.extract_from_text(text);

        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].span, StatementSpan::new(0, 30));
        assert_eq!(statements[1].span, StatementSpan::new(32, 62));
    }

    #[test]
    fn test_offsets_are_character_offsets() {
        let extractor = StatementExtractor::new();
        let text = "Skaden skjedde på fredag. Søknaden ble behandlet før jul.";
        let statements = extractor.extract_from_text(text);

        assert_eq!(statements.len(), 2);
        assert_eq!(statements[1].span.start, 26);
        assert_eq!(statements[1].span.len(), "Søknaden ble behandlet før jul".chars().count());
    }

    #[test]
    fn test_text_statements_get_default_confidence() {
        let extractor = StatementExtractor::new();
        let statements = extractor.extract_from_text("Vi har mottatt klagen din og vurderer den.");
        assert_eq!(statements[0].confidence, DEFAULT_STATEMENT_CONFIDENCE);
        assert_eq!(statements[0].semantic_role, SemanticRole::Claim);
    }

    #[test]
    fn test_presegmented_statements_are_used_verbatim_but_filtered() {
        let extractor = StatementExtractor::new();
        let doc = ProcessedDocument::from_text("doc", "Denne teksten skal ikke brukes i det hele tatt.")
            .with_statements(vec![
                Statement::new("kort", SemanticRole::Claim, StatementSpan::new(0, 4), 0.9),
                Statement::new(
                    "  Forsikringsselskapet har avslått saken  ",
                    SemanticRole::Conclusion,
                    StatementSpan::new(10, 52),
                    0.95,
                ),
            ]);

        let statements = extractor.extract(&doc);
        assert_eq!(statements.len(), 1);
        // untouched: no trimming, no role reclassification
        assert_eq!(statements[0].text, "  Forsikringsselskapet har avslått saken  ");
        assert_eq!(statements[0].semantic_role, SemanticRole::Conclusion);
        assert_eq!(statements[0].confidence, 0.95);
    }

    #[test]
    fn test_falls_back_to_text_when_statement_list_is_empty() {
        let extractor = StatementExtractor::new();
        let doc = ProcessedDocument::from_text("doc", "Vi har mottatt klagen din og vurderer den.")
            .with_statements(Vec::new());
        assert_eq!(extractor.extract(&doc).len(), 1);
    }
}

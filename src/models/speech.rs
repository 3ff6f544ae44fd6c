use serde::{Deserialize, Serialize};

use super::DocumentMetadata;

/// One accepted speech extracted from a transcript.
///
/// Immutable once created; the document's metadata is merged into every
/// record so downstream consumers need no join.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Speech {
    /// Speaker name, honorific-stripped and trimmed (2-6 tokens)
    pub speaker: String,
    /// Party code
    pub party: String,
    /// Normalized speech text (whitespace collapsed, markup stripped)
    pub text: String,
    /// Whitespace-token count of `text`, within the accepted range
    pub word_count: usize,
    /// Sequence number from the "Anf. N" marker, when present
    pub speech_number: Option<String>,
    /// Document identifier
    pub dok_id: Option<String>,
    /// Session date (date-only)
    pub datum: Option<String>,
    /// Debate title
    pub titel: Option<String>,
    /// Parliamentary session
    pub rm: Option<String>,
}

impl Speech {
    /// Merge document metadata into this record
    pub fn with_metadata(mut self, metadata: &DocumentMetadata) -> Self {
        self.dok_id = metadata.dok_id.clone();
        self.datum = metadata.datum.clone();
        self.titel = metadata.titel.clone();
        self.rm = metadata.rm.clone();
        self
    }
}

/// Acceptance thresholds for turning a span into a speech
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Minimum word count for an accepted speech
    pub min_words: usize,
    /// Maximum word count for an accepted speech
    pub max_words: usize,
    /// Minimum whitespace-token count of a plausible speaker name
    pub min_name_tokens: usize,
    /// Maximum whitespace-token count of a plausible speaker name
    pub max_name_tokens: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_words: 30,
            max_words: 5000,
            min_name_tokens: 2,
            max_name_tokens: 6,
        }
    }
}

/// Per-document processing outcome, recorded for every input file.
///
/// A failed document keeps `speeches` at 0 and carries the cause; rejected
/// spans are not failures and show up only as a lower speech count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentOutcome {
    /// Input file name
    pub file: String,
    /// Number of accepted speeches
    pub speeches: usize,
    /// Failure cause when the document could not be processed at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocumentOutcome {
    /// Outcome for a successfully processed document
    pub fn success(file: impl Into<String>, speeches: usize) -> Self {
        Self {
            file: file.into(),
            speeches,
            error: None,
        }
    }

    /// Outcome for a document that failed before producing speeches
    pub fn failure(file: impl Into<String>, error: impl ToString) -> Self {
        Self {
            file: file.into(),
            speeches: 0,
            error: Some(error.to_string()),
        }
    }
}

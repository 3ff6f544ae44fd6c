use serde::{Deserialize, Serialize};

/// Identifying fields pulled from a transcript's `<dokument>` header block.
///
/// Every field is independently optional: transcripts from older sessions
/// frequently omit tags, and a missing tag is normal input, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Document identifier (e.g. "HC0940")
    pub dok_id: Option<String>,
    /// Session date, truncated to the date-only prefix (e.g. "2023-03-01")
    pub datum: Option<String>,
    /// Debate title
    pub titel: Option<String>,
    /// Parliamentary session (riksmöte, e.g. "2022/23")
    pub rm: Option<String>,
}

impl DocumentMetadata {
    /// True when no field was extracted
    pub fn is_empty(&self) -> bool {
        self.dok_id.is_none() && self.datum.is_none() && self.titel.is_none() && self.rm.is_none()
    }
}

use serde::{Deserialize, Serialize};

/// Which detection family produced a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerSource {
    /// Inline "Anf. N Name (PARTY)" pattern found in the flattened body text
    Inline,
    /// Speaker line taken from an `<h2>` heading element
    Heading,
}

/// A candidate speech boundary detected in the flattened body text.
///
/// Markers are transient: produced and consumed within one document's
/// processing, never persisted. Offsets are byte offsets into the flattened
/// text that segmentation later slices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marker {
    /// Byte offset of the marker text in the flattened body
    pub pos: usize,
    /// Byte offset just past the marker's own matched text
    pub span_end: usize,
    /// Speaker name with any leading honorific already stripped
    pub speaker: String,
    /// Party code (uppercase, 1-6 letters)
    pub party: String,
    /// Sequence number from "Anf. N", when the marker carried one
    pub speech_number: Option<String>,
    /// Detection family that produced this marker
    pub source: MarkerSource,
}

/// Configuration for marker detection
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Title prefixes stripped (case-insensitively) from captured names
    pub honorifics: Vec<String>,
    /// Maximum byte distance at which a heading marker is considered a
    /// duplicate of an inline marker
    pub dedup_window: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            honorifics: vec![
                "Försvarsminister".to_string(),
                "Statsråd".to_string(),
                "Statsminister".to_string(),
                "Minister".to_string(),
                "Vice talman".to_string(),
                "Talman".to_string(),
            ],
            dedup_window: 5,
        }
    }
}

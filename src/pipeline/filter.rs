//! Span normalization and acceptance filtering.
//!
//! Boundary detection over-triggers on procedural notes and table-of-contents
//! lines; rather than flagging those individually, a span only becomes a
//! speech when its content looks like one. Rejection is silent and shows up
//! solely as a lower per-document speech count.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{FilterConfig, Marker, Speech};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("invalid ws regex"));

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("invalid tag regex"));

/// Turn a raw span into a speech, or drop it.
///
/// Normalizes whitespace and residual markup, counts words, and applies the
/// acceptance predicate: word count within bounds and a plausible
/// speaker-name shape. Document metadata is merged in by the caller.
pub fn filter_span(marker: &Marker, span: &str, config: &FilterConfig) -> Option<Speech> {
    let text = normalize(span);
    let word_count = text.split_whitespace().count();

    if word_count < config.min_words || word_count > config.max_words {
        return None;
    }

    let name_tokens = marker.speaker.split_whitespace().count();
    if name_tokens < config.min_name_tokens || name_tokens > config.max_name_tokens {
        return None;
    }

    Some(Speech {
        speaker: marker.speaker.clone(),
        party: marker.party.clone(),
        text,
        word_count,
        speech_number: marker.speech_number.clone(),
        dok_id: None,
        datum: None,
        titel: None,
        rm: None,
    })
}

/// Collapse whitespace runs to single spaces, strip residual tags, trim.
fn normalize(span: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(span, " ");
    let stripped = TAG_RE.replace_all(&collapsed, "");
    WHITESPACE_RE.replace_all(&stripped, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MarkerSource;

    fn marker(speaker: &str) -> Marker {
        Marker {
            pos: 0,
            span_end: 0,
            speaker: speaker.to_string(),
            party: "S".to_string(),
            speech_number: Some("1".to_string()),
            source: MarkerSource::Inline,
        }
    }

    fn words(n: usize) -> String {
        vec!["ord"; n].join(" ")
    }

    #[test]
    fn test_accepts_plausible_span() {
        let speech = filter_span(&marker("Anna Andersson"), &words(40), &FilterConfig::default())
            .expect("span should be accepted");
        assert_eq!(speech.word_count, 40);
        assert_eq!(speech.speaker, "Anna Andersson");
        assert_eq!(speech.party, "S");
        assert_eq!(speech.speech_number.as_deref(), Some("1"));
    }

    #[test]
    fn test_normalizes_whitespace_and_tags() {
        let raw = format!("  fru\n\ntalman <em>jag</em>\tvill\u{a0}tacka {}", words(30));
        let speech = filter_span(&marker("Anna Andersson"), &raw, &FilterConfig::default())
            .expect("span should be accepted");
        assert!(speech.text.starts_with("fru talman jag vill tacka"));
        assert!(!speech.text.contains('\n'));
        assert!(!speech.text.contains('<'));
    }

    #[test]
    fn test_rejects_short_span() {
        assert!(filter_span(&marker("Anna Andersson"), &words(10), &FilterConfig::default()).is_none());
    }

    #[test]
    fn test_rejects_overlong_span() {
        assert!(filter_span(&marker("Anna Andersson"), &words(5001), &FilterConfig::default()).is_none());
    }

    #[test]
    fn test_word_count_bounds_inclusive() {
        let cfg = FilterConfig::default();
        assert!(filter_span(&marker("Anna Andersson"), &words(30), &cfg).is_some());
        assert!(filter_span(&marker("Anna Andersson"), &words(29), &cfg).is_none());
        assert!(filter_span(&marker("Anna Andersson"), &words(5000), &cfg).is_some());
    }

    #[test]
    fn test_rejects_single_token_speaker() {
        assert!(filter_span(&marker("Talmannen"), &words(100), &FilterConfig::default()).is_none());
    }

    #[test]
    fn test_rejects_implausibly_long_speaker() {
        let name = "en två tre fyra fem sex sju";
        assert!(filter_span(&marker(name), &words(100), &FilterConfig::default()).is_none());
    }

    #[test]
    fn test_name_token_bounds_inclusive() {
        let cfg = FilterConfig::default();
        assert!(filter_span(&marker("Anna Andersson"), &words(40), &cfg).is_some());
        assert!(filter_span(&marker("en två tre fyra fem sex"), &words(40), &cfg).is_some());
    }
}

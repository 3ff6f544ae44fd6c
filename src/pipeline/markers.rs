//! Speech boundary detection.
//!
//! Two independent families of markers are combined: inline "Anf. N Name
//! (PARTY)" idioms in the flattened text, and `<h2>` headings carrying the
//! same speaker/party shape. Textual markers are sometimes mangled by markup
//! and headings are absent in older documents, so neither family alone is
//! sufficient; near-coincident detections collapse onto whichever marker was
//! recorded first, with the inline family scanned first.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{DetectorConfig, Marker, MarkerSource};

static INLINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Anf\.\s+(\d+)\s+(.{5,80}?)\s+\(([A-ZÅÄÖ]{1,6})\)\s*:?")
        .expect("invalid inline marker regex")
});

// Same shape as the inline idiom but the "Anf. N" prefix is optional;
// headings in older documents carry only name and party.
static HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:Anf\.\s+(\d+)\s+)?(.{5,80}?)\s+\(([A-ZÅÄÖ]{1,6})\)")
        .expect("invalid heading marker regex")
});

/// Detect speech boundary markers in a flattened transcript body.
///
/// `headings` is the inner text of every `<h2>` element in document order.
/// The result is deduplicated across families and sorted ascending by
/// position; the sort is stable, so ties keep detection order.
pub fn detect_markers(full_text: &str, headings: &[String], config: &DetectorConfig) -> Vec<Marker> {
    let strip = honorific_regex(&config.honorifics);

    let mut markers = detect_inline(full_text, strip.as_ref());

    for heading in headings {
        if let Some(marker) = heading_marker(full_text, heading, strip.as_ref()) {
            let is_dup = markers
                .iter()
                .any(|m| m.pos.abs_diff(marker.pos) < config.dedup_window);
            if !is_dup {
                markers.push(marker);
            }
        }
    }

    markers.sort_by_key(|m| m.pos);
    markers
}

/// Family A: inline "Anf. N Name (PARTY):" markers
fn detect_inline(text: &str, strip: Option<&Regex>) -> Vec<Marker> {
    INLINE_RE
        .captures_iter(text)
        .map(|caps| {
            let whole = caps.get(0).expect("match has a whole capture");
            Marker {
                pos: whole.start(),
                span_end: whole.end(),
                speaker: strip_honorific(&caps[2], strip),
                party: caps[3].to_string(),
                speech_number: Some(caps[1].to_string()),
                source: MarkerSource::Inline,
            }
        })
        .collect()
}

/// Family B: one candidate marker from a heading's text, if it matches the
/// speaker/party shape and its exact text can be located in the body.
fn heading_marker(full_text: &str, heading: &str, strip: Option<&Regex>) -> Option<Marker> {
    let caps = HEADING_RE.captures(heading)?;
    let speaker = strip_honorific(&caps[2], strip);
    if speaker.is_empty() {
        return None;
    }
    // Case-sensitive first occurrence; headings whose text was reflowed by
    // markup never match and are dropped here.
    let pos = full_text.find(heading)?;
    Some(Marker {
        pos,
        span_end: pos + heading.len(),
        speaker,
        party: caps[3].to_string(),
        speech_number: caps.get(1).map(|m| m.as_str().to_string()),
        source: MarkerSource::Heading,
    })
}

fn honorific_regex(honorifics: &[String]) -> Option<Regex> {
    if honorifics.is_empty() {
        return None;
    }
    let alternation = honorifics
        .iter()
        .map(|h| regex::escape(h))
        .collect::<Vec<_>>()
        .join("|");
    Some(
        Regex::new(&format!(r"(?i)^(?:{alternation})\s+"))
            .expect("invalid honorific regex"),
    )
}

fn strip_honorific(name: &str, strip: Option<&Regex>) -> String {
    let name = name.trim();
    match strip {
        Some(re) => re.replace(name, "").trim().to_string(),
        None => name.to_string(),
    }
}

//! Minimal HTML handling for transcript bodies.
//!
//! Transcript markup is shallow and inconsistent across years, so this is a
//! deterministic "good enough" flattening, not a readability engine: decode
//! entities first (older documents encode every non-breaking space), then
//! treat tags as separators.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BODY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<html>(.*?)</html>").expect("invalid body regex"));

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("invalid tag regex"));

static H2_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<h2[^>]*>(.*?)</h2>").expect("invalid heading regex"));

static ENTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#x?[0-9a-fA-F]+|[a-zA-Z]+);").expect("invalid entity regex"));

/// Extract the first `<html>...</html>` block, case-insensitively.
///
/// Returns `None` when the document carries no markup body; callers treat
/// that as zero speeches, not an error.
pub fn extract_body(raw: &str) -> Option<&str> {
    BODY_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Decode HTML character references into their literal characters.
///
/// Handles the named entities that actually occur in transcript files plus
/// decimal and hexadecimal numeric references. Unknown references are left
/// untouched.
pub fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &Captures| {
            let body = &caps[1];
            let decoded = match body {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some('\u{a0}'),
                _ => decode_numeric(body),
            };
            match decoded {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn decode_numeric(body: &str) -> Option<char> {
    let digits = body.strip_prefix('#')?;
    let code = match digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<u32>().ok()?,
    };
    char::from_u32(code)
}

/// Flatten markup to plain text by replacing every tag with a newline.
///
/// All marker positions and span offsets refer to the text this produces;
/// the newline separator keeps adjacent text nodes from fusing into one
/// token.
pub fn flatten(html: &str) -> String {
    TAG_RE.replace_all(html, "\n").into_owned()
}

/// Inner text of every `<h2>` element, in document order.
///
/// Nested tags inside a heading are stripped without a separator so the
/// result matches how the heading's text appears in the flattened body when
/// the heading holds a single text node.
pub fn headings(html: &str) -> Vec<String> {
    H2_RE
        .captures_iter(html)
        .map(|caps| TAG_RE.replace_all(&caps[1], "").into_owned())
        .collect()
}

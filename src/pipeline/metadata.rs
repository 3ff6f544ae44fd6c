use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::DocumentMetadata;
use crate::pipeline::html::decode_entities;

static DOKUMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<dokument>(.*?)</dokument>").expect("invalid dokument regex"));

static DOK_ID_RE: Lazy<Regex> = Lazy::new(|| field_regex("dok_id"));
static DATUM_RE: Lazy<Regex> = Lazy::new(|| field_regex("datum"));
static TITEL_RE: Lazy<Regex> = Lazy::new(|| field_regex("titel"));
static RM_RE: Lazy<Regex> = Lazy::new(|| field_regex("rm"));

fn field_regex(tag: &str) -> Regex {
    Regex::new(&format!(r"(?s)<{tag}>(.*?)</{tag}>")).expect("invalid field regex")
}

/// Extract identifying metadata from a raw transcript document.
///
/// Only the first `<dokument>` block is considered. Each field is
/// independently optional and a missing or malformed block yields an empty
/// result; metadata extraction never fails.
pub fn extract_metadata(raw: &str) -> DocumentMetadata {
    let Some(block) = DOKUMENT_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
    else {
        return DocumentMetadata::default();
    };

    DocumentMetadata {
        dok_id: field(&DOK_ID_RE, block),
        // Timestamps like "2023-03-01 10:00:00" keep only the date prefix
        datum: field(&DATUM_RE, block)
            .and_then(|v| v.split_whitespace().next().map(str::to_string)),
        titel: field(&TITEL_RE, block),
        rm: field(&RM_RE, block),
    }
}

fn field(re: &Regex, block: &str) -> Option<String> {
    re.captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| decode_entities(m.as_str().trim()))
        .filter(|v| !v.is_empty())
}

//! Directory-level driver.
//!
//! Documents are processed one at a time and in complete isolation: a file
//! that cannot be read still yields an outcome row, and never stops the run.

use std::path::Path;

use anyhow::Result;
use thiserror::Error;
use tracing::{info, warn};

use crate::io::{list_transcripts, read_document};
use crate::models::{DocumentOutcome, Speech};
use crate::pipeline::{parse_document, ParsedDocument, ParserConfig};

/// Why one document produced no result at all.
///
/// Parsing itself is total; only getting the document's text can fail.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Read(#[from] anyhow::Error),
}

/// Aggregated output of a batch run
#[derive(Debug)]
pub struct BatchResult {
    /// All accepted speeches; within a document, segmentation order holds
    pub speeches: Vec<Speech>,
    /// One outcome per input file, failures included
    pub outcomes: Vec<DocumentOutcome>,
}

/// Process a single transcript file
pub fn process_document(path: &Path, config: &ParserConfig) -> Result<ParsedDocument, DocumentError> {
    let raw = read_document(path)?;
    Ok(parse_document(&raw, config))
}

/// Process every transcript in a directory.
///
/// Only enumerating the directory can fail the run; per-document errors are
/// recorded in the outcome list and logged.
pub fn process_directory(dir: &Path, config: &ParserConfig) -> Result<BatchResult> {
    let files = list_transcripts(dir)?;
    info!("Processing {} transcript files from {:?}", files.len(), dir);

    let mut speeches = Vec::new();
    let mut outcomes = Vec::with_capacity(files.len());

    for path in &files {
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match process_document(path, config) {
            Ok(parsed) => {
                outcomes.push(DocumentOutcome::success(&file, parsed.speeches.len()));
                speeches.extend(parsed.speeches);
            }
            Err(err) => {
                warn!("Skipping {}: {}", file, err);
                outcomes.push(DocumentOutcome::failure(&file, err));
            }
        }
    }

    info!(
        "Parsed {} speeches from {}/{} files",
        speeches.len(),
        outcomes.iter().filter(|o| o.speeches > 0).count(),
        outcomes.len()
    );

    Ok(BatchResult { speeches, outcomes })
}

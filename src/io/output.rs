use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{DocumentOutcome, Speech};

/// One row of the exported speech corpus.
///
/// Mirrors `Speech` plus the derived `year` column downstream tabulation
/// expects; deriving it here keeps date handling out of the core pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct SpeechRow {
    pub speaker: String,
    pub party: String,
    pub text: String,
    pub word_count: usize,
    pub speech_number: Option<String>,
    pub dok_id: Option<String>,
    pub datum: Option<String>,
    pub titel: Option<String>,
    pub rm: Option<String>,
    pub year: Option<i32>,
}

impl SpeechRow {
    pub fn from_speech(speech: &Speech) -> Self {
        Self {
            speaker: speech.speaker.clone(),
            party: speech.party.clone(),
            text: speech.text.clone(),
            word_count: speech.word_count,
            speech_number: speech.speech_number.clone(),
            dok_id: speech.dok_id.clone(),
            datum: speech.datum.clone(),
            titel: speech.titel.clone(),
            rm: speech.rm.clone(),
            year: speech.datum.as_deref().and_then(parse_year),
        }
    }
}

fn parse_year(datum: &str) -> Option<i32> {
    NaiveDate::parse_from_str(datum, "%Y-%m-%d")
        .ok()
        .map(|d| d.year())
}

/// The full exported corpus
#[derive(Debug, Clone, Serialize)]
pub struct SpeechCorpus {
    pub speeches: Vec<SpeechRow>,
}

impl SpeechCorpus {
    pub fn from_speeches(speeches: &[Speech]) -> Self {
        Self {
            speeches: speeches.iter().map(SpeechRow::from_speech).collect(),
        }
    }

    /// Write the corpus to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write corpus JSON")?;
        Ok(())
    }
}

/// Per-file coverage report for auditing a batch run
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    pub total_files: usize,
    pub files_with_speeches: usize,
    pub failed_files: usize,
    pub total_speeches: usize,
    pub files: Vec<DocumentOutcome>,
}

impl CoverageReport {
    pub fn from_outcomes(outcomes: &[DocumentOutcome]) -> Self {
        Self {
            total_files: outcomes.len(),
            files_with_speeches: outcomes.iter().filter(|o| o.speeches > 0).count(),
            failed_files: outcomes.iter().filter(|o| o.error.is_some()).count(),
            total_speeches: outcomes.iter().map(|o| o.speeches).sum(),
            files: outcomes.to_vec(),
        }
    }

    /// Write the report to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write coverage JSON")?;
        Ok(())
    }
}

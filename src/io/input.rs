use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Ledger kept by the download collaborator; never a transcript
const FAILED_DOWNLOADS_FILE: &str = "failed_downloads.txt";

/// Read one raw transcript document
pub fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))
}

/// Enumerate transcript files in a directory.
///
/// Transcripts are stored as `.txt` files; the downloader's
/// `failed_downloads.txt` ledger lives alongside them and is skipped. The
/// listing is sorted by file name so runs are reproducible.
pub fn list_transcripts(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read transcript directory: {:?}", dir))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path.extension().is_some_and(|ext| ext == "txt")
                && path
                    .file_name()
                    .is_none_or(|name| name != FAILED_DOWNLOADS_FILE)
        })
        .collect();

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_list_transcripts_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("HB0922.txt"), "b").unwrap();
        fs::write(dir.path().join("HA0101.txt"), "a").unwrap();
        fs::write(dir.path().join("failed_downloads.txt"), "x").unwrap();
        fs::write(dir.path().join("notes.md"), "y").unwrap();

        let files = list_transcripts(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["HA0101.txt", "HB0922.txt"]);
    }

    #[test]
    fn test_list_transcripts_missing_dir_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(list_transcripts(&missing).is_err());
    }

    #[test]
    fn test_read_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "<dokument></dokument>").unwrap();
        assert_eq!(read_document(&path).unwrap(), "<dokument></dokument>");
    }
}

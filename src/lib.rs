pub mod batch;
pub mod io;
pub mod models;
pub mod pipeline;

pub use batch::{process_directory, process_document, BatchResult, DocumentError};
pub use io::{list_transcripts, read_document, CoverageReport, SpeechCorpus};
pub use models::{
    DetectorConfig, DocumentMetadata, DocumentOutcome, FilterConfig, Marker, MarkerSource, Speech,
};
pub use pipeline::{parse_document, ParsedDocument, ParserConfig};

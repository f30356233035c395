//! # File ingestion
//!
//! Admits user files into a tool session: validates them against the tool's
//! [`FileUploadRules`](catalog::FileUploadRules), classifies them by extension and extracts
//! text (or an image preview) so the prompt pipeline can reference them.
//!
//! ## Batch policy
//!
//! - A file with a disallowed extension or over the size limit is rejected on its own and
//!   reported in [`BatchReport::rejected`]; the rest of the batch continues.
//! - If the files that passed validation would push the session over its file limit, the
//!   whole batch is rejected with [`IngestError::TooManyFiles`] and nothing is added.
//! - Extraction runs in parallel; results are appended together, in the order given.

mod extract;
mod file;
mod file_set;

pub use extract::{
    classify, extract_text, image_data_url, ExtractError, IMAGE_EXTENSIONS, TEXT_EXTENSIONS,
};
pub use file::{FileId, FileKind, IncomingFile, UploadedFile};
pub use file_set::{ingest, validate, BatchReport, FileSet, DEFAULT_MAX_FILES};

pub use cue_core::IngestError;

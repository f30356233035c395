//! Per-session set of admitted files.

use catalog::FileUploadRules;
use cue_core::IngestError;
use futures::future::join_all;
use prompt::FileContext;
use tracing::{debug, info, instrument, warn};

use crate::extract::{classify, extract_text, image_data_url};
use crate::file::{FileId, FileKind, IncomingFile, UploadedFile};

/// Default maximum number of files per session.
pub const DEFAULT_MAX_FILES: usize = 5;

/// Outcome of a batch that was not rejected as a whole.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Identifiers of the admitted files, in batch order.
    pub admitted: Vec<FileId>,
    /// Files dropped individually (type or size).
    pub rejected: Vec<IngestError>,
}

/// Checks extension and size against the tool's rules.
pub fn validate(file: &IncomingFile, rules: &FileUploadRules) -> Result<(), IngestError> {
    if !rules.allows(&file.name) {
        return Err(IngestError::InvalidFileType {
            name: file.name.clone(),
        });
    }
    if file.size() > rules.max_size_bytes() {
        return Err(IngestError::FileTooLarge {
            name: file.name.clone(),
            size: file.size(),
            max_size_mb: rules.max_size_mb,
        });
    }
    Ok(())
}

/// Classifies one file and extracts its text or preview on a blocking thread.
///
/// Extraction failures (including a panicking parser) keep the file with no content.
pub async fn ingest(file: IncomingFile) -> UploadedFile {
    let kind = classify(&file.name);
    let size = file.size();
    let name = file.name.clone();

    let (content, preview) = match kind {
        FileKind::Text => {
            let task_name = name.clone();
            let result =
                tokio::task::spawn_blocking(move || extract_text(&task_name, &file.bytes)).await;
            match result {
                Ok(Ok(text)) => (Some(text), None),
                Ok(Err(e)) => {
                    warn!(
                        file = %name,
                        error = %e,
                        "Text extraction failed; keeping file without content"
                    );
                    (None, None)
                }
                Err(e) => {
                    warn!(
                        file = %name,
                        error = %e,
                        "Text extraction task aborted; keeping file without content"
                    );
                    (None, None)
                }
            }
        }
        FileKind::Image => (None, Some(image_data_url(&file.name, &file.bytes))),
        FileKind::Other => (None, None),
    };

    debug!(
        file = %name,
        kind = kind.as_str(),
        size,
        extracted = content.is_some(),
        "File ingested"
    );

    UploadedFile {
        id: FileId::generate(),
        name,
        size,
        kind,
        content,
        preview,
    }
}

/// Files admitted into one tool session, in insertion order.
#[derive(Debug, Clone)]
pub struct FileSet {
    files: Vec<UploadedFile>,
    max_files: usize,
}

impl Default for FileSet {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FILES)
    }
}

impl FileSet {
    pub fn new(max_files: usize) -> Self {
        Self {
            files: Vec::new(),
            max_files,
        }
    }

    pub fn max_files(&self) -> usize {
        self.max_files
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, id: &FileId) -> Option<&UploadedFile> {
        self.files.iter().find(|f| &f.id == id)
    }

    /// Validates, extracts in parallel and appends a batch.
    ///
    /// Either every valid file of the batch is appended or, on [`IngestError::TooManyFiles`], none is.
    #[instrument(
        skip(self, batch, rules),
        fields(batch_len = batch.len(), existing = self.files.len())
    )]
    pub async fn add_batch(
        &mut self,
        batch: Vec<IncomingFile>,
        rules: &FileUploadRules,
    ) -> Result<BatchReport, IngestError> {
        let mut report = BatchReport::default();
        let mut valid = Vec::with_capacity(batch.len());
        for file in batch {
            match validate(&file, rules) {
                Ok(()) => valid.push(file),
                Err(e) => {
                    warn!(error = %e, "Rejected file");
                    report.rejected.push(e);
                }
            }
        }

        let attempted = self.files.len() + valid.len();
        if attempted > self.max_files {
            warn!(max = self.max_files, attempted, "Rejected batch: too many files");
            return Err(IngestError::TooManyFiles {
                max: self.max_files,
                attempted,
            });
        }

        let ingested = join_all(valid.into_iter().map(ingest)).await;
        report.admitted = ingested.iter().map(|f| f.id.clone()).collect();
        self.files.extend(ingested);

        info!(
            admitted = report.admitted.len(),
            rejected = report.rejected.len(),
            total = self.files.len(),
            "File batch processed"
        );
        Ok(report)
    }

    /// Removes a file; its preview and content are dropped with it.
    pub fn remove(&mut self, id: &FileId) -> Option<UploadedFile> {
        let pos = self.files.iter().position(|f| &f.id == id)?;
        Some(self.files.remove(pos))
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// Text of files with extracted content, in insertion order.
    pub fn contexts(&self) -> Vec<FileContext<'_>> {
        self.files.iter().filter_map(UploadedFile::context).collect()
    }
}

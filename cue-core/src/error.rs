use thiserror::Error;

/// Errors of pipeline steps that span several crates.
#[derive(Error, Debug)]
pub enum CueError {
    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("Enhance error: {0}")]
    Enhance(#[from] EnhanceError),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Rejections raised while admitting uploaded files into a session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    #[error("File type not allowed: {name}")]
    InvalidFileType { name: String },

    #[error("File too large: {name} ({size} bytes, max {max_size_mb}MB)")]
    FileTooLarge {
        name: String,
        size: u64,
        max_size_mb: u64,
    },

    #[error("Maximum {max} files allowed ({attempted} requested)")]
    TooManyFiles { max: usize, attempted: usize },
}

/// Failures of a single enhancement attempt. None of them is fatal to the session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnhanceError {
    #[error("Missing API configuration: add an API key and base URL before generating")]
    MissingCredentials,

    #[error("Input is empty")]
    EmptyInput,

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Prompt too large after truncation ({length} > {ceiling} characters); reduce input or files")]
    CompiledPromptTooLarge { length: usize, ceiling: usize },

    #[error("API error: {status}")]
    RemoteApi { status: String },

    #[error("Transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, CueError>;

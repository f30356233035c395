//! # Output format
//!
//! Turns enhanced text into a downloadable artifact for a user-chosen output-format label.
//! Total over all inputs: unknown labels become plain text and invalid JSON passes through.
//!
//! PDF and Word labels produce Markdown; no binary documents are generated.

use tracing::debug;

/// Download encoding selected from an output-format label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadFormat {
    Json,
    Csv,
    Html,
    Markdown,
    Sql,
    Srt,
    Text,
}

impl DownloadFormat {
    /// Case-insensitive; `md`, `pdf` and `word` map to Markdown, anything unknown to text.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "csv" => Self::Csv,
            "html" => Self::Html,
            "markdown" | "md" | "pdf" | "word" => Self::Markdown,
            "sql" => Self::Sql,
            "srt" => Self::Srt,
            _ => Self::Text,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
            Self::Html => "text/html",
            Self::Markdown => "text/markdown",
            Self::Sql => "application/sql",
            Self::Srt => "application/x-subrip",
            Self::Text => "text/plain",
        }
    }

    /// Extension without the leading dot.
    pub fn file_extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Html => "html",
            Self::Markdown => "md",
            Self::Sql => "sql",
            Self::Srt => "srt",
            Self::Text => "txt",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub mime_type: String,
    pub file_extension: String,
    pub content: String,
}

/// Builds the artifact for `text` under `label`.
pub fn format_for_download(text: &str, label: &str) -> DownloadArtifact {
    let format = DownloadFormat::from_label(label);
    let content = match format {
        DownloadFormat::Json => pretty_json(text),
        _ => text.to_string(),
    };
    DownloadArtifact {
        mime_type: format.mime_type().to_string(),
        file_extension: format.file_extension().to_string(),
        content,
    }
}

fn pretty_json(text: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| text.to_string()),
        Err(e) => {
            debug!(error = %e, "Enhanced text is not JSON; downloading as-is");
            text.to_string()
        }
    }
}

/// `<tool name, whitespace runs replaced by '-', lower-cased>-prompt.<ext>`.
pub fn download_file_name(tool_name: &str, file_extension: &str) -> String {
    let stem = tool_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("{}-prompt.{}", stem, file_extension)
}

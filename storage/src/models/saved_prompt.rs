//! Saved prompt model for persistence.
//!
//! Maps to the `saved_prompts` table. List columns are stored as JSON text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Fields supplied by the caller on save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSavedPrompt {
    pub user_id: String,
    pub title: String,
    pub input_text: String,
    pub enhanced_text: String,
    pub tool_type: String,
    pub provider: String,
    pub model: String,
    pub tone: String,
    pub output_format: String,
    /// `"<file name>: <extracted text>"` per file.
    pub file_attachments: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPrompt {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub input_text: String,
    pub enhanced_text: String,
    pub tool_type: String,
    pub provider: String,
    pub model: String,
    pub tone: String,
    pub output_format: String,
    pub file_attachments: Vec<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct SavedPromptRow {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub input_text: String,
    pub enhanced_text: String,
    pub tool_type: String,
    pub provider: String,
    pub model: String,
    pub tone: String,
    pub output_format: String,
    pub file_attachments: String,
    pub tags: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<SavedPromptRow> for SavedPrompt {
    type Error = StorageError;

    fn try_from(row: SavedPromptRow) -> Result<Self, Self::Error> {
        Ok(Self {
            file_attachments: serde_json::from_str(&row.file_attachments)?,
            tags: serde_json::from_str(&row.tags)?,
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            input_text: row.input_text,
            enhanced_text: row.enhanced_text,
            tool_type: row.tool_type,
            provider: row.provider,
            model: row.model,
            tone: row.tone,
            output_format: row.output_format,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

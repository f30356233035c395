use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::{NewSavedPrompt, PromptQuery, SavedPrompt};

/// Persistence contract for saved prompts. All operations are scoped to `user_id`.
#[async_trait]
pub trait PromptStore: Send + Sync {
    async fn save(&self, prompt: &NewSavedPrompt) -> Result<SavedPrompt, StorageError>;
    async fn get(&self, user_id: &str, id: &str) -> Result<Option<SavedPrompt>, StorageError>;
    /// Newest first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<SavedPrompt>, StorageError>;
    async fn search(&self, query: &PromptQuery) -> Result<Vec<SavedPrompt>, StorageError>;
    async fn update_enhanced_text(
        &self,
        user_id: &str,
        id: &str,
        enhanced_text: &str,
    ) -> Result<SavedPrompt, StorageError>;
    async fn delete(&self, user_id: &str, id: &str) -> Result<bool, StorageError>;
}

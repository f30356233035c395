//! Prompt repository: persistence and queries for saved prompts.
//!
//! Uses SqlitePoolManager and the models (NewSavedPrompt, SavedPrompt, PromptQuery).

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::error::StorageError;
use crate::models::{NewSavedPrompt, PromptQuery, SavedPrompt, SavedPromptRow};
use crate::repository::PromptStore;
use crate::sqlite_pool::SqlitePoolManager;

const SELECT_COLUMNS: &str = "SELECT id, user_id, title, input_text, enhanced_text, tool_type, provider, model, tone, output_format, file_attachments, tags, created_at, updated_at FROM saved_prompts";

/// Escapes LIKE wildcards so a search term matches literally.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

fn into_prompts(rows: Vec<SavedPromptRow>) -> Result<Vec<SavedPrompt>, StorageError> {
    rows.into_iter().map(SavedPrompt::try_from).collect()
}

#[derive(Clone)]
pub struct PromptRepository {
    pool_manager: SqlitePoolManager,
}

impl PromptRepository {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), sqlx::Error> {
        info!("Creating saved_prompts table if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS saved_prompts (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                title TEXT NOT NULL,
                input_text TEXT NOT NULL,
                enhanced_text TEXT NOT NULL,
                tool_type TEXT NOT NULL,
                provider TEXT NOT NULL,
                model TEXT NOT NULL,
                tone TEXT NOT NULL,
                output_format TEXT NOT NULL,
                file_attachments TEXT NOT NULL DEFAULT '[]',
                tags TEXT NOT NULL DEFAULT '[]',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_saved_prompts_user_id ON saved_prompts(user_id);
            CREATE INDEX IF NOT EXISTS idx_saved_prompts_created_at ON saved_prompts(created_at);
            CREATE INDEX IF NOT EXISTS idx_saved_prompts_tool_type ON saved_prompts(tool_type);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl PromptStore for PromptRepository {
    #[instrument(
        skip(self, prompt),
        fields(user_id = %prompt.user_id, tool_type = %prompt.tool_type)
    )]
    async fn save(&self, prompt: &NewSavedPrompt) -> Result<SavedPrompt, StorageError> {
        let now = Utc::now();
        let saved = SavedPrompt {
            id: Uuid::new_v4().to_string(),
            user_id: prompt.user_id.clone(),
            title: prompt.title.clone(),
            input_text: prompt.input_text.clone(),
            enhanced_text: prompt.enhanced_text.clone(),
            tool_type: prompt.tool_type.clone(),
            provider: prompt.provider.clone(),
            model: prompt.model.clone(),
            tone: prompt.tone.clone(),
            output_format: prompt.output_format.clone(),
            file_attachments: prompt.file_attachments.clone(),
            tags: prompt.tags.clone(),
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO saved_prompts (id, user_id, title, input_text, enhanced_text, tool_type, provider, model, tone, output_format, file_attachments, tags, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&saved.id)
        .bind(&saved.user_id)
        .bind(&saved.title)
        .bind(&saved.input_text)
        .bind(&saved.enhanced_text)
        .bind(&saved.tool_type)
        .bind(&saved.provider)
        .bind(&saved.model)
        .bind(&saved.tone)
        .bind(&saved.output_format)
        .bind(serde_json::to_string(&saved.file_attachments)?)
        .bind(serde_json::to_string(&saved.tags)?)
        .bind(saved.created_at)
        .bind(saved.updated_at)
        .execute(self.pool_manager.pool())
        .await?;

        info!(id = %saved.id, title = %saved.title, "Saved prompt");
        Ok(saved)
    }

    async fn get(&self, user_id: &str, id: &str) -> Result<Option<SavedPrompt>, StorageError> {
        let sql = format!("{} WHERE user_id = ? AND id = ?", SELECT_COLUMNS);
        let row = sqlx::query_as::<_, SavedPromptRow>(&sql)
            .bind(user_id)
            .bind(id)
            .fetch_optional(self.pool_manager.pool())
            .await?;
        row.map(SavedPrompt::try_from).transpose()
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<SavedPrompt>, StorageError> {
        self.search(&PromptQuery::for_user(user_id)).await
    }

    async fn search(&self, query: &PromptQuery) -> Result<Vec<SavedPrompt>, StorageError> {
        let mut sql = format!("{} WHERE user_id = ?", SELECT_COLUMNS);
        let mut params: Vec<String> = vec![query.user_id.clone()];

        if let Some(term) = query.term.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            sql.push_str(
                " AND (title LIKE ? ESCAPE '\\' OR input_text LIKE ? ESCAPE '\\' \
                 OR enhanced_text LIKE ? ESCAPE '\\' \
                 OR EXISTS (SELECT 1 FROM json_each(saved_prompts.tags) AS tag \
                            WHERE tag.value LIKE ? ESCAPE '\\'))",
            );
            let pattern = like_pattern(term);
            params.extend(std::iter::repeat(pattern).take(4));
        }

        if let Some(tool_type) = &query.tool_type {
            sql.push_str(" AND tool_type = ?");
            params.push(tool_type.clone());
        }

        sql.push_str(" ORDER BY created_at DESC, rowid DESC");

        if let Some(limit) = query.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        let mut query_builder = sqlx::query_as::<_, SavedPromptRow>(&sql);
        for param in &params {
            query_builder = query_builder.bind(param);
        }

        let prompts = into_prompts(query_builder.fetch_all(self.pool_manager.pool()).await?)?;
        debug!(user_id = %query.user_id, count = prompts.len(), "Retrieved saved prompts");
        Ok(prompts)
    }

    async fn update_enhanced_text(
        &self,
        user_id: &str,
        id: &str,
        enhanced_text: &str,
    ) -> Result<SavedPrompt, StorageError> {
        let result = sqlx::query(
            "UPDATE saved_prompts SET enhanced_text = ?, updated_at = ? WHERE user_id = ? AND id = ?",
        )
        .bind(enhanced_text)
        .bind(Utc::now())
        .bind(user_id)
        .bind(id)
        .execute(self.pool_manager.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(id.to_string()));
        }
        self.get(user_id, id)
            .await?
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    async fn delete(&self, user_id: &str, id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM saved_prompts WHERE user_id = ? AND id = ?")
            .bind(user_id)
            .bind(id)
            .execute(self.pool_manager.pool())
            .await?;
        let deleted = result.rows_affected() > 0;
        info!(id = %id, deleted, "Delete saved prompt");
        Ok(deleted)
    }
}

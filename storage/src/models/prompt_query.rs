//! Query parameters for searching the library.
//!
//! Used by PromptRepository::search.

#[derive(Debug, Clone, Default)]
pub struct PromptQuery {
    pub user_id: String,
    /// Case-insensitive substring over title, input, enhanced text and tags.
    pub term: Option<String>,
    /// Exact tool display name.
    pub tool_type: Option<String>,
    pub limit: Option<i64>,
}

impl PromptQuery {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Default::default()
        }
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn tool_type(mut self, tool_type: impl Into<String>) -> Self {
        self.tool_type = Some(tool_type.into());
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

//! # Prompt
//!
//! Turns a tool template, user input and uploaded file text into the two chat messages
//! sent to an OpenAI-compatible completion endpoint.
//!
//! ## Pipeline
//!
//! 1. [`build_variables`]: caps input and file text ([`CapPolicy`]) and fills a total [`PromptVariables`] record.
//! 2. [`replace_placeholders`]: substitutes `{{name}}` tokens; unknown names become empty strings.
//! 3. [`CapPolicy::check_compiled`]: rejects compiled prompts over the hard ceiling.
//! 4. [`EnhancementRequest`]: system/user messages, provider-native model id and temperature.
//!
//! Everything here is pure and synchronous; network access lives in `completion-client`.

mod placeholder;
mod request;
mod truncate;
mod variables;

pub use placeholder::{placeholders_in, replace_placeholders, Variables};
pub use request::{
    resolve_model_id, tone_temperature, EnhancementRequest, DEFAULT_TEMPERATURE,
    MAX_OUTPUT_TOKENS,
};
pub use truncate::{
    file_block, parse_truncation_marker, truncate_with_marker, CapPolicy, FileContext,
};
pub use variables::{build_variables, PromptVariables, VariableInputs};

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
}

impl MessageRole {
    /// Wire value of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
        }
    }
}

/// A single chat message, one-to-one with one element of OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

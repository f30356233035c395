mod prompt_query;
mod saved_prompt;

pub use prompt_query::PromptQuery;
pub use saved_prompt::{NewSavedPrompt, SavedPrompt};
pub(crate) use saved_prompt::SavedPromptRow;

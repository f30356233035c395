//! # Enhancer
//!
//! One [`ToolSession`] per selected tool: it owns the uploaded files and the
//! provider/model/tone/format selection, and runs the enhancement pipeline:
//!
//! 1. reject blank input ([`EnhanceError::EmptyInput`])
//! 2. require credentials ([`EnhanceError::MissingCredentials`])
//! 3. build the variable record with capped input and file blocks
//! 4. substitute the tool template, or fall back to the capped input
//! 5. enforce the compiled-prompt ceiling ([`EnhanceError::CompiledPromptTooLarge`])
//! 6. send exactly one request through the [`LlmClient`](llm_client::LlmClient)
//!
//! Steps 1, 2 and 5 short-circuit before any network activity.

mod compile;
mod config;
mod selection;
mod session;

pub use compile::{compile, CompiledPrompt};
pub use config::EnhancerConfig;
pub use selection::{Selection, DEFAULT_TONE};
pub use session::{saved_prompt_title, ToolSession};

pub use cue_core::{Credentials, EnhanceError, IngestError};
pub use llm_client::EnhancementResult;
